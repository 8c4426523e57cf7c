use std::sync::Arc;

use crate::models::reporting::{
    Activity, DashboardStats, DepartmentMetric, FunnelStage, TimelinePoint,
};
use crate::store::EntityStore;

#[derive(Clone)]
pub struct StatsService {
    store: Arc<EntityStore>,
}

impl StatsService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// Header stats are recomputed from the live candidate collection on
    /// every call. The trend deltas and time-to-hire are fixed display
    /// values carried over from the reporting dataset.
    pub fn dashboard_stats(&self) -> DashboardStats {
        let (total, active, hired) = self.store.candidate_counts();
        DashboardStats {
            total_candidates: total,
            active_positions: active,
            hired,
            time_to_hire: 14,
            candidates_change: "+5%".to_string(),
            positions_change: "+3%".to_string(),
            time_to_hire_change: "-2 days".to_string(),
            hired_change: "+2".to_string(),
        }
    }

    pub fn timeline(&self) -> Vec<TimelinePoint> {
        self.store.timeline()
    }

    pub fn funnel(&self) -> Vec<FunnelStage> {
        self.store.funnel()
    }

    pub fn activities(&self) -> Vec<Activity> {
        self.store.activities()
    }

    pub fn department_metrics(&self) -> Vec<DepartmentMetric> {
        self.store.department_metrics()
    }
}
