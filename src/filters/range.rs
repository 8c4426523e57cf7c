use serde::{Deserialize, Serialize};

pub const TRACK_MIN: i32 = 0;
pub const TRACK_MAX: i32 = 100;

/// Ordered inclusive pair on the 0-100 track. The invariant
/// `TRACK_MIN <= min <= max <= TRACK_MAX` holds for every value produced by
/// the methods below; deserialized input goes through [`ScoreRange::sanitized`]
/// before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: i32,
    pub max: i32,
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self {
            min: TRACK_MIN,
            max: TRACK_MAX,
        }
    }
}

impl ScoreRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }.sanitized()
    }

    pub fn is_default(&self) -> bool {
        self.min == TRACK_MIN && self.max == TRACK_MAX
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps both bounds into the track domain. An inverted pair is corrected
    /// with the push policy, treating min as the later edit.
    pub fn sanitized(self) -> Self {
        let min = self.min.clamp(TRACK_MIN, TRACK_MAX);
        let mut max = self.max.clamp(TRACK_MIN, TRACK_MAX);
        if min > max {
            max = min;
        }
        Self { min, max }
    }

    /// Direct numeric entry for the min field. Out-of-domain values clamp; a
    /// min above the current max pushes max up instead of being rejected.
    pub fn set_min(&mut self, value: i32) {
        let value = value.clamp(TRACK_MIN, TRACK_MAX);
        self.min = value;
        if value > self.max {
            self.max = value;
        }
    }

    /// Direct numeric entry for the max field; symmetric push-down policy.
    pub fn set_max(&mut self, value: i32) {
        let value = value.clamp(TRACK_MIN, TRACK_MAX);
        self.max = value;
        if value < self.min {
            self.min = value;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    DraggingMin,
    DraggingMax,
}

/// Interaction model of the dual-handle score slider. Pointer positions come
/// in as a horizontal offset within a track of the given width; every
/// successful move yields the new pair so the caller can feed it straight into
/// the filter state (changes are live, there is no apply step).
#[derive(Debug, Clone)]
pub struct RangeSlider {
    range: ScoreRange,
    drag: DragState,
}

impl RangeSlider {
    pub fn new(range: ScoreRange) -> Self {
        Self {
            range: range.sanitized(),
            drag: DragState::Idle,
        }
    }

    pub fn range(&self) -> ScoreRange {
        self.range
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    fn project(offset: f64, width: f64) -> i32 {
        if width <= 0.0 {
            return TRACK_MIN;
        }
        let value = (offset / width * f64::from(TRACK_MAX)).round() as i32;
        value.clamp(TRACK_MIN, TRACK_MAX)
    }

    /// Pointer-down on the track grabs the handle whose current position is
    /// nearer to the projected value. An equidistant click grabs the min
    /// handle.
    pub fn pointer_down(&mut self, offset: f64, width: f64) {
        let value = Self::project(offset, width);
        let to_min = (value - self.range.min).abs();
        let to_max = (value - self.range.max).abs();
        self.drag = if to_min <= to_max {
            DragState::DraggingMin
        } else {
            DragState::DraggingMax
        };
    }

    /// Drag movement. The min handle cannot pass max - 1 and the max handle
    /// cannot pass min + 1. Returns `None` when no drag is in progress.
    pub fn pointer_move(&mut self, offset: f64, width: f64) -> Option<ScoreRange> {
        let value = Self::project(offset, width);
        match self.drag {
            DragState::Idle => None,
            DragState::DraggingMin => {
                self.range.min = value.min((self.range.max - 1).max(TRACK_MIN));
                Some(self.range)
            }
            DragState::DraggingMax => {
                self.range.max = value.max((self.range.min + 1).min(TRACK_MAX));
                Some(self.range)
            }
        }
    }

    /// Pointer-up anywhere, including outside the track. Registered globally
    /// by the caller so a drag can never get stuck.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    pub fn enter_min(&mut self, value: i32) -> ScoreRange {
        self.range.set_min(value);
        self.range
    }

    pub fn enter_max(&mut self, value: i32) -> ScoreRange {
        self.range.set_max(value);
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ordered(range: ScoreRange) {
        assert!(
            range.min >= TRACK_MIN && range.min <= range.max && range.max <= TRACK_MAX,
            "invariant violated: {:?}",
            range
        );
    }

    #[test]
    fn default_range_spans_track() {
        let range = ScoreRange::default();
        assert!(range.is_default());
        assert!(range.contains(0));
        assert!(range.contains(100));
    }

    #[test]
    fn numeric_entry_pushes_max_up() {
        let mut range = ScoreRange::new(0, 50);
        range.set_min(60);
        assert_eq!(range, ScoreRange { min: 60, max: 60 });
    }

    #[test]
    fn numeric_entry_pushes_min_down() {
        let mut range = ScoreRange::new(30, 90);
        range.set_max(20);
        assert_eq!(range, ScoreRange { min: 20, max: 20 });
    }

    #[test]
    fn numeric_entry_clamps_to_track() {
        let mut range = ScoreRange::default();
        range.set_min(-15);
        range.set_max(250);
        assert_eq!(range, ScoreRange::default());
    }

    #[test]
    fn sanitized_corrects_inverted_pair() {
        assert_eq!(ScoreRange::new(80, 20), ScoreRange { min: 80, max: 80 });
        assert_eq!(ScoreRange::new(-5, 120), ScoreRange::default());
    }

    #[test]
    fn pointer_down_grabs_nearest_handle() {
        let mut slider = RangeSlider::new(ScoreRange::new(20, 80));
        slider.pointer_down(30.0, 100.0);
        assert_eq!(slider.drag_state(), DragState::DraggingMin);
        slider.pointer_up();
        slider.pointer_down(75.0, 100.0);
        assert_eq!(slider.drag_state(), DragState::DraggingMax);
    }

    #[test]
    fn equidistant_click_prefers_min_handle() {
        let mut slider = RangeSlider::new(ScoreRange::new(40, 60));
        slider.pointer_down(50.0, 100.0);
        assert_eq!(slider.drag_state(), DragState::DraggingMin);
    }

    #[test]
    fn min_handle_stops_short_of_max() {
        let mut slider = RangeSlider::new(ScoreRange::new(10, 40));
        slider.pointer_down(10.0, 100.0);
        let range = slider.pointer_move(95.0, 100.0).expect("dragging");
        assert_eq!(range, ScoreRange { min: 39, max: 40 });
        assert_ordered(range);
    }

    #[test]
    fn max_handle_stops_short_of_min() {
        let mut slider = RangeSlider::new(ScoreRange::new(60, 90));
        slider.pointer_down(90.0, 100.0);
        let range = slider.pointer_move(2.0, 100.0).expect("dragging");
        assert_eq!(range, ScoreRange { min: 60, max: 61 });
        assert_ordered(range);
    }

    #[test]
    fn invariant_holds_through_drag_sequence() {
        let mut slider = RangeSlider::new(ScoreRange::default());
        slider.pointer_down(5.0, 200.0);
        for offset in [-40.0, 10.0, 130.0, 199.0, 260.0, 0.0] {
            let range = slider.pointer_move(offset, 200.0).expect("dragging");
            assert_ordered(range);
        }
        slider.pointer_up();
        slider.pointer_down(350.0, 200.0);
        for offset in [400.0, 180.0, 90.0, -25.0] {
            let range = slider.pointer_move(offset, 200.0).expect("dragging");
            assert_ordered(range);
        }
    }

    #[test]
    fn pointer_up_outside_track_ends_drag() {
        let mut slider = RangeSlider::new(ScoreRange::default());
        slider.pointer_down(0.0, 100.0);
        slider.pointer_move(55.0, 100.0);
        // Release fires on the document, not the track.
        slider.pointer_up();
        assert_eq!(slider.drag_state(), DragState::Idle);
        assert_eq!(slider.pointer_move(99.0, 100.0), None);
    }

    #[test]
    fn moves_without_drag_are_ignored() {
        let mut slider = RangeSlider::new(ScoreRange::new(25, 75));
        assert_eq!(slider.pointer_move(10.0, 100.0), None);
        assert_eq!(slider.range(), ScoreRange::new(25, 75));
    }

    #[test]
    fn projection_maps_track_geometry() {
        let mut slider = RangeSlider::new(ScoreRange::default());
        slider.pointer_down(0.0, 100.0);
        assert_eq!(
            slider.pointer_move(150.0, 300.0),
            Some(ScoreRange { min: 50, max: 100 })
        );
    }
}
