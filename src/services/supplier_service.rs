use std::sync::Arc;

use crate::error::{Error, Result};
use crate::filters::supplier::{self, SupplierFilter, SupplierSort};
use crate::models::supplier::Supplier;
use crate::store::EntityStore;

#[derive(Clone)]
pub struct SupplierService {
    store: Arc<EntityStore>,
}

impl SupplierService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Supplier> {
        self.store.suppliers()
    }

    pub fn get(&self, id: i64) -> Result<Supplier> {
        self.store
            .supplier(id)
            .ok_or_else(|| Error::NotFound("Supplier not found".into()))
    }

    pub fn search(
        &self,
        filter: &SupplierFilter,
        query: &str,
        sort: SupplierSort,
    ) -> Vec<Supplier> {
        supplier::apply(&self.store.suppliers(), filter, query, sort)
    }
}
