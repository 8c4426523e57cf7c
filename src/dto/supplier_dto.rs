use serde::{Deserialize, Serialize};

use crate::filters::supplier::{SupplierFilter, SupplierSort};
use crate::models::supplier::Supplier;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SupplierSearchPayload {
    pub query: String,
    pub filters: SupplierFilter,
    pub sort: SupplierSort,
}

#[derive(Debug, Serialize)]
pub struct SupplierSearchResponse {
    pub total: usize,
    pub results: Vec<Supplier>,
}
