use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub category: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
    /// Non-negative; checked at the store boundary since `validator` has no
    /// range rule for Decimal.
    pub price: Decimal,
    #[validate(range(min = 0))]
    pub delivery_time: i64,
    #[validate(range(min = 0, max = 100))]
    pub quality: i32,
    pub is_active: bool,
}
