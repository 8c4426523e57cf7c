use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filters::ci_cmp;
use crate::filters::range::ScoreRange;
use crate::models::supplier::Supplier;

/// Delivery-time buckets as the filter panel labels them. A supplier's raw
/// day count maps to exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryWindow {
    #[serde(rename = "Same Day")]
    SameDay,
    #[serde(rename = "1-3 Days")]
    OneToThreeDays,
    #[serde(rename = "4-7 Days")]
    FourToSevenDays,
    #[serde(rename = "1-2 Weeks")]
    OneToTwoWeeks,
    #[serde(rename = "3-4 Weeks")]
    ThreeToFourWeeks,
    #[serde(rename = "1+ Month")]
    OverOneMonth,
}

impl DeliveryWindow {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d <= 0 => Self::SameDay,
            1..=3 => Self::OneToThreeDays,
            4..=7 => Self::FourToSevenDays,
            8..=14 => Self::OneToTwoWeeks,
            15..=28 => Self::ThreeToFourWeeks,
            _ => Self::OverOneMonth,
        }
    }

    pub fn contains(self, days: i64) -> bool {
        Self::from_days(days) == self
    }
}

/// Inclusive price bounds. The dashboard's default span is $0 to $10,000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::from(10_000),
        }
    }
}

impl PriceRange {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && price <= self.max
    }

    /// Negative bounds clamp to zero; an inverted pair is corrected with the
    /// same push policy as the score ranges.
    pub fn sanitized(self) -> Self {
        let min = self.min.max(Decimal::ZERO);
        let mut max = self.max.max(Decimal::ZERO);
        if min > max {
            max = min;
        }
        Self { min, max }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupplierFilter {
    pub category: Vec<String>,
    pub quality_range: ScoreRange,
    pub price_range: PriceRange,
    pub delivery_time: Vec<DeliveryWindow>,
}

impl SupplierFilter {
    pub fn is_default(&self) -> bool {
        self.category.is_empty()
            && self.quality_range.is_default()
            && self.price_range.is_default()
            && self.delivery_time.is_empty()
    }

    pub fn matches(&self, supplier: &Supplier) -> bool {
        (self.category.is_empty() || self.category.contains(&supplier.category))
            && self.quality_range.contains(supplier.quality)
            && self.price_range.contains(supplier.price)
            && (self.delivery_time.is_empty()
                || self
                    .delivery_time
                    .iter()
                    .any(|window| window.contains(supplier.delivery_time)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupplierSort {
    #[default]
    #[serde(rename = "Quality (High to Low)")]
    QualityDesc,
    #[serde(rename = "Quality (Low to High)")]
    QualityAsc,
    #[serde(rename = "Price (Low to High)")]
    PriceAsc,
    #[serde(rename = "Price (High to Low)")]
    PriceDesc,
    #[serde(rename = "Delivery Time (Fast to Slow)")]
    DeliveryAsc,
    #[serde(rename = "Name A-Z")]
    NameAsc,
    #[serde(rename = "Name Z-A")]
    NameDesc,
}

/// Case-insensitive substring search over name, title, category and contact
/// email.
pub fn search_matches(supplier: &Supplier, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    supplier.name.to_lowercase().contains(&query)
        || supplier.title.to_lowercase().contains(&query)
        || supplier.category.to_lowercase().contains(&query)
        || supplier.contact_email.to_lowercase().contains(&query)
}

pub fn apply(
    suppliers: &[Supplier],
    filter: &SupplierFilter,
    query: &str,
    sort: SupplierSort,
) -> Vec<Supplier> {
    let filter = SupplierFilter {
        quality_range: filter.quality_range.sanitized(),
        price_range: filter.price_range.sanitized(),
        ..filter.clone()
    };

    let mut results: Vec<Supplier> = suppliers
        .iter()
        .filter(|s| search_matches(s, query) && filter.matches(s))
        .cloned()
        .collect();

    match sort {
        SupplierSort::QualityDesc => results.sort_by(|a, b| b.quality.cmp(&a.quality)),
        SupplierSort::QualityAsc => results.sort_by(|a, b| a.quality.cmp(&b.quality)),
        SupplierSort::PriceAsc => results.sort_by(|a, b| a.price.cmp(&b.price)),
        SupplierSort::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SupplierSort::DeliveryAsc => {
            results.sort_by(|a, b| a.delivery_time.cmp(&b.delivery_time))
        }
        SupplierSort::NameAsc => results.sort_by(|a, b| ci_cmp(&a.name, &b.name)),
        SupplierSort::NameDesc => results.sort_by(|a, b| ci_cmp(&b.name, &a.name)),
    }

    results
}
