use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::jurisdiction::Jurisdiction;

/// Rounded tax breakdown for one subtotal in one jurisdiction.
///
/// Every money field is rounded to cents independently from the unrounded
/// intermediate values, so `tax_amount` may differ by a cent from the sum of
/// the rounded components when both GST and PST apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub subtotal: Decimal,
    pub gst: Decimal,
    pub pst: Decimal,
    pub hst: Decimal,
    pub tax_amount: Decimal,
    pub grand_total: Decimal,
    pub jurisdiction: Jurisdiction,
    /// Human-readable regime, e.g. "HST 13.00%" or "GST 5.00% + PST 7.00%"
    pub tax_breakdown_label: String,
}
