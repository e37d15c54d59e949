use rust_decimal::Decimal;
use tracing::debug;

use crate::core::money::{self, round_money};
use crate::core::{AppError, Result};
use crate::modules::vehicles::models::VehicleProfit;

/// Acquisition cost and margin for a single vehicle sale
pub struct ProfitCalculator;

impl ProfitCalculator {
    /// Calculate vehicle profit
    ///
    /// * `total_cost = purchase_price + extra_costs + taxes_on_purchase`
    /// * `gross_profit = retail_price - total_cost`
    /// * `profit_margin = gross_profit / retail_price × 100`, or 0 when the
    ///   total cost is not positive
    ///
    /// # Errors
    /// A zero retail price with a positive total cost has no defined margin
    /// and is rejected.
    pub fn calculate_vehicle_profit(
        purchase_price: Decimal,
        retail_price: Decimal,
        extra_costs: Decimal,
        taxes_on_purchase: Decimal,
    ) -> Result<VehicleProfit> {
        let total_cost = money::add(
            money::add(purchase_price, extra_costs, "total cost")?,
            taxes_on_purchase,
            "total cost",
        )?;
        let gross_profit = money::sub(retail_price, total_cost, "gross profit")?;

        let profit_margin = if total_cost > Decimal::ZERO {
            if retail_price.is_zero() {
                return Err(AppError::validation(
                    "Retail price must be non-zero to compute a profit margin",
                ));
            }
            money::mul(
                money::div(gross_profit, retail_price, "profit margin")?,
                Decimal::ONE_HUNDRED,
                "profit margin",
            )?
        } else {
            Decimal::ZERO
        };

        debug!(
            total_cost = %total_cost,
            gross_profit = %gross_profit,
            profit_margin = %profit_margin,
            "Vehicle profit calculated"
        );

        Ok(VehicleProfit {
            total_cost: round_money(total_cost),
            gross_profit: round_money(gross_profit),
            profit_margin: round_money(profit_margin),
            retail_price: round_money(retail_price),
        })
    }
}
