use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::core::money::{self, round_money};
use crate::core::Result;
use crate::modules::reports::models::{
    FinancialLedger, InventorySummary, LedgerEntry, LedgerEntryType, Sale, StatusCount,
    LEDGER_LIMIT,
};
use crate::modules::vehicles::models::{Vehicle, VehicleStatus};

/// Builds dashboard and ledger reports from caller-supplied records
pub struct ReportService;

impl ReportService {
    /// Summarize inventory
    ///
    /// Count, value and projected profit cover active vehicles only. The
    /// status histogram covers every vehicle.
    pub fn inventory_summary(vehicles: &[Vehicle]) -> Result<InventorySummary> {
        let mut total_inventory_count = 0;
        let mut total_inventory_value = Decimal::ZERO;
        let mut projected_profit = Decimal::ZERO;

        for vehicle in vehicles
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
        {
            total_inventory_count += 1;
            total_inventory_value = money::add(
                total_inventory_value,
                vehicle.purchase_price,
                "inventory value",
            )?;

            let margin = money::sub(
                money::sub(vehicle.retail_price, vehicle.purchase_price, "projected profit")?,
                vehicle.extra_costs,
                "projected profit",
            )?;
            projected_profit = money::add(projected_profit, margin, "projected profit")?;
        }

        let status_counts = VehicleStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: vehicles.iter().filter(|v| v.status == status).count(),
            })
            .collect();

        info!(
            vehicles = vehicles.len(),
            active = total_inventory_count,
            "Inventory summary generated"
        );

        Ok(InventorySummary {
            total_inventory_count,
            total_inventory_value: round_money(total_inventory_value),
            projected_profit: round_money(projected_profit),
            status_counts,
        })
    }

    /// Merge sales and vehicle purchases into a ledger
    ///
    /// Purchases whose `purchase_price + extra_costs` is not positive are
    /// skipped. Entries are ordered newest first and cut to the
    /// [`LEDGER_LIMIT`] most recent; totals cover the kept entries.
    pub fn financial_ledger(sales: &[Sale], vehicles: &[Vehicle]) -> Result<FinancialLedger> {
        let by_id: HashMap<&str, &Vehicle> =
            vehicles.iter().map(|v| (v.id.as_str(), v)).collect();

        let mut entries = Vec::with_capacity(sales.len() + vehicles.len());

        for sale in sales {
            let vehicle = sale
                .vehicle_id
                .as_deref()
                .and_then(|id| by_id.get(id).copied());

            entries.push(LedgerEntry {
                id: sale.id.clone(),
                date: sale.created_at,
                entry_type: LedgerEntryType::Sale,
                description: Self::sale_description(vehicle),
                amount: round_money(sale.amount),
            });
        }

        for vehicle in vehicles {
            let total_cost = money::add(vehicle.purchase_price, vehicle.extra_costs, "purchase cost")?;
            if total_cost <= Decimal::ZERO {
                continue;
            }

            entries.push(LedgerEntry {
                id: format!("expense-{}", vehicle.id),
                date: vehicle.created_at,
                entry_type: LedgerEntryType::Expense,
                description: Self::purchase_description(vehicle),
                amount: round_money(total_cost),
            });
        }

        // Stable sort keeps input order for equal timestamps
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries.truncate(LEDGER_LIMIT);

        let mut total_revenue = Decimal::ZERO;
        let mut total_expenses = Decimal::ZERO;
        for entry in &entries {
            match entry.entry_type {
                LedgerEntryType::Sale => {
                    total_revenue = money::add(total_revenue, entry.amount, "total revenue")?
                }
                LedgerEntryType::Expense => {
                    total_expenses = money::add(total_expenses, entry.amount, "total expenses")?
                }
            }
        }
        let net = money::sub(total_revenue, total_expenses, "net")?;

        if entries.is_empty() {
            warn!("Empty financial ledger generated");
        } else {
            info!(entries = entries.len(), "Financial ledger generated");
        }

        Ok(FinancialLedger {
            entries,
            total_revenue,
            total_expenses,
            net,
        })
    }

    fn sale_description(vehicle: Option<&Vehicle>) -> String {
        match vehicle {
            Some(vehicle) => format!(
                "{} (VIN: {})",
                vehicle.title(),
                vehicle.short_vin().unwrap_or("N/A")
            ),
            None => "Vehicle Sale".to_string(),
        }
    }

    fn purchase_description(vehicle: &Vehicle) -> String {
        match vehicle.short_vin() {
            Some(vin) => format!("Vehicle Purchase: {} {} ({})", vehicle.make, vehicle.model, vin),
            None => format!("Vehicle Purchase: {} {}", vehicle.make, vehicle.model),
        }
    }
}
