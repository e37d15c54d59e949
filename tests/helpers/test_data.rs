// Test Data Factory
//
// Request payloads for the calculator, draft and report endpoints.

use serde_json::{json, Value};

/// Test data factory for request payloads
pub struct TestDataFactory;

impl TestDataFactory {
    /// Invoice of 500 plus two 50.00 mats, 20 off, in Ontario
    ///
    /// Grand total is 655.40.
    pub fn ontario_invoice_payload() -> Value {
        json!({
            "base_amount": "500",
            "line_items": [
                {"description": "Floor mats", "quantity": 2, "unit_price": "50"}
            ],
            "discount": "20",
            "jurisdiction": "ON"
        })
    }

    /// Vehicle record for the report endpoints
    pub fn vehicle(id: &str, status: &str, purchase: &str, retail: &str, created_at: &str) -> Value {
        json!({
            "id": id,
            "vin": format!("2HGFC2F59MH{:0>6}", id),
            "year": 2021,
            "make": "Honda",
            "model": "Civic",
            "purchase_price": purchase,
            "retail_price": retail,
            "extra_costs": "500",
            "status": status,
            "created_at": created_at
        })
    }

    /// Sale record for the ledger endpoint
    pub fn sale(id: &str, amount: &str, vehicle_id: Option<&str>, created_at: &str) -> Value {
        json!({
            "id": id,
            "created_at": created_at,
            "amount": amount,
            "vehicle_id": vehicle_id
        })
    }
}
