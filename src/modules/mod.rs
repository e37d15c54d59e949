pub mod financing;
pub mod health;
pub mod invoices;
pub mod reports;
pub mod taxes;
pub mod vehicles;
