// Test Helper Modules for Endpoint Testing
//
// Builds the full application in-process with actix_web::test and provides
// request payload factories plus assertions on the JSON error envelope.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

pub mod assertions;
pub mod test_data;

pub use assertions::*;
pub use test_app::*;
pub use test_data::*;
