// Test Helper Modules
//
// Shared by the integration and contract tests. Include with:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;
pub use test_server::*;
