//! usersort: fetch GitHub users and list them sorted by login, id or type
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod fetch;
pub mod models;
pub mod orchestrator;
pub mod output;
pub mod sort;
