//! Shared types used across all modules.
//!
//! The fetcher produces [`UserRecord`]s, the sorter reorders them and the
//! renderers format them. Other modules import from here rather than
//! reaching into each other's internals.

pub mod user;

pub use user::UserRecord;
