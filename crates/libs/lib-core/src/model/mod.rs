//! # Data Model
//!
//! Entities and their SQLite-backed stores.

pub mod store;
