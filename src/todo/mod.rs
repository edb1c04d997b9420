//! To-do lifecycle management for Tickbox.
//!
//! This module implements the task lifecycle and persistence contract:
//! creating to-do records with store-assigned identifiers and creation
//! timestamps, listing them in insertion order, toggling completion on an
//! existing record, and physically deleting a record with an idempotent
//! boolean outcome. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
