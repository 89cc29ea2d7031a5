//! # docuflow-entity
//!
//! Domain entity models for DocuFlow. Every struct in this crate
//! represents a workflow domain object or a value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod audit;
pub mod document;
pub mod user;
