//! Domain events emitted by the workflow service.
//!
//! Events are broadcast to interested consumers (dashboards, notification
//! surfaces) after the corresponding mutation has been applied. They carry
//! only identifiers and plain values so that this crate stays free of
//! internal dependencies.

pub mod document;

pub use document::DocumentEvent;
