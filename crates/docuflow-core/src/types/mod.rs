//! Shared type definitions used across DocuFlow crates.

pub mod id;

pub use id::{CommentId, DocumentId};
