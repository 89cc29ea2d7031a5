//! User-related enumerations.

pub mod role;

pub use role::UserRole;
