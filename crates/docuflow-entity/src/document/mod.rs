//! Document entity and its value objects.

pub mod category;
pub mod comment;
pub mod file_type;
pub mod filter;
pub mod model;
pub mod stats;
pub mod status;
pub mod version;

pub use category::DocumentCategory;
pub use comment::Comment;
pub use file_type::FileType;
pub use filter::DocumentFilter;
pub use model::{CreateDocument, Document, UpdateDocument};
pub use stats::WorkflowStats;
pub use status::DocumentStatus;
pub use version::Version;
