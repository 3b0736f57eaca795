pub mod article;
pub mod chat;
pub mod community;
pub mod enums;
pub mod resource;
pub mod symptom;
pub mod user;

pub use article::*;
pub use chat::*;
pub use community::*;
pub use enums::*;
pub use resource::*;
pub use symptom::*;
pub use user::*;

/// Outcome of an edit or delete addressed by id. A stale id is a no-op,
/// not an error: callers only offer these actions from rendered data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    NotFound,
}
