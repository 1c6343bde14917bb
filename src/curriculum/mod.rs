pub mod ordering;
mod store;

pub use ordering::reorder;
pub use store::{CourseDraftStore, EditorTarget, SaveOutcome};
