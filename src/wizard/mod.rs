mod draft;
mod navigation;
mod panel;
mod progress;

pub use draft::{CourseDraft, CourseSubmission};
pub use navigation::WizardNavigationController;
pub use panel::{PanelGroup, WizardPanel, SIDEBAR};
pub use progress::{calculate_progress, Progress};
