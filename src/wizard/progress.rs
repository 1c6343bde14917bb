use crate::curriculum::CourseDraftStore;
use crate::models::{CourseDetails, IntendedLearners, MIN_LEARNING_OBJECTIVES};
use serde::Serialize;

const TOTAL_CHECKS: usize = 6;

/// How far along the draft is, as shown in the sidebar footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u8,
}

pub fn calculate_progress(
    details: &CourseDetails,
    learners: &IntendedLearners,
    curriculum: &CourseDraftStore,
) -> Progress {
    let checks = [
        learners.filled_objectives() >= MIN_LEARNING_OBJECTIVES,
        !curriculum.sections().is_empty(),
        !details.title.trim().is_empty(),
        !details.description.trim().is_empty(),
        !details.category.trim().is_empty(),
        !details.price.trim().is_empty(),
    ];
    let completed = checks.iter().filter(|&&done| done).count();
    let percent = ((completed as f64 / TOTAL_CHECKS as f64) * 100.0).round() as u8;

    Progress {
        completed,
        total: TOTAL_CHECKS,
        percent,
    }
}
