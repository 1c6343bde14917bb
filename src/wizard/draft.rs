use super::{calculate_progress, Progress, WizardNavigationController, WizardPanel};
use crate::curriculum::CourseDraftStore;
use crate::error::{Result, StudioError};
use crate::models::{CourseDetails, CourseDetailsPatch, IntendedLearners, Section};
use crate::validation::{validate_course_details, FieldErrors};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// The whole draft as handed to the external save/submit operation
#[derive(Debug, Clone, Serialize)]
pub struct CourseSubmission {
    pub details: CourseDetails,
    pub intended_learners: IntendedLearners,
    pub sections: Vec<Section>,
    pub total_lectures: usize,
    pub submitted_at: DateTime<Utc>,
}

/// Everything the wizard is editing. Owned by the top-level controller and
/// lent to panels; each operation has exactly one write path.
#[derive(Debug, Clone, Default)]
pub struct CourseDraft {
    pub details: CourseDetails,
    pub learners: IntendedLearners,
    pub curriculum: CourseDraftStore,
    navigation: WizardNavigationController,
}

impl CourseDraft {
    pub fn new(default_language: &str) -> Self {
        CourseDraft {
            details: CourseDetails::new(default_language),
            ..Default::default()
        }
    }

    pub fn active_panel(&self) -> WizardPanel {
        self.navigation.active()
    }

    /// Switches panels. Leaving the curriculum with the content editor open
    /// discards the unsaved editor draft.
    pub fn navigate(&mut self, panel: WizardPanel) {
        let previous = self.navigation.select(panel);
        if previous == WizardPanel::Curriculum
            && panel != WizardPanel::Curriculum
            && self.curriculum.is_editor_open()
        {
            info!("Discarding open lecture editor on navigation to {}", panel);
            self.curriculum.close_content_editor();
        }
    }

    pub fn update_details(&mut self, patch: CourseDetailsPatch) {
        patch.apply(&mut self.details);
    }

    pub fn validate(&self) -> FieldErrors {
        validate_course_details(&self.details)
    }

    pub fn progress(&self) -> Progress {
        calculate_progress(&self.details, &self.learners, &self.curriculum)
    }

    /// Validates the details form and serializes the whole draft.
    pub fn submission(&self) -> Result<CourseSubmission> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(StudioError::Validation(errors));
        }

        Ok(CourseSubmission {
            details: self.details.clone(),
            intended_learners: self.learners.clone(),
            sections: self.curriculum.sections().to_vec(),
            total_lectures: self.curriculum.total_lectures(),
            submitted_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LectureType;

    #[test]
    fn test_navigation_never_touches_course_data() {
        let mut draft = CourseDraft::new("English");
        draft.details.title = "Practical Rust".to_string();
        let section = draft.curriculum.add_section();
        let before = draft.curriculum.clone();

        for panel in WizardPanel::ALL {
            draft.navigate(panel);
            assert_eq!(draft.active_panel(), panel);
        }
        assert_eq!(draft.curriculum, before);
        assert_eq!(draft.details.title, "Practical Rust");
        assert!(draft.curriculum.section(&section).is_some());
    }

    #[test]
    fn test_leaving_curriculum_discards_editor() {
        let mut draft = CourseDraft::new("English");
        let section = draft.curriculum.add_section();
        let lecture = draft.curriculum.add_lecture(&section, LectureType::Video).unwrap();

        draft.navigate(WizardPanel::Curriculum);
        draft.curriculum.open_content_editor(&section, &lecture);
        draft.navigate(WizardPanel::Curriculum);
        assert!(draft.curriculum.is_editor_open());

        draft.navigate(WizardPanel::Pricing);
        assert!(!draft.curriculum.is_editor_open());
        assert!(!draft.curriculum.lecture(&section, &lecture).unwrap().has_content);
    }

    #[test]
    fn test_submission_requires_valid_details() {
        let draft = CourseDraft::new("English");
        match draft.submission() {
            Err(StudioError::Validation(errors)) => assert!(errors.get("title").is_some()),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_submission_serializes_whole_draft() {
        let mut draft = CourseDraft::new("English");
        draft.update_details(CourseDetailsPatch {
            title: Some("Practical Rust".to_string()),
            description: Some("Build real tools with Rust from day one.".to_string()),
            category: Some("Web Development".to_string()),
            level: Some("Beginner".to_string()),
            price: Some("29.99".to_string()),
            ..Default::default()
        });
        let section = draft.curriculum.add_section();
        draft.curriculum.add_lecture(&section, LectureType::Quiz);

        let submission = draft.submission().unwrap();
        assert_eq!(submission.total_lectures, 1);
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["details"]["price"], "29.99");
        assert_eq!(value["sections"][0]["lectures"][0]["type"], "quiz");
        assert_eq!(value["intended_learners"]["learning_objectives"].as_array().unwrap().len(), 4);
    }
}
