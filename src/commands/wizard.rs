use super::StudioState;
use crate::error::{Result, StudioError};
use crate::models::{
    CourseDetails, CourseDetailsPatch, IntendedLearners, LearnerList, CATEGORIES, LANGUAGES,
    LEVELS, PRICE_TIERS,
};
use crate::validation::FieldErrors;
use crate::wizard::{CourseSubmission, PanelGroup, Progress, WizardPanel, SIDEBAR};
use serde::Serialize;
use tracing::info;

#[derive(Clone, Serialize)]
pub struct WizardOverview {
    pub title: String,
    pub active_panel: WizardPanel,
    pub progress: Progress,
    pub sidebar: &'static [PanelGroup],
    pub section_count: usize,
    pub editor_open: bool,
}

#[derive(Clone, Serialize)]
pub struct FormOptions {
    pub categories: &'static [&'static str],
    pub levels: &'static [&'static str],
    pub languages: &'static [&'static str],
    pub price_tiers: Vec<PriceTierOutput>,
}

#[derive(Clone, Serialize)]
pub struct PriceTierOutput {
    pub value: &'static str,
    pub label: &'static str,
}

/// Header, sidebar and progress footer of the wizard
pub async fn get_overview(state: &StudioState) -> Result<WizardOverview> {
    let draft = state.draft();
    Ok(WizardOverview {
        title: draft.details.display_title().to_string(),
        active_panel: draft.active_panel(),
        progress: draft.progress(),
        sidebar: SIDEBAR,
        section_count: draft.curriculum.sections().len(),
        editor_open: draft.curriculum.is_editor_open(),
    })
}

pub async fn select_panel(state: &StudioState, panel: String) -> Result<WizardPanel> {
    let panel: WizardPanel = panel.parse().map_err(StudioError::InvalidArgument)?;
    state.draft().navigate(panel);
    Ok(panel)
}

pub async fn get_form_options() -> Result<FormOptions> {
    Ok(FormOptions {
        categories: CATEGORIES,
        levels: LEVELS,
        languages: LANGUAGES,
        price_tiers: PRICE_TIERS
            .iter()
            .map(|&(value, label)| PriceTierOutput { value, label })
            .collect(),
    })
}

pub async fn get_details(state: &StudioState) -> Result<CourseDetails> {
    Ok(state.draft().details.clone())
}

/// Applies form edits and returns the inline messages for the new values
pub async fn update_details(state: &StudioState, patch: CourseDetailsPatch) -> Result<FieldErrors> {
    let mut draft = state.draft();
    draft.update_details(patch);
    Ok(draft.validate())
}

pub async fn validate_details(state: &StudioState) -> Result<FieldErrors> {
    Ok(state.draft().validate())
}

pub async fn get_learners(state: &StudioState) -> Result<IntendedLearners> {
    Ok(state.draft().learners.clone())
}

pub async fn set_learner_item(
    state: &StudioState,
    list: LearnerList,
    index: usize,
    text: String,
) -> Result<bool> {
    Ok(state.draft().learners.set(list, index, text))
}

pub async fn add_learner_item(state: &StudioState, list: LearnerList) -> Result<usize> {
    let mut draft = state.draft();
    draft.learners.add(list);
    Ok(draft.learners.list(list).len())
}

pub async fn remove_learner_item(state: &StudioState, list: LearnerList, index: usize) -> Result<bool> {
    Ok(state.draft().learners.remove(list, index))
}

/// Validates and serializes the whole draft for the external save step
pub async fn submit_course(state: &StudioState) -> Result<CourseSubmission> {
    let submission = state.draft().submission()?;
    info!(
        "Course '{}' submitted with {} sections",
        submission.details.title,
        submission.sections.len()
    );
    Ok(submission)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::state::test_state;

    #[tokio::test]
    async fn test_overview_tracks_panel_and_progress() {
        let state = test_state();
        let overview = get_overview(&state).await.unwrap();
        assert_eq!(overview.active_panel, WizardPanel::IntendedLearners);
        assert_eq!(overview.title, "Untitled Course");
        assert_eq!(overview.progress.percent, 0);

        select_panel(&state, "pricing".to_string()).await.unwrap();
        update_details(&state, CourseDetailsPatch {
            price: Some("free".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();

        let overview = get_overview(&state).await.unwrap();
        assert_eq!(overview.active_panel, WizardPanel::Pricing);
        assert_eq!(overview.progress.completed, 1);
    }

    #[tokio::test]
    async fn test_unknown_panel_is_rejected() {
        let state = test_state();
        assert!(select_panel(&state, "reviews".to_string()).await.is_err());
        assert_eq!(get_overview(&state).await.unwrap().active_panel, WizardPanel::IntendedLearners);
    }

    #[tokio::test]
    async fn test_update_details_returns_inline_errors() {
        let state = test_state();
        let errors = update_details(&state, CourseDetailsPatch {
            title: Some("Rust".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
        assert_eq!(errors.get("title"), Some("Title must be at least 5 characters"));
        assert!(errors.get("language").is_none());
    }

    #[tokio::test]
    async fn test_learner_lists() {
        let state = test_state();
        assert_eq!(add_learner_item(&state, LearnerList::Prerequisites).await.unwrap(), 2);
        assert!(set_learner_item(&state, LearnerList::Prerequisites, 1, "Basic SQL".to_string())
            .await
            .unwrap());
        assert!(remove_learner_item(&state, LearnerList::Prerequisites, 0).await.unwrap());
        let learners = get_learners(&state).await.unwrap();
        assert_eq!(learners.prerequisites, vec!["Basic SQL".to_string()]);
    }

    #[tokio::test]
    async fn test_submit_rejects_invalid_form() {
        let state = test_state();
        assert!(matches!(submit_course(&state).await, Err(StudioError::Validation(_))));
    }

    #[tokio::test]
    async fn test_form_options() {
        let options = get_form_options().await.unwrap();
        assert_eq!(options.price_tiers.len(), 8);
        assert!(options.levels.contains(&"All Levels"));
    }
}
