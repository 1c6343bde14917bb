use super::StudioState;
use crate::curriculum::{EditorTarget, SaveOutcome};
use crate::error::{Result, StudioError};
use crate::models::{Lecture, LectureContent, LecturePatch, LectureType, SectionPatch};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Serialize)]
pub struct LectureOutput {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub lecture_type: LectureType,
    pub icon: &'static str,
    pub type_label: &'static str,
    pub duration: String,
    pub has_content: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<LectureContent>,
}

impl From<&Lecture> for LectureOutput {
    fn from(lecture: &Lecture) -> Self {
        let presentation = lecture.lecture_type().presentation();
        LectureOutput {
            id: lecture.id.clone(),
            title: lecture.title.clone(),
            lecture_type: lecture.lecture_type(),
            icon: presentation.icon,
            type_label: presentation.label,
            duration: lecture.duration.clone(),
            has_content: lecture.has_content,
            content: lecture.content.clone(),
        }
    }
}

/// One "add lecture" button per lecture type
#[derive(Clone, Serialize)]
pub struct LectureTypeOutput {
    #[serde(rename = "type")]
    pub lecture_type: LectureType,
    pub icon: &'static str,
    pub add_label: &'static str,
}

#[derive(Clone, Serialize)]
pub struct SectionOutput {
    pub id: String,
    pub position: usize,
    pub title: String,
    pub objective: String,
    pub expanded: bool,
    pub lectures: Vec<LectureOutput>,
}

#[derive(Clone, Serialize)]
pub struct CurriculumOutput {
    pub sections: Vec<SectionOutput>,
    pub total_lectures: usize,
    pub editor: Option<EditorTarget>,
    pub lecture_types: Vec<LectureTypeOutput>,
}

/// Gets the curriculum as the view renders it
pub async fn get_curriculum(state: &StudioState) -> Result<CurriculumOutput> {
    let draft = state.draft();
    let store = &draft.curriculum;

    let sections = store
        .sections()
        .iter()
        .enumerate()
        .map(|(index, section)| SectionOutput {
            id: section.id.clone(),
            position: index + 1,
            title: section.title.clone(),
            objective: section.objective.clone(),
            expanded: store.is_section_expanded(&section.id),
            lectures: section
                .lectures
                .iter()
                .map(LectureOutput::from)
                .collect(),
        })
        .collect();

    Ok(CurriculumOutput {
        sections,
        total_lectures: store.total_lectures(),
        editor: store.editor_target().cloned(),
        lecture_types: LectureType::ALL
            .into_iter()
            .map(|lecture_type| {
                let presentation = lecture_type.presentation();
                LectureTypeOutput {
                    lecture_type,
                    icon: presentation.icon,
                    add_label: presentation.add_label,
                }
            })
            .collect(),
    })
}

pub async fn add_section(state: &StudioState) -> Result<String> {
    Ok(state.draft().curriculum.add_section())
}

pub async fn update_section(
    state: &StudioState,
    section_id: String,
    patch: SectionPatch,
) -> Result<bool> {
    Ok(state.draft().curriculum.update_section(&section_id, patch))
}

pub async fn delete_section(state: &StudioState, section_id: String) -> Result<bool> {
    Ok(state.draft().curriculum.delete_section(&section_id))
}

/// Adds a lecture; `None` when the section does not exist
pub async fn add_lecture(
    state: &StudioState,
    section_id: String,
    lecture_type: String,
) -> Result<Option<String>> {
    let lecture_type: LectureType = lecture_type
        .parse()
        .map_err(StudioError::InvalidArgument)?;
    Ok(state.draft().curriculum.add_lecture(&section_id, lecture_type))
}

pub async fn update_lecture(
    state: &StudioState,
    section_id: String,
    lecture_id: String,
    patch: LecturePatch,
) -> Result<bool> {
    Ok(state
        .draft()
        .curriculum
        .update_lecture(&section_id, &lecture_id, patch))
}

pub async fn delete_lecture(
    state: &StudioState,
    section_id: String,
    lecture_id: String,
) -> Result<bool> {
    Ok(state
        .draft()
        .curriculum
        .delete_lecture(&section_id, &lecture_id))
}

pub async fn reorder_sections(state: &StudioState, old_index: usize, new_index: usize) -> Result<bool> {
    Ok(state.draft().curriculum.reorder_sections(old_index, new_index))
}

pub async fn reorder_lectures(
    state: &StudioState,
    section_id: String,
    old_index: usize,
    new_index: usize,
) -> Result<bool> {
    Ok(state
        .draft()
        .curriculum
        .reorder_lectures(&section_id, old_index, new_index))
}

/// Applies a drop gesture: the dragged item takes the position of `over_id`
pub async fn move_section(state: &StudioState, active_id: String, over_id: String) -> Result<bool> {
    Ok(state.draft().curriculum.move_section(&active_id, &over_id))
}

pub async fn move_lecture(
    state: &StudioState,
    section_id: String,
    active_id: String,
    over_id: String,
) -> Result<bool> {
    Ok(state
        .draft()
        .curriculum
        .move_lecture(&section_id, &active_id, &over_id))
}

pub async fn toggle_section(state: &StudioState, section_id: String) -> Result<Option<bool>> {
    Ok(state.draft().curriculum.toggle_section_expanded(&section_id))
}

/// Opens the editor on a lecture and returns it with its stored content,
/// or `None` when the lecture does not exist.
pub async fn open_content_editor(
    state: &StudioState,
    section_id: String,
    lecture_id: String,
) -> Result<Option<LectureOutput>> {
    let mut draft = state.draft();
    if !draft.curriculum.open_content_editor(&section_id, &lecture_id) {
        return Ok(None);
    }
    Ok(draft
        .curriculum
        .lecture(&section_id, &lecture_id)
        .map(LectureOutput::from))
}

pub async fn close_content_editor(state: &StudioState) -> Result<()> {
    state.draft().curriculum.close_content_editor();
    Ok(())
}

/// Commits the content editor's payload
///
/// The payload is the editor's JSON, tagged with the lecture `type`.
pub async fn save_lecture_content(state: &StudioState, content: Value) -> Result<SaveOutcome> {
    let content: LectureContent = serde_json::from_value(content)
        .map_err(|e| StudioError::InvalidArgument(format!("Invalid lecture content: {}", e)))?;
    Ok(state.draft().curriculum.save_lecture_content(content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::state::test_state;
    use serde_json::json;

    #[tokio::test]
    async fn test_curriculum_round() {
        let state = test_state();
        let section = add_section(&state).await.unwrap();
        let lecture = add_lecture(&state, section.clone(), "video".to_string())
            .await
            .unwrap()
            .unwrap();
        toggle_section(&state, section.clone()).await.unwrap();

        let opened = open_content_editor(&state, section.clone(), lecture.clone())
            .await
            .unwrap()
            .unwrap();
        assert!(opened.content.is_none());
        let outcome = save_lecture_content(&state, json!({"type": "video", "url": "x", "duration": "4:32"}))
            .await
            .unwrap();
        assert_eq!(outcome, SaveOutcome::Saved);

        let view = get_curriculum(&state).await.unwrap();
        assert_eq!(view.total_lectures, 1);
        assert!(view.sections[0].expanded);
        assert_eq!(view.sections[0].position, 1);
        let out = &view.sections[0].lectures[0];
        assert_eq!(out.icon, "play");
        assert_eq!(out.duration, "4:32");
        assert!(out.has_content);
        assert!(view.editor.is_none());
        assert_eq!(view.lecture_types.len(), 5);
        assert_eq!(view.lecture_types[1].add_label, "Article");
    }

    #[tokio::test]
    async fn test_reopened_editor_gets_saved_content() {
        let state = test_state();
        let section = add_section(&state).await.unwrap();
        let lecture = add_lecture(&state, section.clone(), "quiz".to_string())
            .await
            .unwrap()
            .unwrap();

        open_content_editor(&state, section.clone(), lecture.clone()).await.unwrap();
        let quiz = json!({
            "type": "quiz",
            "questions": [{
                "prompt": "Which keyword moves a value?",
                "options": ["move", "ref", "let", "mut"],
                "correct_index": 0
            }]
        });
        let outcome = save_lecture_content(&state, quiz).await.unwrap();
        assert_eq!(outcome, SaveOutcome::Saved);

        let reopened = open_content_editor(&state, section.clone(), lecture.clone())
            .await
            .unwrap()
            .unwrap();
        match reopened.content {
            Some(LectureContent::Quiz { questions }) => {
                assert_eq!(questions.len(), 1);
                assert_eq!(questions[0].prompt, "Which keyword moves a value?");
            }
            other => panic!("unexpected content: {:?}", other),
        }

        let view = get_curriculum(&state).await.unwrap();
        assert!(view.sections[0].lectures[0].content.is_some());
    }

    #[tokio::test]
    async fn test_open_missing_lecture_returns_none() {
        let state = test_state();
        let section = add_section(&state).await.unwrap();
        assert!(open_content_editor(&state, section, "ghost".to_string())
            .await
            .unwrap()
            .is_none());
        assert!(get_curriculum(&state).await.unwrap().editor.is_none());
    }

    #[tokio::test]
    async fn test_unknown_lecture_type_is_rejected() {
        let state = test_state();
        let section = add_section(&state).await.unwrap();
        assert!(matches!(
            add_lecture(&state, section, "podcast".to_string()).await,
            Err(StudioError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_content_is_rejected() {
        let state = test_state();
        assert!(matches!(
            save_lecture_content(&state, json!({"type": "video"})).await,
            Err(StudioError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_ids_are_silent() {
        let state = test_state();
        assert!(!delete_section(&state, "ghost".to_string()).await.unwrap());
        assert_eq!(
            add_lecture(&state, "ghost".to_string(), "quiz".to_string()).await.unwrap(),
            None
        );
        assert!(!move_section(&state, "a".to_string(), "b".to_string()).await.unwrap());
    }
}
