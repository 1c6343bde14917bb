use super::ordering::{drop_indices, move_item};
use crate::models::{Lecture, LectureContent, LecturePatch, LectureType, Section, SectionPatch};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Lecture whose content editor is currently open
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditorTarget {
    pub section_id: String,
    pub lecture_id: String,
    pub lecture_type: LectureType,
}

/// Result of committing content from the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SaveOutcome {
    Saved,
    /// No editor was open; nothing changed.
    NothingToSave,
    /// Payload shape does not match the lecture; draft untouched, editor
    /// stays open.
    TypeMismatch {
        expected: LectureType,
        actual: LectureType,
    },
    /// The target was deleted while the editor was open; editor closed.
    LectureMissing,
}

/// Ordered sections with their lectures, plus the transient curriculum UI
/// state (open content editor, expanded accordion panels).
///
/// Every mutation is total: unknown ids leave the store unchanged and the
/// method reports `false`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDraftStore {
    sections: Vec<Section>,
    editor: Option<EditorTarget>,
    expanded: HashSet<String>,
}

impl CourseDraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections(sections: Vec<Section>) -> Self {
        CourseDraftStore {
            sections,
            ..Default::default()
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    fn section_mut(&mut self, section_id: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == section_id)
    }

    pub fn lecture(&self, section_id: &str, lecture_id: &str) -> Option<&Lecture> {
        self.section(section_id)?.lecture(lecture_id)
    }

    pub fn total_lectures(&self) -> usize {
        self.sections.iter().map(|s| s.lectures.len()).sum()
    }

    // Sections

    /// Appends an empty section and returns its id.
    pub fn add_section(&mut self) -> String {
        let section = Section::new();
        let id = section.id.clone();
        debug!("Adding section {}", id);
        self.sections.push(section);
        id
    }

    pub fn update_section(&mut self, section_id: &str, patch: SectionPatch) -> bool {
        match self.section_mut(section_id) {
            Some(section) => {
                patch.apply(section);
                true
            }
            None => false,
        }
    }

    /// Removes the section together with its lectures.
    pub fn delete_section(&mut self, section_id: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != section_id);
        if self.sections.len() == before {
            return false;
        }
        self.expanded.remove(section_id);
        if self
            .editor
            .as_ref()
            .is_some_and(|t| t.section_id == section_id)
        {
            self.editor = None;
        }
        debug!("Deleted section {}", section_id);
        true
    }

    pub fn reorder_sections(&mut self, old_index: usize, new_index: usize) -> bool {
        move_item(&mut self.sections, old_index, new_index)
    }

    /// Applies a section drop gesture: `active_id` lands where `over_id` was.
    pub fn move_section(&mut self, active_id: &str, over_id: &str) -> bool {
        match drop_indices(&self.sections, active_id, over_id, |s| s.id.as_str()) {
            Some((from, to)) => self.reorder_sections(from, to),
            None => false,
        }
    }

    // Lectures

    /// Appends an empty lecture of `lecture_type` and returns its id, or
    /// `None` when the section does not exist.
    pub fn add_lecture(&mut self, section_id: &str, lecture_type: LectureType) -> Option<String> {
        let section = self.section_mut(section_id)?;
        let lecture = Lecture::new(lecture_type);
        let id = lecture.id.clone();
        debug!("Adding {} lecture {} to section {}", lecture_type, id, section_id);
        section.lectures.push(lecture);
        Some(id)
    }

    pub fn update_lecture(&mut self, section_id: &str, lecture_id: &str, patch: LecturePatch) -> bool {
        let Some(lecture) = self
            .section_mut(section_id)
            .and_then(|s| s.lecture_mut(lecture_id))
        else {
            return false;
        };
        patch.apply(lecture);
        true
    }

    pub fn delete_lecture(&mut self, section_id: &str, lecture_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        let before = section.lectures.len();
        section.lectures.retain(|l| l.id != lecture_id);
        if section.lectures.len() == before {
            return false;
        }
        if self
            .editor
            .as_ref()
            .is_some_and(|t| t.section_id == section_id && t.lecture_id == lecture_id)
        {
            self.editor = None;
        }
        true
    }

    pub fn reorder_lectures(&mut self, section_id: &str, old_index: usize, new_index: usize) -> bool {
        match self.section_mut(section_id) {
            Some(section) => move_item(&mut section.lectures, old_index, new_index),
            None => false,
        }
    }

    /// Applies a lecture drop gesture within one section.
    pub fn move_lecture(&mut self, section_id: &str, active_id: &str, over_id: &str) -> bool {
        let Some(section) = self.section_mut(section_id) else {
            return false;
        };
        match drop_indices(&section.lectures, active_id, over_id, |l| l.id.as_str()) {
            Some((from, to)) => move_item(&mut section.lectures, from, to),
            None => false,
        }
    }

    // Content editor

    pub fn editor_target(&self) -> Option<&EditorTarget> {
        self.editor.as_ref()
    }

    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    /// Opens the content editor for an existing lecture. Any previously open
    /// target is replaced.
    pub fn open_content_editor(&mut self, section_id: &str, lecture_id: &str) -> bool {
        let Some(lecture) = self.lecture(section_id, lecture_id) else {
            return false;
        };
        self.editor = Some(EditorTarget {
            section_id: section_id.to_string(),
            lecture_id: lecture_id.to_string(),
            lecture_type: lecture.lecture_type(),
        });
        true
    }

    /// Closes the editor without saving. The draft is not touched.
    pub fn close_content_editor(&mut self) {
        self.editor = None;
    }

    /// Commits the editor's payload into the target lecture and closes the
    /// editor.
    pub fn save_lecture_content(&mut self, content: LectureContent) -> SaveOutcome {
        let Some(target) = self.editor.clone() else {
            return SaveOutcome::NothingToSave;
        };
        if content.lecture_type() != target.lecture_type {
            warn!(
                "Refusing {} content for {} lecture {}",
                content.lecture_type(),
                target.lecture_type,
                target.lecture_id
            );
            return SaveOutcome::TypeMismatch {
                expected: target.lecture_type,
                actual: content.lecture_type(),
            };
        }

        let patch = LecturePatch {
            duration: content.duration().map(str::to_string),
            content: Some(content),
            ..Default::default()
        };
        let saved = self.update_lecture(&target.section_id, &target.lecture_id, patch);
        self.editor = None;

        if saved {
            SaveOutcome::Saved
        } else {
            SaveOutcome::LectureMissing
        }
    }

    // Accordion panels

    pub fn is_section_expanded(&self, section_id: &str) -> bool {
        self.expanded.contains(section_id)
    }

    pub fn set_section_expanded(&mut self, section_id: &str, expanded: bool) -> bool {
        if self.section(section_id).is_none() {
            return false;
        }
        if expanded {
            self.expanded.insert(section_id.to_string());
        } else {
            self.expanded.remove(section_id);
        }
        true
    }

    /// Flips one accordion panel; returns the new state, or `None` for an
    /// unknown section.
    pub fn toggle_section_expanded(&mut self, section_id: &str) -> Option<bool> {
        let expanded = !self.is_section_expanded(section_id);
        self.set_section_expanded(section_id, expanded)
            .then_some(expanded)
    }
}
