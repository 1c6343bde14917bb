use super::Lecture;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named grouping of lectures within a course's curriculum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub objective: String,
    pub lectures: Vec<Lecture>,
}

impl Section {
    /// Creates an empty section with a freshly generated id
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Section {
            id: id.into(),
            title: String::new(),
            objective: String::new(),
            lectures: Vec::new(),
        }
    }

    pub fn lecture(&self, lecture_id: &str) -> Option<&Lecture> {
        self.lectures.iter().find(|l| l.id == lecture_id)
    }

    pub fn lecture_mut(&mut self, lecture_id: &str) -> Option<&mut Lecture> {
        self.lectures.iter_mut().find(|l| l.id == lecture_id)
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial update for a section; `None` fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub objective: Option<String>,
}

impl SectionPatch {
    pub fn title(title: impl Into<String>) -> Self {
        SectionPatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn objective(objective: impl Into<String>) -> Self {
        SectionPatch {
            objective: Some(objective.into()),
            ..Default::default()
        }
    }

    pub(crate) fn apply(self, section: &mut Section) {
        if let Some(title) = self.title {
            section.title = title;
        }
        if let Some(objective) = self.objective {
            section.objective = objective;
        }
    }
}
