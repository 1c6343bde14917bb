use super::LectureContent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Duration label a lecture carries until content supplies a real one.
pub const PLACEHOLDER_DURATION: &str = "0:00";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LectureType {
    Video,
    Text,
    Quiz,
    Coding,
    Assignment,
}

/// How a lecture type shows up in the curriculum view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LecturePresentation {
    pub icon: &'static str,
    pub label: &'static str,
    pub add_label: &'static str,
}

impl LectureType {
    pub const ALL: [LectureType; 5] = [
        LectureType::Video,
        LectureType::Text,
        LectureType::Quiz,
        LectureType::Coding,
        LectureType::Assignment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LectureType::Video => "video",
            LectureType::Text => "text",
            LectureType::Quiz => "quiz",
            LectureType::Coding => "coding",
            LectureType::Assignment => "assignment",
        }
    }

    pub fn presentation(self) -> LecturePresentation {
        match self {
            LectureType::Video => LecturePresentation {
                icon: "play",
                label: "Video",
                add_label: "Lecture",
            },
            LectureType::Text => LecturePresentation {
                icon: "file-text",
                label: "Text",
                add_label: "Article",
            },
            LectureType::Quiz => LecturePresentation {
                icon: "help-circle",
                label: "Quiz",
                add_label: "Quiz",
            },
            LectureType::Coding => LecturePresentation {
                icon: "code",
                label: "Coding Exercise",
                add_label: "Coding Exercise",
            },
            LectureType::Assignment => LecturePresentation {
                icon: "book-open",
                label: "Assignment",
                add_label: "Assignment",
            },
        }
    }
}

impl fmt::Display for LectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LectureType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LectureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown lecture type: {}", s))
    }
}

/// A single content unit within a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    lecture_type: LectureType,
    pub duration: String,
    pub has_content: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<LectureContent>,
}

impl Lecture {
    /// Creates an empty lecture of the given type with a freshly generated id
    pub fn new(lecture_type: LectureType) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), lecture_type)
    }

    pub fn with_id(id: impl Into<String>, lecture_type: LectureType) -> Self {
        Lecture {
            id: id.into(),
            title: String::new(),
            lecture_type,
            duration: PLACEHOLDER_DURATION.to_string(),
            has_content: false,
            content: None,
        }
    }

    /// The type is fixed at creation; there is no setter.
    pub fn lecture_type(&self) -> LectureType {
        self.lecture_type
    }
}

/// Partial update for a lecture; `None` fields are left unchanged.
///
/// Has no `type` field: a lecture's type never changes. `has_content` follows
/// the stored content and is not patched directly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LecturePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub content: Option<LectureContent>,
}

impl LecturePatch {
    pub fn title(title: impl Into<String>) -> Self {
        LecturePatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub(crate) fn apply(self, lecture: &mut Lecture) {
        if let Some(title) = self.title {
            lecture.title = title;
        }
        if let Some(duration) = self.duration {
            lecture.duration = duration;
        }
        if let Some(content) = self.content {
            if content.lecture_type() == lecture.lecture_type {
                lecture.content = Some(content);
                lecture.has_content = true;
            } else {
                tracing::warn!(
                    "Dropping {} content for {} lecture {}",
                    content.lecture_type(),
                    lecture.lecture_type,
                    lecture.id
                );
            }
        }
    }
}
