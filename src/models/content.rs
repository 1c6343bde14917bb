use super::LectureType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Type-specific body attached to a lecture by the content editor.
///
/// The `type` tag on the wire matches [`LectureType`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LectureContent {
    Video {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        file_name: Option<String>,
    },
    Text {
        body: String,
    },
    Quiz {
        questions: Vec<QuizQuestion>,
    },
    Coding {
        language: String,
        instructions: String,
        #[serde(default)]
        starter_code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        solution: Option<String>,
    },
    Assignment {
        instructions: String,
        #[serde(default)]
        questions: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        estimated_minutes: Option<u32>,
    },
}

impl LectureContent {
    pub fn lecture_type(&self) -> LectureType {
        match self {
            LectureContent::Video { .. } => LectureType::Video,
            LectureContent::Text { .. } => LectureType::Text,
            LectureContent::Quiz { .. } => LectureType::Quiz,
            LectureContent::Coding { .. } => LectureType::Coding,
            LectureContent::Assignment { .. } => LectureType::Assignment,
        }
    }

    /// Duration label supplied by the payload, if any. Blank labels count as
    /// absent.
    pub fn duration(&self) -> Option<&str> {
        match self {
            LectureContent::Video {
                duration: Some(d), ..
            } if !d.trim().is_empty() => Some(d.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_content_from_editor_json() {
        let content: LectureContent =
            serde_json::from_str(r#"{"type":"video","url":"x","duration":"4:32"}"#).unwrap();
        assert_eq!(content.lecture_type(), LectureType::Video);
        assert_eq!(content.duration(), Some("4:32"));
    }

    #[test]
    fn test_only_video_supplies_duration() {
        let blank = LectureContent::Video {
            url: "x".to_string(),
            duration: Some("  ".to_string()),
            file_name: None,
        };
        assert_eq!(blank.duration(), None);

        let text = LectureContent::Text {
            body: "Read this".to_string(),
        };
        assert_eq!(text.duration(), None);
    }

    #[test]
    fn test_quiz_content_parses() {
        let content: LectureContent = serde_json::from_str(
            r#"{"type":"quiz","questions":[{"prompt":"2+2?","options":["3","4"],"correct_index":1}]}"#,
        )
        .unwrap();
        match content {
            LectureContent::Quiz { questions } => {
                assert_eq!(questions.len(), 1);
                assert_eq!(questions[0].correct_index, 1);
            }
            other => panic!("unexpected content: {:?}", other),
        }
    }
}
