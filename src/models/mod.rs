mod content;
mod course;
mod learners;
mod lecture;
mod section;

pub use content::{LectureContent, QuizQuestion};
pub use course::{CourseDetails, CourseDetailsPatch, CATEGORIES, LANGUAGES, LEVELS, PRICE_TIERS};
pub use learners::{IntendedLearners, LearnerList, MIN_LEARNING_OBJECTIVES};
pub use lecture::{Lecture, LecturePatch, LecturePresentation, LectureType, PLACEHOLDER_DURATION};
pub use section::{Section, SectionPatch};
