use serde::{Deserialize, Serialize};

pub const CATEGORIES: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Machine Learning",
    "Cloud Computing",
    "DevOps",
    "Cybersecurity",
    "Design",
];

pub const LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced", "All Levels"];

pub const LANGUAGES: &[&str] = &[
    "English",
    "Spanish",
    "French",
    "German",
    "Hindi",
    "Portuguese",
];

/// Price tiers offered by the pricing panel, as (value, label)
pub const PRICE_TIERS: &[(&str, &str)] = &[
    ("19.99", "$19.99"),
    ("29.99", "$29.99"),
    ("49.99", "$49.99"),
    ("79.99", "$79.99"),
    ("99.99", "$99.99"),
    ("149.99", "$149.99"),
    ("199.99", "$199.99"),
    ("free", "Free"),
];

/// Top-level course metadata edited by the landing page, pricing and
/// messages panels. The validator reads it field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDetails {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub level: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub promo_video: String,
    #[serde(default)]
    pub welcome_message: String,
    #[serde(default)]
    pub congrats_message: String,
}

impl CourseDetails {
    pub fn new(default_language: impl Into<String>) -> Self {
        CourseDetails {
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            category: String::new(),
            subcategory: String::new(),
            level: String::new(),
            language: default_language.into(),
            price: String::new(),
            thumbnail: String::new(),
            promo_video: String::new(),
            welcome_message: String::new(),
            congrats_message: String::new(),
        }
    }

    /// Title shown in the wizard header
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "Untitled Course"
        } else {
            &self.title
        }
    }
}

impl Default for CourseDetails {
    fn default() -> Self {
        Self::new("English")
    }
}

/// Partial update for the course details form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseDetailsPatch {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub level: Option<String>,
    pub language: Option<String>,
    pub price: Option<String>,
    pub thumbnail: Option<String>,
    pub promo_video: Option<String>,
    pub welcome_message: Option<String>,
    pub congrats_message: Option<String>,
}

impl CourseDetailsPatch {
    pub fn apply(self, details: &mut CourseDetails) {
        let fields = [
            (self.title, &mut details.title),
            (self.subtitle, &mut details.subtitle),
            (self.description, &mut details.description),
            (self.category, &mut details.category),
            (self.subcategory, &mut details.subcategory),
            (self.level, &mut details.level),
            (self.language, &mut details.language),
            (self.price, &mut details.price),
            (self.thumbnail, &mut details.thumbnail),
            (self.promo_video, &mut details.promo_video),
            (self.welcome_message, &mut details.welcome_message),
            (self.congrats_message, &mut details.congrats_message),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}
