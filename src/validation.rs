use crate::models::CourseDetails;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field-level validation messages keyed by field name, one per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Keeps the first message reported for a field.
    fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

enum Rule {
    Min(usize, &'static str),
    Max(usize, &'static str),
}

struct FieldRules {
    field: &'static str,
    value: fn(&CourseDetails) -> &str,
    rules: &'static [Rule],
}

const RULES: &[FieldRules] = &[
    FieldRules {
        field: "title",
        value: |d| d.title.as_str(),
        rules: &[
            Rule::Min(5, "Title must be at least 5 characters"),
            Rule::Max(60, "Title must be 60 characters or less"),
        ],
    },
    FieldRules {
        field: "subtitle",
        value: |d| d.subtitle.as_str(),
        rules: &[Rule::Max(120, "Subtitle must be 120 characters or less")],
    },
    FieldRules {
        field: "description",
        value: |d| d.description.as_str(),
        rules: &[Rule::Min(20, "Description must be at least 20 characters")],
    },
    FieldRules {
        field: "category",
        value: |d| d.category.as_str(),
        rules: &[Rule::Min(1, "Please select a category")],
    },
    FieldRules {
        field: "level",
        value: |d| d.level.as_str(),
        rules: &[Rule::Min(1, "Please select a level")],
    },
    FieldRules {
        field: "language",
        value: |d| d.language.as_str(),
        rules: &[Rule::Min(1, "Please select a language")],
    },
    FieldRules {
        field: "price",
        value: |d| d.price.as_str(),
        rules: &[Rule::Min(1, "Please enter a price")],
    },
];

/// Checks the course details form. Lengths are counted in characters.
pub fn validate_course_details(details: &CourseDetails) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for entry in RULES {
        let length = (entry.value)(details).chars().count();
        for rule in entry.rules {
            match rule {
                Rule::Min(min, message) if length < *min => errors.add(entry.field, message),
                Rule::Max(max, message) if length > *max => errors.add(entry.field, message),
                _ => {}
            }
        }
    }
    errors
}
