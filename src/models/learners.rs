use serde::{Deserialize, Serialize};

pub const MIN_LEARNING_OBJECTIVES: usize = 4;
const MIN_PREREQUISITES: usize = 1;
const MIN_TARGET_AUDIENCE: usize = 1;

/// Which list of the intended learners panel an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearnerList {
    LearningObjectives,
    Prerequisites,
    TargetAudience,
}

impl LearnerList {
    fn minimum(self) -> usize {
        match self {
            LearnerList::LearningObjectives => MIN_LEARNING_OBJECTIVES,
            LearnerList::Prerequisites => MIN_PREREQUISITES,
            LearnerList::TargetAudience => MIN_TARGET_AUDIENCE,
        }
    }
}

/// What students will learn, what they need beforehand, and who the course
/// is for. Each list keeps a minimum number of (possibly blank) slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntendedLearners {
    pub learning_objectives: Vec<String>,
    pub prerequisites: Vec<String>,
    pub target_audience: Vec<String>,
}

impl Default for IntendedLearners {
    fn default() -> Self {
        IntendedLearners {
            learning_objectives: vec![String::new(); MIN_LEARNING_OBJECTIVES],
            prerequisites: vec![String::new(); MIN_PREREQUISITES],
            target_audience: vec![String::new(); MIN_TARGET_AUDIENCE],
        }
    }
}

impl IntendedLearners {
    pub fn list(&self, list: LearnerList) -> &[String] {
        match list {
            LearnerList::LearningObjectives => &self.learning_objectives,
            LearnerList::Prerequisites => &self.prerequisites,
            LearnerList::TargetAudience => &self.target_audience,
        }
    }

    fn list_mut(&mut self, list: LearnerList) -> &mut Vec<String> {
        match list {
            LearnerList::LearningObjectives => &mut self.learning_objectives,
            LearnerList::Prerequisites => &mut self.prerequisites,
            LearnerList::TargetAudience => &mut self.target_audience,
        }
    }

    /// Overwrites one slot. Out-of-range indices are ignored.
    pub fn set(&mut self, list: LearnerList, index: usize, text: impl Into<String>) -> bool {
        match self.list_mut(list).get_mut(index) {
            Some(slot) => {
                *slot = text.into();
                true
            }
            None => false,
        }
    }

    pub fn add(&mut self, list: LearnerList) {
        self.list_mut(list).push(String::new());
    }

    /// Removes one slot unless the list is already at its minimum.
    pub fn remove(&mut self, list: LearnerList, index: usize) -> bool {
        let minimum = list.minimum();
        let items = self.list_mut(list);
        if items.len() <= minimum || index >= items.len() {
            return false;
        }
        items.remove(index);
        true
    }

    pub fn filled_objectives(&self) -> usize {
        self.learning_objectives
            .iter()
            .filter(|o| !o.trim().is_empty())
            .count()
    }
}
