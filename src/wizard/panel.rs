use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six top-level authoring views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardPanel {
    IntendedLearners,
    CourseMessages,
    Curriculum,
    LandingPage,
    Pricing,
    Promotions,
}

/// A labelled group of panels in the wizard sidebar
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PanelGroup {
    pub label: &'static str,
    pub panels: &'static [WizardPanel],
}

pub const SIDEBAR: &[PanelGroup] = &[
    PanelGroup {
        label: "Plan your course",
        panels: &[WizardPanel::IntendedLearners, WizardPanel::CourseMessages],
    },
    PanelGroup {
        label: "Create your content",
        panels: &[WizardPanel::Curriculum],
    },
    PanelGroup {
        label: "Publish your course",
        panels: &[
            WizardPanel::LandingPage,
            WizardPanel::Pricing,
            WizardPanel::Promotions,
        ],
    },
];

impl WizardPanel {
    pub const ALL: [WizardPanel; 6] = [
        WizardPanel::IntendedLearners,
        WizardPanel::CourseMessages,
        WizardPanel::Curriculum,
        WizardPanel::LandingPage,
        WizardPanel::Pricing,
        WizardPanel::Promotions,
    ];

    pub fn id(self) -> &'static str {
        match self {
            WizardPanel::IntendedLearners => "intended-learners",
            WizardPanel::CourseMessages => "course-messages",
            WizardPanel::Curriculum => "curriculum",
            WizardPanel::LandingPage => "landing-page",
            WizardPanel::Pricing => "pricing",
            WizardPanel::Promotions => "promotions",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardPanel::IntendedLearners => "Intended Learners",
            WizardPanel::CourseMessages => "Course Messages",
            WizardPanel::Curriculum => "Curriculum",
            WizardPanel::LandingPage => "Course landing page",
            WizardPanel::Pricing => "Pricing",
            WizardPanel::Promotions => "Promotions",
        }
    }
}

impl Default for WizardPanel {
    fn default() -> Self {
        WizardPanel::IntendedLearners
    }
}

impl fmt::Display for WizardPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WizardPanel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WizardPanel::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| format!("Unknown wizard panel: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_ids_round_trip() {
        for panel in WizardPanel::ALL {
            assert_eq!(panel.id().parse::<WizardPanel>().unwrap(), panel);
            assert_eq!(serde_json::to_value(panel).unwrap(), panel.id());
        }
        assert!("settings".parse::<WizardPanel>().is_err());
    }

    #[test]
    fn test_sidebar_lists_every_panel_once() {
        let listed: Vec<WizardPanel> = SIDEBAR.iter().flat_map(|g| g.panels.iter().copied()).collect();
        assert_eq!(listed, WizardPanel::ALL.to_vec());
    }
}
