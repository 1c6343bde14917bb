use super::WizardPanel;
use tracing::debug;

/// Tracks which authoring panel is active. Holds no course data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardNavigationController {
    active: WizardPanel,
}

impl WizardNavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> WizardPanel {
        self.active
    }

    pub fn is_active(&self, panel: WizardPanel) -> bool {
        self.active == panel
    }

    /// Switches panels and returns the one that was active before.
    pub fn select(&mut self, panel: WizardPanel) -> WizardPanel {
        let previous = std::mem::replace(&mut self.active, panel);
        if previous != panel {
            debug!("Wizard panel {} -> {}", previous, panel);
        }
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_intended_learners() {
        let nav = WizardNavigationController::new();
        assert_eq!(nav.active(), WizardPanel::IntendedLearners);
    }

    #[test]
    fn test_select_returns_previous() {
        let mut nav = WizardNavigationController::new();
        assert_eq!(nav.select(WizardPanel::Pricing), WizardPanel::IntendedLearners);
        assert!(nav.is_active(WizardPanel::Pricing));
        assert_eq!(nav.select(WizardPanel::Pricing), WizardPanel::Pricing);
    }
}
