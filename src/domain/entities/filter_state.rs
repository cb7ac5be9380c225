use serde::{Deserialize, Serialize};

/// Lifecycle and on/off state of the event filter.
///
/// `started` flips to true once, after the filtering mechanism has been
/// initialized, and never goes back. `enabled` may change at any time; before
/// start it is only recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    started: bool,
    enabled: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns true if this call performed the transition.
    pub fn mark_started(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Returns true if the flag actually changed.
    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        std::mem::replace(&mut self.enabled, enabled) != enabled
    }

    /// True when the mechanism should currently be filtering.
    pub fn is_filtering(&self) -> bool {
        self.started && self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_not_started_and_disabled() {
        let state = FilterState::new();
        assert!(!state.is_started());
        assert!(!state.is_enabled());
        assert!(!state.is_filtering());
    }

    #[test]
    fn test_mark_started_only_transitions_once() {
        let mut state = FilterState::new();
        assert!(state.mark_started());
        assert!(!state.mark_started());
        assert!(state.is_started());
    }

    #[test]
    fn test_set_enabled_reports_changes() {
        let mut state = FilterState::new();
        assert!(state.set_enabled(true));
        assert!(!state.set_enabled(true));
        assert!(state.set_enabled(false));
        assert!(!state.is_enabled());
    }

    #[test]
    fn test_filtering_requires_start() {
        let mut state = FilterState::new();
        state.set_enabled(true);
        assert!(!state.is_filtering());

        state.mark_started();
        assert!(state.is_filtering());
        assert!(state.is_enabled());
    }
}
