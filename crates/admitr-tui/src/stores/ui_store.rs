/// UIStore manages chrome state that belongs to no domain store
/// (help visibility, exit flag).
use crate::actions::Action;
use std::sync::{Arc, RwLock};

/// Internal state for UI
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Whether the expanded key help is visible in the footer
    pub show_help: bool,

    /// Whether the application should exit
    pub should_exit: bool,
}

/// Store that holds UI-related state
#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {}
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state.read().unwrap().should_exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let store = UIStore::new();
        let state = store.get_state();
        assert!(!state.show_help);
        assert!(!state.should_exit);
    }

    #[test]
    fn test_toggle_help() {
        let store = UIStore::new();

        store.reduce(&Action::ToggleHelp);
        assert!(store.get_state().show_help);

        store.reduce(&Action::ToggleHelp);
        assert!(!store.get_state().show_help);
    }

    #[test]
    fn test_quit() {
        let store = UIStore::new();
        store.reduce(&Action::Quit);
        assert!(store.should_exit());
    }
}
