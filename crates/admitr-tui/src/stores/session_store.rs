/// SessionStore owns the Session Gate: which screen is active and the
/// credential inputs while the login form is shown. No credentials are ever
/// checked; submission with both fields populated is the whole protocol.
use crate::actions::Action;
use std::sync::{Arc, RwLock};

/// Active top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
}

/// Credential fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    pub fn other(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Internal state for the session gate
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Currently active screen
    pub screen: Screen,

    /// Username input value
    pub username: String,

    /// Password input value (rendered masked)
    pub password: String,

    /// Currently focused credential field
    pub focused_field: CredentialField,

    /// Whether the required-field hint is showing (Enter pressed with an
    /// empty field)
    pub required_hint: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            screen: Screen::Login,
            username: String::new(),
            password: String::new(),
            focused_field: CredentialField::Username,
            required_hint: false,
        }
    }
}

/// Store that holds the session gate state
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> SessionState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::Login => {
                // one-way transition out of the gate; it retains no state
                state.screen = Screen::Dashboard;
                state.username.clear();
                state.password.clear();
                state.focused_field = CredentialField::Username;
                state.required_hint = false;
            }

            Action::Logout => {
                state.screen = Screen::Login;
            }

            _ => {}
        }
    }

    // Text editing methods below are called directly from the keyboard
    // layer; they are per-keystroke edits, not semantic transitions.

    pub fn input(&self, c: char) {
        let mut state = self.state.write().unwrap();
        match state.focused_field {
            CredentialField::Username => state.username.push(c),
            CredentialField::Password => state.password.push(c),
        }
        state.required_hint = false;
    }

    pub fn backspace(&self) {
        let mut state = self.state.write().unwrap();
        match state.focused_field {
            CredentialField::Username => state.username.pop(),
            CredentialField::Password => state.password.pop(),
        };
    }

    pub fn focus_next_field(&self) {
        let mut state = self.state.write().unwrap();
        state.focused_field = state.focused_field.other();
    }

    /// True when both fields are populated.
    pub fn can_submit(&self) -> bool {
        let state = self.state.read().unwrap();
        !state.username.is_empty() && !state.password.is_empty()
    }

    /// Enter was pressed with an empty field; surface the inline hint.
    pub fn mark_required_hint(&self) {
        self.state.write().unwrap().required_hint = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_login_screen() {
        let store = SessionStore::new();
        let state = store.get_state();
        assert_eq!(state.screen, Screen::Login);
        assert_eq!(state.focused_field, CredentialField::Username);
        assert!(state.username.is_empty());
        assert!(!state.required_hint);
    }

    #[test]
    fn test_cannot_submit_with_empty_field() {
        let store = SessionStore::new();
        assert!(!store.can_submit());

        store.input('a');
        assert!(!store.can_submit());

        store.focus_next_field();
        store.input('b');
        assert!(store.can_submit());
    }

    #[test]
    fn test_login_switches_screen_and_clears_credentials() {
        let store = SessionStore::new();
        store.input('u');
        store.focus_next_field();
        store.input('p');

        store.reduce(&Action::Login);

        let state = store.get_state();
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(state.username.is_empty());
        assert!(state.password.is_empty());
        assert_eq!(state.focused_field, CredentialField::Username);
    }

    #[test]
    fn test_logout_returns_to_login() {
        let store = SessionStore::new();
        store.reduce(&Action::Login);
        store.reduce(&Action::Logout);
        assert_eq!(store.get_state().screen, Screen::Login);
    }

    #[test]
    fn test_required_hint_clears_on_input() {
        let store = SessionStore::new();
        store.mark_required_hint();
        assert!(store.get_state().required_hint);

        store.input('x');
        assert!(!store.get_state().required_hint);
    }

    #[test]
    fn test_input_edits_focused_field() {
        let store = SessionStore::new();
        store.input('a');
        store.input('b');
        store.backspace();
        store.focus_next_field();
        store.input('s');

        let state = store.get_state();
        assert_eq!(state.username, "a");
        assert_eq!(state.password, "s");
    }
}
