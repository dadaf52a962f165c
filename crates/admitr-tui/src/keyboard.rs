/// Keyboard input handling and key mapping
use crate::actions::Action;
use crate::stores::session_store::Screen;
use crate::stores::{AdmissionsStore, SessionStore};
use admitr_core::SortKey;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input and return the appropriate Action.
///
/// Per-keystroke text edits mutate the stores directly and return None;
/// only semantic transitions become Actions.
pub fn handle_key_event(
    key_event: KeyEvent,
    session_store: &SessionStore,
    admissions_store: &AdmissionsStore,
) -> Option<Action> {
    // Ctrl+C always exits, even while a text field is focused
    if key_event.code == KeyCode::Char('c')
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
    {
        return Some(Action::Quit);
    }

    match session_store.get_state().screen {
        Screen::Login => handle_login_keys(key_event, session_store),
        Screen::Dashboard => {
            if admissions_store.get_state().is_add_form_open {
                handle_add_form_keys(key_event, admissions_store)
            } else {
                handle_dashboard_keys(key_event, admissions_store)
            }
        }
    }
}

fn handle_login_keys(key_event: KeyEvent, session_store: &SessionStore) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::Quit),

        // two fields, so next and previous are the same hop
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            session_store.focus_next_field();
            None
        }

        KeyCode::Backspace => {
            session_store.backspace();
            None
        }

        KeyCode::Enter => {
            if session_store.can_submit() {
                // no credential check happens anywhere: populated fields
                // are the whole requirement
                Some(Action::Login)
            } else {
                session_store.mark_required_hint();
                None
            }
        }

        KeyCode::Char(c) if !c.is_control() => {
            session_store.input(c);
            None
        }

        _ => None,
    }
}

fn handle_dashboard_keys(
    key_event: KeyEvent,
    admissions_store: &AdmissionsStore,
) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),

        // column headers, in table order
        KeyCode::Char('1') => Some(Action::RequestSort(SortKey::Patient)),
        KeyCode::Char('2') => Some(Action::RequestSort(SortKey::Age)),

        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::OpenAddForm),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(Action::Logout),

        KeyCode::Char('j') | KeyCode::Down => {
            admissions_store.cursor_down();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            admissions_store.cursor_up();
            None
        }

        _ => None,
    }
}

fn handle_add_form_keys(
    key_event: KeyEvent,
    admissions_store: &AdmissionsStore,
) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::CloseAddForm),

        // the reducer refuses the submit while the draft is incomplete
        KeyCode::Enter => Some(Action::SubmitDraft),

        KeyCode::Tab | KeyCode::Down => {
            admissions_store.focus_next_field();
            None
        }
        KeyCode::BackTab | KeyCode::Up => {
            admissions_store.focus_prev_field();
            None
        }

        KeyCode::Backspace => {
            admissions_store.draft_backspace();
            None
        }

        KeyCode::Char(c) if !c.is_control() => {
            admissions_store.draft_input(c);
            None
        }

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::session_store::CredentialField;
    use admitr_core::AdmissionLedger;
    use ratatui::crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn stores() -> (SessionStore, AdmissionsStore) {
        (
            SessionStore::new(),
            AdmissionsStore::new(AdmissionLedger::seeded()),
        )
    }

    #[test]
    fn test_login_enter_dispatches_once_with_populated_fields() {
        let (session, admissions) = stores();

        // empty fields: refused, hint raised
        let action = handle_key_event(key(KeyCode::Enter), &session, &admissions);
        assert!(action.is_none());
        assert!(session.get_state().required_hint);

        for c in "sam".chars() {
            handle_key_event(key(KeyCode::Char(c)), &session, &admissions);
        }
        handle_key_event(key(KeyCode::Tab), &session, &admissions);
        for c in "pw".chars() {
            handle_key_event(key(KeyCode::Char(c)), &session, &admissions);
        }

        let action = handle_key_event(key(KeyCode::Enter), &session, &admissions);
        assert!(matches!(action, Some(Action::Login)));
    }

    #[test]
    fn test_login_typing_edits_focused_field() {
        let (session, admissions) = stores();
        handle_key_event(key(KeyCode::Char('u')), &session, &admissions);
        handle_key_event(key(KeyCode::Tab), &session, &admissions);
        handle_key_event(key(KeyCode::Char('p')), &session, &admissions);
        handle_key_event(key(KeyCode::Backspace), &session, &admissions);

        let state = session.get_state();
        assert_eq!(state.username, "u");
        assert_eq!(state.password, "");
        assert_eq!(state.focused_field, CredentialField::Password);
    }

    #[test]
    fn test_dashboard_keys_map_to_actions() {
        let (session, admissions) = stores();
        session.reduce(&Action::Login);

        assert!(matches!(
            handle_key_event(key(KeyCode::Char('1')), &session, &admissions),
            Some(Action::RequestSort(SortKey::Patient))
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('2')), &session, &admissions),
            Some(Action::RequestSort(SortKey::Age))
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('a')), &session, &admissions),
            Some(Action::OpenAddForm)
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('l')), &session, &admissions),
            Some(Action::Logout)
        ));
        assert!(matches!(
            handle_key_event(key(KeyCode::Char('q')), &session, &admissions),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_open_form_captures_typing() {
        let (session, admissions) = stores();
        session.reduce(&Action::Login);
        admissions.reduce(&Action::OpenAddForm);

        // 'q' goes into the patient field instead of quitting
        let action = handle_key_event(key(KeyCode::Char('q')), &session, &admissions);
        assert!(action.is_none());
        assert_eq!(admissions.get_state().draft.patient, "q");

        assert!(matches!(
            handle_key_event(key(KeyCode::Esc), &session, &admissions),
            Some(Action::CloseAddForm)
        ));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let (session, admissions) = stores();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

        assert!(matches!(
            handle_key_event(ctrl_c, &session, &admissions),
            Some(Action::Quit)
        ));

        session.reduce(&Action::Login);
        admissions.reduce(&Action::OpenAddForm);
        assert!(matches!(
            handle_key_event(ctrl_c, &session, &admissions),
            Some(Action::Quit)
        ));
    }
}
