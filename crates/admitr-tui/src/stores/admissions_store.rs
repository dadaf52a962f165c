/// AdmissionsStore owns the admission ledger plus the add-form modal state.
/// Semantic transitions (sort requests, open/close/submit) arrive through
/// the reducer; per-keystroke draft edits are direct method calls from the
/// keyboard layer.
use crate::actions::Action;
use admitr_core::{AdmissionDraft, AdmissionLedger, DraftField};
use std::sync::{Arc, RwLock};

/// Internal state for the admissions view
#[derive(Debug, Clone)]
pub struct AdmissionsState {
    /// The admission list with its id counter and sort configuration
    pub ledger: AdmissionLedger,

    /// Whether the add-registration modal is open
    pub is_add_form_open: bool,

    /// In-progress values for a new admission
    pub draft: AdmissionDraft,

    /// Currently focused form field
    pub focused_field: DraftField,

    /// Row cursor in the rendered table (presentation only)
    pub row_cursor: usize,

    /// Whether the required-field hint is showing (Submit pressed with an
    /// incomplete draft)
    pub required_hint: bool,
}

impl AdmissionsState {
    fn new(ledger: AdmissionLedger) -> Self {
        Self {
            ledger,
            is_add_form_open: false,
            draft: AdmissionDraft::default(),
            focused_field: DraftField::Patient,
            row_cursor: 0,
            required_hint: false,
        }
    }
}

/// Store that holds the admissions view state
#[derive(Clone)]
pub struct AdmissionsStore {
    state: Arc<RwLock<AdmissionsState>>,

    /// Ledger the dashboard re-enters with after a logout. The admissions
    /// view is constructed on entry and discarded on exit.
    initial_ledger: AdmissionLedger,
}

impl AdmissionsStore {
    pub fn new(ledger: AdmissionLedger) -> Self {
        Self {
            state: Arc::new(RwLock::new(AdmissionsState::new(ledger.clone()))),
            initial_ledger: ledger,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> AdmissionsState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let state = &mut *self.state.write().unwrap();

        match action {
            Action::RequestSort(key) => {
                state.ledger.request_sort(*key);
            }

            Action::OpenAddForm => {
                state.is_add_form_open = true;
                state.focused_field = DraftField::Patient;
                state.required_hint = false;
            }

            Action::CloseAddForm => {
                // Cancel discards the draft: re-opening shows empty fields
                state.is_add_form_open = false;
                state.draft.clear();
                state.focused_field = DraftField::Patient;
                state.required_hint = false;
            }

            Action::SubmitDraft => match state.ledger.admit(&state.draft) {
                Ok(id) => {
                    log::info!("registered admission #{}", id);
                    state.is_add_form_open = false;
                    state.draft.clear();
                    state.focused_field = DraftField::Patient;
                    state.required_hint = false;
                }
                Err(e) => {
                    // refuse outright and keep the form open; the list is
                    // untouched
                    log::debug!("submit refused: {}", e);
                    state.required_hint = true;
                }
            },

            Action::Logout => {
                *state = AdmissionsState::new(self.initial_ledger.clone());
            }

            _ => {}
        }
    }

    // Draft editing and table navigation below are called directly from
    // the keyboard layer.

    pub fn draft_input(&self, c: char) {
        let state = &mut *self.state.write().unwrap();
        if state.focused_field.accepts(c) {
            state.draft.field_mut(state.focused_field).push(c);
            state.required_hint = false;
        }
    }

    pub fn draft_backspace(&self) {
        let state = &mut *self.state.write().unwrap();
        state.draft.field_mut(state.focused_field).pop();
    }

    pub fn focus_next_field(&self) {
        let mut state = self.state.write().unwrap();
        state.focused_field = state.focused_field.next();
    }

    pub fn focus_prev_field(&self) {
        let mut state = self.state.write().unwrap();
        state.focused_field = state.focused_field.prev();
    }

    pub fn cursor_down(&self) {
        let mut state = self.state.write().unwrap();
        if state.row_cursor + 1 < state.ledger.len() {
            state.row_cursor += 1;
        }
    }

    pub fn cursor_up(&self) {
        let mut state = self.state.write().unwrap();
        state.row_cursor = state.row_cursor.saturating_sub(1);
    }
}
