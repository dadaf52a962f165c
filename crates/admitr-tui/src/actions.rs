/// Core Action types for the flux architecture.
/// All semantic state transitions flow through Actions dispatched to the
/// Dispatcher; per-keystroke text edits call store methods directly from
/// the keyboard layer.
use admitr_core::SortKey;

/// Every user intent that mutates application state.
#[derive(Debug, Clone)]
pub enum Action {
    // ===== Session Gate =====
    /// Credentials were submitted with both fields populated. No check is
    /// performed; the dashboard simply becomes the active screen.
    Login,

    /// Return to the login screen, discarding the dashboard state.
    Logout,

    // ===== Admissions table =====
    /// A sortable column header was activated.
    RequestSort(SortKey),

    /// Open the add-registration modal.
    OpenAddForm,

    /// Close the modal (Cancel), discarding the draft.
    CloseAddForm,

    /// Validate the draft and append it to the ledger.
    SubmitDraft,

    // ===== Chrome =====
    /// Toggle the expanded key help in the footer.
    ToggleHelp,

    /// Application should exit.
    Quit,
}
