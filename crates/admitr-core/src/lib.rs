mod exceptions;
mod ledger;
mod macros;
mod models;

// public api
pub mod config;
pub use exceptions::AdmissionError;
pub use ledger::AdmissionLedger;
pub use models::{Admission, AdmissionDraft, DraftField, SortConfig, SortDirection, SortKey};
