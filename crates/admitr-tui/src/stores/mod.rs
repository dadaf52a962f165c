pub mod admissions_store;
pub mod session_store;
pub mod ui_store;

pub use admissions_store::AdmissionsStore;
pub use session_store::SessionStore;
pub use ui_store::UIStore;
