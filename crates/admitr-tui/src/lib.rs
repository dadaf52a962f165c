use std::io;

use admitr_core::AdmissionLedger;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod keyboard;
mod logger;
mod stores;
mod ui;

mod tui;

pub use app::App;
pub use logger::LogBuffer;

/// Main entry point for the TUI application. Runs the dashboard over the
/// given ledger and returns the captured log buffer once the terminal
/// session ends.
pub async fn tui_main(ledger: AdmissionLedger) -> io::Result<LogBuffer> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    let mut terminal = tui::init()?;

    let (mut app, action_receiver) = match App::new(ledger) {
        Ok(parts) => parts,
        Err(e) => {
            // restore the terminal before showing the error
            let _ = tui::restore();
            eprintln!("Failed to initialize application: {}", e);
            return Err(io::Error::other(format!("{}", e)));
        }
    };

    let log_buffer = app.log_buffer();
    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    result.map(|()| log_buffer)
}
