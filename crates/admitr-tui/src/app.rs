/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::keyboard;
use crate::logger::LogBuffer;
use crate::stores::{AdmissionsStore, SessionStore, UIStore};
use crate::ui::render_layout;
use admitr_core::{AdmissionLedger, get_admitr_setting};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for the session gate
    session_store: SessionStore,

    /// Store for the admissions view
    admissions_store: AdmissionsStore,

    /// Store for chrome state
    ui_store: UIStore,

    /// Log buffer capturing application logs
    log_buffer: LogBuffer,
}

impl App {
    pub fn new(ledger: AdmissionLedger) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);

        let log_buffer = crate::logger::init_memory_logger()?;

        let session_store = SessionStore::new();
        let admissions_store = AdmissionsStore::new(ledger);
        let ui_store = UIStore::new();

        Ok((
            Self {
                dispatcher,
                session_store,
                admissions_store,
                ui_store,
                log_buffer,
            },
            action_receiver,
        ))
    }

    /// The captured log buffer, for dumping after the terminal is restored.
    pub fn log_buffer(&self) -> LogBuffer {
        self.log_buffer.clone()
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("admitr TUI started");

        let tick_ms = get_admitr_setting!(ADMITR_TICK_RATE_MS, usize) as u64;

        loop {
            // Render the UI; every frame derives its view from current
            // store state, so no mutation can be missed
            terminal.draw(|frame| {
                render_layout(
                    frame,
                    &self.session_store,
                    &self.admissions_store,
                    &self.ui_store,
                );
            })?;

            if self.ui_store.should_exit() {
                break;
            }

            // Handle both terminal events and dispatched actions
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_millis(tick_ms)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key_event) = event::read()? {
                            // Only process key press events (not release)
                            if key_event.kind == KeyEventKind::Press {
                                if let Some(action) = keyboard::handle_key_event(
                                    key_event,
                                    &self.session_store,
                                    &self.admissions_store,
                                ) {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                        }
                    }
                }

                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        log::info!("admitr TUI exiting");
        Ok(())
    }

    /// Handle an action by routing it to the store reducers
    fn handle_action(&mut self, action: &Action) {
        log::debug!("handling action: {:?}", action);

        self.session_store.reduce(action);
        self.admissions_store.reduce(action);
        self.ui_store.reduce(action);
    }
}
