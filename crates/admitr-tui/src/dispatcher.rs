/// Central dispatcher for the flux architecture.
/// Receives Actions and forwards them to the store reducers.
use crate::actions::Action;
use tokio::sync::mpsc;

/// Routes Actions into the application's single action queue.
#[derive(Clone)]
pub struct Dispatcher {
    tx: mpsc::UnboundedSender<Action>,
}

impl Dispatcher {
    /// Create a new Dispatcher together with the receiving end of the queue.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Dispatch an action through the system. This is the only entry point
    /// for semantic state changes.
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            log::error!("failed to dispatch action: {}", e);
        }
    }
}

/// Consumes actions on the main loop and hands them to the reducers.
pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    pub fn new(rx: mpsc::UnboundedReceiver<Action>) -> Self {
        Self { rx }
    }

    /// Receive the next action, waiting until one is available.
    pub async fn recv(&mut self) -> Option<Action> {
        self.rx.recv().await
    }
}
