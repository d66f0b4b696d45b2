use common::games::tictactoe::{GameBroadcaster, SessionSnapshot};
use tokio::sync::mpsc;

#[derive(Clone)]
pub struct LocalBroadcaster {
    snapshot_tx: mpsc::UnboundedSender<SessionSnapshot>,
}

impl LocalBroadcaster {
    pub fn new(snapshot_tx: mpsc::UnboundedSender<SessionSnapshot>) -> Self {
        Self { snapshot_tx }
    }
}

impl GameBroadcaster for LocalBroadcaster {
    async fn broadcast_state(&self, snapshot: SessionSnapshot) {
        // The receiver only goes away once the terminal loop has exited.
        let _ = self.snapshot_tx.send(snapshot);
    }
}
