use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::log;
use super::session::{ScheduledTask, SessionError, SessionSnapshot, TicTacToeSession};
use super::settings::TicTacToeSettings;

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;
}

#[derive(Clone)]
pub struct TicTacToeRunner<B: GameBroadcaster> {
    session: Arc<Mutex<TicTacToeSession>>,
    settings: TicTacToeSettings,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeRunner<B> {
    pub fn new(settings: TicTacToeSettings, broadcaster: B) -> Self {
        Self {
            session: Arc::new(Mutex::new(TicTacToeSession::new())),
            settings,
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.lock().await.snapshot()
    }

    pub async fn start(&self) {
        let snapshot = self.snapshot().await;
        log!("[game:{}] Started", snapshot.game_number);
        self.broadcaster.broadcast_state(snapshot).await;
    }

    pub async fn handle_click(&self, index: usize) -> Result<(), SessionError> {
        let (task, snapshot) = {
            let mut session = self.session.lock().await;
            let game_number = session.game_number();
            let task = session.handle_click(index).inspect_err(|e| {
                log!("[game:{}] Rejected click on cell {}: {}", game_number, index, e);
            })?;
            log!("[game:{}] Human placed X at {}", game_number, index);
            if task == Some(ScheduledTask::Reset) {
                log!("[game:{}] {}", game_number, session.status_text());
            }
            (task, session.snapshot())
        };

        let game_number = snapshot.game_number;
        self.broadcaster.broadcast_state(snapshot).await;

        if let Some(task) = task {
            self.schedule(task, game_number);
        }
        Ok(())
    }

    pub async fn reset(&self) {
        let snapshot = {
            let mut session = self.session.lock().await;
            session.reset();
            session.snapshot()
        };
        log!("[game:{}] Started by request", snapshot.game_number);
        self.broadcaster.broadcast_state(snapshot).await;
    }

    fn schedule(&self, task: ScheduledTask, game_number: u64) {
        let runner = self.clone();
        tokio::spawn(async move {
            let mut next = Some(task);
            while let Some(task) = next {
                tokio::time::sleep(task.delay(&runner.settings)).await;
                next = runner.run_task(task, game_number).await;
            }
        });
    }

    async fn run_task(&self, task: ScheduledTask, game_number: u64) -> Option<ScheduledTask> {
        let (next, snapshot) = {
            let mut session = self.session.lock().await;
            if session.game_number() != game_number {
                log!("[game:{}] Dropped stale {:?} task", game_number, task);
                return None;
            }

            let next = match task {
                ScheduledTask::ComputerMove => match session.play_computer_move() {
                    Ok(next) => {
                        if let Some(index) = session.last_move() {
                            log!("[game:{}] Computer placed O at {}", game_number, index);
                        }
                        next
                    }
                    Err(e) => {
                        log!("[game:{}] Computer move skipped: {}", game_number, e);
                        return None;
                    }
                },
                ScheduledTask::Reset => {
                    session.reset();
                    None
                }
            };

            if next == Some(ScheduledTask::Reset) {
                log!("[game:{}] {}", game_number, session.status_text());
            }
            (next, session.snapshot())
        };

        self.broadcaster.broadcast_state(snapshot).await;
        next
    }
}
