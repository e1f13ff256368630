use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use medialist_core::RequestTag;
use medialist_logging::{medialist_info, medialist_warn};

use crate::{EngineError, EngineEvent, FetchOrchestrator};

enum EngineCommand {
    Fetch { tag: RequestTag },
}

/// Executes fetch effects on a background tokio runtime.
///
/// Requests run concurrently; results come back in completion order, so the
/// caller must rely on the request tag, not arrival order.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(orchestrator: FetchOrchestrator) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let orchestrator = Arc::new(orchestrator);
        let runtime = tokio::runtime::Runtime::new()?;

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let orchestrator = orchestrator.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(&orchestrator, command, event_tx).await;
                });
            }
            medialist_info!("engine command channel closed; shutting down");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn fetch(&self, tag: RequestTag) {
        if self.cmd_tx.send(EngineCommand::Fetch { tag }).is_err() {
            medialist_warn!("engine is gone; dropping fetch {:?}", tag);
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    orchestrator: &FetchOrchestrator,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { tag } => {
            let result = orchestrator.fetch_page(&tag).await;
            if let Err(err) = &result {
                medialist_warn!("fetch generation={} failed: {}", tag.generation, err);
            }
            let _ = event_tx.send(EngineEvent::PageFetched { tag, result });
        }
    }
}
