use std::io::{self, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use medialist_core::{update, Msg, ViewState};
use medialist_engine::{EngineHandle, FetchOrchestrator};
use medialist_logging::medialist_debug;

use super::effects::EffectRunner;
use super::input::{self, Input, HELP};
use super::ui;
use crate::config::AppConfig;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let orchestrator = FetchOrchestrator::over_http(&config.service_settings())?;
    let engine = EngineHandle::new(orchestrator)?;

    let (input_tx, input_rx) = mpsc::channel::<Input>();
    input::spawn_stdin_reader(input_tx);

    let mut controller = Controller::new(EffectRunner::new(engine));
    let mut out = io::stdout();
    writeln!(out, "{HELP}")?;

    controller.dispatch(Msg::RouteChanged(config.initial_media_type), &mut out)?;

    loop {
        while let Some(msg) = controller.runner.poll() {
            controller.dispatch(msg, &mut out)?;
        }

        match input_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Input::Msg(msg)) => controller.dispatch(msg, &mut out)?,
            Ok(Input::Help) => writeln!(out, "{HELP}")?,
            Ok(Input::Unknown(raw)) => writeln!(out, "unknown command {raw:?}; {HELP}")?,
            Ok(Input::Empty) | Err(RecvTimeoutError::Timeout) => {}
            Ok(Input::Quit) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// Owns the single view state; every mutation goes through [`update`].
struct Controller {
    state: ViewState,
    runner: EffectRunner,
}

impl Controller {
    fn new(runner: EffectRunner) -> Self {
        Self {
            state: ViewState::new(),
            runner,
        }
    }

    fn dispatch(&mut self, msg: Msg, out: &mut impl Write) -> io::Result<()> {
        if let Msg::PageLoaded { tag, .. } = &msg {
            if self.state.pending() != Some(*tag) {
                medialist_debug!("Discarding stale response generation={}", tag.generation);
            }
        }

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let has_effects = !effects.is_empty();
        self.runner.enqueue(effects);
        let was_dirty = state.consume_dirty();
        self.state = state;

        if was_dirty || has_effects {
            let chrome = self.runner.chrome_mut();
            let notifications = chrome.take_notifications();
            if chrome.take_scroll() {
                writeln!(out, "\n{}", "-".repeat(60))?;
            }
            let frame = ui::render::render(&self.state.view(), self.runner.chrome(), &notifications);
            for line in frame {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
        }
        Ok(())
    }
}
