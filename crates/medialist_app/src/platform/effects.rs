use medialist_core::{Effect, MediaType, Msg, RequestTag};
use medialist_engine::{EngineEvent, EngineHandle};
use medialist_logging::{medialist_debug, medialist_info, medialist_warn};

/// Shell-level UI the listing does not own: overlay, toasts, active media type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chrome {
    pub global_loading: bool,
    pub app_state: Option<MediaType>,
    pub notifications: Vec<String>,
    /// Set by `ScrollToTop`, cleared once the next frame starts on a fresh screen.
    pub scroll_pending: bool,
}

impl Chrome {
    /// Applies a shell effect; fetches are handed back for the engine.
    pub fn apply(&mut self, effect: Effect) -> Option<RequestTag> {
        match effect {
            Effect::SetAppState { media_type } => {
                medialist_info!("SetAppState media_type={}", media_type);
                self.app_state = Some(media_type);
                None
            }
            Effect::ScrollToTop => {
                self.scroll_pending = true;
                None
            }
            Effect::SetGlobalLoading(on) => {
                self.global_loading = on;
                None
            }
            Effect::ShowError { message } => {
                medialist_warn!("ShowError {}", message);
                self.notifications.push(message);
                None
            }
            Effect::Fetch { tag } => Some(tag),
        }
    }

    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }

    pub fn take_scroll(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    chrome: Chrome,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            chrome: Chrome::default(),
        }
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            if let Some(tag) = self.chrome.apply(effect) {
                medialist_info!(
                    "Fetch generation={} media_type={} category={} page={}",
                    tag.generation,
                    tag.media_type,
                    tag.category_index,
                    tag.page
                );
                self.engine.fetch(tag);
            }
        }
    }

    /// Next finished fetch, if any, as a controller message.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(engine_event_to_msg)
    }

    pub fn chrome(&self) -> &Chrome {
        &self.chrome
    }

    pub fn chrome_mut(&mut self) -> &mut Chrome {
        &mut self.chrome
    }
}

pub fn engine_event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::PageFetched { tag, result } => {
            medialist_debug!(
                "PageFetched generation={} ok={}",
                tag.generation,
                result.is_ok()
            );
            Msg::PageLoaded {
                tag,
                result: result.map_err(|err| err.to_string()),
            }
        }
    }
}
