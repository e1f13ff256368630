use crate::category;
use crate::{Effect, Msg, Phase, ViewState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::RouteChanged(media_type) => {
            let mounted = state.phase() != Phase::Idle;
            if mounted && state.media_type() == Some(media_type) {
                return (state, Vec::new());
            }
            state.reset_for_media_type(media_type);
            let mut effects = vec![Effect::SetAppState { media_type }, Effect::ScrollToTop];
            effects.extend(state.issue_fetch());
            effects
        }
        Msg::CategorySelected(index) => {
            if state.media_type().is_none()
                || index == state.selected_category()
                || category::resolve(index).is_none()
            {
                return (state, Vec::new());
            }
            state.select_category(index);
            state.issue_fetch()
        }
        Msg::LoadMoreClicked => {
            // The load-more control is inert while anything is in flight or at the last page.
            if state.phase() != Phase::Ready || !state.has_more() {
                return (state, Vec::new());
            }
            state.advance_page();
            state.issue_fetch()
        }
        Msg::PageLoaded { tag, result } => {
            if !state.is_pending(&tag) {
                return (state, Vec::new());
            }
            state.complete(tag, result)
        }
    };

    (state, effects)
}
