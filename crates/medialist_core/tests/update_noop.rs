use medialist_core::{
    update, Effect, ListingPage, ListingPayload, MediaType, Msg, RequestTag, ViewState,
};

fn last_page() -> ListingPayload {
    ListingPayload::Page(ListingPage {
        results: Vec::new(),
        page: Some(1),
        total_pages: Some(1),
    })
}

#[test]
fn page_loaded_before_mount_is_noop() {
    let state = ViewState::new();
    let tag = RequestTag {
        generation: 1,
        session: 1,
        media_type: MediaType::Movie,
        category_index: 0,
        page: 1,
    };
    let (next, effects) = update(
        state.clone(),
        Msg::PageLoaded {
            tag,
            result: Ok(last_page()),
        },
    );

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn load_more_at_last_page_is_noop() {
    let (state, effects) = update(ViewState::new(), Msg::RouteChanged(MediaType::Tv));
    let tag = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Fetch { tag } => Some(*tag),
            _ => None,
        })
        .expect("fetch effect");
    let (mut state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(last_page()),
        },
    );
    state.consume_dirty();
    assert!(!state.has_more());

    let (mut next, effects) = update(state.clone(), Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(next.page(), 1);
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}
