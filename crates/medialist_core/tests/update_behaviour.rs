use std::sync::Once;

use medialist_core::{
    update, Effect, ListingPage, ListingPayload, MediaItem, MediaType, Msg, Phase, RequestTag,
    ViewState,
};

const NOT_FAVORITED: usize = 3;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(medialist_logging::initialize_for_tests);
}

fn movie(title: &str) -> MediaItem {
    MediaItem {
        original_title: Some(title.to_string()),
        ..MediaItem::default()
    }
}

fn results(titles: &[&str]) -> ListingPayload {
    ListingPayload::Page(ListingPage {
        results: titles.iter().map(|t| movie(t)).collect(),
        page: None,
        total_pages: None,
    })
}

fn fetch_tag(effects: &[Effect]) -> RequestTag {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::Fetch { tag } => Some(*tag),
            _ => None,
        })
        .expect("fetch effect")
}

fn titles(state: &ViewState) -> Vec<String> {
    state
        .items()
        .iter()
        .filter_map(|item| item.original_title.clone())
        .collect()
}

fn mounted_with(titles: &[&str]) -> ViewState {
    let (state, effects) = update(ViewState::new(), Msg::RouteChanged(MediaType::Movie));
    let tag = fetch_tag(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(results(titles)),
        },
    );
    state
}

#[test]
fn mount_issues_first_page_with_global_loading() {
    init_logging();
    let state = ViewState::new();
    assert_eq!(state.phase(), Phase::Idle);

    let (mut state, effects) = update(state, Msg::RouteChanged(MediaType::Movie));
    let tag = fetch_tag(&effects);

    assert_eq!(
        effects,
        vec![
            Effect::SetAppState {
                media_type: MediaType::Movie
            },
            Effect::ScrollToTop,
            Effect::SetGlobalLoading(true),
            Effect::Fetch { tag },
        ]
    );
    assert_eq!(tag.media_type, MediaType::Movie);
    assert_eq!(tag.category_index, 0);
    assert_eq!(tag.page, 1);
    assert_eq!(state.phase(), Phase::LoadingInitial);
    let view = state.view();
    assert!(view.is_loading_initial);
    assert!(!view.is_loading_more);
    assert_eq!(view.heading, Some("Movies"));
    assert_eq!(view.categories.len(), 4);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn load_more_then_switch_to_not_favorited() {
    init_logging();
    let (state, effects) = update(ViewState::new(), Msg::RouteChanged(MediaType::Movie));
    let first = fetch_tag(&effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag: first,
            result: Ok(results(&["m1", "m2"])),
        },
    );
    assert_eq!(effects, vec![Effect::SetGlobalLoading(false)]);
    assert_eq!(titles(&state), vec!["m1", "m2"]);
    assert_eq!(state.phase(), Phase::Ready);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let second = fetch_tag(&effects);
    assert_eq!(effects, vec![Effect::Fetch { tag: second }]);
    assert_eq!(second.page, 2);
    assert_eq!(state.page(), 2);
    assert!(state.view().is_loading_more);
    assert!(!state.view().is_loading_initial);

    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag: second,
            result: Ok(ListingPayload::Items(vec![movie("m3")])),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(titles(&state), vec!["m1", "m2", "m3"]);

    let (state, effects) = update(state, Msg::CategorySelected(NOT_FAVORITED));
    assert!(state.items().is_empty());
    assert_eq!(state.page(), 1);
    let third = fetch_tag(&effects);
    assert_eq!(third.category_index, NOT_FAVORITED);
    assert_eq!(third.page, 1);
    assert_eq!(
        effects,
        vec![Effect::SetGlobalLoading(true), Effect::Fetch { tag: third }]
    );

    // The engine hands back the base page already filtered against favorites ["m1"].
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag: third,
            result: Ok(results(&["m2"])),
        },
    );
    assert_eq!(titles(&state), vec!["m2"]);
    assert_eq!(state.selected_category(), NOT_FAVORITED);
}

#[test]
fn category_switch_never_mixes_old_and_new_items() {
    init_logging();
    let mut state = mounted_with(&["p1", "p2"]);

    for (index, fresh) in [(1, "t1"), (2, "r1"), (0, "p9"), (3, "f1")] {
        let (next, effects) = update(state, Msg::CategorySelected(index));
        assert!(next.items().is_empty());
        let tag = fetch_tag(&effects);
        let (next, _) = update(
            next,
            Msg::PageLoaded {
                tag,
                result: Ok(results(&[fresh])),
            },
        );
        assert_eq!(titles(&next), vec![fresh]);
        state = next;
    }
}

#[test]
fn selecting_current_category_is_noop() {
    init_logging();
    let state = mounted_with(&["m1"]);
    let before = state.clone();

    let (next, effects) = update(state, Msg::CategorySelected(0));
    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn out_of_range_category_is_ignored() {
    init_logging();
    let state = mounted_with(&["m1"]);
    let before = state.clone();

    let (next, effects) = update(state, Msg::CategorySelected(4));
    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn category_before_mount_is_ignored() {
    init_logging();
    let (next, effects) = update(ViewState::new(), Msg::CategorySelected(1));
    assert_eq!(next, ViewState::new());
    assert!(effects.is_empty());
}

#[test]
fn stale_response_after_category_switch_is_discarded() {
    init_logging();
    let (state, effects) = update(ViewState::new(), Msg::RouteChanged(MediaType::Movie));
    let popular = fetch_tag(&effects);

    let (state, effects) = update(state, Msg::CategorySelected(1));
    let top_rated = fetch_tag(&effects);
    assert_ne!(popular, top_rated);
    assert!(top_rated.generation > popular.generation);

    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag: popular,
            result: Ok(results(&["stale"])),
        },
    );
    assert!(effects.is_empty());
    assert!(state.items().is_empty());
    assert_eq!(state.phase(), Phase::LoadingInitial);
    assert_eq!(state.pending(), Some(top_rated));

    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag: top_rated,
            result: Ok(results(&["fresh"])),
        },
    );
    assert_eq!(titles(&state), vec!["fresh"]);

    // A late duplicate of an already settled response is ignored too.
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag: top_rated,
            result: Ok(results(&["again"])),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(titles(&state), vec!["fresh"]);
}

#[test]
fn stale_response_after_media_type_switch_is_discarded() {
    init_logging();
    let state = mounted_with(&["m1"]);
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let movie_page_two = fetch_tag(&effects);

    let (state, effects) = update(state, Msg::RouteChanged(MediaType::Tv));
    let tv = fetch_tag(&effects);
    assert_eq!(tv.media_type, MediaType::Tv);
    assert_eq!(tv.category_index, 0);
    assert_eq!(tv.page, 1);
    assert!(state.items().is_empty());

    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag: movie_page_two,
            result: Ok(results(&["m2"])),
        },
    );
    assert!(effects.is_empty());
    assert!(state.items().is_empty());
}

#[test]
fn media_type_change_resets_category_and_page() {
    init_logging();
    let state = mounted_with(&["m1"]);
    let (state, effects) = update(state, Msg::CategorySelected(2));
    let tag = fetch_tag(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(results(&["m1", "m2"])),
        },
    );
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let tag = fetch_tag(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(results(&["m3"])),
        },
    );
    assert_eq!(state.page(), 2);
    assert_eq!(state.selected_category(), 2);

    let (state, effects) = update(state, Msg::RouteChanged(MediaType::Tv));
    assert_eq!(state.selected_category(), 0);
    assert_eq!(state.page(), 1);
    assert!(state.items().is_empty());
    assert_eq!(state.media_type(), Some(MediaType::Tv));
    assert!(effects.contains(&Effect::SetAppState {
        media_type: MediaType::Tv
    }));
    assert!(effects.contains(&Effect::ScrollToTop));
    assert_eq!(state.view().heading, Some("TV Series"));
}

#[test]
fn same_media_type_route_is_noop() {
    init_logging();
    let state = mounted_with(&["m1"]);
    let before = state.clone();

    let (next, effects) = update(state, Msg::RouteChanged(MediaType::Movie));
    assert_eq!(next, before);
    assert!(effects.is_empty());
}

#[test]
fn failure_keeps_items_and_clears_loading() {
    init_logging();
    let state = mounted_with(&["m1", "m2"]);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let tag = fetch_tag(&effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Err("catalog request failed: network error".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ShowError {
            message: "catalog request failed: network error".to_string()
        }]
    );
    assert_eq!(titles(&state), vec!["m1", "m2"]);
    assert_eq!(state.phase(), Phase::Ready);
    assert!(!state.view().is_loading_more);
    assert!(!state.view().is_loading_initial);
}

#[test]
fn first_page_failure_clears_global_loading() {
    init_logging();
    let (state, effects) = update(ViewState::new(), Msg::RouteChanged(MediaType::Movie));
    let tag = fetch_tag(&effects);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Err("boom".to_string()),
        },
    );
    assert_eq!(
        effects,
        vec![
            Effect::SetGlobalLoading(false),
            Effect::ShowError {
                message: "boom".to_string()
            },
        ]
    );
    assert!(state.items().is_empty());
    assert_eq!(state.phase(), Phase::Ready);
}

#[test]
fn load_more_is_inert_while_loading_or_unmounted() {
    init_logging();
    let (state, effects) = update(ViewState::new(), Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);

    let (state, _) = update(state, Msg::RouteChanged(MediaType::Movie));
    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 1);
    assert_eq!(state.phase(), Phase::LoadingInitial);
}

#[test]
fn page_increases_by_one_per_load_more() {
    init_logging();
    let mut state = mounted_with(&["p1"]);
    let mut expected = vec!["p1".to_string()];

    for page in 2..=5u32 {
        let (next, effects) = update(state, Msg::LoadMoreClicked);
        let tag = fetch_tag(&effects);
        assert_eq!(tag.page, page);
        assert_eq!(next.page(), page);
        let title = format!("p{page}");
        let before = next.items().len();
        let (next, _) = update(
            next,
            Msg::PageLoaded {
                tag,
                result: Ok(results(&[title.as_str()])),
            },
        );
        assert_eq!(next.items().len(), before + 1);
        expected.push(title);
        state = next;
    }

    assert_eq!(titles(&state), expected);
}

#[test]
fn has_more_follows_upstream_total_pages() {
    init_logging();
    let (state, effects) = update(ViewState::new(), Msg::RouteChanged(MediaType::Movie));
    assert!(state.view().has_more);
    let tag = fetch_tag(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(ListingPayload::Page(ListingPage {
                results: vec![movie("m1")],
                page: Some(1),
                total_pages: Some(2),
            })),
        },
    );
    assert_eq!(state.view().total_pages, Some(2));
    assert!(state.view().has_more);

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    let tag = fetch_tag(&effects);
    let (state, _) = update(
        state,
        Msg::PageLoaded {
            tag,
            result: Ok(ListingPayload::Page(ListingPage {
                results: vec![movie("m2")],
                page: Some(2),
                total_pages: Some(2),
            })),
        },
    );
    assert!(!state.view().has_more);
    assert!(!state.has_more());

    let (state, effects) = update(state, Msg::LoadMoreClicked);
    assert!(effects.is_empty());
    assert_eq!(state.page(), 2);
    assert_eq!(titles(&state), vec!["m1", "m2"]);
}
