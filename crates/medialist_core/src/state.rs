use crate::accumulate::accumulate;
use crate::category::{self, category_views};
use crate::view_model::MediaListView;
use crate::{Effect, ListingPayload, MediaItem, MediaType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not mounted yet; no media type known.
    #[default]
    Idle,
    LoadingInitial,
    LoadingMore,
    Ready,
}

/// Snapshot of the view state a fetch was issued under.
///
/// A response is only merged while its tag is still the pending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTag {
    /// Bumped for every issued fetch.
    pub generation: u64,
    /// Bumped whenever the list is reset (media type or category switch).
    pub session: u64,
    pub media_type: MediaType,
    pub category_index: usize,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    media_type: Option<MediaType>,
    selected_category: usize,
    page: u32,
    items: Vec<MediaItem>,
    phase: Phase,
    session: u64,
    generation: u64,
    pending: Option<RequestTag>,
    total_pages: Option<u32>,
    dirty: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            media_type: None,
            selected_category: 0,
            page: 1,
            items: Vec::new(),
            phase: Phase::Idle,
            session: 0,
            generation: 0,
            pending: None,
            total_pages: None,
            dirty: false,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn media_type(&self) -> Option<MediaType> {
        self.media_type
    }

    pub fn selected_category(&self) -> usize {
        self.selected_category
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn pending(&self) -> Option<RequestTag> {
        self.pending
    }

    /// False once upstream reported the current page as the last one.
    pub fn has_more(&self) -> bool {
        self.total_pages.map_or(true, |total| self.page < total)
    }

    pub fn view(&self) -> MediaListView {
        MediaListView {
            media_type: self.media_type,
            heading: self.media_type.map(MediaType::heading),
            items: self.items.clone(),
            is_loading_initial: self.phase == Phase::LoadingInitial,
            is_loading_more: self.phase == Phase::LoadingMore,
            categories: category_views(),
            selected_category: self.selected_category,
            page: self.page,
            total_pages: self.total_pages,
            has_more: self.has_more(),
        }
    }

    /// Returns whether the state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn is_pending(&self, tag: &RequestTag) -> bool {
        self.pending.as_ref() == Some(tag)
    }

    pub(crate) fn reset_for_media_type(&mut self, media_type: MediaType) {
        self.media_type = Some(media_type);
        self.reset_list(0);
    }

    pub(crate) fn select_category(&mut self, index: usize) {
        self.reset_list(index);
    }

    pub(crate) fn advance_page(&mut self) {
        self.page += 1;
        self.dirty = true;
    }

    /// Tags a fetch for the current (media type, category, page) and marks it pending.
    pub(crate) fn issue_fetch(&mut self) -> Vec<Effect> {
        let Some(media_type) = self.media_type else {
            return Vec::new();
        };
        self.generation += 1;
        let tag = RequestTag {
            generation: self.generation,
            session: self.session,
            media_type,
            category_index: self.selected_category,
            page: self.page,
        };
        self.pending = Some(tag);
        self.dirty = true;

        if tag.page == 1 {
            self.phase = Phase::LoadingInitial;
            vec![Effect::SetGlobalLoading(true), Effect::Fetch { tag }]
        } else {
            self.phase = Phase::LoadingMore;
            vec![Effect::Fetch { tag }]
        }
    }

    /// Settles the pending fetch. Callers must have checked [`Self::is_pending`].
    pub(crate) fn complete(
        &mut self,
        tag: RequestTag,
        result: Result<ListingPayload, String>,
    ) -> Vec<Effect> {
        self.pending = None;
        self.phase = Phase::Ready;
        self.dirty = true;

        let mut effects = Vec::with_capacity(2);
        if tag.page == 1 {
            effects.push(Effect::SetGlobalLoading(false));
        }
        match result {
            Ok(payload) => {
                if let Some(total) = payload.total_pages() {
                    self.total_pages = Some(total);
                }
                let existing = std::mem::take(&mut self.items);
                self.items = accumulate(existing, payload, tag.page);
            }
            Err(message) => effects.push(Effect::ShowError { message }),
        }
        effects
    }

    fn reset_list(&mut self, category_index: usize) {
        debug_assert!(category::resolve(category_index).is_some());
        self.selected_category = category_index;
        self.page = 1;
        self.items.clear();
        self.total_pages = None;
        self.pending = None;
        self.session += 1;
        self.dirty = true;
    }
}
