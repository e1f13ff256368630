use crate::{CategoryView, MediaItem, MediaType};

/// Everything the renderer needs for one frame of the listing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MediaListView {
    pub media_type: Option<MediaType>,
    pub heading: Option<&'static str>,
    pub items: Vec<MediaItem>,
    pub is_loading_initial: bool,
    pub is_loading_more: bool,
    pub categories: Vec<CategoryView>,
    pub selected_category: usize,
    pub page: u32,
    pub total_pages: Option<u32>,
    /// False once upstream reported the current page as the last one.
    pub has_more: bool,
}
