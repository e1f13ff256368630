#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Tell the shell which media type is active.
    SetAppState { media_type: crate::MediaType },
    ScrollToTop,
    /// Page-wide loading overlay; only page-1 requests drive it.
    SetGlobalLoading(bool),
    /// Run the fetch strategy for the category and page recorded in `tag`.
    Fetch { tag: crate::RequestTag },
    /// One-shot user-visible notification.
    ShowError { message: String },
}
