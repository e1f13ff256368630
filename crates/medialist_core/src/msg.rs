#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The route mounted the view or switched to another media type.
    RouteChanged(crate::MediaType),
    /// User clicked a category button.
    CategorySelected(usize),
    /// User clicked "load more".
    LoadMoreClicked,
    /// Engine finished the fetch issued under `tag`.
    PageLoaded {
        tag: crate::RequestTag,
        result: Result<crate::ListingPayload, String>,
    },
}
