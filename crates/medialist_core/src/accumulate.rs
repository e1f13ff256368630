use crate::model::{ListingPayload, MediaItem};

/// Merges a fetched page into the visible list.
///
/// Page 1 replaces `existing`; later pages are appended as-is, duplicates included.
pub fn accumulate(
    mut existing: Vec<MediaItem>,
    incoming: ListingPayload,
    page: u32,
) -> Vec<MediaItem> {
    let incoming = incoming.into_items();
    if page <= 1 {
        return incoming;
    }
    existing.extend(incoming);
    existing
}
