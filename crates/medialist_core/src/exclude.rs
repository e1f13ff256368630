use std::collections::HashSet;

use crate::model::{ListingPage, ListingPayload, MediaItem, ReferenceEntry};

/// Correlation keys taken from a user list. Never rendered or paginated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReferenceSet {
    keys: HashSet<String>,
}

impl ReferenceSet {
    /// Entries without a `mediaTitle` contribute nothing.
    pub fn from_entries(entries: &[ReferenceEntry]) -> Self {
        entries
            .iter()
            .filter_map(|entry| entry.media_title.clone())
            .collect()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<String> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Keeps the items of `primary` whose correlation key is not in `reference`, in order.
///
/// Items without a key cannot match and are always kept.
pub fn exclude(primary: Vec<MediaItem>, reference: &ReferenceSet) -> Vec<MediaItem> {
    if reference.is_empty() {
        return primary;
    }
    primary
        .into_iter()
        .filter(|item| {
            item.correlation_key()
                .map_or(true, |key| !reference.contains(key))
        })
        .collect()
}

/// Applies [`exclude`] inside either payload shape, keeping page metadata.
pub fn exclude_payload(payload: ListingPayload, reference: &ReferenceSet) -> ListingPayload {
    match payload {
        ListingPayload::Page(page) => ListingPayload::Page(ListingPage {
            results: exclude(page.results, reference),
            ..page
        }),
        ListingPayload::Items(items) => ListingPayload::Items(exclude(items, reference)),
    }
}
