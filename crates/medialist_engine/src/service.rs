use medialist_core::{CatalogCategory, ListingPayload, MediaType, ReferenceEntry};

use crate::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogQuery {
    pub media_type: MediaType,
    pub category: CatalogCategory,
    pub page: u32,
}

/// Paginated catalog listing.
#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_list(&self, query: &CatalogQuery) -> Result<ListingPayload, FetchError>;
}

/// A user list (favorites, reviews). Always returned in full; there is no page parameter.
#[async_trait::async_trait]
pub trait ReferenceService: Send + Sync {
    async fn get_list(&self) -> Result<Vec<ReferenceEntry>, FetchError>;
}
