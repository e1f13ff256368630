use std::sync::{Arc, Mutex};

use futures_util::future::join;
use medialist_core::{
    exclude_payload, resolve, CatalogCategory, ListingPayload, ReferenceSet, ReferenceSource,
    RequestTag, Strategy,
};
use medialist_logging::{medialist_debug, medialist_warn};

use crate::http::{HttpCatalogService, HttpClient, HttpReferenceService, ServiceSettings};
use crate::service::{CatalogQuery, CatalogService, ReferenceService};
use crate::{FetchError, ListingError, ServiceKind};

/// Reference set built for one category session.
#[derive(Debug, Clone)]
struct CachedReference {
    source: ReferenceSource,
    session: u64,
    set: Arc<ReferenceSet>,
}

/// Runs the fetch strategy of a category and returns one normalized page.
pub struct FetchOrchestrator {
    catalog: Arc<dyn CatalogService>,
    favorites: Arc<dyn ReferenceService>,
    reviews: Arc<dyn ReferenceService>,
    cache_reference_sets: bool,
    cached: Mutex<Option<CachedReference>>,
}

impl FetchOrchestrator {
    pub fn new(
        catalog: Arc<dyn CatalogService>,
        favorites: Arc<dyn ReferenceService>,
        reviews: Arc<dyn ReferenceService>,
    ) -> Self {
        Self {
            catalog,
            favorites,
            reviews,
            cache_reference_sets: false,
            cached: Mutex::new(None),
        }
    }

    /// Wires the HTTP services described by `settings` over one shared client.
    pub fn over_http(settings: &ServiceSettings) -> Result<Self, FetchError> {
        let http = HttpClient::new(settings)?;
        let catalog = HttpCatalogService::with_client(http.clone());
        let favorites = HttpReferenceService::with_client(
            http.clone(),
            settings.favorites_path.clone(),
            ServiceKind::Favorites,
        );
        let reviews = HttpReferenceService::with_client(
            http,
            settings.reviews_path.clone(),
            ServiceKind::Reviews,
        );
        Ok(Self::new(Arc::new(catalog), Arc::new(favorites), Arc::new(reviews))
            .with_reference_cache(settings.cache_reference_sets))
    }

    /// When enabled, pages after the first reuse the reference set of their session.
    pub fn with_reference_cache(mut self, enabled: bool) -> Self {
        self.cache_reference_sets = enabled;
        self
    }

    pub async fn fetch_page(&self, tag: &RequestTag) -> Result<ListingPayload, ListingError> {
        let strategy =
            resolve(tag.category_index).ok_or(ListingError::UnknownCategory(tag.category_index))?;
        medialist_debug!(
            "fetch generation={} {} category={} page={} strategy={:?}",
            tag.generation,
            tag.media_type,
            tag.category_index,
            tag.page,
            strategy
        );

        match strategy {
            Strategy::Direct(category) => self
                .catalog
                .get_list(&self.query(tag, category))
                .await
                .map_err(|error| ListingError::Network {
                    service: ServiceKind::Catalog,
                    error,
                }),
            Strategy::ExcludeAgainst { base, reference } => {
                let query = self.query(tag, base);
                let (primary, reference_set) = join(
                    self.catalog.get_list(&query),
                    self.reference_set(reference, tag),
                )
                .await;
                let (payload, reference_set) =
                    combine(primary, reference_set, reference_service_kind(reference))?;
                let before = payload.items().len();
                let filtered = exclude_payload(payload, &reference_set);
                medialist_debug!(
                    "excluded {} of {} items against {} {}",
                    before - filtered.items().len(),
                    before,
                    reference_set.len(),
                    reference.as_str()
                );
                Ok(filtered)
            }
        }
    }

    fn query(&self, tag: &RequestTag, category: CatalogCategory) -> CatalogQuery {
        CatalogQuery {
            media_type: tag.media_type,
            category,
            page: tag.page,
        }
    }

    async fn reference_set(
        &self,
        source: ReferenceSource,
        tag: &RequestTag,
    ) -> Result<Arc<ReferenceSet>, FetchError> {
        if let Some(set) = self.cached_set(source, tag.session) {
            medialist_debug!(
                "reusing {} set for session {}",
                source.as_str(),
                tag.session
            );
            return Ok(set);
        }

        let service = match source {
            ReferenceSource::Favorites => &self.favorites,
            ReferenceSource::Reviews => &self.reviews,
        };
        let entries = service.get_list().await?;
        let set = Arc::new(ReferenceSet::from_entries(&entries));

        if self.cache_reference_sets {
            if let Ok(mut cached) = self.cached.lock() {
                *cached = Some(CachedReference {
                    source,
                    session: tag.session,
                    set: set.clone(),
                });
            }
        }
        Ok(set)
    }

    fn cached_set(&self, source: ReferenceSource, session: u64) -> Option<Arc<ReferenceSet>> {
        if !self.cache_reference_sets {
            return None;
        }
        let cached = self.cached.lock().ok()?;
        cached
            .as_ref()
            .filter(|entry| entry.source == source && entry.session == session)
            .map(|entry| entry.set.clone())
    }
}

/// Both halves must succeed; the catalog error wins when both fail.
fn combine(
    primary: Result<ListingPayload, FetchError>,
    reference: Result<Arc<ReferenceSet>, FetchError>,
    reference_kind: ServiceKind,
) -> Result<(ListingPayload, Arc<ReferenceSet>), ListingError> {
    match (primary, reference) {
        (Ok(payload), Ok(set)) => Ok((payload, set)),
        (Err(error), Ok(_)) => Err(ListingError::PartialFetch {
            failed: ServiceKind::Catalog,
            succeeded: reference_kind,
            error,
        }),
        (Ok(_), Err(error)) => Err(ListingError::PartialFetch {
            failed: reference_kind,
            succeeded: ServiceKind::Catalog,
            error,
        }),
        (Err(error), Err(reference_error)) => {
            medialist_warn!(
                "{} request also failed: {}",
                reference_kind,
                reference_error
            );
            Err(ListingError::Network {
                service: ServiceKind::Catalog,
                error,
            })
        }
    }
}

fn reference_service_kind(source: ReferenceSource) -> ServiceKind {
    match source {
        ReferenceSource::Favorites => ServiceKind::Favorites,
        ReferenceSource::Reviews => ServiceKind::Reviews,
    }
}
