//! Medialist core: category registry, listing merge rules and the pure view state machine.
mod accumulate;
mod category;
mod effect;
mod exclude;
mod model;
mod msg;
mod state;
mod update;
mod view_model;

pub use accumulate::accumulate;
pub use category::{
    category_at, category_views, resolve, CatalogCategory, Category, CategoryView,
    ReferenceSource, Strategy, CATEGORIES,
};
pub use effect::Effect;
pub use exclude::{exclude, exclude_payload, ReferenceSet};
pub use model::{
    ListingPage, ListingPayload, MediaId, MediaItem, MediaType, ReferenceEntry, UnknownMediaType,
};
pub use msg::Msg;
pub use state::{Phase, RequestTag, ViewState};
pub use update::update;
pub use view_model::MediaListView;
