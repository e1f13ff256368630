//! Medialist engine: service clients, fetch orchestration and effect execution.
mod engine;
mod http;
mod orchestrator;
mod service;
mod types;

pub use engine::EngineHandle;
pub use http::ServiceSettings;
pub use orchestrator::FetchOrchestrator;
pub use service::{CatalogQuery, CatalogService, ReferenceService};
pub use types::{EngineError, EngineEvent, FailureKind, FetchError, ListingError, ServiceKind};
