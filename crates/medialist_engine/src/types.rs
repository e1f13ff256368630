use std::fmt;

use medialist_core::{ListingPayload, RequestTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Catalog,
    Favorites,
    Reviews,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Catalog => write!(f, "catalog"),
            ServiceKind::Favorites => write!(f, "favorites"),
            ServiceKind::Reviews => write!(f, "reviews"),
        }
    }
}

/// Failure of a single service call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Decode => write!(f, "undecodable response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure of a whole page fetch. Never accompanied by a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingError {
    #[error("{service} request failed: {error}")]
    Network {
        service: ServiceKind,
        error: FetchError,
    },
    #[error("{failed} request failed while {succeeded} succeeded: {error}")]
    PartialFetch {
        failed: ServiceKind,
        succeeded: ServiceKind,
        error: FetchError,
    },
    #[error("no category registered at index {0}")]
    UnknownCategory(usize),
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    PageFetched {
        tag: RequestTag,
        result: Result<ListingPayload, ListingError>,
    },
}
