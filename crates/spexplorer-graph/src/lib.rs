//! Metadata collaborator for spexplorer.
//!
//! A [`MetadataSource`] answers one question: "give me every configured list
//! with its columns, or a failure marker per list". Two implementations ship:
//! - [`GraphSource`]: Microsoft Graph over HTTPS
//! - [`FixtureSource`]: a JSON document in the collaborator's wire shape
//!
//! Wire payloads are decoded in [`wire`] into the tagged
//! [`spexplorer_types::ListMetadataEntry`] so callers never see loose JSON.

pub mod error;
pub mod fixture;
pub mod graph;
pub mod source;
pub mod wire;

pub use error::{Error, Result};
pub use fixture::FixtureSource;
pub use graph::{DEFAULT_GRAPH_BASE_URL, GraphSettings, GraphSource};
pub use source::MetadataSource;
