//! Testing infrastructure for spexplorer.
//!
//! - `entries`: builders for list entries and columns
//! - `sources`: scripted [`spexplorer_graph::MetadataSource`] stubs
//! - `world`: isolated data directory + fixture files for CLI tests

pub mod entries;
pub mod sources;
pub mod world;

pub use world::TestWorld;
