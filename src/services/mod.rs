//! Services for moviweb
//!
//! - omdb_client: HTTP client for the OMDb metadata provider
//! - normalizer: raw provider payload -> validated record (pure)
//! - enrichment: fetch -> normalize -> persist orchestration
//! - catalog: manual user/movie operations

pub mod catalog;
pub mod enrichment;
pub mod normalizer;
pub mod omdb_client;
