//! Labels GitHub pull-request titles with their linked YouTrack issue status.
//!
//! The engine extracts issue ids (`PROJECT-123`) from PR titles, resolves
//! their workflow state with one batched tracker query, and idempotently
//! maintains one colored label per title through the [`page::PageSurface`]
//! seam. The embedding host supplies the page, the notification surface, and
//! the navigation events; `runtime` wires those together.

pub mod config;
pub mod error;
pub mod issue;
pub mod notify;
pub mod page;
pub mod reconcile;
pub mod runtime;
pub mod tracker;
pub mod triggers;

pub use error::{Error, Result};
