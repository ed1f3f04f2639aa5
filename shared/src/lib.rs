//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the SENTINELLE desktop client and
//! the backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication requests, tokens and error bodies
//!   - **[`dto::user`]**: User identity and profile records
//!   - **[`dto::campaign`]**: Contribution campaigns
//!   - **[`dto::prize`]**: Prize catalogue and won prizes
//!   - **[`dto::payment`]**: Contribution payments
//!   - **[`dto::spin`]**: Wheel spins, balances and outcomes
//!   - **[`dto::page`]**: Pagination envelopes and list queries
//! - **[`utils`]**: Shared display helpers (phone masking, amount formatting)
//!
//! ## Wire Format
//!
//! - Field names use **snake_case** in Rust, which maps to snake_case in JSON,
//!   except where the backend dictates otherwise (`totalPages` is renamed).
//! - Optional fields are omitted from JSON when `None`.
//! - Enums serialize to lowercase strings via `#[serde(rename_all = "lowercase")]`.
//! - Timestamps are RFC 3339 strings handled by `chrono` with the `serde` feature.

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
