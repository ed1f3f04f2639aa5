//! # SENTINELLE Desktop Client - Library Root
//!
//! Native desktop client for the SENTINELLE community contribution platform:
//! campaign-based contribution tracking with a gamified fortune-wheel reward
//! mechanism, backed by a remote REST API.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              sentinelle (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI                    │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!                        │ HTTPS + bearer token
//!                        ▼
//!              ┌─────────────────────┐
//!              │  SENTINELLE backend │
//!              │  (REST API)         │
//!              └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: application state, route guard, events, handlers and tasks
//! - **core**: error taxonomy and the `ApiService` trait
//! - **services**: the HTTP transport with token refresh (`api`) and the
//!   persisted session store (`session`)
//! - **ui**: screens, widgets, theme, and the wheel painter
//! - **utils**: runtime bootstrap, validation, formatting
//!
//! ## Session layer
//!
//! The session store is the single source of truth for authentication
//! state. The transport attaches the current bearer token to every request;
//! a 401 triggers exactly one deduplicated token refresh and one retry, and
//! a rejected retry clears the session. The store persists one JSON
//! document used for optimistic rehydration at startup, revalidated in the
//! background.

pub mod app;
pub mod core;
pub mod services;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::app::{App, AppEvent, AppState, Screen};
pub use crate::core::{ApiError, ApiResult};
