//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the desktop client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, logout, token refresh and error bodies
//! - [`user`] - User records and user management requests
//! - [`campaign`] - Contribution campaigns
//! - [`prize`] - Prize catalogue and won prizes
//! - [`payment`] - Contribution payments
//! - [`spin`] - Wheel spins, spin balances and outcomes
//! - [`page`] - Pagination envelopes shared by every collection endpoint
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! {
//!   "phone_number": "0712345678",
//!   "password": "secret123"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "u1",
//!     "phone_number": "0712345678",
//!     "first_name": "Awa",
//!     "last_name": "Diop",
//!     "role": "member",
//!     "balance": 0.0,
//!     "is_active": true,
//!     "created_at": "2026-01-01T00:00:00Z",
//!     "updated_at": "2026-01-01T00:00:00Z"
//!   }
//! }
//! ```

pub mod auth;
pub mod campaign;
pub mod page;
pub mod payment;
pub mod prize;
pub mod spin;
pub mod user;

pub use auth::*;
pub use campaign::*;
pub use page::*;
pub use payment::*;
pub use prize::*;
pub use spin::*;
pub use user::*;
