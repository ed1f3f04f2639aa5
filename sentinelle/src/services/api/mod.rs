//! # Backend API Client Module
//!
//! HTTP client for the SENTINELLE backend REST API.
//! Handles authentication, token refresh, and every collection the client
//! consumes.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient struct, bearer attachment, 401 retry policy
//! ├── refresh.rs    - Single-flight token refresh coordinator
//! ├── auth.rs       - Login, logout, profile revalidation
//! ├── users.rs      - User management (admin)
//! ├── campaigns.rs  - Contribution campaigns
//! ├── prizes.rs     - Prize catalogue
//! ├── payments.rs   - Contribution payments
//! └── spins.rs      - Spins, balances, won prizes
//! ```

pub mod auth;
pub mod campaigns;
pub mod client;
pub mod payments;
pub mod prizes;
pub(crate) mod refresh;
pub mod spins;
pub mod users;

pub use client::ApiClient;
