//! # Screens
//!
//! One module per screen. Every `render` takes the `App` so it can read
//! state for display and dispatch user actions after releasing the lock.

pub mod campaigns;
pub mod dashboard;
pub mod login;
pub mod payments;
pub mod prizes;
pub mod spins;
pub mod users;
pub mod wheel;
