//! # Async Tasks
//!
//! Background tasks spawned on the tokio runtime. Each task clones the API
//! handle out of the state under a short lock, performs its network call,
//! and reports back over the event channel.

pub(crate) mod lists;
pub(crate) mod manage;
pub(crate) mod session;
pub(crate) mod wheel;
