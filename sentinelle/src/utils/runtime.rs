/// Global Tokio runtime for async HTTP operations
///
/// egui drives the UI with its own frame loop, but reqwest requires a tokio
/// runtime. This static runtime bridges the two: `main` enters it before
/// starting the frame loop so `tokio::spawn` works from UI handlers, and
/// spawned tasks report back over the app's event channel.
///
/// Usage:
/// ```rust,ignore
/// let _guard = crate::utils::runtime::TOKIO_RT.enter();
/// eframe::run_native(/* ... */)
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
