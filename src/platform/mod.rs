//! Platform abstraction layer
//!
//! Logging and panic reporting differ between browser and native hosts;
//! everything else the core needs arrives through its event surfaces.

/// Initialize logging for the current platform
///
/// Safe to call more than once; later calls are ignored.
#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Initialize logging for the current platform
///
/// Reads the usual `RUST_LOG` filter, defaulting to `info`. Safe to call
/// more than once; later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
