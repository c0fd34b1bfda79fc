//! Logger setup for the `log` facade.
//!
//! On wasm32 records go to the browser console through `console_log`.
//! Natively `env_logger` writes them to stderr, which is what tests and
//! headless hosts see.

use log::LevelFilter;

/// Install the platform logger at `level`.
///
/// Only the first call installs a logger; later calls just adjust the max
/// level. Returns whether this call installed it.
pub fn init(level: LevelFilter) -> bool {
    #[cfg(target_arch = "wasm32")]
    let installed = level
        .to_level()
        .is_some_and(|level| console_log::init_with_level(level).is_ok());

    #[cfg(not(target_arch = "wasm32"))]
    let installed = env_logger::Builder::new()
        .filter_level(level)
        .try_init()
        .is_ok();

    log::set_max_level(level);
    installed
}
