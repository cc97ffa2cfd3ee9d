use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the stderr logger. `RUST_LOG` decides the level unless `debug`
/// forces it.
pub fn init(debug: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
