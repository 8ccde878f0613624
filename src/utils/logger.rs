use env_logger::{Builder, Env};
use log::SetLoggerError;

use crate::constants::DEFAULT_LOG_FILTER;

fn builder() -> Builder {
	let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));
	builder.format_timestamp_millis().format_module_path(true);
	builder
}

/// Installs the global logger. Panics if one is already set.
pub fn init() {
	builder().init();
}

/// Like [`init`], but leaves an already installed logger in place.
pub fn try_init() -> Result<(), SetLoggerError> {
	builder().try_init()
}
