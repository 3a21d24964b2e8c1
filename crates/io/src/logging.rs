use std::io;

use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber.
///
/// Events go to stderr so stdout only ever carries program output. The filter
/// is read from `RUST_LOG` and defaults to `warn`.
pub fn install_tracing() {
	let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

	let fmt_layer = fmt::layer()
		.with_target(false)
		.with_writer(io::stderr)
		.with_filter(filter_layer);

	tracing_subscriber::registry()
		.with(fmt_layer)
		.with(ErrorLayer::default())
		.init();
}
