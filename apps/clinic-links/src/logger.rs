//! Logging setup for the CLI.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a compact stderr logger.  `RUST_LOG` overrides the defaults.
pub fn init(verbose: bool) {
    let default = if verbose {
        "clinic_links=debug,fl_data=debug,fl_link=debug,fl_output=debug"
    } else {
        "clinic_links=info,fl_data=info,fl_link=info,fl_output=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
