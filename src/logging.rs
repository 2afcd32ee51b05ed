use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the logging system with console output.
pub fn init_logging() {
    // Logs go to stderr so the rendered report stays clean on stdout
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("los_reporter=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
