use pocket_shell::config::SessionConfig;
use pocket_shell::driver;

fn main() {
    init_logging();

    let config = SessionConfig::from_env();
    driver::run(&config);
}

/// Install a `tracing` subscriber filtered by `RUST_LOG`, defaulting to off.
/// Writes to stderr alongside the shell's own diagnostics.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
