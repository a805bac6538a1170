use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they do not interleave with the board on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = grid_sim::app::run() {
        tracing::error!(error = %e, "simulation stopped");
        std::process::exit(1);
    }
}
