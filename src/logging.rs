use env_logger::Env;

/// Initializes the log facade, default level info unless RUST_LOG says
/// otherwise
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
