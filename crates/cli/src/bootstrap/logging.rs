use ferrous_dig_domain::Config;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout carries only the query output. `RUST_LOG`
/// wins over the configured level.
pub fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let mut filter = config.logging.level.clone();
        if !filter.contains("hickory_proto") {
            filter.push_str(",hickory_proto=off");
        }
        EnvFilter::new(filter)
    });

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
