use std::io::Write;

/// Initialises `env_logger`: info by default, debug when verbose.
/// `RUST_LOG` still overrides the level.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}]: {}", record.level(), record.args()))
        .init();
}
