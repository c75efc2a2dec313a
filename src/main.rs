//! Template processor entry point.

use template_processor::{
    cli::{get_args, run},
    error::default_error_handler,
    logger::init_logger,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(summary) => {
            if !summary.skipped_rows.is_empty() {
                log::warn!("Skipped {} invalid row(s)", summary.skipped_rows.len());
            }
            println!("Generated {} file(s).", summary.written.len());
        }
        Err(err) => default_error_handler(err),
    }
}
