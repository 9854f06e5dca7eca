//! log4rs setup.
//!
//! A `log4rs.yml` next to the binary wins. Without one the calculator
//! still runs, logging warnings to stderr only.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

const STDERR_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {M} - {m}{n}";

/// Console-only configuration used when no config file is present.
pub fn fallback_config() -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(STDERR_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .map_err(|e| format!("Error building fallback log config: {e}"))?;
    Ok(config)
}

/// Initialize log4rs from `path`, or from [`fallback_config`] if it does not exist.
pub fn init_logging(path: &Path) -> Result<(), Box<dyn Error>> {
    if path.exists() {
        log4rs::init_file(path, Default::default())
            .map_err(|e| format!("Error initializing log4rs from {}: {e}", path.display()))?;
    } else {
        log4rs::init_config(fallback_config()?)
            .map_err(|e| format!("Error initializing console logging: {e}"))?;
        log::debug!("No {} found, logging to stderr only", path.display());
    }
    Ok(())
}
