use std::sync::Once;
use std::{env, fs, path::Path, path::PathBuf};

use dirs::home_dir;

use crate::errors::LedgerError;

const DEFAULT_DIR_NAME: &str = ".kas_masjid";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("kas_masjid=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Application data directory, defaulting to `~/.kas_masjid`.
/// `KAS_MASJID_HOME` overrides it, which the test suites rely on.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("KAS_MASJID_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn ensure_dir(path: &Path) -> Result<(), LedgerError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
