use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".dayledger";
const TABLES_DIR: &str = "tables";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("dayledger=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.dayledger`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DAYLEDGER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the persisted day and transaction tables.
pub fn tables_dir() -> PathBuf {
    app_data_dir().join(TABLES_DIR)
}

/// Path to the JSON configuration file.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}

/// Creates `path` (and any missing parents).
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}
