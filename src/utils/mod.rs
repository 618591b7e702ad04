use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".budget_predictor";
const PREDICTIONS_DIR: &str = "predictions";
const SETTINGS_FILE: &str = "settings.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("budget_predictor=info".parse().unwrap());

        // Logs go to stderr so command output (tables, JSON) stays pipeable.
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.budget_predictor`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BUDGET_PREDICTOR_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding stored prediction results, one JSON file per id.
pub fn predictions_dir() -> PathBuf {
    app_data_dir().join(PREDICTIONS_DIR)
}

/// Path to the settings file.
pub fn settings_file() -> PathBuf {
    app_data_dir().join(SETTINGS_FILE)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predictions_dir_is_under_app_dir() {
        assert!(predictions_dir().starts_with(app_data_dir()));
    }
}
