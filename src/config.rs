//! Configuration loading from environment variables via dotenvy, plus the
//! fixed detection thresholds.

use std::path::PathBuf;

use crate::error::GuessLangError;

/// Runtime configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding per-language trigram model files — sourced from
    /// `GUESSLANG_MODEL_DIR`. Each file is named by its lower-cased language
    /// code and contains `<trigram> <rank>` lines.
    pub model_dir: PathBuf,
}

/// Load configuration purely from already-set environment variables.
///
/// Does **not** call `dotenvy::dotenv()` — useful in tests that need to
/// control the env precisely via [`std::env::set_var`] / [`std::env::remove_var`].
///
/// # Errors
/// Returns [`GuessLangError::Config`] if `GUESSLANG_MODEL_DIR` is set but empty.
pub fn load_config_from_env() -> Result<Config, GuessLangError> {
    let model_dir = match std::env::var("GUESSLANG_MODEL_DIR") {
        Ok(dir) if dir.is_empty() => {
            return Err(GuessLangError::Config(
                "GUESSLANG_MODEL_DIR is empty".to_string(),
            ));
        }
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("./trigrams"),
    };

    Ok(Config { model_dir })
}

/// Load configuration from the environment (`.env` + system env vars).
///
/// Loads `.env` via `dotenvy` first (ignoring the error if the file is
/// absent), then delegates to [`load_config_from_env`].
///
/// # Errors
/// Returns [`GuessLangError::Config`] if a variable is set but invalid.
pub fn load_config() -> Result<Config, GuessLangError> {
    // Load .env if present; ignore the error — variables may already be set externally.
    let _ = dotenvy::dotenv();
    load_config_from_env()
}

// ── Detection thresholds ───────────────────────────────────────────────────

/// Minimum normalized sample length (chars, spaces included) for trigram
/// comparison. Below this the scorer returns no match.
pub const MIN_LENGTH: usize = 20;

/// Number of leading sample trigrams examined by the distance metric, and the
/// penalty added for a trigram absent from the reference model.
pub const MAX_GRAMS: usize = 300;

/// A block whose alphabetic share reaches this percentage is a relevant run.
pub const RELEVANT_RUN_PCT: usize = 40;

/// Lower relevance bar for Basic Latin — Latin letters commonly co-occur with
/// diacritics counted under Extended Latin.
pub const BASIC_LATIN_PCT: usize = 15;

/// Sentinel returned when no language can be determined.
pub const UNKNOWN: &str = "No match";
