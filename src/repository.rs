//! Read-only repository of per-language reference trigram models.
//!
//! Built once at startup and never mutated afterward: the struct is plain
//! owned data, so a loaded repository is `Send + Sync` and may be shared
//! behind an `Arc` (or a `OnceLock` for lazy one-time init) across concurrent
//! detection calls without locking. Construct it explicitly and hand it to
//! [`crate::guesser::Guesser`] — there is no module-level singleton, which
//! keeps tests free to supply small synthetic models.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::GuessLangError;
use crate::model;

/// Per-language reference models: lower-cased language code → trigram → rank.
#[derive(Debug, Default)]
pub struct ModelRepository {
    models: HashMap<String, HashMap<String, usize>>,
}

impl ModelRepository {
    /// Empty repository. Detection still works for script-determined
    /// languages; every trigram delegation will return no match.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every model file in `dir`.
    ///
    /// Each file is named by its lower-cased language code; each line carries
    /// a 3-character trigram, whitespace, and the trigram's integer rank.
    /// Malformed lines are skipped (best-effort loading); an unreadable
    /// directory or file is fatal, since detection cannot proceed without the
    /// models the router delegates to.
    ///
    /// # Errors
    /// Returns [`GuessLangError::ModelLoad`] if the directory cannot be read,
    /// or [`GuessLangError::Io`] if a file within it cannot.
    pub fn load_dir(dir: &Path) -> Result<Self, GuessLangError> {
        let mut models = HashMap::new();

        let entries = std::fs::read_dir(dir).map_err(|e| {
            GuessLangError::ModelLoad(format!(
                "cannot read model directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(code) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            let contents = std::fs::read_to_string(&path)?;
            let model = parse_model(code, &contents);
            models.insert(code.to_lowercase(), model);
        }

        info!(count = models.len(), dir = %dir.display(), "loaded trigram models");
        Ok(Self { models })
    }

    /// Insert a reference model from an already-ordered trigram sequence,
    /// assigning ranks by position. Intended for synthetic models in tests.
    pub fn insert_ranked(&mut self, code: &str, ordered: &[String]) {
        self.models.insert(code.to_lowercase(), model::rank_map(ordered));
    }

    /// Look up a language's reference model. Lookup is case-insensitive.
    pub fn get(&self, code: &str) -> Option<&HashMap<String, usize>> {
        self.models.get(&code.to_lowercase())
    }

    /// Number of loaded models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no models are loaded.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Parse one model file: `<3-char trigram><whitespace><rank>` per line.
fn parse_model(code: &str, contents: &str) -> HashMap<String, usize> {
    let mut model = HashMap::new();

    for line in contents.lines() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() < 4 {
            debug!(code, line, "skipping short model line");
            continue;
        }
        let trigram: String = chars[..3].iter().collect();
        let rest: String = chars[3..].iter().collect();
        if !rest.starts_with(|c: char| c.is_whitespace()) {
            debug!(code, line, "skipping malformed model line");
            continue;
        }
        match rest.trim().parse::<usize>() {
            Ok(rank) => {
                model.insert(trigram, rank);
            }
            Err(_) => debug!(code, line, "skipping model line with bad rank"),
        }
    }

    model
}
