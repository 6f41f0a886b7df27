//! Top-level detection pipeline: normalize → profile → route.

use crate::config::UNKNOWN;
use crate::normalize::normalize;
use crate::profile::find_runs;
use crate::repository::ModelRepository;
use crate::router::identify;

/// Language guesser over a loaded, read-only model repository.
///
/// Each [`guess`](Guesser::guess) call is pure with respect to its input and
/// allocates only call-scoped state, so a shared `Guesser` may serve
/// concurrent calls without coordination.
#[derive(Debug)]
pub struct Guesser {
    repository: ModelRepository,
}

impl Guesser {
    /// Wrap an explicitly constructed repository. The repository is loaded
    /// exactly once, before detection begins, and never mutated afterward.
    pub fn new(repository: ModelRepository) -> Self {
        Self { repository }
    }

    /// Guess the language of `text`.
    ///
    /// Returns a language code from the router's fixed tables, or the
    /// [`UNKNOWN`] sentinel (`"No match"`) when the sample is empty, too
    /// short, too sparse, or in no recognised script. Never errors.
    pub fn guess(&self, text: &str) -> String {
        if text.is_empty() {
            return UNKNOWN.to_string();
        }

        let normalized = normalize(text);
        let scripts = find_runs(&normalized);
        identify(&normalized, &scripts, &self.repository)
    }
}
