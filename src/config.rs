use std::path::{Path, PathBuf};

use ::config::{Config, Environment};
use serde::Deserialize;
use tracing::debug;

const DOCS_DIR: &str = "docs";
const OUTPUT_FILE: &str = "site/faq.json";

/// Where to read documents from and where to write the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub docs_dir: PathBuf,
    pub output_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            docs_dir: PathBuf::from(DOCS_DIR),
            output_file: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl Settings {
    /// Defaults, then `FAQ_DOCS_DIR` / `FAQ_OUTPUT_FILE`.
    /// A broken environment falls back to the defaults.
    pub fn from_env() -> Self {
        let built = Config::builder()
            .set_default("docs_dir", DOCS_DIR)
            .and_then(|b| b.set_default("output_file", OUTPUT_FILE))
            .map(|b| b.add_source(Environment::with_prefix("FAQ")))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<Settings>());

        match built {
            Ok(settings) => settings,
            Err(e) => {
                debug!(error = %e, "ignoring FAQ_* environment, using defaults");
                Settings::default()
            }
        }
    }

    /// Command-line values win over whatever was loaded.
    pub fn with_overrides(mut self, docs_dir: Option<&Path>, output_file: Option<&Path>) -> Self {
        if let Some(dir) = docs_dir {
            self.docs_dir = dir.to_path_buf();
        }
        if let Some(out) = output_file {
            self.output_file = out.to_path_buf();
        }
        self
    }
}
