//! Configuration types for svcsheet.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults,
//! `./svcsheet.toml` (or an explicit file), then `SVCSHEET_*` environment
//! variables such as `SVCSHEET_NORMALIZE__ACTION_MODEL=free_form`.
//! [`Config::defaults`] returns the embedded defaults alone (useful in tests).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::normalizer::NormalizeOptions;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[input]
path  = "Services.xlsx"
sheet = ""

[output]
path = "data/services.json"

[normalize]
action_model        = "boolean_flags"
sale_price_fallback = "absent"
"#;

/// Looked up in the working directory when no `--config` is given.
pub const LOCAL_CONFIG_FILE: &str = "svcsheet.toml";

const ENV_PREFIX: &str = "SVCSHEET";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub normalize: NormalizeOptions,
}

/// `[input]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
    /// Worksheet to read; empty means the first sheet. Ignored for CSV.
    #[serde(default)]
    pub sheet: String,
}

fn default_input_path() -> PathBuf { PathBuf::from("Services.xlsx") }
fn default_output_path() -> PathBuf { PathBuf::from("data/services.json") }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            sheet: String::new(),
        }
    }
}

impl InputConfig {
    pub fn sheet_name(&self) -> Option<&str> {
        let sheet = self.sheet.trim();
        (!sheet.is_empty()).then_some(sheet)
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An `explicit` file must exist; the
    /// local `svcsheet.toml` is optional.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let file = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
