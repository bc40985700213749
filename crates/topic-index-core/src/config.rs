//! Layered configuration.
//!
//! Sources are merged with figment, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. the user file, `config.<ext>` in the platform config directory
//!    (`~/.config/topic-index/` on Linux)
//! 3. the project files: the nearest directory at or above the search root
//!    holding `.topic-index.<ext>` or `topic-index.<ext>`; the walk stops at
//!    the directory containing `.git`
//! 4. explicit files, in the order they were added
//! 5. `TOPIC_INDEX_*` environment variables
//!
//! `<ext>` is `toml`, `yaml`, `yml` or `json`. Several files in one project
//! directory are all merged, dotfiles first, then by extension in that order.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use topic_index_core::config::ConfigLoader;
//!
//! let (config, sources) = ConfigLoader::new()
//!     .with_project_search(Utf8Path::new("."))
//!     .load()?;
//! println!("{:?} from {:?}", config.other_words, sources.primary_file());
//! # Ok::<(), topic_index_core::ConfigError>(())
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::pipeline::AnalysisOptions;
use crate::select::DEFAULT_OTHER_WORDS;
use crate::stop_words::StopWords;

const APP_NAME: &str = "topic-index";
const ENV_PREFIX: &str = "TOPIC_INDEX_";
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];
const PROJECT_ROOT_MARKER: &str = ".git";

/// Settings that shape an analysis run and its logging.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Level used when neither `RUST_LOG` nor a CLI flag picks one.
    pub log_level: LogLevel,
    /// Directory for the JSONL log file. No file logging when unset.
    pub log_dir: Option<Utf8PathBuf>,
    /// Words excluded from the other-word ranking on top of the built-in list.
    pub stop_words: Vec<String>,
    /// How many other words to report; 4 when unset.
    pub other_words: Option<usize>,
    /// Optional cap on input size in bytes. Input is unbounded when unset.
    pub max_input_bytes: Option<usize>,
    /// Ignore `max_input_bytes`, e.g. to lift a cap set by a user-level file.
    pub disable_input_limit: bool,
}

impl Config {
    /// The input cap in effect, if any.
    pub fn input_limit(&self) -> Option<usize> {
        self.max_input_bytes.filter(|_| !self.disable_input_limit)
    }

    /// Analysis options for this configuration.
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            stop_words: StopWords::new(&self.stop_words),
            other_words: self.other_words.unwrap_or(DEFAULT_OTHER_WORDS),
            max_input_bytes: self.input_limit(),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum LogLevel {
    /// Everything, including per-run details.
    Debug,
    /// Progress messages.
    Info,
    /// Only problems (default).
    #[default]
    Warn,
    /// Only failures.
    Error,
}

impl LogLevel {
    /// The level as a tracing filter directive.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// The files a [`ConfigLoader`] actually merged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project files, lowest precedence first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// The user-level file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Files passed explicitly, e.g. with `--config`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// The file whose values win, if any file was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .or(self.project_files.last())
            .map(Utf8PathBuf::as_path)
            .or(self.user_file.as_deref())
    }
}

/// Builder that discovers and merges configuration sources.
#[derive(Debug)]
pub struct ConfigLoader {
    search_root: Option<Utf8PathBuf>,
    user_config: bool,
    stop_at_project_root: bool,
    explicit_files: Vec<Utf8PathBuf>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// A loader that reads the user file and stops project search at `.git`.
    pub const fn new() -> Self {
        Self {
            search_root: None,
            user_config: true,
            stop_at_project_root: true,
            explicit_files: Vec::new(),
        }
    }

    /// Search for project files starting at `dir` and walking up.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, dir: P) -> Self {
        self.search_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Include or skip the user-level file.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.user_config = include;
        self
    }

    /// Keep walking past `.git` directories up to the filesystem root.
    pub const fn without_boundary_marker(mut self) -> Self {
        self.stop_at_project_root = false;
        self
    }

    /// Merge `path` after every discovered file.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Merge every source and extract the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deserialize`] when a file cannot be parsed or a
    /// value has the wrong type.
    #[tracing::instrument(skip(self), fields(search_root = ?self.search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        let sources = ConfigSources {
            user_file: self.user_config.then(find_user_config).flatten(),
            project_files: self
                .search_root
                .as_deref()
                .map(|root| self.find_project_configs(root))
                .unwrap_or_default(),
            explicit_files: self.explicit_files,
        };

        let files = sources
            .user_file
            .iter()
            .chain(&sources.project_files)
            .chain(&sources.explicit_files);
        let figment = files.fold(
            Figment::from(Serialized::defaults(Config::default())),
            |figment, file| merge_file(figment, file),
        );
        // TOPIC_INDEX_OTHER_WORDS=6, TOPIC_INDEX_LOG_LEVEL=debug, ...
        let figment = figment.merge(Env::prefixed(ENV_PREFIX));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::debug!(
            log_level = config.log_level.as_str(),
            config_file = ?sources.primary_file(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Config files in the nearest directory at or above `start` that has any.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        for dir in start.ancestors() {
            let found: Vec<_> = [".", ""]
                .into_iter()
                .flat_map(|dot| EXTENSIONS.map(|ext| dir.join(format!("{dot}{APP_NAME}.{ext}"))))
                .filter(|path| path.is_file())
                .collect();
            if !found.is_empty() {
                return found;
            }
            if self.stop_at_project_root && dir.join(PROJECT_ROOT_MARKER).exists() {
                break;
            }
        }
        Vec::new()
    }
}

fn find_user_config() -> Option<Utf8PathBuf> {
    let dir = user_config_dir()?;
    EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("config.{ext}")))
        .find(|path| path.is_file())
}

fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
    match path.extension() {
        Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path)),
        Some("json") => figment.merge(Json::file_exact(path)),
        _ => figment.merge(Toml::file_exact(path)),
    }
}

/// The platform config directory for topic-index, if a home directory exists.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(dirs.config_dir().to_path_buf()).ok()
}
