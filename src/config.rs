use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field has a built-in default that reproduces the stock scan
/// (Frankenstein, `for … years`, 1..=12 inner words), so the tool runs
/// without any config file at all. A TOML file passed via `--config`
/// may override any subset of fields.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// URL of the text to download.
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_url() -> String {
    // Frankenstein; or, The Modern Prometheus
    "https://www.gutenberg.org/cache/epub/84/pg84.txt".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScanConfig {
    /// Opening anchor word of the phrase window.
    #[serde(default = "default_first_word")]
    pub first_word: String,
    /// Closing anchor word of the phrase window.
    #[serde(default = "default_last_word")]
    pub last_word: String,
    /// Fewest inner words a match may carry.
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    /// Most inner words a match may carry.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
    /// Characters of surrounding text kept on each side of a match.
    #[serde(default = "default_context_chars")]
    pub context_chars: usize,
    /// Strip the distributor's header/footer before scanning.
    #[serde(default = "default_trim_boilerplate")]
    pub trim_boilerplate: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            first_word: default_first_word(),
            last_word: default_last_word(),
            min_words: default_min_words(),
            max_words: default_max_words(),
            context_chars: default_context_chars(),
            trim_boilerplate: default_trim_boilerplate(),
        }
    }
}

fn default_first_word() -> String {
    "for".to_string()
}
fn default_last_word() -> String {
    "years".to_string()
}
fn default_min_words() -> usize {
    1
}
fn default_max_words() -> usize {
    12
}
fn default_context_chars() -> usize {
    80
}
fn default_trim_boilerplate() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    /// Directory the report files are written into (created if absent).
    #[serde(default = "default_out_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_csv_file")]
    pub csv_file: String,
    #[serde(default = "default_preview_file")]
    pub preview_file: String,
    /// Number of matches shown in the markdown preview.
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_out_dir(),
            csv_file: default_csv_file(),
            preview_file: default_preview_file(),
            preview_limit: default_preview_limit(),
        }
    }
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("outputs")
}
fn default_csv_file() -> String {
    "for_years.csv".to_string()
}
fn default_preview_file() -> String {
    "preview.md".to_string()
}
fn default_preview_limit() -> usize {
    20
}

impl OutputConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }

    pub fn preview_path(&self) -> PathBuf {
        self.dir.join(&self.preview_file)
    }
}

impl Config {
    /// Reject configurations the scanner cannot honor. Called by
    /// [`load_config`] and again after CLI overrides are applied.
    pub fn validate(&self) -> Result<()> {
        if self.scan.min_words < 1 {
            anyhow::bail!("scan.min_words must be >= 1");
        }
        if self.scan.max_words < self.scan.min_words {
            anyhow::bail!("scan.max_words must be >= scan.min_words");
        }
        if self.scan.first_word.trim().is_empty() || self.scan.last_word.trim().is_empty() {
            anyhow::bail!("scan.first_word and scan.last_word must be non-empty");
        }
        if self.source.url.is_empty() {
            anyhow::bail!("source.url must be non-empty");
        }
        if self.source.timeout_secs == 0 {
            anyhow::bail!("source.timeout_secs must be > 0");
        }
        if self.output.csv_file.is_empty() || self.output.preview_file.is_empty() {
            anyhow::bail!("output.csv_file and output.preview_file must be non-empty");
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    config.validate()?;

    Ok(config)
}
