use crate::client::types::{CitationStyle, EssayHelpType, ParaphraseStyle};
use crate::client::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the analysis service
    pub server: String,

    pub timeout_secs: u64,

    pub paraphrase_style: ParaphraseStyle,

    pub citation_style: CitationStyle,

    pub essay_help: EssayHelpType,

    /// File name used when saving a PDF report
    pub report_name: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_report_name() -> String {
    "advanced_grammar_report.pdf".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: DEFAULT_BASE_URL.to_string(),
            timeout_secs: default_timeout_secs(),
            paraphrase_style: ParaphraseStyle::default(),
            citation_style: CitationStyle::default(),
            essay_help: EssayHelpType::default(),
            report_name: default_report_name(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(server: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(".gramchk.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        if let Some(server) = server {
            config.server = server;
        }

        if config.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }

        log::debug!("Using analysis service at {}", config.server);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Values in `other` that differ from the defaults win.
    fn merge(mut self, other: Self) -> Self {
        let defaults = Self::default();

        if other.server != defaults.server {
            self.server = other.server;
        }
        if other.timeout_secs != defaults.timeout_secs {
            self.timeout_secs = other.timeout_secs;
        }
        if other.paraphrase_style != defaults.paraphrase_style {
            self.paraphrase_style = other.paraphrase_style;
        }
        if other.citation_style != defaults.citation_style {
            self.citation_style = other.citation_style;
        }
        if other.essay_help != defaults.essay_help {
            self.essay_help = other.essay_help;
        }
        if other.report_name != defaults.report_name {
            self.report_name = other.report_name;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gramchk").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server, "https://grammarpro.onrender.com");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.citation_style, CitationStyle::Apa);
        assert_eq!(config.report_name, "advanced_grammar_report.pdf");
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            timeout_secs: 10,
            ..Default::default()
        };
        let override_config = Config {
            server: "http://localhost:5000".to_string(),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.server, "http://localhost:5000");
        assert_eq!(merged.timeout_secs, 10);
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server = \"http://127.0.0.1:8080\"").unwrap();
        writeln!(file, "citation_style = \"MLA\"").unwrap();
        writeln!(file, "essay_help = \"thesis\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.server, "http://127.0.0.1:8080");
        assert_eq!(config.citation_style, CitationStyle::Mla);
        assert_eq!(config.essay_help, EssayHelpType::Thesis);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_bad_file_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = \"soon\"").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
