use crate::domain::model::{Language, Member};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub roster: RosterSection,
    pub source: SourceSection,
    pub report: ReportSection,
    #[serde(default)]
    pub members: Vec<Member>,
    /// Free-keyed numeric country codes; keys are not enumerated up front.
    #[serde(default)]
    pub country_codes: HashMap<String, u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSection {
    pub name: String,
    pub language: Language,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub endpoint: String,
    pub featured_post: u64,
    pub timeout_seconds: Option<u64>,
}

impl SourceSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(10))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSection {
    pub output_path: String,
    pub filename: Option<String>,
}

impl TomlConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("roster.name", &self.roster.name)?;
        validate_url("source.endpoint", &self.source.endpoint)?;
        validate_positive_number("source.featured_post", self.source.featured_post, 1)?;
        validate_non_empty_string("report.output_path", &self.report.output_path)?;
        if let Some(filename) = &self.report.filename {
            validate_non_empty_string("report.filename", filename)?;
        }
        for (country, code) in &self.country_codes {
            validate_non_empty_string("country_codes key", country)?;
            validate_range(country, *code, 1, 999)?;
        }
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn roster_name(&self) -> &str {
        &self.roster.name
    }

    fn language(&self) -> Language {
        self.roster.language
    }

    fn members(&self) -> &[Member] {
        &self.members
    }

    fn source_endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn featured_post(&self) -> u64 {
        self.source.featured_post
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn report_filename(&self) -> &str {
        self.report.filename.as_deref().unwrap_or("roster.csv")
    }
}
