use crate::domain::model::{Language, Member};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_language_code, validate_non_empty_string, validate_positive_number, validate_url,
    Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "roster")]
#[command(about = "A small typed membership-roster tool")]
pub struct CliConfig {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com/posts")]
    pub source_endpoint: String,

    #[arg(long, default_value = "1")]
    pub featured_post: u64,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "roster.csv")]
    pub report_filename: String,

    #[arg(long, default_value = "ko")]
    pub language: String,

    #[arg(long, default_value = "roster")]
    pub roster_name: String,

    #[arg(long, help = "Path to a TOML roster file; overrides the flags above")]
    pub config: Option<String>,

    #[arg(long, help = "Use the canned offline post source")]
    pub offline: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source_endpoint", &self.source_endpoint)?;
        validate_positive_number("featured_post", self.featured_post, 1)?;
        validate_non_empty_string("output_path", &self.output_path)?;
        validate_non_empty_string("report_filename", &self.report_filename)?;
        validate_language_code("language", &self.language)?;
        validate_non_empty_string("roster_name", &self.roster_name)?;
        Language::from_code(&self.language)?;
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn roster_name(&self) -> &str {
        &self.roster_name
    }

    fn language(&self) -> Language {
        // validate() has already checked the code; fall back rather than panic.
        Language::from_code(&self.language).unwrap_or(Language::Korean)
    }

    fn members(&self) -> &[Member] {
        // The CLI never carries members; the engine seeds its sample roster.
        &[]
    }

    fn source_endpoint(&self) -> &str {
        &self.source_endpoint
    }

    fn featured_post(&self) -> u64 {
        self.featured_post
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn report_filename(&self) -> &str {
        &self.report_filename
    }
}
