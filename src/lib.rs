pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::{HttpPostSource, LocalReportStore, StubPostSource};
pub use crate::core::{engine::RosterEngine, list::OrderedList};
pub use domain::model::{Language, Member, Post};
pub use utils::error::{Result, RosterError};
