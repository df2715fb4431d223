pub mod deferred;
pub mod engine;
pub mod list;
pub mod report;

pub use crate::domain::model::{Member, Post};
pub use crate::domain::ports::{ConfigProvider, PostSource, ReportStore};
pub use crate::utils::error::Result;
