// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod store;
pub mod stub;

pub use http::HttpPostSource;
pub use store::LocalReportStore;
pub use stub::StubPostSource;
