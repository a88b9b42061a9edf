mod app_context;
mod config_warnings;
mod scan_source;

pub use app_context::AppContext;
pub use config_warnings::warn_unconfigured;
pub use scan_source::ScanSource;
