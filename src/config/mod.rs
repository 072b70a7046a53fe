pub mod settings;

pub use settings::{AppConfig, ReportSettings, SeasonSettings};
