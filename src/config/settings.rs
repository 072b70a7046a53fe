#[derive(Debug, Clone)]
pub struct SeasonSettings {
    /// Calendar month (1-12) in which a new season begins
    pub start_month: u32,
}

impl Default for SeasonSettings {
    fn default() -> Self {
        Self { start_month: 9 }
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub events_path_env: &'static str,
    pub default_events_path: &'static str,
    pub pretty_json: bool,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            events_path_env: "EVENTS_PATH",
            default_events_path: "events.json",
            pretty_json: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub season: SeasonSettings,
    pub report: ReportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            season: SeasonSettings::default(),
            report: ReportSettings::default(),
        }
    }

    /// Resolve the events file: explicit path first, then the environment
    pub fn events_path(&self, explicit: Option<&str>) -> String {
        explicit
            .map(str::to_string)
            .or_else(|| std::env::var(self.report.events_path_env).ok())
            .unwrap_or_else(|| self.report.default_events_path.to_string())
    }
}
