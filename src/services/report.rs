use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::settings::AppConfig;
use crate::domain::{StatEvent, validate_events};
use crate::errors::{parse_context, read_context};
use crate::seasons::{SetFilter, filter_by_player, filter_by_set};
use crate::services::output;
use crate::stats::{MatchReport, match_report};

/// Which slice of the loaded events a report covers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportView {
    pub set: SetFilter,
    pub player: Option<String>,
}

impl ReportView {
    pub fn new(set: SetFilter, player: Option<&str>) -> Self {
        Self {
            set,
            player: player.map(str::to_string),
        }
    }

    /// Heading shown above a rendered report
    pub fn title(&self) -> String {
        match &self.player {
            Some(player) => format!("{} - {}", player, self.set),
            None => self.set.to_string(),
        }
    }
}

pub struct ReportService {
    config: AppConfig,
}

impl ReportService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, input: Option<&str>, view: &ReportView, as_json: bool) -> Result<()> {
        let path = self.config.events_path(input);
        info!("=== Building statistics report ===");
        info!("Events file: {}, view: {}", path, view.title());

        let events = self.load_events(&path)?;
        let report = self.build_report(&events, view);

        if as_json {
            println!("{}", self.to_json(&report)?);
        } else {
            print!("{}", output::render_report(&report, &view.title()));
        }

        info!("=== Report complete ===");
        Ok(())
    }

    pub fn load_events<P: AsRef<Path>>(&self, path: P) -> Result<Vec<StatEvent>> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).with_context(|| read_context(&path.display().to_string()))?;

        let events: Vec<StatEvent> =
            serde_json::from_str(&json).with_context(|| parse_context("stat events"))?;
        validate_events(&events).with_context(|| parse_context("stat events"))?;

        info!("  → Loaded {} events", events.len());
        Ok(events)
    }

    pub fn build_report(&self, events: &[StatEvent], view: &ReportView) -> MatchReport {
        let mut slice = filter_by_set(events, view.set);
        if let Some(player) = &view.player {
            slice = filter_by_player(&slice, player);
        }
        debug!("  → {} of {} events in view {}", slice.len(), events.len(), view.title());

        if slice.is_empty() {
            warn!("No events recorded for {}", view.title());
        }

        match_report(&slice)
    }

    pub fn to_json(&self, report: &MatchReport) -> Result<String> {
        let json = if self.config.report.pretty_json {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        json.context("Failed to serialize report")
    }
}
