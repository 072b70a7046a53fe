use colored::Colorize;

use crate::domain::{ActionCode, is_error_code, is_point_code, label_for};
use crate::seasons::Season;
use crate::stats::{ChartBucket, MatchReport};

/// Terminal text built line by line
#[derive(Default)]
struct Lines(Vec<String>);

impl Lines {
    fn push(&mut self, line: String) {
        self.0.push(line);
    }

    fn section(&mut self, title: &str) {
        self.0.push(String::new());
        self.0.push(title.cyan().bold().to_string());
    }

    fn buckets(&mut self, data: &[ChartBucket]) {
        for bucket in data {
            self.push(format!("  {:<24} {}", bucket.label, bucket.quantity));
        }
    }

    fn finish(self) -> String {
        self.0.into_iter().map(|line| line + "\n").collect()
    }
}

pub fn render_report(report: &MatchReport, title: &str) -> String {
    let mut out = Lines::default();

    out.push(format!("{} ({} events)", format!("Statystyki - {}", title).bold(), report.event_count));

    let summary = &report.summary;
    out.section("Podsumowanie");
    out.push(format!(
        "  Punkty: {}  Błędy: {}",
        summary.points.to_string().green(),
        summary.errors.to_string().red()
    ));
    out.push(format!("  Bloki: {}  Obrony: {}  Asy: {}", summary.blocks, summary.digs, summary.aces));

    out.section("Punktujący");
    if report.scorers.chart_data.is_empty() {
        out.push("  Brak danych.".to_string());
    }
    for scorer in &report.scorers.chart_data {
        let label = report
            .scorers
            .legend
            .get(&scorer.player)
            .map(|entry| entry.label.as_str())
            .unwrap_or(scorer.player.as_str());
        out.push(format!("  {:<20} {}", label, scorer.points));
    }

    out.section("Dystrybucja rozegrania");
    out.push(format!("  Ataki łącznie: {}", report.set_distribution.total_attacks));
    for share in &report.set_distribution.by_position {
        out.push(format!("  {:<20} {}%", share.position, share.distribution_percentage));
    }
    for share in &report.set_distribution.by_player {
        out.push(format!("  {:<20} {}% ({} pkt)", share.name, share.distribution_percentage, share.points));
    }

    out.section("Atak");
    out.buckets(&report.attack.chart_data);
    out.push(format!(
        "  Skuteczność: {}%  Efektywność: {}%",
        report.attack.percentage, report.attack.efficiency
    ));

    out.section("Przyjęcie");
    out.buckets(&report.reception.chart_data);
    out.push(format!(
        "  Perfekcyjne: {}%  Pozytywne: {}%",
        report.reception.perfect_percentage, report.reception.positive_percentage
    ));

    out.section("Zagrywka");
    out.buckets(&report.serve.chart_data);
    out.push(format!("  Asy: {}%", report.serve.ace_percentage));

    out.section("Punkty i błędy");
    out.buckets(&report.points_and_errors.data_with_details);

    out.finish()
}

pub fn render_codes() -> String {
    let mut out = Lines::default();
    for code in ActionCode::ALL {
        let kind = if is_point_code(code) {
            "punkt".green()
        } else if is_error_code(code) {
            "błąd".red()
        } else {
            "-".dimmed()
        };
        out.push(format!("{:<20} {:<28} {}", code.to_string(), label_for(code), kind));
    }
    out.finish()
}

pub fn render_seasons(seasons: &[Season], current: Season) -> String {
    let mut out = Lines::default();
    for season in seasons {
        if *season == current {
            out.push(format!("{} {}", season.to_string().bold(), "(bieżący)".dimmed()));
        } else {
            out.push(season.to_string());
        }
    }
    out.finish()
}
