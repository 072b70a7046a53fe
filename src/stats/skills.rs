use super::counting::{count_by_codes, legend_from_buckets, percentage};
use super::types::{AttackStats, ChartBucket, Fill, ReceptionStats, ServeStats};
use crate::domain::StatEvent;
use crate::domain::codes::{
    ATTACK_BLOCKED, ATTACK_DEFENDED, ATTACK_ERROR, ATTACK_KILL, RECEPTION_ERROR,
    RECEPTION_NEGATIVE, RECEPTION_PERFECT, RECEPTION_POSITIVE, SERVE_ACE, SERVE_ERROR,
    SERVE_POSITIVE,
};

/// Kill rate and net efficiency over every attack outcome
pub fn attack_stats(events: &[StatEvent]) -> AttackStats {
    let kills = count_by_codes(events, &[ATTACK_KILL]);
    let defended = count_by_codes(events, &[ATTACK_DEFENDED]);
    let blocked = count_by_codes(events, &[ATTACK_BLOCKED]);
    let errors = count_by_codes(events, &[ATTACK_ERROR]);

    let total = kills + defended + blocked + errors;
    let net = kills as i64 - errors as i64 - blocked as i64;

    let chart_data = vec![
        ChartBucket::new("Skończone", kills, Fill::Perfect),
        ChartBucket::new("Obronione", defended, Fill::Positive),
        ChartBucket::new("Zablokowane", blocked, Fill::Negative),
        ChartBucket::new("Błędy", errors, Fill::Error),
    ];
    let legend = legend_from_buckets(&chart_data);

    AttackStats {
        kills,
        defended,
        blocked,
        errors,
        total,
        percentage: percentage(kills as i64, total),
        efficiency: percentage(net, total),
        chart_data,
        legend,
    }
}

/// Pass quality; the positive rate includes perfect passes
pub fn reception_stats(events: &[StatEvent]) -> ReceptionStats {
    let perfect = count_by_codes(events, &[RECEPTION_PERFECT]);
    let positive = count_by_codes(events, &[RECEPTION_POSITIVE]);
    let negative = count_by_codes(events, &[RECEPTION_NEGATIVE]);
    let errors = count_by_codes(events, &[RECEPTION_ERROR]);

    let total = perfect + positive + negative + errors;

    let chart_data = vec![
        ChartBucket::new("Perfekcyjne", perfect, Fill::Perfect),
        ChartBucket::new("Pozytywne", positive, Fill::Positive),
        ChartBucket::new("Negatywne", negative, Fill::Negative),
        ChartBucket::new("Błędy", errors, Fill::Error),
    ];
    let legend = legend_from_buckets(&chart_data);

    ReceptionStats {
        perfect,
        positive,
        negative,
        errors,
        total,
        perfect_percentage: percentage(perfect as i64, total),
        positive_percentage: percentage((perfect + positive) as i64, total),
        chart_data,
        legend,
    }
}

pub fn serve_stats(events: &[StatEvent]) -> ServeStats {
    let ace = count_by_codes(events, &[SERVE_ACE]);
    let positive = count_by_codes(events, &[SERVE_POSITIVE]);
    let errors = count_by_codes(events, &[SERVE_ERROR]);

    let total = ace + positive + errors;

    let chart_data = vec![
        ChartBucket::new("As", ace, Fill::Perfect),
        ChartBucket::new("Pozytywny", positive, Fill::Positive),
        ChartBucket::new("Błędy", errors, Fill::Error),
    ];
    let legend = legend_from_buckets(&chart_data);

    ServeStats {
        ace,
        positive,
        errors,
        total,
        ace_percentage: percentage(ace as i64, total),
        chart_data,
        legend,
    }
}
