use super::counting::{count_by_codes, group_by, legend_from_buckets, percentage};
use super::labels::abbreviate_name;
use super::types::{ChartBucket, Fill, LegendEntry, PlayerPoints, PointsAndErrors, TeamPoints, TeamSummary};
use crate::domain::codes::{
    ATTACK_CODES, ATTACK_KILL, ERROR_CODES, OTHER_BLOCK, OTHER_DIG, POINT_CODES,
    RECEPTION_ERROR, RECEPTION_NEGATIVE, RECEPTION_PERFECT, RECEPTION_POSITIVE, SERVE_ACE,
};
use crate::domain::{StatEvent, label_for};

pub fn points_and_errors(events: &[StatEvent]) -> PointsAndErrors {
    let points = count_by_codes(events, &POINT_CODES);
    let errors = count_by_codes(events, &ERROR_CODES);

    let data_by_type = vec![
        ChartBucket::new("Punkty", points, Fill::Perfect),
        ChartBucket::new("Błędy", errors, Fill::Error),
    ];

    let point_details = POINT_CODES.iter().enumerate().map(|(i, &code)| {
        ChartBucket::new(&label_for(code), count_by_codes(events, &[code]), Fill::PointShade(i + 2))
    });
    let error_details = ERROR_CODES.iter().enumerate().map(|(i, &code)| {
        ChartBucket::new(&label_for(code), count_by_codes(events, &[code]), Fill::ErrorShade(i + 2))
    });
    let data_with_details: Vec<ChartBucket> = point_details.chain(error_details).collect();

    PointsAndErrors {
        points,
        errors,
        legend_by_type: legend_from_buckets(&data_by_type),
        legend_with_details: legend_from_buckets(&data_with_details),
        data_by_type,
        data_with_details,
    }
}

/// Scorers ranked by points, highest first. Players without points are
/// left out of the ranking but keep a legend entry.
pub fn team_points_by_player(events: &[StatEvent]) -> TeamPoints {
    let by_player = group_by(events, |event| event.player_name());

    let mut ranked: Vec<(String, u32)> = by_player
        .iter()
        .map(|(name, stats)| (name.to_string(), count_by_codes(stats.iter().copied(), &POINT_CODES)))
        .filter(|(_, points)| *points > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let chart_data = ranked
        .into_iter()
        .enumerate()
        .map(|(i, (player, points))| PlayerPoints {
            player,
            points,
            fill: Fill::palette(i),
        })
        .collect();

    let legend = by_player
        .keys()
        .map(|name| {
            (
                name.to_string(),
                LegendEntry {
                    label: abbreviate_name(name),
                },
            )
        })
        .collect();

    TeamPoints { chart_data, legend }
}

pub fn team_summary(events: &[StatEvent]) -> TeamSummary {
    let attacks = count_by_codes(events, &ATTACK_CODES);
    let receptions = count_by_codes(
        events,
        &[RECEPTION_PERFECT, RECEPTION_POSITIVE, RECEPTION_NEGATIVE, RECEPTION_ERROR],
    );
    let good_receptions = count_by_codes(events, &[RECEPTION_PERFECT, RECEPTION_POSITIVE]);

    TeamSummary {
        points: count_by_codes(events, &POINT_CODES),
        errors: count_by_codes(events, &ERROR_CODES),
        blocks: count_by_codes(events, &[OTHER_BLOCK]),
        digs: count_by_codes(events, &[OTHER_DIG]),
        aces: count_by_codes(events, &[SERVE_ACE]),
        attack_percentage: percentage(count_by_codes(events, &[ATTACK_KILL]) as i64, attacks),
        positive_reception_percentage: percentage(good_receptions as i64, receptions),
    }
}
