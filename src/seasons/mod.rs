//! Season bucketing plus set and player filtering for event slices.

pub mod players;
pub mod sets;

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::SeasonSettings;
use crate::errors::ParseError;

pub use players::filter_by_player;
pub use sets::{SetFilter, OVERALL_LABEL, filter_by_set};

/// Start years accepted from text input
pub const SEASON_YEARS: RangeInclusive<i32> = 1900..=9998;

/// A competitive year, written "2024/2025"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Season {
    start_year: i32,
}

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start_year, i64::from(self.start_year) + 1)
    }
}

impl FromStr for Season {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidSeason(s.to_string());

        let (start, end) = s.trim().split_once('/').ok_or_else(invalid)?;
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;

        if !SEASON_YEARS.contains(&start) || start.checked_add(1) != Some(end) {
            return Err(invalid());
        }
        Ok(Season::new(start))
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.to_string()
    }
}

impl TryFrom<String> for Season {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What the caller knows about a team's history
#[derive(Debug, Clone, PartialEq)]
pub enum SeasonSource {
    /// Seasons that already have matches
    Known(Vec<Season>),
    /// Earliest season the team played
    First(Season),
}

/// Season containing `date` under the given start month
pub fn season_for(date: NaiveDate, settings: &SeasonSettings) -> Season {
    if date.month() >= settings.start_month {
        Season::new(date.year())
    } else {
        Season::new(date.year() - 1)
    }
}

/// Season containing `today`, with seasons starting in September
pub fn current_season(today: NaiveDate) -> Season {
    season_for(today, &SeasonSettings::default())
}

/// Selectable seasons, newest first. The current season is always included.
pub fn season_list(source: &SeasonSource, today: NaiveDate) -> Vec<Season> {
    season_list_with(source, today, &SeasonSettings::default())
}

pub fn season_list_with(
    source: &SeasonSource,
    today: NaiveDate,
    settings: &SeasonSettings,
) -> Vec<Season> {
    let current = season_for(today, settings);

    match source {
        SeasonSource::Known(seasons) => {
            let mut list = seasons.clone();
            list.sort();
            list.dedup();
            if !list.contains(&current) {
                list.push(current);
            }
            list.reverse();
            list
        }
        SeasonSource::First(first) => {
            if *first > current {
                return vec![current];
            }
            (first.start_year()..=current.start_year())
                .rev()
                .map(Season::new)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn season(s: &str) -> Season {
        s.parse().unwrap()
    }

    #[test]
    fn test_current_season_boundaries() {
        assert_eq!(current_season(date(2025, 3, 15)).to_string(), "2024/2025");
        assert_eq!(current_season(date(2025, 10, 1)).to_string(), "2025/2026");
        assert_eq!(current_season(date(2025, 9, 1)).to_string(), "2025/2026");
        assert_eq!(current_season(date(2025, 8, 31)).to_string(), "2024/2025");
    }

    #[test]
    fn test_custom_start_month() {
        let settings = SeasonSettings { start_month: 8 };
        assert_eq!(season_for(date(2025, 8, 10), &settings), Season::new(2025));
    }

    #[test]
    fn test_season_parsing() {
        assert_eq!(season("2022/2023"), Season::new(2022));
        assert!("2022/2024".parse::<Season>().is_err());
        assert!("2022".parse::<Season>().is_err());
        assert!("abcd/efgh".parse::<Season>().is_err());
    }

    #[test]
    fn test_out_of_range_years_are_rejected() {
        assert_eq!(
            "2147483647/1".parse::<Season>(),
            Err(ParseError::InvalidSeason("2147483647/1".to_string()))
        );
        assert!("-2147483648/-2147483647".parse::<Season>().is_err());
        assert!("9999/10000".parse::<Season>().is_err());
        assert_eq!(Season::new(i32::MAX).to_string(), "2147483647/2147483648");
    }

    #[test]
    fn test_list_from_first_season_is_contiguous() {
        let list = season_list(&SeasonSource::First(season("2022/2023")), date(2024, 11, 2));
        let labels: Vec<String> = list.iter().map(Season::to_string).collect();

        assert_eq!(labels, vec!["2024/2025", "2023/2024", "2022/2023"]);
    }

    #[test]
    fn test_list_from_future_first_season() {
        let list = season_list(&SeasonSource::First(season("2030/2031")), date(2024, 11, 2));
        assert_eq!(list, vec![season("2024/2025")]);
    }

    #[test]
    fn test_known_list_gets_current_season_appended() {
        let known = SeasonSource::Known(vec![season("2022/2023"), season("2023/2024")]);
        let list = season_list(&known, date(2024, 9, 5));

        assert_eq!(
            list,
            vec![season("2024/2025"), season("2023/2024"), season("2022/2023")]
        );
    }

    #[test]
    fn test_known_list_with_current_is_reversed() {
        let known = SeasonSource::Known(vec![season("2024/2025"), season("2023/2024"), season("2024/2025")]);
        let list = season_list(&known, date(2025, 1, 5));

        assert_eq!(list, vec![season("2024/2025"), season("2023/2024")]);
    }

    #[test]
    fn test_empty_known_list() {
        let list = season_list(&SeasonSource::Known(Vec::new()), date(2025, 1, 5));
        assert_eq!(list, vec![season("2024/2025")]);
    }
}
