use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::Position;

/// Display hint for a chart bucket. Renderers map these to their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Perfect,
    Positive,
    Negative,
    Error,
    PointShade(usize),
    ErrorShade(usize),
    Palette(usize),
}

impl Fill {
    /// Rotating five-color palette for ranked series
    pub fn palette(index: usize) -> Self {
        Fill::Palette(index % 5 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBucket {
    pub label: String,
    pub quantity: u32,
    pub fill: Fill,
}

impl ChartBucket {
    pub fn new(label: &str, quantity: u32, fill: Fill) -> Self {
        Self {
            label: label.to_string(),
            quantity,
            fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub label: String,
}

/// Series key -> display label, in insertion order
pub type Legend = IndexMap<String, LegendEntry>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackStats {
    pub kills: u32,
    pub defended: u32,
    pub blocked: u32,
    pub errors: u32,
    pub total: u32,
    pub percentage: i32,
    pub efficiency: i32,
    pub chart_data: Vec<ChartBucket>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceptionStats {
    pub perfect: u32,
    pub positive: u32,
    pub negative: u32,
    pub errors: u32,
    pub total: u32,
    pub perfect_percentage: i32,
    pub positive_percentage: i32,
    pub chart_data: Vec<ChartBucket>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServeStats {
    pub ace: u32,
    pub positive: u32,
    pub errors: u32,
    pub total: u32,
    pub ace_percentage: i32,
    pub chart_data: Vec<ChartBucket>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsAndErrors {
    pub points: u32,
    pub errors: u32,
    pub data_by_type: Vec<ChartBucket>,
    pub legend_by_type: Legend,
    pub data_with_details: Vec<ChartBucket>,
    pub legend_with_details: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPoints {
    pub player: String,
    pub points: u32,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPoints {
    pub chart_data: Vec<PlayerPoints>,
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionShare {
    pub position: Position,
    pub distribution_percentage: i32,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerShare {
    pub name: String,
    pub points: u32,
    pub distribution_percentage: i32,
    pub fill: Fill,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetDistribution {
    pub total_attacks: u32,
    pub by_position: Vec<PositionShare>,
    pub by_player: Vec<PlayerShare>,
    pub legend_by_player: Legend,
}

/// Headline numbers for team and match summary cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub points: u32,
    pub errors: u32,
    pub blocks: u32,
    pub digs: u32,
    pub aces: u32,
    pub attack_percentage: i32,
    pub positive_reception_percentage: i32,
}
