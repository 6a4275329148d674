//! Daily forecast summary

use serde::{Deserialize, Serialize};

/// Aggregate of all forecast samples that fall on one calendar day
///
/// Field names match the JSON contract of the forecast endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Calendar day, `YYYY-MM-DD`
    pub date: String,
    /// Short label such as `Lun 01`
    pub day: String,
    pub temp_min: f64,
    pub temp_max: f64,
    /// Most frequent description of the day, empty when none was reported
    pub desc: String,
    /// Most frequent icon of the day
    pub icon: Option<String>,
    /// Mean probability of precipitation, 0..1
    pub pop: f64,
}
