use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Closed set of scheduling kinds. Weekly cadences ("once a week", "twice a
/// week", ...) all map to `TimesPerWeek` with a goal of 1, 2, ... rather
/// than carrying one tag per cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreakMode {
    EveryDay,
    TimesPerWeek,
    Monthly,
    EveryWeekday,
    WeekendsOnly,
    CustomDays,
    EveryOtherDay,
}

/// How often a habit is expected. `weekly_goal` matters only for
/// `TimesPerWeek`; `custom_days` (weekday indices, 0=Sunday..6=Saturday)
/// only for `CustomDays`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSpec {
    pub mode: StreakMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_goal: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_days: Option<BTreeSet<u8>>,
}

impl ScheduleSpec {
    pub fn new(mode: StreakMode) -> Self {
        Self {
            mode,
            weekly_goal: None,
            custom_days: None,
        }
    }
}

/// A tracked habit. `completed_dates` holds canonical `YYYY-MM-DD` strings;
/// it is the sole historical record, streak numbers are derived from it on
/// every read and never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    pub id: String,
    pub title: String,
    pub schedule: ScheduleSpec,
    pub completed_dates: BTreeSet<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub grids: BTreeMap<String, Grid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_days: u32,
}

#[derive(Debug, Deserialize)]
pub struct CreateGridRequest {
    pub title: String,
    pub mode: StreakMode,
    #[serde(default)]
    pub weekly_goal: Option<u8>,
    #[serde(default)]
    pub custom_days: Option<BTreeSet<u8>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateGridRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub mode: Option<StreakMode>,
    #[serde(default)]
    pub weekly_goal: Option<u8>,
    #[serde(default)]
    pub custom_days: Option<BTreeSet<u8>>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleDateRequest {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct GridResponse {
    #[serde(flatten)]
    pub grid: Grid,
    pub stats: StreakResult,
}
