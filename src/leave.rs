use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Leave records for one generation run, keyed by canonical `MM/DD` date.
/// Owned by the caller and read-only to the populator.
pub type LeaveMap = HashMap<String, LeaveInterval>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    Annual,
    Personal,
    Sick,
    Official,
}

impl LeaveCategory {
    /// Display text used on the sheet and in the selection UI.
    pub fn label(&self) -> &'static str {
        match self {
            LeaveCategory::Annual => "特休",
            LeaveCategory::Personal => "事假",
            LeaveCategory::Sick => "病假",
            LeaveCategory::Official => "公假",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "特休" => Some(LeaveCategory::Annual),
            "事假" => Some(LeaveCategory::Personal),
            "病假" => Some(LeaveCategory::Sick),
            "公假" => Some(LeaveCategory::Official),
            _ => None,
        }
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One declared absence. `start` and `end` are `HH:MM` wall-clock strings;
/// `start <= end` is expected but not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInterval {
    pub category: LeaveCategory,
    pub start: String,
    pub end: String,
}

impl LeaveInterval {
    pub fn new(category: LeaveCategory, start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            category,
            start: start.into(),
            end: end.into(),
        }
    }
}
