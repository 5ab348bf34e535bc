use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One briefing item. Field names on the wire match what the collector expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(rename = "subTitle")]
    pub subtitle: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub read: bool,
}

/// Day buckets keyed by calendar date, tasks in display order.
pub type DayTasks = BTreeMap<NaiveDate, Vec<Task>>;

#[derive(Debug, Deserialize)]
pub struct SelectDayRequest {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct DayForm {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayResponse {
    pub date: String,
    pub tasks: Vec<Task>,
}

/// Body returned by the remote collector.
#[derive(Debug, Deserialize)]
pub struct SyncAck {
    #[serde(default)]
    pub status: Option<String>,
}
