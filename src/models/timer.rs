//! Device timer records.

use serde::{Deserialize, Serialize};

use crate::models::ac_state::ACStateData;
use crate::models::common::{null_as_default, CausedBy};

/// A past execution of a timer or schedule.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledInstance {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time_seconds_ago: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(rename = "scheduleId", skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_executions: Option<Vec<String>>,
}

/// The timer set on a device.
///
/// A timer applies [`ac_state`](Self::ac_state) once, at
/// [`target_time`](Self::target_time).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceTimer {
    /// Timer identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Whether the timer is active.
    #[serde(deserialize_with = "null_as_default")]
    pub is_enabled: bool,

    /// The state applied when the timer fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_state: Option<ACStateData>,

    /// Who created the timer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<CausedBy>,

    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_seconds_ago: Option<i64>,

    /// Recent executions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_scheduled_instances: Option<Vec<ScheduledInstance>>,

    /// When the timer fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time_seconds_from_now: Option<i64>,
}
