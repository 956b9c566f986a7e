//! Device schedule records.

use serde::{Deserialize, Serialize};

use crate::models::ac_state::ACStateData;
use crate::models::climate_react::ClimateReact;
use crate::models::common::{null_as_default, CausedBy};

/// Scheduler options attached to a schedule.
///
/// These keys are `snake_case` on the wire, unlike the rest of the API.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Scheduler {
    /// Whether the schedule toggles Climate React.
    #[serde(deserialize_with = "null_as_default")]
    pub climate_react: bool,

    /// Motion-based behaviour.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motion: Option<String>,

    /// Whether the scheduler is on.
    #[serde(deserialize_with = "null_as_default")]
    pub on: bool,

    /// Climate React settings applied by the schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub climate_react_settings: Option<ClimateReact>,

    /// Pure Boost setting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pure_boost: Option<String>,
}

/// Extra schedule options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScheduleExtra {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<Scheduler>,
}

/// The AC state a schedule applies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleACState {
    /// The AC settings.
    #[serde(flatten)]
    pub state: ACStateData,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ScheduleExtra>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_swing: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<String>,
}

/// A recurring schedule on a device.
///
/// # Example
///
/// ```rust
/// use sensibo_api::models::DeviceSchedule;
///
/// let schedule: DeviceSchedule = serde_json::from_str(r#"{
///     "id": "s1",
///     "isEnabled": true,
///     "acState": {"on": true, "mode": "cool", "extra": {"scheduler": {"climate_react": false}}},
///     "recurringDays": ["Monday", "Friday"],
///     "targetTimeLocal": "07:30",
///     "timezone": "Europe/Tbilisi"
/// }"#).unwrap();
///
/// assert_eq!(schedule.recurring_days.len(), 2);
/// assert_eq!(schedule.ac_state.unwrap().state.mode.as_deref(), Some("cool"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DeviceSchedule {
    /// Schedule identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Whether the schedule is active.
    #[serde(deserialize_with = "null_as_default")]
    pub is_enabled: bool,

    /// The state applied when the schedule fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ac_state: Option<ScheduleACState>,

    /// Who created the schedule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<CausedBy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_seconds_ago: Option<i64>,

    /// Days of the week the schedule repeats on.
    #[serde(deserialize_with = "null_as_default")]
    pub recurring_days: Vec<String>,

    /// Local time of day the schedule fires at (`HH:MM`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_time_local: Option<String>,

    /// IANA time zone of [`target_time_local`](Self::target_time_local).
    #[serde(
        rename = "timezone",
        alias = "timeZone",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_zone: Option<String>,

    /// Identifier of the device the schedule belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod_uid: Option<String>,

    /// Next time the schedule fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_time_seconds_from_now: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scheduler_uses_snake_case_keys() {
        let scheduler: Scheduler = serde_json::from_value(json!({
            "climate_react": true,
            "on": true,
            "pure_boost": "off",
            "climate_react_settings": {"enabled": true, "type": "temperature"}
        }))
        .unwrap();

        assert!(scheduler.climate_react);
        assert_eq!(scheduler.pure_boost.as_deref(), Some("off"));
        assert!(scheduler.climate_react_settings.unwrap().enabled);
    }

    #[test]
    fn test_device_schedule_reads_nested_state() {
        let schedule: DeviceSchedule = serde_json::from_value(json!({
            "id": "s9",
            "isEnabled": false,
            "acState": {
                "on": true,
                "mode": "heat",
                "targetTemperature": 23,
                "light": "on",
                "extra": {"scheduler": {"on": true, "motion": "off"}}
            },
            "podUid": "pod1",
            "nextTimeSecondsFromNow": 600
        }))
        .unwrap();

        let ac_state = schedule.ac_state.unwrap();
        assert_eq!(ac_state.state.target_temperature, Some(23.0));
        assert_eq!(ac_state.light.as_deref(), Some("on"));
        let scheduler = ac_state.extra.unwrap().scheduler.unwrap();
        assert!(scheduler.on);
        assert_eq!(scheduler.motion.as_deref(), Some("off"));
        assert_eq!(schedule.pod_uid.as_deref(), Some("pod1"));
        assert!(schedule.recurring_days.is_empty());
    }

    #[test]
    fn test_device_schedule_accepts_both_time_zone_spellings() {
        let a: DeviceSchedule = serde_json::from_value(json!({"timezone": "UTC"})).unwrap();
        let b: DeviceSchedule = serde_json::from_value(json!({"timeZone": "UTC"})).unwrap();
        assert_eq!(a.time_zone.as_deref(), Some("UTC"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_scheduler_reads_null_flags_as_false() {
        let scheduler: Scheduler = serde_json::from_value(json!({
            "climate_react": null,
            "motion": null,
            "on": false,
            "climate_react_settings": null,
            "pure_boost": null
        }))
        .unwrap();

        assert_eq!(scheduler, Scheduler::default());
    }

    #[test]
    fn test_device_schedule_tolerates_nulls() {
        let schedule: DeviceSchedule = serde_json::from_value(json!({
            "id": "s1",
            "isEnabled": null,
            "recurringDays": null,
            "acState": {
                "on": null,
                "mode": "cool",
                "extra": {"scheduler": {"climate_react": null, "on": null}}
            }
        }))
        .unwrap();

        assert!(!schedule.is_enabled);
        assert!(schedule.recurring_days.is_empty());
        let ac_state = schedule.ac_state.unwrap();
        assert!(!ac_state.state.on);
        assert_eq!(ac_state.state.mode.as_deref(), Some("cool"));
        assert!(!ac_state.extra.unwrap().scheduler.unwrap().climate_react);
    }
}
