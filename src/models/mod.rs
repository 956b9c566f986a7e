//! Typed records returned and accepted by the Sensibo API.
//!
//! Every record uses the vendor's `camelCase` wire names, tolerates missing
//! fields and decodes `null` into `None`, or into the default value for
//! fields that are not optional. Records can be re-serialized, which
//! is how write payloads embed [`ACStateData`].
//!
//! # Overview
//!
//! - [`Device`]: a device with its nested records
//! - [`ACStateData`]: the settings of an air conditioner
//! - [`ACState`]: an entry of a device's AC state log
//! - [`ClimateReact`]: Climate React settings
//! - [`DeviceTimer`]: the timer set on a device
//! - [`DeviceSchedule`]: a recurring schedule
//! - [`HistoricalMeasurements`]: temperature and humidity history
//!
//! Records that share AC settings hold an [`ACStateData`] by value in a
//! `state` field; read it through that field rather than expecting the
//! settings on the outer record.

mod ac_state;
mod climate_react;
mod common;
mod device;
mod measurements;
mod schedule;
mod timer;

pub use ac_state::{ACState, ACStateData, ACStateSnapshot};
pub use climate_react::{ClimateReact, ClimateReactState};
pub use common::{CausedBy, SensiboTime};
pub use device::{
    AccessPoint, ConnectionStatus, Device, FiltersCleaning, Location, Measurements, Remote,
    RemoteCapabilities, RemoteMode, RemoteTemperature, Room, SensorsCalibration,
};
pub use measurements::{HistoricalMeasurements, Measurement};
pub use schedule::{DeviceSchedule, ScheduleACState, ScheduleExtra, Scheduler};
pub use timer::{DeviceTimer, ScheduledInstance};
