///! The canonical spacecraft status record.

use helm_common::{Power, SensorBank, StatusSnapshot};

pub(crate) const DEFAULT_BATTERY_PERCENTAGE: i32 = 100;
pub(crate) const DEFAULT_FUEL: i32 = 30;

/// Mutable status record for the one simulated spacecraft.
///
/// Only the action processor writes to this; everything else observes it
/// through `snapshot()`.
///
/// Invariants (restored by every accepted action):
/// - `speed` in [-100, 100], `fuel` in [0, 100]
/// - power OFF implies `speed == 0` and every sensor off
#[derive(Debug, Clone, PartialEq)]
pub struct SpacecraftState {
    pub(crate) power: Power,
    pub(crate) speed: i32,
    pub(crate) battery_percentage: i32,
    pub(crate) fuel: i32,
    pub(crate) active_sensors: SensorBank,
    /// Inert for now – nothing in the action set appends to it, but the
    /// panel renders it, so it stays on the wire.
    pub(crate) found_resources: Vec<String>,
}

impl Default for SpacecraftState {
    fn default() -> Self {
        Self {
            power: Power::Off,
            speed: 0,
            battery_percentage: DEFAULT_BATTERY_PERCENTAGE,
            fuel: DEFAULT_FUEL,
            active_sensors: SensorBank::default(),
            found_resources: Vec::new(),
        }
    }
}

impl SpacecraftState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Immutable copy of every status field. Never fails, no side effects.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            power: self.power,
            speed: self.speed,
            battery_percentage: self.battery_percentage,
            fuel: self.fuel,
            active_sensors: self.active_sensors,
            found_resources: self.found_resources.clone(),
        }
    }

    /// Power-down cascade: cut power, zero the speed, switch every sensor
    /// off in the same transition.
    pub(crate) fn power_off(&mut self) {
        self.power = Power::Off;
        self.speed = 0;
        self.active_sensors.clear();
    }
}
