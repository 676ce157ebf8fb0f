///! Action parsing and the transition table over `SpacecraftState`.
///!
///! Every client request is parsed into a typed `Action` first; a request
///! that fails to parse is rejected before any field is touched, so a
///! rejection never leaves the record half-written.

use serde_json::Value;
use thiserror::Error;

use helm_common::{Power, SensorKind, StatusSnapshot};

use super::state::SpacecraftState;

pub(crate) const SPEED_MIN: i64 = -100;
pub(crate) const SPEED_MAX: i64 = 100;
pub(crate) const FUEL_MIN: i64 = 0;
pub(crate) const FUEL_MAX: i64 = 100;
/// `move` always sets this speed, no ramping.
pub(crate) const MOVE_SPEED: i32 = 10;

/// A validated, typed action ready to be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetPower(Power),
    UpdateSpeed(i64),
    Refuel(i64),
    Move,
    Sleep,
    ToggleSensor(SensorKind),
}

/// Why an action request was rejected. Terminal for the request; the
/// state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid sensor: {0}")]
    UnknownSensor(String),

    #[error("Invalid details for {action}: expected {expected}")]
    InvalidDetails { action: String, expected: String },
}

impl Action {
    /// Parse the wire pair `(action, details)` into a typed action.
    pub fn parse(action: &str, details: Option<&Value>) -> Result<Self, ActionError> {
        match action {
            "setPower" => {
                let value = details
                    .and_then(Value::as_str)
                    .ok_or_else(|| invalid_details(action, "\"ON\" or \"OFF\""))?;
                let power = value
                    .parse::<Power>()
                    .map_err(|_| invalid_details(action, "\"ON\" or \"OFF\""))?;
                Ok(Action::SetPower(power))
            },
            "updateSpeed" => Ok(Action::UpdateSpeed(integer_details(action, details)?)),
            "refuel" => Ok(Action::Refuel(integer_details(action, details)?)),
            "move" => Ok(Action::Move),
            "sleep" => Ok(Action::Sleep),
            "toggleSensor" => {
                let name = details.and_then(Value::as_str).ok_or_else(|| {
                    ActionError::UnknownSensor(
                        details.map(Value::to_string).unwrap_or_else(|| "(none)".to_string()),
                    )
                })?;
                name.parse::<SensorKind>()
                    .map(Action::ToggleSensor)
                    .map_err(|_| ActionError::UnknownSensor(name.to_string()))
            },
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }
}

fn integer_details(action: &str, details: Option<&Value>) -> Result<i64, ActionError> {
    details
        .and_then(Value::as_i64)
        .ok_or_else(|| invalid_details(action, "an integer"))
}

fn invalid_details(action: &str, expected: &str) -> ActionError {
    ActionError::InvalidDetails {
        action: action.to_string(),
        expected: expected.to_string(),
    }
}

/// Apply one action to the record and return the post-mutation snapshot.
///
/// Infallible by construction: everything rejectable was rejected at parse
/// time. Speed and fuel saturate at their domain bounds instead of failing.
pub fn apply(state: &mut SpacecraftState, action: &Action) -> StatusSnapshot {
    match action {
        Action::SetPower(Power::On) => state.power = Power::On,
        Action::SetPower(Power::Off) => state.power_off(),
        Action::UpdateSpeed(n) => state.speed = (*n).clamp(SPEED_MIN, SPEED_MAX) as i32,
        // Negative deltas are accepted and applied; the tank saturates at
        // both bounds rather than rejecting.
        Action::Refuel(n) => {
            state.fuel = i64::from(state.fuel).saturating_add(*n).clamp(FUEL_MIN, FUEL_MAX) as i32;
        },
        Action::Move => state.speed = MOVE_SPEED,
        Action::Sleep => state.power_off(),
        Action::ToggleSensor(kind) => state.active_sensors.toggle(*kind),
    }
    state.snapshot()
}
