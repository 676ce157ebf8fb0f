///! Wire contract between the backend and its clients.
///!
///! All JSON field names are camelCase to match the control-panel frontend.

use serde::{Deserialize, Serialize};

/// Power state of the spacecraft. Wire form is exactly "ON" / "OFF".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Power {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

impl Power {
    pub fn as_str(&self) -> &'static str {
        match self {
            Power::On => "ON",
            Power::Off => "OFF",
        }
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Power::Off)
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Power {
    type Err = String;

    // Strict on purpose: the panel sends the exact strings, anything else
    // is a malformed request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON" => Ok(Power::On),
            "OFF" => Ok(Power::Off),
            _ => Err(format!("Unknown power state: {}", s)),
        }
    }
}

/// The fixed set of onboard sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Camera,
}

impl SensorKind {
    pub const ALL: [SensorKind; 2] = [SensorKind::Temperature, SensorKind::Camera];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Temperature => "temperature",
            SensorKind::Camera => "camera",
        }
    }
}

impl std::fmt::Display for SensorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SensorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(SensorKind::Temperature),
            "camera" => Ok(SensorKind::Camera),
            _ => Err(format!("Unknown sensor: {}", s)),
        }
    }
}

/// On/off flags for every onboard sensor.
///
/// A struct rather than a map, so the key set is fixed at compile time and
/// serializes to the `{"temperature": bool, "camera": bool}` object the
/// panel expects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorBank {
    pub temperature: bool,
    pub camera: bool,
}

impl SensorBank {
    pub fn is_active(&self, kind: SensorKind) -> bool {
        match kind {
            SensorKind::Temperature => self.temperature,
            SensorKind::Camera => self.camera,
        }
    }

    pub fn toggle(&mut self, kind: SensorKind) {
        match kind {
            SensorKind::Temperature => self.temperature = !self.temperature,
            SensorKind::Camera => self.camera = !self.camera,
        }
    }

    /// Switch every sensor off (power-down cascade).
    pub fn clear(&mut self) {
        *self = SensorBank::default();
    }

    pub fn all_off(&self) -> bool {
        !self.temperature && !self.camera
    }
}

/// Immutable copy of the full spacecraft status at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusSnapshot {
    pub power: Power,
    pub speed: i32,
    pub battery_percentage: i32,
    pub fuel: i32,
    pub active_sensors: SensorBank,
    pub found_resources: Vec<String>,
}

/// A client action submission: `{"action": "...", "details": ...}`.
///
/// `details` stays untyped here – its shape depends on the action and is
/// validated by the action processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Successful action response: confirmation message plus the full
/// post-action status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub message: String,
    pub spacecraft_status: StatusSnapshot,
}

/// Error body for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// One synthetic sensor reading from the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub temperature: f64,
    pub humidity: f64,
    pub resource: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn sample_snapshot() -> StatusSnapshot {
        StatusSnapshot {
            power: Power::On,
            speed: 42,
            battery_percentage: 100,
            fuel: 30,
            active_sensors: SensorBank {
                temperature: false,
                camera: true,
            },
            found_resources: vec!["iron".to_string()],
        }
    }

    #[test]
    fn test_power_wire_form() {
        assert_eq!(serde_json::to_string(&Power::On).unwrap(), "\"ON\"");
        assert_eq!(serde_json::to_string(&Power::Off).unwrap(), "\"OFF\"");
        assert_eq!(Power::from_str("ON").unwrap(), Power::On);
        assert_eq!(Power::from_str("OFF").unwrap(), Power::Off);
    }

    #[test]
    fn test_power_rejects_loose_forms() {
        assert!(Power::from_str("on").is_err());
        assert!(Power::from_str("Off").is_err());
        assert!(Power::from_str("STANDBY").is_err());
    }

    #[test]
    fn test_sensor_kind_parse() {
        assert_eq!(
            SensorKind::from_str("temperature").unwrap(),
            SensorKind::Temperature
        );
        assert_eq!(SensorKind::from_str("camera").unwrap(), SensorKind::Camera);
        assert!(SensorKind::from_str("radar").is_err());
    }

    #[test]
    fn test_sensor_bank_toggle_and_clear() {
        let mut bank = SensorBank::default();
        assert!(bank.all_off());
        for kind in SensorKind::ALL {
            assert!(!bank.is_active(kind));
        }

        bank.toggle(SensorKind::Camera);
        assert!(bank.is_active(SensorKind::Camera));
        assert!(!bank.is_active(SensorKind::Temperature));

        bank.toggle(SensorKind::Camera);
        assert!(bank.all_off());

        bank.toggle(SensorKind::Temperature);
        bank.toggle(SensorKind::Camera);
        bank.clear();
        assert!(bank.all_off());
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let json = serde_json::to_value(sample_snapshot()).unwrap();
        assert_eq!(json["power"], "ON");
        assert_eq!(json["speed"], 42);
        assert_eq!(json["batteryPercentage"], 100);
        assert_eq!(json["fuel"], 30);
        assert_eq!(json["activeSensors"]["temperature"], false);
        assert_eq!(json["activeSensors"]["camera"], true);
        assert_eq!(json["foundResources"][0], "iron");
    }

    #[test]
    fn test_action_request_details_optional() {
        let with: ActionRequest = serde_json::from_str(r#"{"action":"refuel","details":20}"#).unwrap();
        assert_eq!(with.action, "refuel");
        assert_eq!(with.details, Some(serde_json::json!(20)));

        let without: ActionRequest = serde_json::from_str(r#"{"action":"sleep"}"#).unwrap();
        assert_eq!(without.action, "sleep");
        assert!(without.details.is_none());
    }

    #[test]
    fn test_action_response_envelope() {
        let response = ActionResponse {
            message: "Action refuel executed successfully!".to_string(),
            spacecraft_status: sample_snapshot(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Action refuel executed successfully!");
        assert_eq!(json["spacecraftStatus"]["fuel"], 30);
    }
}
