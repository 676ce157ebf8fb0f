///! Shared wire types for the Helm spacecraft backend.
///!
///! Everything a client needs to talk to the backend lives here: the status
///! snapshot, the action request/response envelopes, and the synthetic
///! sensor reading payload. No business logic.

pub mod types;

pub use types::{
    ActionRequest, ActionResponse, ErrorResponse, Power, SensorBank, SensorKind, SensorReading,
    StatusSnapshot,
};
