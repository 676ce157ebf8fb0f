///! Shared handle over the spacecraft record.

use std::sync::Arc;
use tokio::sync::RwLock;

use helm_common::{ActionRequest, StatusSnapshot};

use super::actions::{Action, ActionError, apply};
use super::state::SpacecraftState;

/// Cloneable manager owning the one spacecraft record.
///
/// `execute` holds the write lock across the whole parse-apply-snapshot
/// transition, so actions are serialized and no interleaving can observe a
/// half-applied power-down cascade. Status reads share the read lock.
#[derive(Debug, Clone)]
pub struct CraftManager {
    state: Arc<RwLock<SpacecraftState>>,
}

impl CraftManager {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SpacecraftState::new())),
        }
    }

    /// Read-only status snapshot.
    pub async fn status(&self) -> StatusSnapshot {
        self.state.read().await.snapshot()
    }

    /// Validate and apply one action, returning the post-action snapshot.
    ///
    /// A rejection leaves the record untouched and the process serving.
    pub async fn execute(&self, request: &ActionRequest) -> Result<StatusSnapshot, ActionError> {
        let action = match Action::parse(&request.action, request.details.as_ref()) {
            Ok(action) => action,
            Err(e) => {
                tracing::warn!("Rejected action '{}': {}", request.action, e);
                return Err(e);
            },
        };

        let mut state = self.state.write().await;
        let snapshot = apply(&mut state, &action);
        tracing::info!(
            "Applied action '{}': power={} speed={} fuel={}",
            request.action,
            snapshot.power,
            snapshot.speed,
            snapshot.fuel
        );
        Ok(snapshot)
    }
}

impl Default for CraftManager {
    fn default() -> Self {
        Self::new()
    }
}
