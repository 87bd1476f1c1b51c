// ============================================================================
// SETUP STATE - Estado del chequeo de primera instalación
// ============================================================================

use crate::models::setup::SetupStatus;

#[derive(Clone, Debug, PartialEq, Default)]
pub enum SetupPhase {
    /// Consulta a /setup/status en curso (o aún no lanzada)
    #[default]
    Checking,
    Incomplete(SetupStatus),
    Complete,
}

impl SetupPhase {
    pub fn from_status(status: SetupStatus) -> Self {
        if status.is_setup_complete {
            SetupPhase::Complete
        } else {
            SetupPhase::Incomplete(status)
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SetupPhase::Complete)
    }
}
