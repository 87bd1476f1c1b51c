// ============================================================================
// AUTH STATE - Estado de autenticación
// ============================================================================

use crate::models::auth::User;

/// Fase de autenticación. `Pending` solo existe hasta que el resume termina;
/// los estados terminales son `Anonymous` y `Authenticated`.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthPhase {
    #[default]
    Pending,
    Anonymous,
    Authenticated(User),
}

impl AuthPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthPhase::Pending)
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            AuthPhase::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}
