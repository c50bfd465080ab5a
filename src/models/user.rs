use serde::{Deserialize, Serialize};

/// Respuesta de `GET /users?limit=1`. El dashboard solo usa `total`,
/// la lista de usuarios se ignora.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub struct UserPage {
    pub total: u64,
}
