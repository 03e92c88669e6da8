use serde::{Deserialize, Serialize};

use crate::domain::InputMode;

/// Form-encoded body of `POST /mode`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeChangeForm {
    pub mode: InputMode,
}

/// Form-encoded body of `POST /send`.
///
/// Carries either free text or a command label; the bridge decides which.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendForm {
    pub data: String,
}
