use std::fmt;

use serde::{Deserialize, Serialize};

/// Active input method reported by the bridge.
///
/// The client never validates mode values: anything outside the two
/// well-known labels is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputMode {
    Keyboard,
    Mouse,
    Other(String),
}

impl InputMode {
    pub fn as_str(&self) -> &str {
        match self {
            InputMode::Keyboard => "keyboard",
            InputMode::Mouse => "mouse",
            InputMode::Other(label) => label,
        }
    }
}

impl From<&str> for InputMode {
    fn from(label: &str) -> Self {
        match label {
            "keyboard" => InputMode::Keyboard,
            "mouse" => InputMode::Mouse,
            other => InputMode::Other(other.to_string()),
        }
    }
}

impl From<String> for InputMode {
    fn from(label: String) -> Self {
        match label.as_str() {
            "keyboard" => InputMode::Keyboard,
            "mouse" => InputMode::Mouse,
            _ => InputMode::Other(label),
        }
    }
}

impl From<InputMode> for String {
    fn from(mode: InputMode) -> Self {
        match mode {
            InputMode::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shortcut labels understood by the bridge firmware.
///
/// A shortcut travels over `/send` as an ordinary command string; the enum
/// only spares callers the literal spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shortcut {
    OpenSafari,
    SwitchTab,
    CloseApp,
    Minimize,
}

impl Shortcut {
    pub fn as_str(self) -> &'static str {
        match self {
            Shortcut::OpenSafari => "openSafari",
            Shortcut::SwitchTab => "switchTab",
            Shortcut::CloseApp => "closeApp",
            Shortcut::Minimize => "minimize",
        }
    }
}
