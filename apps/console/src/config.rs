use std::{collections::HashMap, fs};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Access-point address the bridge device serves from out of the box.
            server_url: "http://192.168.4.1".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("bridge.toml") {
        apply_file_settings(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("BRIDGE_SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

fn apply_file_settings(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("server_url") {
            settings.server_url = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_overrides_default_server_url() {
        let mut settings = Settings::default();
        apply_file_settings(&mut settings, "server_url = \"http://10.0.0.9:8080\"");
        assert_eq!(settings.server_url, "http://10.0.0.9:8080");
    }

    #[test]
    fn unknown_keys_and_bad_toml_leave_defaults() {
        let mut settings = Settings::default();
        apply_file_settings(&mut settings, "other_key = \"x\"");
        assert_eq!(settings, Settings::default());

        apply_file_settings(&mut settings, "not valid toml ===");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn env_overrides_file_and_default() {
        std::env::set_var("BRIDGE_SERVER_URL", "http://bridge.lan:9000");
        let settings = load_settings();
        std::env::remove_var("BRIDGE_SERVER_URL");
        assert_eq!(settings.server_url, "http://bridge.lan:9000");
    }
}
