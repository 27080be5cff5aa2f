use std::{collections::HashMap, fs};

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    /// Base URL of the OpenAI-compatible upstream, without the
    /// `/chat/completions` suffix.
    pub upstream_url: String,
    pub upstream_key: String,
    pub model: String,
    pub mail_endpoint: String,
    pub mail_key: String,
    pub mail_from: String,
    pub mail_to: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8787".into(),
            upstream_url: "https://generativelanguage.googleapis.com/v1beta/openai".into(),
            upstream_key: String::new(),
            model: "gemini-3-flash-preview".into(),
            mail_endpoint: "https://api.mailchannels.net/tx/v1/send".into(),
            mail_key: String::new(),
            mail_from: "portfolio@example.com".into(),
            mail_to: "contact@example.com".into(),
        }
    }
}

/// Load settings: defaults, then `folio.toml`, then environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("folio.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply(&mut settings, |key| file_cfg.get(key).cloned());
        }
    }

    apply(&mut settings, |key| {
        std::env::var(format!("FOLIO_{}", key.to_uppercase())).ok()
    });

    settings
}

fn apply(settings: &mut Settings, get: impl Fn(&str) -> Option<String>) {
    if let Some(v) = get("bind") {
        settings.bind = v;
    }
    if let Some(v) = get("upstream_url") {
        settings.upstream_url = v.trim_end_matches('/').to_string();
    }
    if let Some(v) = get("upstream_key") {
        settings.upstream_key = v;
    }
    if let Some(v) = get("model") {
        settings.model = v;
    }
    if let Some(v) = get("mail_endpoint") {
        settings.mail_endpoint = v;
    }
    if let Some(v) = get("mail_key") {
        settings.mail_key = v;
    }
    if let Some(v) = get("mail_from") {
        settings.mail_from = v;
    }
    if let Some(v) = get("mail_to") {
        settings.mail_to = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
