use super::*;

#[test]
fn defaults_are_sane() {
    let settings = Settings::default();
    assert_eq!(settings.bind, "127.0.0.1:8787");
    assert!(!settings.upstream_url.ends_with('/'));
    assert!(settings.upstream_key.is_empty());
}

#[test]
fn apply_overrides_only_present_keys() {
    let mut settings = Settings::default();
    apply(&mut settings, |key| match key {
        "bind" => Some("0.0.0.0:9000".to_string()),
        "model" => Some("test-model".to_string()),
        _ => None,
    });
    assert_eq!(settings.bind, "0.0.0.0:9000");
    assert_eq!(settings.model, "test-model");
    assert_eq!(settings.mail_from, Settings::default().mail_from);
}

#[test]
fn upstream_url_is_normalized() {
    let mut settings = Settings::default();
    apply(&mut settings, |key| {
        (key == "upstream_url").then(|| "http://localhost:11434/v1/".to_string())
    });
    assert_eq!(settings.upstream_url, "http://localhost:11434/v1");
}

#[test]
fn later_layer_wins_over_earlier() {
    // load_settings applies file config first, then the environment; the
    // same ordering reproduced here without touching process env.
    let mut settings = Settings::default();
    apply(&mut settings, |key| {
        (key == "mail_to").then(|| "file@example.org".to_string())
    });
    apply(&mut settings, |key| {
        (key == "mail_to").then(|| "env@example.org".to_string())
    });
    assert_eq!(settings.mail_to, "env@example.org");
}
