use std::io::Write;

use secure_headers::{SecureConfig, SecureError};

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn load_from_file() {
    let file = write_config(
        r#"
        preset = "strict"
        server = "edge"
        referrer_policy = "same-origin"

        [[custom]]
        name = "X-Robots-Tag"
        value = "noindex"
        "#,
    );

    let secure = SecureConfig::from_file(file.path()).unwrap().build().unwrap();
    let headers = secure.headers();

    assert_eq!(headers["Server"], "edge");
    assert_eq!(headers["Referrer-Policy"], "same-origin");
    assert_eq!(headers["X-Frame-Options"], "DENY");
    assert_eq!(headers.keys().last().map(String::as_str), Some("X-Robots-Tag"));
}

#[test]
fn malformed_file() {
    let file = write_config("preset = [");
    assert!(matches!(SecureConfig::from_file(file.path()), Err(SecureError::Config(_))));
    assert_eq!(SecureConfig::from_file_or_default(file.path()), SecureConfig::default());
}

#[test]
fn unknown_preset_in_file() {
    let file = write_config("preset = \"everything\"");
    let config = SecureConfig::from_file(file.path()).unwrap();
    assert!(matches!(config.build(), Err(SecureError::UnknownPreset(_))));
}
