use std::time::Duration;

use pantrycam::Config;
use temp_dir::TempDir;

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("pantrycam.toml");
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"
port = 8080

[capture]
analysis_delay_ms = 0

[logging]
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.capture.analysis_delay(), Duration::ZERO);
    assert_eq!(config.capture.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "json");
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.capture.analysis_delay(), Duration::from_millis(800));
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");

    Ok(())
}

#[test]
fn test_invalid_file_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("broken.toml");
    std::fs::write(&path, "[logging]\nformat = \"xml\"\n")?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    assert!(config.validate().is_err());

    Ok(())
}
