use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;
use usernamecrafter::core::NoopObserver;
use usernamecrafter::domain::ports::ConfigProvider;
use usernamecrafter::{
    CrafterEngine, CrafterError, CrafterSettings, LoaderOptions, OverlongPolicy, TomlConfig,
};

fn write_file(dir: &Path, name: &str, content: &[u8]) -> Result<String> {
    let path = dir.join(name);
    std::fs::write(&path, content)?;
    Ok(path.to_str().unwrap().to_string())
}

fn settings(dir: &Path, firstnames: &[u8], lastnames: &[u8], format: &str) -> Result<CrafterSettings> {
    Ok(CrafterSettings {
        firstnames_path: write_file(dir, "firstnames.txt", firstnames)?,
        lastnames_path: write_file(dir, "lastnames.txt", lastnames)?,
        output_path: dir.join("output.txt").to_str().unwrap().to_string(),
        format: format.to_string(),
        max_lines: None,
        loader: LoaderOptions::default(),
        monitoring: false,
    })
}

/// 端對端測試：讀取兩份名單並寫出所有組合
#[test]
fn test_end_to_end_generation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(
        temp_dir.path(),
        b"Ann\nBob\n",
        b"Lee\nSmith\n",
        "{firstname}.{lastname}@dom.com",
    )?;
    let output_path = settings.output_path.clone();

    let report = CrafterEngine::new(settings).run()?;

    assert_eq!(report.firstnames, 2);
    assert_eq!(report.lastnames, 2);
    assert_eq!(report.lines_written, 4);

    let output = std::fs::read_to_string(&output_path)?;
    assert_eq!(
        output,
        "Ann.Lee@dom.com\nAnn.Smith@dom.com\nBob.Lee@dom.com\nBob.Smith@dom.com\n"
    );
    assert_eq!(report.bytes_written, output.len() as u64);
    Ok(())
}

#[test]
fn test_truncated_template_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(
        temp_dir.path(),
        b"Alexandra\nJo\n",
        b"Smith\n",
        "{firstname}(3){lastname}(3)",
    )?;
    let output_path = settings.output_path.clone();

    CrafterEngine::new(settings).run_with_observer(&NoopObserver)?;

    assert_eq!(std::fs::read_to_string(output_path)?, "AleSmi\nJoSmi\n");
    Ok(())
}

#[test]
fn test_firstname_round_trip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let firstnames = "Ann\nBob\nCarla\n";
    let settings = settings(temp_dir.path(), firstnames.as_bytes(), b"x\ny\n", "{firstname}")?;
    let output_path = settings.output_path.clone();

    CrafterEngine::new(settings).run()?;

    let output = std::fs::read_to_string(output_path)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["Ann", "Ann", "Bob", "Bob", "Carla", "Carla"]);

    let distinct: Vec<&str> = lines.iter().step_by(2).copied().collect();
    assert_eq!(distinct.join("\n") + "\n", firstnames);
    Ok(())
}

#[test]
fn test_empty_name_file_produces_empty_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), b"", b"Lee\n", "{firstname}{lastname}")?;
    let output_path = settings.output_path.clone();

    let report = CrafterEngine::new(settings).run()?;

    assert_eq!(report.lines_written, 0);
    assert_eq!(std::fs::read(output_path)?, Vec::<u8>::new());
    Ok(())
}

#[test]
fn test_crlf_input_keeps_carriage_return_by_default() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let settings = settings(temp_dir.path(), b"Ann\r\n", b"Lee\r\n", "{firstname}.{lastname}")?;
    let output_path = settings.output_path.clone();

    CrafterEngine::new(settings).run()?;

    assert_eq!(std::fs::read(output_path)?, b"Ann\r.Lee\r\n".to_vec());
    Ok(())
}

#[test]
fn test_crlf_input_with_strip_option() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut settings = settings(temp_dir.path(), b"Ann\r\n", b"Lee\r\n", "{firstname}.{lastname}")?;
    settings.loader.strip_carriage_return = true;
    let output_path = settings.output_path.clone();

    CrafterEngine::new(settings).run()?;

    assert_eq!(std::fs::read_to_string(output_path)?, "Ann.Lee\n");
    Ok(())
}

#[test]
fn test_missing_firstnames_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut settings = settings(temp_dir.path(), b"Ann\n", b"Lee\n", "{firstname}")?;
    settings.firstnames_path = temp_dir
        .path()
        .join("missing.txt")
        .to_str()
        .unwrap()
        .to_string();
    let output_path = settings.output_path.clone();

    let err = CrafterEngine::new(settings).run().unwrap_err();

    match &err {
        CrafterError::FileAccess { role, .. } => assert_eq!(role, "firstnames"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(err.exit_code(), 3);
    assert!(!Path::new(&output_path).exists());
    Ok(())
}

#[test]
fn test_overlong_name_rejected_leaves_no_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut long_line = vec![b'x'; 120];
    long_line.push(b'\n');
    let mut settings = settings(temp_dir.path(), &long_line, b"Lee\n", "{firstname}")?;
    settings.loader.overlong = OverlongPolicy::Reject;
    let output_path = settings.output_path.clone();

    let err = CrafterEngine::new(settings).run().unwrap_err();

    assert!(matches!(err, CrafterError::NameTooLong { line: 1, length: 120, max: 99 }));
    assert!(!Path::new(&output_path).exists());
    Ok(())
}

#[test]
fn test_line_cap_rejects_pathological_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let names = "a\n".repeat(2_000);
    let mut settings = settings(
        temp_dir.path(),
        names.as_bytes(),
        names.as_bytes(),
        "{firstname}{lastname}",
    )?;
    settings.max_lines = Some(1_000_000);
    let output_path = settings.output_path.clone();

    let err = CrafterEngine::new(settings).run().unwrap_err();

    assert!(matches!(
        err,
        CrafterError::OutputLimitExceeded {
            requested: 4_000_000,
            limit: 1_000_000
        }
    ));
    assert!(!Path::new(&output_path).exists());
    Ok(())
}

#[test]
fn test_profile_drives_a_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let dir = temp_dir.path();
    let firstnames = write_file(dir, "first.txt", b"Oddvar\n")?;
    let lastnames = write_file(dir, "last.txt", b"Moe\n")?;
    let output = dir.join("nested").join("users.txt");
    let normalized = |p: &str| p.replace('\\', "/");

    let profile = format!(
        r#"
[input]
firstnames = "{}"
lastnames = "{}"

[output]
path = "{}"
format = "{{firstname}}(3)_{{lastname}}(3)@domain.com"
"#,
        normalized(&firstnames),
        normalized(&lastnames),
        normalized(output.to_str().unwrap())
    );
    let profile_path = write_file(dir, "profile.toml", profile.as_bytes())?;

    let config = TomlConfig::from_file(&profile_path)?;
    let settings = CrafterSettings::resolve(config.to_overrides())?;
    assert_eq!(settings.format(), "{firstname}(3)_{lastname}(3)@domain.com");

    CrafterEngine::new(settings).run()?;

    assert_eq!(std::fs::read_to_string(output)?, "Odd_Moe@domain.com\n");
    Ok(())
}
