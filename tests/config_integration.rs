use std::path::PathBuf;

use keycalc::config::{
    ConfigFlags, ThemeMode, clear_config_flags, load_config_flags, parse_flag_tokens,
    save_config_flags,
};

#[test]
fn test_config_file_parsing_ignores_comments_and_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".keycalcrc");
    let content = r"
# comment
--no-mouse

--theme light
   
--log-file=calc.log
";
    std::fs::write(&path, content).unwrap();

    let flags = load_config_flags(&path).unwrap();
    assert!(flags.no_mouse);
    assert_eq!(flags.theme, Some(ThemeMode::Light));
    assert_eq!(flags.log_file, Some(PathBuf::from("calc.log")));
}

#[test]
fn test_cli_flags_override_file_flags() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".keycalcrc");
    std::fs::write(&path, "--no-mouse\n--theme light\n--log-file file.log\n").unwrap();

    let file_flags = load_config_flags(&path).unwrap();
    let cli_args = vec![
        "keycalc".to_string(),
        "--theme".to_string(),
        "dark".to_string(),
    ];
    let cli_flags = parse_flag_tokens(&cli_args);

    let effective = file_flags.union(&cli_flags);
    assert!(effective.no_mouse, "file flags should remain enabled");
    assert_eq!(effective.theme, Some(ThemeMode::Dark), "cli should override theme");
    assert_eq!(
        effective.log_file,
        Some(PathBuf::from("file.log")),
        "file config should be preserved when CLI does not override"
    );
}

#[test]
fn test_local_file_overrides_global_file() {
    let dir = tempfile::tempdir().unwrap();
    let global = dir.path().join("config");
    let local = dir.path().join(".keycalcrc");
    std::fs::write(&global, "--theme dark\n--log-file global.log\n").unwrap();
    std::fs::write(&local, "--theme light\n").unwrap();

    let merged = load_config_flags(&global)
        .unwrap()
        .union(&load_config_flags(&local).unwrap());
    assert_eq!(merged.theme, Some(ThemeMode::Light));
    assert_eq!(merged.log_file, Some(PathBuf::from("global.log")));
}

#[test]
fn test_saved_flags_load_back_and_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keycalc").join("config");
    let flags = ConfigFlags {
        no_mouse: false,
        theme: Some(ThemeMode::Light),
        log_file: None,
    };

    save_config_flags(&path, &flags).unwrap();
    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.starts_with('#'));
    assert!(saved.contains("--theme light"));
    assert_eq!(load_config_flags(&path).unwrap(), flags);

    clear_config_flags(&path).unwrap();
    assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    // Clearing twice is fine.
    clear_config_flags(&path).unwrap();
}
