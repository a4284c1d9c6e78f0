use anyhow::Result;

use crate::{CliTest, capture};

const EN_JSON: &str = r#"{"hello.world": "Hello", "extra.key": "X"}"#;

/// A project whose sources reference `hello.world` and `goodbye`, the latter
/// through a call split across several lines.
fn project_with_sources(test: &CliTest) -> Result<()> {
    test.write_file(
        "src/widget.rs",
        "fn render(widget: &Widget) {\n    let title = widget.tr(\"hello.world\");\n}\n",
    )?;
    test.write_file(
        "src/other.rs",
        "fn farewell(other: &Other) {\n    other.tr(\n        'goodbye'\n    );\n}\n",
    )?;
    Ok(())
}

#[test]
fn test_reports_missing_and_orphan_keys() -> Result<()> {
    let test = CliTest::new()?;
    project_with_sources(&test)?;
    test.write_file("assets/lang/en.json", EN_JSON)?;

    let out = capture(&mut test.command())?;

    // Findings are informational; the run still succeeds.
    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Found 2 unique translation keys in src"));
    assert!(out.stdout.contains("Checking: en.json"));
    assert!(out.stdout.contains("missing keys (used in code but not in en.json):"));
    assert!(out.stdout.contains("    - goodbye"));
    assert!(out.stdout.contains("orphan keys (defined in en.json but never used):"));
    assert!(out.stdout.contains("    - extra.key"));
    assert!(out.stdout.contains("2 problems (1 missing key, 1 orphan)"));
    // Keys present on both sides are not listed.
    assert!(!out.stdout.contains("    - hello.world"));

    Ok(())
}

#[test]
fn test_clean_project_reports_confirmations() -> Result<()> {
    let test = CliTest::new()?;
    project_with_sources(&test)?;
    test.write_file(
        "assets/lang/en.json",
        r#"{"hello.world": "Hello", "goodbye": "Bye"}"#,
    )?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("no missing keys"));
    assert!(out.stdout.contains("no orphan keys"));
    assert!(!out.stdout.contains("problems"));

    Ok(())
}

#[test]
fn test_missing_source_dir_fails() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("assets/lang/en.json", EN_JSON)?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Error:"));
    assert!(out.stderr.contains("Source directory"));
    assert!(out.stdout.is_empty());

    Ok(())
}

#[test]
fn test_missing_lang_dir_fails() -> Result<()> {
    let test = CliTest::new()?;
    project_with_sources(&test)?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Error:"));
    assert!(out.stderr.contains("Language directory"));
    assert!(out.stdout.is_empty());

    Ok(())
}

#[test]
fn test_invalid_json_is_skipped() -> Result<()> {
    let test = CliTest::new()?;
    project_with_sources(&test)?;
    test.write_file("assets/lang/broken.json", "{ not json at all")?;
    test.write_file(
        "assets/lang/en.json",
        r#"{"hello.world": "Hello", "goodbye": "Bye"}"#,
    )?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Checking: broken.json"));
    assert!(out.stdout.contains("Error checking broken.json"));
    // The remaining file is still checked.
    assert!(out.stdout.contains("Checking: en.json"));
    assert!(out.stdout.contains("no missing keys"));

    Ok(())
}

#[test]
fn test_empty_source_tree_reports_all_orphans() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("src")?;
    test.write_file("assets/lang/en.json", EN_JSON)?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Found 0 unique translation keys"));
    assert!(out.stdout.contains("no missing keys"));
    assert!(out.stdout.contains("    - extra.key"));
    assert!(out.stdout.contains("    - hello.world"));

    Ok(())
}

#[test]
fn test_output_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    project_with_sources(&test)?;
    test.write_file("assets/lang/en.json", EN_JSON)?;
    test.write_file("assets/lang/de.json", r#"{"hello.world": "Hallo"}"#)?;

    let first = capture(&mut test.command())?;
    let second = capture(&mut test.command())?;

    assert_eq!(first.code, Some(0));
    assert_eq!(first.stdout, second.stdout);

    Ok(())
}

#[test]
fn test_lang_files_checked_in_name_order() -> Result<()> {
    let test = CliTest::new()?;
    test.create_dir("src")?;
    test.write_file("assets/lang/b.json", "{}")?;
    test.write_file("assets/lang/a.json", "{}")?;

    let out = capture(&mut test.command())?;

    let a = out.stdout.find("Checking: a.json").unwrap();
    let b = out.stdout.find("Checking: b.json").unwrap();
    assert!(a < b);

    Ok(())
}

#[test]
fn test_flags_override_roots() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("code/app.rs", "app.tr(\"play\");\n")?;
    test.write_file("i18n/en.json", r#"{"play": "Play"}"#)?;

    // Absolute paths work too.
    let lang_root = test.root().join("i18n");
    let out = capture(
        test.check_command()
            .args(["--source-root", "code"])
            .arg("--lang-root")
            .arg(&lang_root),
    )?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Found 1 unique translation key in code"));
    assert!(out.stdout.contains("no missing keys"));
    assert!(out.stdout.contains("no orphan keys"));

    Ok(())
}

#[test]
fn test_config_file_sets_roots() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".trlintrc.json",
        r#"{ "sourceRoot": "code", "langRoot": "i18n" }"#,
    )?;
    test.write_file("code/app.rs", "app.tr(\"play\");\n")?;
    test.write_file("i18n/en.json", r#"{"play": "Play"}"#)?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Found 1 unique translation key in code"));
    assert!(out.stdout.contains("no missing keys"));

    Ok(())
}

#[test]
fn test_config_ignores_are_honored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".trlintrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("src/app.rs", "app.tr(\"real\");\n")?;
    test.write_file("src/generated/gen.rs", "gen.tr(\"generated\");\n")?;
    test.write_file("assets/lang/en.json", r#"{"real": "Real"}"#)?;

    let out = capture(&mut test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Found 1 unique translation key"));
    assert!(out.stdout.contains("no missing keys"));
    assert!(out.stdout.contains("no orphan keys"));

    Ok(())
}

#[test]
fn test_verbose_prints_scan_detail() -> Result<()> {
    let test = CliTest::new()?;
    project_with_sources(&test)?;
    test.write_file("assets/lang/en.json", EN_JSON)?;

    let out = capture(test.check_command().arg("--verbose"))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Scanned 2 source files"));

    Ok(())
}

#[test]
fn test_help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let out = capture(test.command().arg("--help"))?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("check"));
    assert!(out.stdout.contains("init"));

    Ok(())
}
