use anyhow::Result;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_missing_key_is_reported_with_context() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.properties", "a=1\nb=2\n")?;
    test.write_file("i18n/i18n_de.properties", "a=X\n")?;

    let output = test.scan(&["i18n"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Found 2 .properties files"));
    assert!(out.contains("Found 2 translations in i18n.properties"));
    assert!(out.contains("Found 1 translations in i18n_de.properties"));
    assert!(out.contains("Property \"b\" does not exist in"));
    assert!(out.contains("Property \"b\" has following value in i18n.properties: 2"));
    assert!(out.contains("Found 1 missing properties"));
    assert!(out.contains("Found 0 missing properties, well done!"));

    Ok(())
}

#[test]
fn test_identical_key_sets_exit_zero() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.properties", "a=1\nb=2\n")?;
    test.write_file("i18n/i18n_de.properties", "a=A\nb=B\n")?;

    let output = test.scan(&["i18n"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(!out.contains("does not exist"));
    assert!(out.contains("Found 0 missing properties, well done!"));

    Ok(())
}

#[test]
fn test_reference_files_only_skips_other_locales() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.properties", "a=1\n")?;
    test.write_file("i18n/i18n_de.properties", "a=A\n")?;
    test.write_file("i18n/i18n_fr.properties", "a=un\nc=trois\n")?;

    let output = test.scan(&["i18n", "true"])?;
    let out = stdout(&output);

    // The French file is not checked, but its extra key is discovered while
    // the universe is built and flagged on both reference files.
    assert_eq!(output.status.code(), Some(1));
    assert!(!out.contains("Checking i18n/i18n_fr.properties"));
    assert!(out.contains("Property \"c\" does not exist in"));
    assert!(out.contains("Property \"c\" has following value in i18n_fr.properties: trois"));

    Ok(())
}

#[test]
fn test_reference_values_only_filters_context_lines() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.properties", "a=1\nb=2\n")?;
    test.write_file("i18n/i18n_de.properties", "a=A\n")?;
    test.write_file("i18n/i18n_fr.properties", "a=un\nb=deux\n")?;

    let output = test.scan(&["i18n", "false", "true"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Property \"b\" has following value in i18n.properties: 2"));
    assert!(!out.contains("has following value in i18n_fr.properties"));

    Ok(())
}

#[test]
fn test_flag_string_other_than_true_is_false() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.properties", "a=1\n")?;
    test.write_file("i18n/i18n_fr.properties", "a=un\nc=trois\n")?;

    let output = test.scan(&["i18n", "yes"])?;
    let out = stdout(&output);

    // "yes" does not enable the restriction, so the French file is checked.
    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("Checking"));
    assert!(out.contains("i18n_fr.properties for missing properties"));

    Ok(())
}

#[test]
fn test_missing_scan_directory_exits_one() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan(&["does-not-exist"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Scan directory does-not-exist does not exist"));
    assert!(!stdout(&output).contains("Looking for"));

    Ok(())
}

#[test]
fn test_empty_directory_exits_zero() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/.gitkeep", "")?;

    let output = test.scan(&["i18n"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Found 0 .properties files"));

    Ok(())
}

#[test]
fn test_corrupt_file_aborts_with_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.properties", "a=1\n")?;
    test.write_file("i18n/i18n_de.properties", "=no key\n")?;

    let output = test.scan(&["i18n"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("i18n_de.properties"));

    Ok(())
}

#[test]
fn test_config_file_prefixes_are_honored() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".propcheckrc.json",
        r#"{
             "primaryPrefix": "bundle.",
             "secondaryPrefix": "bundle_nl."
         }"#,
    )?;
    test.write_file("i18n/bundle.properties", "a=1\n")?;
    test.write_file("i18n/bundle_nl.properties", "a=A\n")?;
    test.write_file("i18n/bundle_fr.properties", "a=un\nc=drie\n")?;

    let output = test.scan(&["i18n", "true"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.contains("Checking i18n/bundle_fr.properties"));
    assert!(out.contains("Property \"c\" does not exist in"));

    Ok(())
}

#[test]
fn test_prefix_override_beats_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/messages.properties", "a=1\n")?;
    test.write_file("i18n/messages_de.properties", "a=A\n")?;
    test.write_file("i18n/i18n.properties", "a=X\nc=extra\n")?;

    let output = test.scan(&[
        "i18n",
        "true",
        "false",
        "--primary-prefix",
        "messages.",
        "--secondary-prefix",
        "messages_de.",
    ])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.contains("Checking i18n/i18n.properties"));
    assert!(out.contains("Property \"c\" does not exist in"));

    Ok(())
}

#[test]
fn test_case_insensitive_extension_match() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/i18n.PROPERTIES", "a=1\n")?;
    test.write_file("i18n/notes.txt", "not a bundle\n")?;

    let output = test.scan(&["i18n"])?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    assert!(out.contains("Found 1 .properties files"));
    assert!(out.contains("Found 1 translations in i18n.PROPERTIES"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.scan(&["--help"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage"));

    Ok(())
}
