use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_not_available_string() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.cpp",
        "void show() {\n    MessageBox(\"Could not open the file\");\n}\n",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Could not open the file"  not-l10n-available
      --> ./src/main.cpp:2:16
      |
    2 | MessageBox("Could not open the file");
      |            ^
      = note: used by function 'MessageBox', not exposed for translation
      = hint: wrap the string in a translation function such as _()


    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.cpp",
        "void label() {\n    SetLabel(_(\"Open the selected file\"));\n}\n",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 file (1 C/C++), 1 string - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_catalog_printf_mismatch() -> Result<()> {
    let test = CliTest::with_file(
        "po/fr.po",
        "#, c-format\nmsgid \"Deleted %d files\"\nmsgstr \"%s fichiers supprimés\"\n",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Deleted %d files"  printf-mismatch
      --> ./po/fr.po:2:1
      = note: Placeholders differ: source has [%d], translation has [%s]


    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_resource_image_name_is_suspect() -> Result<()> {
    let test = CliTest::with_file(
        "res/app.rc",
        "STRINGTABLE\nBEGIN\n    IDS_IMAGE \"image.bmp\"\nEND\n",
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "image.bmp"  suspect-l10n-string
      --> ./res/app.rc:3:15
      |
    3 | IDS_IMAGE "image.bmp"
      |           ^
      = note: exposed for translation by variable 'IDS_IMAGE' but looks internal


    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;

    test.write_file(
        ".i18nreviewrc.json",
        r#"{
         "ignores": ["**/generated/**"],
         "includes": []
     }"#,
    )?;
    test.write_file(
        "generated/strings.cpp",
        "MessageBox(\"Could not open the file\");\n",
    )?;
    test.write_file("src/ok.cpp", "SetLabel(_(\"Open the selected file\"));\n")?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 file (1 C/C++), 1 string - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_checks_override() -> Result<()> {
    let test = CliTest::with_file(
        "src/main.cpp",
        "MessageBox(\"Could not open the file\");\n",
    )?;

    assert_cmd_snapshot!(
        test.check_command().args(["--checks", "tabs,trailing-spaces"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 1 file (1 C/C++), 0 strings - no issues found

    ----- stderr -----
    "
    );

    Ok(())
}

#[test]
fn test_source_root_argument() -> Result<()> {
    let test = CliTest::with_file(
        "project/src/main.cpp",
        "MessageBox(\"Could not open the file\");\n",
    )?;

    assert_cmd_snapshot!(
        test.check_command().args(["--source-root", "project"]),
        @r#"
    success: false
    exit_code: 1
    ----- stdout -----
    error: "Could not open the file"  not-l10n-available
      --> project/src/main.cpp:1:12
      |
    1 | MessageBox("Could not open the file");
      |            ^
      = note: used by function 'MessageBox', not exposed for translation
      = hint: wrap the string in a translation function such as _()


    ✘ 1 problem (1 error, 0 warnings)

    ----- stderr -----
    "#
    );

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nreviewrc.json", r#"{ "checks": ["no-such-check"] }"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Invalid value in 'checks': unknown check 'no-such-check'
    ");

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("--help"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Find i18n and l10n issues in C/C++, C#, resource scripts and gettext catalogs

    Usage: i18n-review [COMMAND]

    Commands:
      check  Review strings, formatting and translation catalogs
      init   Initialize a new .i18nreviewrc.json configuration file
      help   Print this message or the help of the given subcommand(s)

    Options:
      -h, --help     Print help
      -V, --version  Print version

    ----- stderr -----
    ");

    Ok(())
}
