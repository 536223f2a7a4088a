//! Integration tests for config parsing, accessors and file location.

use std::fs;
use std::path::{Path, PathBuf};

use rstest::rstest;
use tempfile::TempDir;

use did::application::ApplicationError;
use did::config::{resolve_config_path, Config, DEFAULT_SEPARATOR, MAX_WIDTH};

const SECTIONS: &str = r#"
[general]
email = "email@example.com"
plugins = "custom"

[test1]
type = "git"
order = 100
path = "~/git/did"

[test2]
type = "github"
url = "https://api.github.com/"
"#;

#[test]
fn given_example_when_parsed_then_has_email() {
    assert_eq!(
        Config::example(),
        "[general]\nemail = \"Name Surname <email@example.org>\"\n"
    );
    let config = Config::parse(&Config::example()).unwrap();
    assert_eq!(config.email().unwrap(), "Name Surname <email@example.org>");
    assert_eq!(config.plugins(), None);
    assert_eq!(config.path(), None);
}

#[test]
fn given_missing_file_when_load_then_config_file_error() {
    let err = Config::load(Path::new("/tmp/does_not_exist/did/config")).unwrap_err();
    assert!(matches!(err, ApplicationError::ConfigFile { .. }));
    assert!(err.to_string().starts_with("Unable to read the config file"));
}

#[test]
fn given_file_when_load_then_remembers_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config");
    fs::write(&path, SECTIONS).unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.path(), Some(path.as_path()));
    assert_eq!(config.sections(None), vec!["general", "test1", "test2"]);
}

#[test]
fn given_key_outside_section_when_parsed_then_config_error() {
    let err = Config::parse("email = \"email@example.com\"\n").unwrap_err();
    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("no section header"));
}

#[test]
fn given_invalid_toml_when_parsed_then_config_error() {
    let err = Config::parse("[general\nemail = ").unwrap_err();
    assert!(err.to_string().starts_with("Unable to parse the config"));
}

#[test]
fn given_sections_when_queried_then_properties_match() {
    let config = Config::parse(SECTIONS).unwrap();

    assert_eq!(config.separator(), DEFAULT_SEPARATOR);
    assert_eq!(config.separator_width().unwrap(), MAX_WIDTH);
    assert_eq!(config.plugins().as_deref(), Some("custom"));
    assert_eq!(config.sections(None), vec!["general", "test1", "test2"]);
    assert_eq!(config.sections(Some("git")), vec!["test1"]);
    assert_eq!(config.sections(Some("jira")), Vec::<String>::new());
    assert_eq!(config.item("test1", "type").unwrap(), "git");
    assert_eq!(config.item("test1", "order").unwrap(), "100");
}

#[test]
fn given_missing_item_when_queried_then_config_error() {
    let config = Config::parse(SECTIONS).unwrap();
    let err = config.item("test1", "bad_typo").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Please specify the 'bad_typo' in the [test1] section."
    );
}

#[test]
fn given_section_when_listed_then_skips_type_and_order() {
    let config = Config::parse(SECTIONS).unwrap();

    let items = config.section("test1").unwrap();

    assert_eq!(items, vec![("path".to_string(), "~/git/did".to_string())]);
    assert!(config.section("nope").is_err());

    let map = config.section_map("test2").unwrap();
    assert_eq!(map["type"], "github");
    assert!(config.section_map("nope").is_none());
}

#[rstest]
#[case("[general]\n")]
#[case("[missing]\n")]
#[case("[general]\nemail = \"  \"\n")]
fn given_no_email_when_queried_then_config_error(#[case] text: &str) {
    let config = Config::parse(text).unwrap();
    assert!(matches!(
        config.email().unwrap_err(),
        ApplicationError::Config { .. }
    ));
}

#[test]
fn given_width_when_queried_then_default_or_value() {
    assert_eq!(Config::parse("[general]\n").unwrap().width().unwrap(), MAX_WIDTH);
    assert_eq!(
        Config::parse("[general]\nwidth = 123\n").unwrap().width().unwrap(),
        123
    );
    assert_eq!(
        Config::parse("[general]\nwidth = \"100\"\n").unwrap().width().unwrap(),
        100
    );
    let err = Config::parse("[general]\nwidth = \"wide\"\n")
        .unwrap()
        .width()
        .unwrap_err();
    assert!(err.to_string().contains("Invalid width 'wide'"));
}

#[rstest]
#[case("[general]\nwidth = 100000\n")]
#[case("[general]\nseparator_width = \"5000\"\n")]
fn given_width_above_limit_when_queried_then_config_error(#[case] text: &str) {
    let config = Config::parse(text).unwrap();

    let err = config
        .width()
        .and_then(|_| config.separator_width())
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Config { .. }));
    assert!(err.to_string().contains("should be integer up to 1000"));
}

#[test]
fn given_custom_separator_when_queried_then_used() {
    let config = Config::parse("[general]\nseparator = \"-\"\nseparator_width = 40\n").unwrap();
    assert_eq!(config.separator(), "-");
    assert_eq!(config.separator_width().unwrap(), 40);
}

#[rstest]
#[case("[general]\n", 1)]
#[case("[general]\nquarter = 2\n", 2)]
#[case("[general]\nquarter = \"12\"\n", 12)]
fn given_quarter_when_queried_then_parsed(#[case] text: &str, #[case] expected: u32) {
    assert_eq!(Config::parse(text).unwrap().quarter().unwrap(), expected);
}

#[rstest]
#[case("[general]\nquarter = \"broken\"\n")]
#[case("[general]\nquarter = 0\n")]
#[case("[general]\nquarter = 13\n")]
fn given_invalid_quarter_when_queried_then_config_error(#[case] text: &str) {
    let err = Config::parse(text).unwrap().quarter().unwrap_err();
    assert!(err.to_string().contains("Invalid quarter start"));
}

#[test]
fn given_explicit_paths_when_resolved_then_relative_lives_in_config_dir() {
    let dir = Path::new("/home/user/.did");

    assert_eq!(resolve_config_path(dir, None), dir.join("config"));
    assert_eq!(
        resolve_config_path(dir, Some(Path::new("/tmp/does_not_exist"))),
        PathBuf::from("/tmp/does_not_exist")
    );
    assert_eq!(
        resolve_config_path(dir, Some(Path::new("work"))),
        PathBuf::from("/home/user/.did/work")
    );
}
