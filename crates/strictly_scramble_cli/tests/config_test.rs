//! Tests for TOML configuration and its fallbacks.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use strictly_scramble::{Dictionary, RejectionReason, RootWord, WordList};
use strictly_scramble_cli::{CheckOutcome, ScrambleConfig, check_candidates};

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    path
}

#[test]
fn test_defaults() {
    let config = ScrambleConfig::new();
    assert!(config.word_list().is_none());
    assert_eq!(
        config.dictionary().as_deref(),
        Some(std::path::Path::new("/usr/share/dict/words"))
    );
    assert_eq!(config.session().round_limit(), 8);
    assert_eq!(config.session().min_word_length(), 3);
    assert_eq!(config.session().language(), "en");
    assert_eq!(config.dictionary_language(), "en");
}

#[test]
fn test_from_file_with_partial_session_table() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(
        &dir,
        "strictly_scramble.toml",
        r#"
word_list = "start.txt"

[session]
round_limit = 3
"#,
    );

    let config = ScrambleConfig::from_file(&path).expect("Config should parse");
    assert_eq!(config.word_list().as_deref(), Some(std::path::Path::new("start.txt")));
    assert_eq!(config.session().round_limit(), 3);
    assert_eq!(config.session().min_word_length(), 3);
    assert_eq!(config.log_file(), &PathBuf::from("strictly_scramble.log"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "bad.toml", "[session\nround_limit = ");

    let err = ScrambleConfig::from_file(&path).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ScrambleConfig::load_or_default(&dir.path().join("absent.toml"))
        .expect("Missing config is not an error");
    assert_eq!(config, ScrambleConfig::default());
}

#[test]
fn test_overrides_only_apply_when_given() {
    let config = ScrambleConfig::new()
        .with_word_list(None)
        .with_round_limit(Some(2))
        .with_language(Some("nb_NO".to_string()));

    assert!(config.word_list().is_none());
    assert_eq!(config.session().round_limit(), 2);
    assert_eq!(config.session().language(), "nb_NO");
}

#[test]
fn test_word_list_falls_back_to_builtin() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = ScrambleConfig::new().with_word_list(Some(dir.path().join("missing.txt")));
    assert_eq!(config.load_word_list(), WordList::builtin());
}

#[test]
fn test_configured_word_list_is_used() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "start.txt", "abductor\nsilkworm\n");
    let config = ScrambleConfig::new().with_word_list(Some(path));
    assert_eq!(config.load_word_list().len(), 2);
}

#[test]
fn test_dictionary_file_is_used() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "words", "silk\nworm\n");
    let dictionary = ScrambleConfig::new()
        .with_dictionary(Some(path))
        .load_dictionary();

    assert!(dictionary.is_known_word("silk", "en"));
    assert!(!dictionary.is_known_word("slik", "en"));
}

#[test]
fn test_missing_dictionary_accepts_every_word() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let dictionary = ScrambleConfig::new()
        .with_dictionary(Some(dir.path().join("missing")))
        .load_dictionary();

    assert!(dictionary.is_known_word("slik", "en"));
}

#[test]
fn test_empty_dictionary_accepts_every_word() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "words", "\n\n");
    let dictionary = ScrambleConfig::new()
        .with_dictionary(Some(path))
        .load_dictionary();

    assert!(dictionary.is_known_word("slik", "en"));
}

#[test]
fn test_session_language_must_match_dictionary_language() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "words", "silk\nworm\n");
    let root = RootWord::parse("silkworm").expect("root");
    let candidates = ["silk".to_string()];

    let config = ScrambleConfig::new()
        .with_dictionary(Some(path.clone()))
        .with_language(Some("fr".to_string()));
    let outcomes = check_candidates(
        &root,
        &candidates,
        config.load_dictionary(),
        config.session().clone(),
    );
    assert!(matches!(
        outcomes[..],
        [CheckOutcome::Rejected {
            reason: RejectionReason::NotAWord,
            ..
        }]
    ));

    let config = config.with_dictionary_language(Some("fr_FR".to_string()));
    let outcomes = check_candidates(
        &root,
        &candidates,
        config.load_dictionary(),
        config.session().clone(),
    );
    assert!(matches!(outcomes[..], [CheckOutcome::Accepted(_)]));
}

#[test]
fn test_dictionary_language_from_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let words = write(&dir, "ord", "silke\n");
    let path = write(
        &dir,
        "strictly_scramble.toml",
        &format!(
            "dictionary = {:?}\ndictionary_language = \"nb\"\n\n[session]\nlanguage = \"nb_NO\"\n",
            words.display().to_string()
        ),
    );

    let config = ScrambleConfig::from_file(&path).expect("Config should parse");
    assert_eq!(config.dictionary_language(), "nb");
    let dictionary = config.load_dictionary();
    assert!(dictionary.is_known_word("silke", config.session().language()));
    assert!(!dictionary.is_known_word("silke", "en"));
}

#[test]
fn test_empty_dictionary_path_accepts_every_word() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write(&dir, "strictly_scramble.toml", "dictionary = \"\"\n");

    let config = ScrambleConfig::from_file(&path).expect("Config should parse");
    assert!(config.load_dictionary().is_known_word("slik", "en"));
}

#[test]
fn test_without_dictionary_accepts_every_word() {
    let config = ScrambleConfig::new().without_dictionary();
    assert!(config.dictionary().is_none());
    assert!(config.load_dictionary().is_known_word("slik", "en"));
}
