use rstest::rstest;

use comment_search::api::config::AppConfig;
use comment_search::CoreError;

use crate::support::catalog;

#[test]
fn defaults_fill_missing_sections() {
    let config = AppConfig::from_toml_str(
        r#"
        [meilisearch]
        host = "http://localhost:7700"
        "#,
    )
    .unwrap();

    assert_eq!(config.meilisearch.index, "courses-comments");
    assert_eq!(config.meilisearch.timeout_ms, 5_000);
    assert!(config.meilisearch.key.is_none());
    assert_eq!(config.search.param_prefix, "par");
    assert_eq!(config.search.default_limit, 20);
    assert_eq!(config.search.query_key, "q");
}

#[test]
fn explicit_values_are_kept() {
    let config = AppConfig::from_toml_str(
        r#"
        [meilisearch]
        host = "https://search.example.org"
        key = "secret"
        index = "survey"
        timeout_ms = 250

        [search]
        param_prefix = "f"
        default_limit = 50
        "#,
    )
    .unwrap();

    assert_eq!(config.meilisearch.key.as_deref(), Some("secret"));
    assert_eq!(config.meilisearch.index, "survey");
    assert_eq!(config.search.param_prefix, "f");
    assert_eq!(config.search.default_limit, 50);
    assert_eq!(config.search.offset_key, "offset");
}

#[test]
fn unparsable_toml_is_rejected() {
    assert!(matches!(
        AppConfig::from_toml_str("[meilisearch"),
        Err(CoreError::InvalidConfig(_))
    ));
    assert!(matches!(
        AppConfig::from_toml_str(""),
        Err(CoreError::InvalidConfig(_))
    ));
}

#[test]
fn valid_config_builds_a_search_service() {
    let config = AppConfig::from_toml_str(
        r#"
        [meilisearch]
        host = "http://localhost:7700"

        [search]
        param_prefix = "f"
        "#,
    )
    .unwrap();

    let search = config.build_search(catalog()).unwrap();
    assert_eq!(search.parser().prefix(), "f");
}

#[rstest]
#[case("[meilisearch]\nhost = \"\"")]
#[case("[meilisearch]\nhost = \"http://x\"\ntimeout_ms = 0")]
#[case("[meilisearch]\nhost = \"http://x\"\nindex = \"../keys\"")]
#[case("[meilisearch]\nhost = \"http://x\"\n[search]\nparam_prefix = \"\"")]
#[case("[meilisearch]\nhost = \"http://x\"\n[search]\ndefault_limit = 0")]
fn invalid_values_are_rejected_when_building(#[case] raw: &str) {
    let config = AppConfig::from_toml_str(raw).unwrap();
    assert!(matches!(
        config.build_search(catalog()),
        Err(CoreError::InvalidConfig(_))
    ));
}
