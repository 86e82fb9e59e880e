use std::time::Duration;

use typeahead::WidgetConfig;

const VARS: &[&str] = &[
    "TYPEAHEAD_ENDPOINT",
    "TYPEAHEAD_BASE_URL",
    "TYPEAHEAD_CORE",
    "TYPEAHEAD_HANDLER",
    "TYPEAHEAD_MIN_QUERY_LEN",
    "TYPEAHEAD_DEBOUNCE_MS",
    "TYPEAHEAD_SHOW_DIAGNOSTICS",
    "TYPEAHEAD_SHOW_FOUND_COUNT",
    "TYPEAHEAD_TIMEOUT_MS",
];

fn clear_env() {
    for v in VARS {
        std::env::remove_var(v);
    }
}

#[test]
fn defaults_match_the_movies_suggest_handler() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.endpoint.as_str(), "http://localhost:8983/solr/movies/suggest_topic");
    assert_eq!(cfg.min_query_length, 2);
    assert_eq!(cfg.debounce, Duration::from_millis(350));
    assert!(cfg.show_diagnostics && cfg.show_found_count);
    assert_eq!(cfg.request_timeout, None);
}

// env is process-global, so every env-driven case lives in this one test
#[test]
fn from_env_reads_typed_settings() {
    clear_env();
    let cfg = WidgetConfig::from_env().expect("defaults");
    assert_eq!(cfg.endpoint.as_str(), "http://localhost:8983/solr/movies/suggest_topic");

    std::env::set_var("TYPEAHEAD_BASE_URL", "http://solr.internal:8983/solr");
    std::env::set_var("TYPEAHEAD_CORE", "ufo");
    std::env::set_var("TYPEAHEAD_HANDLER", "select");
    std::env::set_var("TYPEAHEAD_MIN_QUERY_LEN", "1");
    std::env::set_var("TYPEAHEAD_DEBOUNCE_MS", "50");
    std::env::set_var("TYPEAHEAD_SHOW_DIAGNOSTICS", "off");
    std::env::set_var("TYPEAHEAD_SHOW_FOUND_COUNT", "0");
    std::env::set_var("TYPEAHEAD_TIMEOUT_MS", "1500");
    let cfg = WidgetConfig::from_env().expect("valid env");
    assert_eq!(cfg.endpoint.as_str(), "http://solr.internal:8983/solr/ufo/select");
    assert_eq!(cfg.min_query_length, 1);
    assert_eq!(cfg.debounce, Duration::from_millis(50));
    assert!(!cfg.show_diagnostics);
    assert!(!cfg.show_found_count);
    assert_eq!(cfg.request_timeout, Some(Duration::from_millis(1500)));

    // zero disables the timeout the same way leaving it unset does
    std::env::set_var("TYPEAHEAD_TIMEOUT_MS", "0");
    let cfg = WidgetConfig::from_env().unwrap();
    assert_eq!(cfg.request_timeout, None);
    assert!(cfg.describe().contains(&("TYPEAHEAD_TIMEOUT_MS", "<none>".to_string())));
    std::env::set_var("TYPEAHEAD_TIMEOUT_MS", "1500");

    // unparsable numbers fall back to defaults
    std::env::set_var("TYPEAHEAD_DEBOUNCE_MS", "soon");
    assert_eq!(WidgetConfig::from_env().unwrap().debounce, Duration::from_millis(350));

    // a full endpoint wins over base/core/handler
    std::env::set_var("TYPEAHEAD_ENDPOINT", "http://other:9000/solr/books/suggest");
    let cfg = WidgetConfig::from_env().unwrap();
    assert_eq!(cfg.endpoint.as_str(), "http://other:9000/solr/books/suggest");

    let described = cfg.describe();
    assert_eq!(described[0], ("TYPEAHEAD_ENDPOINT", "http://other:9000/solr/books/suggest".to_string()));
    assert!(described.contains(&("TYPEAHEAD_TIMEOUT_MS", "1500".to_string())));

    std::env::set_var("TYPEAHEAD_ENDPOINT", "::not a url::");
    let err = WidgetConfig::from_env().expect_err("bad endpoint");
    assert!(err.to_string().contains("invalid endpoint url"));

    clear_env();
}
