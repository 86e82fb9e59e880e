use typeahead_query::{encode_query_value, endpoint_url, search_url};
use url::Url;

#[test]
fn composes_endpoint_from_base_core_and_handler() {
    let url = endpoint_url("http://localhost:8983/solr", "movies", "suggest_topic").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8983/solr/movies/suggest_topic");

    let url = endpoint_url("http://localhost:8983/solr/", "/movies/", "/select").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8983/solr/movies/select");
}

#[test]
fn invalid_base_is_rejected() {
    assert!(endpoint_url("not a url", "movies", "select").is_err());
}

#[test]
fn query_value_is_percent_encoded() {
    assert_eq!(encode_query_value("star wars"), "star%20wars");
    assert_eq!(encode_query_value("a&b=c#d"), "a%26b%3Dc%23d");
    assert_eq!(encode_query_value("title:alien~"), "title%3Aalien~");
    assert_eq!(encode_query_value("été"), "%C3%A9t%C3%A9");
}

#[test]
fn search_url_sends_raw_text_not_normalized() {
    let endpoint = Url::parse("http://localhost:8983/solr/movies/select").unwrap();
    let url = search_url(&endpoint, " Alien ");
    assert_eq!(url.query(), Some("q=%20Alien%20"));
}

#[test]
fn search_url_keeps_existing_parameters() {
    let endpoint = Url::parse("http://h/solr/movies/select?wt=json").unwrap();
    let url = search_url(&endpoint, "heat");
    assert_eq!(url.as_str(), "http://h/solr/movies/select?wt=json&q=heat");
}
