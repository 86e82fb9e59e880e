use typeahead_api::request::{parse_request, Request};

#[test]
fn get_request_carries_host_and_closes_connection() {
    let req = Request::get("localhost:8983", "/solr/movies/suggest_topic?q=star");
    let text = String::from_utf8(req.to_bytes()).unwrap();
    assert!(text.starts_with("GET /solr/movies/suggest_topic?q=star HTTP/1.1\r\n"));
    assert!(text.contains("host: localhost:8983\r\n"));
    assert!(text.contains("connection: close\r\n"));
    assert!(text.ends_with("\r\n\r\n"));
}

#[test]
fn encoded_request_parses_back_with_headers() {
    let req = Request::get("example.test", "/select?q=a%20b");
    let parsed = parse_request(&req.to_bytes()).unwrap();
    assert_eq!(parsed.method, "GET");
    assert_eq!(parsed.target, "/select?q=a%20b");
    assert_eq!(parsed.header("Accept"), Some("application/json"));
    assert_eq!(parsed.header("HOST"), Some("example.test"));
}
