use banyan_rs::{AccessTierInfo, Client, Error, ResourcePath, API_V1, API_V2};
use std::time::{Duration, Instant};

mod common;
use common::{
    closed_port_url, empty_response, envelope_response, json_response, serve, silent_server,
};

#[test]
fn refresh_token_is_exchanged_for_access_token() {
    let server = serve(vec![
        json_response("200 OK", r#"{"Message":"access-1"}"#),
        envelope_response(r#"{"id":"at-1","name":"at1","address":"a.example.com"}"#),
    ]);

    let client = Client::new(&server.base_url, "refresh-1", "").expect("client");
    let tier = client.access_tiers().get("at-1").expect("get");
    assert_eq!(tier.name, "at1");

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/v1/refresh_token");
    assert_eq!(
        requests[0].header_value("Authorization"),
        Some("Bearer refresh-1")
    );
    assert_eq!(requests[1].method, "GET");
    assert_eq!(requests[1].path, "/api/v2/access_tier/at-1");
    assert_eq!(
        requests[1].header_value("Authorization"),
        Some("Bearer access-1")
    );
}

#[test]
fn api_key_is_used_without_exchange() {
    let server = serve(vec![envelope_response(r#"{"id":"at-1","name":"at1"}"#)]);

    let client = Client::new(&server.base_url, "refresh-1", "raw-key").expect("client");
    client.access_tiers().get("at-1").expect("get");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/v2/access_tier/at-1");
    assert_eq!(
        requests[0].header_value("Authorization"),
        Some("Bearer raw-key")
    );
}

#[test]
fn failed_exchange_returns_no_client() {
    let server = serve(vec![json_response("401 Unauthorized", r#"{"error":"expired"}"#)]);

    let err = Client::new(&server.base_url, "stale", "").expect_err("exchange fails");
    match err {
        Error::Status(status) => {
            assert_eq!(status.status, 401);
            assert_eq!(status.body, r#"{"error":"expired"}"#);
            assert!(status.request.starts_with("POST http://"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn undecodable_exchange_body_is_fatal() {
    let server = serve(vec![json_response("200 OK", "<html>login</html>")]);

    let err = Client::new(&server.base_url, "refresh", "").expect_err("decode fails");
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[test]
fn non_success_status_carries_request_and_body() {
    let server = serve(vec![json_response(
        "404 Not Found",
        r#"{"error_code":404,"error_description":"no such access tier"}"#,
    )]);
    let client = Client::new(&server.base_url, "refresh", "key").expect("client");

    let err = client.access_tiers().get("missing").expect_err("not found");
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
    match err {
        Error::Status(status) => {
            assert_eq!(
                status.request,
                format!("GET {}/api/v2/access_tier/missing", server.base_url)
            );
            assert!(status.body.contains("no such access tier"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn bad_request_is_not_swallowed_into_a_default_record() {
    let server = serve(vec![empty_response("400 Bad Request")]);
    let client = Client::new(&server.base_url, "refresh", "key").expect("client");

    let result: Result<AccessTierInfo, Error> = client.access_tiers().get("at-1");
    assert_eq!(result.expect_err("bad request").status(), Some(400));
}

#[test]
fn envelope_error_code_becomes_api_error() {
    let server = serve(vec![json_response(
        "200 OK",
        r#"{"request_id":"r-9","error_code":3,"error_description":"quota exceeded","data":null}"#,
    )]);
    let client = Client::new(&server.base_url, "refresh", "key").expect("client");

    match client.satellites().get("sat-1") {
        Err(Error::Api(api)) => {
            assert_eq!(api.error_code, 3);
            assert_eq!(api.request_id.as_deref(), Some("r-9"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn raw_helpers_compose_paths_and_queries() {
    let server = serve(vec![
        json_response("200 OK", r#"{"raw":true}"#),
        json_response("201 Created", r#"{"created":true}"#),
        empty_response("204 No Content"),
    ]);
    let client = Client::new(&server.base_url, "refresh", "key").expect("client");
    let rest = client.rest();

    let body = rest
        .read_query(&ResourcePath::new(API_V2, "access_tier"), &[("name", "edge one")])
        .expect("read_query");
    assert_eq!(body, br#"{"raw":true}"#.to_vec());

    let body = rest
        .update(
            &ResourcePath::new(API_V2, "service_tunnel").id("st-1"),
            &serde_json::json!({"enabled": false}),
        )
        .expect("update");
    assert_eq!(body, br#"{"created":true}"#.to_vec());

    rest.delete_query(
        &ResourcePath::new(API_V1, "netagent"),
        &[("CLUSTERNAME", "cluster-1"), ("HOSTNAME", "edge-01")],
    )
    .expect("delete_query");

    let requests = server.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/v2/access_tier");
    assert_eq!(requests[0].query_value("name"), Some("edge one"));

    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].path, "/api/v2/service_tunnel/st-1");
    assert_eq!(
        requests[1].header_value("Content-Type"),
        Some("application/json")
    );
    assert_eq!(requests[1].json(), serde_json::json!({"enabled": false}));

    assert_eq!(requests[2].method, "DELETE");
    assert_eq!(requests[2].path, "/api/v1/netagent");
    assert_eq!(requests[2].query_value("CLUSTERNAME"), Some("cluster-1"));
    assert_eq!(requests[2].query_value("HOSTNAME"), Some("edge-01"));
}

#[test]
fn connection_errors_propagate_unchanged() {
    let client = Client::new(&closed_port_url(), "refresh", "key").expect("client");

    let err = client.api_keys().get("key-1").expect_err("refused");
    assert!(matches!(err, Error::Http(_)), "got {err:?}");
}

#[test]
fn refused_exchange_fails_construction() {
    let err = Client::new(&closed_port_url(), "refresh", "").expect_err("refused");
    assert!(matches!(err, Error::Http(_)), "got {err:?}");
}

#[test]
fn configured_timeout_reaches_http_client() {
    let base_url = silent_server(Duration::from_secs(5));
    let client = Client::builder(&base_url)
        .expect("builder")
        .refresh_token("refresh")
        .api_key("key")
        .timeout(Duration::from_millis(200))
        .build()
        .expect("client");

    let started = Instant::now();
    match client.satellites().get("sat-1") {
        Err(Error::Http(err)) => assert!(err.is_timeout(), "got {err:?}"),
        other => panic!("unexpected result: {other:?}"),
    }
    assert!(started.elapsed() < Duration::from_secs(5));
}
