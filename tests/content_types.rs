//! Content negotiation headers and argument mapping.

use axum::http::{Method, StatusCode};
use site_dispatch::codec::unzip_it;

mod common;

use common::{content_type_root, dispatcher, get, parameter_root, router_for, send};

#[tokio::test]
async fn test_html() {
    let router = router_for(dispatcher(content_type_root()));
    let res = get(&router, "/html").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.header("content-type").unwrap().starts_with("text/html"));
    assert_eq!(res.text(), "HTML");
}

#[tokio::test]
async fn test_zipped_html() {
    let router = router_for(dispatcher(content_type_root()));
    let res = get(&router, "/zipped_html").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.header("content-type").unwrap().starts_with("text/html"));
    assert_eq!(res.header("content-encoding"), Some("gzip"));
    assert_eq!(unzip_it(&res.body).unwrap(), b"HTML Zipped");
}

#[tokio::test]
async fn test_json_and_zipped_json() {
    let router = router_for(dispatcher(content_type_root()));

    let res = get(&router, "/json").await;
    assert!(res.header("content-type").unwrap().starts_with("application/json"));
    let value: String = serde_json::from_slice(&res.body).unwrap();
    assert_eq!(value, "JSON");

    let res = get(&router, "/zipped_json").await;
    assert_eq!(res.header("content-encoding"), Some("gzip"));
    let value: String = serde_json::from_slice(&unzip_it(&res.body).unwrap()).unwrap();
    assert_eq!(value, "JSON Zipped");
}

#[tokio::test]
async fn test_downloadable_text() {
    let router = router_for(dispatcher(content_type_root()));

    let res = get(&router, "/text_as_downloadable_file").await;
    assert!(res.header("content-type").unwrap().starts_with("application/text"));
    assert_eq!(
        res.header("content-disposition"),
        Some("attachment;filename=myfile.csv")
    );
    assert_eq!(res.text(), "text file content");

    let res = get(&router, "/zipped_text_as_downloadable_file").await;
    assert_eq!(
        res.header("content-disposition"),
        Some("attachment;filename=myfile.csv")
    );
    assert_eq!(unzip_it(&res.body).unwrap(), b"zipped text file content");
}

#[tokio::test]
async fn test_handler_without_parameters() {
    let router = router_for(dispatcher(parameter_root()));

    let res = get(&router, "/page_without_params").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "");

    let res = get(&router, "/page_without_params?a=A").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "");
}

#[tokio::test]
async fn test_parameters_passed_as_dictionary() {
    let router = router_for(dispatcher(parameter_root()));

    let res = get(&router, "/page_with_params_dictionary_as_input").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), "{}");

    let res = get(&router, "/page_with_params_dictionary_as_input?a=A&b=B&b&c=x%20y").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text(), r#"{"a":"A","b":["B",true],"c":"x y"}"#);

    let res = send(&router, Method::POST, "/page_with_params_dictionary_as_input?a=A").await;
    assert_eq!(res.text(), r#"{"_post":true,"a":"A"}"#);
}

#[tokio::test]
async fn test_multi_parameter_handler_rejects_unknown_arguments() {
    let router = router_for(dispatcher(parameter_root()));

    let res = get(&router, "/page_with_two_params?a=1&b=2").await;
    assert_eq!(res.text(), "1-2");

    let res = get(&router, "/page_with_two_params?z=1").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);

    // `_post` is not one of its parameters either.
    let res = send(&router, Method::POST, "/page_with_two_params?a=1").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
}
