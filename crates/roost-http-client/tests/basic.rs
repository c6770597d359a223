use bytes::Bytes;
use http_body_util::{Empty, Full};
use hyper::{Request, Response};
use roost_http_client::{Body, Client};
use std::convert::Infallible;
use tower::service_fn;

#[tokio::test]
async fn basic_request() {
    let client = service_fn(|req: Request<_>| async move {
        assert_eq!(req.uri().path_and_query().unwrap(), "/path");
        Ok::<_, Infallible>(Response::new(Empty::<Bytes>::new()))
    });
    let client = Client::builder().service(client);

    let req = Request::builder()
        .uri("https://example.com/path")
        .body(Body::empty())
        .unwrap();
    let response = client.execute(req).await.unwrap();

    assert!(response.status().is_success());
}

#[tokio::test]
async fn get_shorthand() {
    let client = service_fn(|req: Request<_>| async move {
        assert_eq!(req.uri().path_and_query().unwrap(), "/status");
        Ok::<_, Infallible>(Response::new(Full::new(Bytes::from("OK"))))
    });
    let client = Client::builder().service(client);

    let response = client.get("https://example.com/status").await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}
