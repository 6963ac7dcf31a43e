use bookcatalog_client::{Client, ClientConfig, ClientResult};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::new(&server.uri()).expect("valid mock server url");
    Client::new(config).expect("build client")
}

async fn mount_json(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn all_operations_pass_success_body_through() {
    let server = MockServer::start().await;
    let books = json!({"1": {"author": "Chinua Achebe", "title": "Things Fall Apart"}});

    mount_json(&server, "/", 200, books.clone()).await;
    mount_json(&server, "/isbn/1", 200, books.clone()).await;
    mount_json(&server, "/author/Chinua%20Achebe", 200, books.clone()).await;
    mount_json(&server, "/title/Things%20Fall%20Apart", 200, books.clone()).await;

    let client = client_for(&server).await;
    let expected = ClientResult::success(200, books);

    assert_eq!(client.get_all_books().await, expected);
    assert_eq!(client.get_books_by_isbn("1").await, expected);
    assert_eq!(client.get_books_by_author("Chinua Achebe").await, expected);
    assert_eq!(client.get_books_by_title("Things Fall Apart").await, expected);
}

#[tokio::test]
async fn isbn_lookup_returns_book() {
    let server = MockServer::start().await;
    let book = json!({"isbn": "0-13-468599-7", "title": "The Pragmatic Programmer"});
    mount_json(&server, "/isbn/0-13-468599-7", 200, book.clone()).await;

    let client = client_for(&server).await;
    let result = client.get_books_by_isbn("0-13-468599-7").await;

    assert!(result.is_ok());
    assert_eq!(result, ClientResult::success(200, book));
}

#[tokio::test]
async fn unknown_author_reports_author_not_found() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/author/Unknown%20Author",
        404,
        json!({"message": "no such author"}),
    )
    .await;

    let client = client_for(&server).await;
    let result = client.get_books_by_author("Unknown Author").await;

    assert_eq!(
        result,
        ClientResult::failure(404, "Author not found", json!({"message": "no such author"}))
    );
}

#[tokio::test]
async fn not_found_uses_remote_message_for_other_lookups() {
    let server = MockServer::start().await;
    let body = json!({"message": "X"});
    mount_json(&server, "/", 404, body.clone()).await;
    mount_json(&server, "/isbn/999", 404, body.clone()).await;
    mount_json(&server, "/title/Nothing", 404, body.clone()).await;

    let client = client_for(&server).await;
    let expected = ClientResult::failure(404, "X", body);

    assert_eq!(client.get_all_books().await, expected);
    assert_eq!(client.get_books_by_isbn("999").await, expected);
    assert_eq!(client.get_books_by_title("Nothing").await, expected);
}

#[tokio::test]
async fn plain_text_error_body_falls_back_to_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/title/Dune"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.get_books_by_title("Dune").await;

    assert_eq!(
        result,
        ClientResult::failure(
            500,
            "Request failed with status code 500",
            json!("Internal Server Error")
        )
    );
}

#[tokio::test]
async fn reserved_characters_are_percent_encoded() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/author/O%27Brien%20%26%20Sons",
        200,
        json!([{"author": "O'Brien & Sons"}]),
    )
    .await;

    let client = client_for(&server).await;
    let result = client.get_books_by_author("O'Brien & Sons").await;

    assert_eq!(result.status(), 200);
    assert_eq!(result.data(), &json!([{"author": "O'Brien & Sons"}]));
}

#[tokio::test]
async fn connection_refused_is_normalized() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::new(&format!("http://{}", addr)).unwrap();
    let client = Client::new(config).unwrap();

    for result in [
        client.get_all_books().await,
        client.get_books_by_isbn("1").await,
        client.get_books_by_author("Unknown Author").await,
        client.get_books_by_title("Dune").await,
    ] {
        assert!(!result.is_ok());
        assert_eq!(result.status(), 500);
        assert_eq!(result.data(), &Value::Null);
        assert!(!result.error().unwrap().is_empty());
    }
}

#[tokio::test]
async fn concurrent_calls_are_independent() {
    let server = MockServer::start().await;
    mount_json(&server, "/isbn/1", 200, json!({"isbn": "1"})).await;
    mount_json(&server, "/author/Nobody", 404, json!({})).await;

    let client = client_for(&server).await;
    let (by_isbn, by_author) = futures::join!(
        client.get_books_by_isbn("1"),
        client.get_books_by_author("Nobody")
    );

    assert_eq!(by_isbn, ClientResult::success(200, json!({"isbn": "1"})));
    assert_eq!(
        by_author,
        ClientResult::failure(404, "Author not found", json!({}))
    );
}
