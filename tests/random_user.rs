use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use guest_users::common::errors::Error;
use guest_users::common::UserRecord;
use guest_users::random_user::{RandomUserClient, RandomUserSource};

fn client(server: &MockServer) -> RandomUserClient {
    RandomUserClient::new(format!("{}/api/", server.uri()), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn fetches_one_user_per_call() {
    let server = MockServer::start().await;
    let uuid = uuid::Uuid::new_v4().to_string();
    Mock::given(method("GET"))
        .and(path("/api/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "login": {"uuid": uuid},
                "name": {"first": "Ada", "last": "Lovelace"},
                "picture": {"large": "https://randomuser.me/api/portraits/women/1.jpg"}
            }],
            "info": {"results": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server).fetch_user().await.unwrap();

    assert_eq!(
        user,
        UserRecord {
            user_id: uuid,
            firstname: "Ada".into(),
            lastname: "Lovelace".into(),
            picture: "https://randomuser.me/api/portraits/women/1.jpg".into(),
        }
    );
}

#[tokio::test]
async fn server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).fetch_user().await.unwrap_err();
    assert!(matches!(err, Error::UnexpectedStatus { status: 503 }));
}

#[tokio::test]
async fn garbage_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_user().await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"results": []}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client =
        RandomUserClient::new(format!("{}/api/", server.uri()), Duration::from_millis(200))
            .unwrap();
    let err = client.fetch_user().await.unwrap_err();
    assert!(matches!(err, Error::Fetch(ref inner) if inner.is_timeout()));
}
