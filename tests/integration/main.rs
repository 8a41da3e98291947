//! Integration tests for the ad service.
//!
//! These drive the public router in-process, exactly as the binary serves it.
//! Run with: cargo test --test integration

use ad_service::api::{create_router, AppState};
use ad_service::ads::{Ad, Action, InteractionRequest};
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use pretty_assertions::assert_eq;
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new())
}

/// Send one request and return status plus body text.
async fn call(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

/// Test that listed ads decode back into the public types.
#[tokio::test]
async fn test_list_decodes_into_ads() {
    let (status, body) = call(app(), Method::GET, "/ad", "").await;
    assert_eq!(status, StatusCode::OK);

    let ads: Vec<Ad> = serde_json::from_str(&body).unwrap();
    assert_eq!(ads.len(), 2);
    assert_eq!(ads[0].features.id, "1111");
    assert_eq!(ads[0].features.image_url, "www.laioffer.com/Images/1111");
    assert_eq!(ads[1].features.id, "2222");
    assert_eq!(ads[1].interaction.view, 1);
    assert_eq!(ads[1].tags.get("bar"), Some(&2.0));
}

/// Test that any id, including ones with encoded characters, is echoed.
#[tokio::test]
async fn test_get_echoes_arbitrary_ids() {
    for (uri, expected) in [("/ad/abc123", "abc123"), ("/ad/1111", "1111"), ("/ad/a%20b", "a b")] {
        let (status, body) = call(app(), Method::GET, uri, "").await;
        assert_eq!(status, StatusCode::OK);

        let ad: Ad = serde_json::from_str(&body).unwrap();
        assert_eq!(ad.features.id, expected);
        assert_eq!(ad.features.description, "this is the second ad of laioffer");
    }
}

/// Test the full write path: a serialized request is acknowledged verbatim.
#[tokio::test]
async fn test_interaction_round_trip_through_public_types() {
    for action in [Action::Click, Action::View, Action::Other("hover".to_string())] {
        let req = InteractionRequest {
            id: "2222".to_string(),
            action: action.clone(),
        };
        let payload = serde_json::to_string(&req).unwrap();

        let (status, body) = call(app(), Method::POST, "/ad/interaction", &payload).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, format!("interaction received: {}\n", action));
    }
}

/// Test that one router instance serves many requests without drift.
#[tokio::test]
async fn test_shared_router_is_stateless() {
    let router = app();

    let (_, first) = call(router.clone(), Method::GET, "/ad/zzz", "").await;
    let (status, _) = call(router.clone(), Method::POST, "/ad", "[not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, second) = call(router, Method::GET, "/ad/zzz", "").await;

    assert_eq!(first, second);
}

/// Test that unsupported methods are refused by the router.
#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let (status, _) = call(app(), Method::DELETE, "/ad", "").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
