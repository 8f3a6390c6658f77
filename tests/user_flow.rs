mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};
use roleplay_api::utils::password::verify_password;
use uuid::Uuid;

#[tokio::test]
async fn test_user_registration_flow_success() {
    println!("\n\n[+] Running test: test_user_registration_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let user_data = test_data::sample_user();
    println!("[>] Sending request to register user: {:?}", user_data.username);

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&user_data)
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["user"]["email"].as_str(), user_data.email.as_deref());
    assert_eq!(
        body["user"]["username"].as_str(),
        user_data.username.as_deref()
    );
    // Password material must never be serialized
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("password_hash").is_none());

    println!("[>] Verifying user exists in database.");
    let stored = ctx
        .db
        .get_user_by_email(user_data.email.as_deref().unwrap())
        .await
        .expect("User not found in database");
    assert_eq!(stored.username, user_data.username.unwrap());
    assert!(verify_password("secret123", &stored.password_hash).unwrap());
    println!("[/] Test passed: registration flow successful.");
}

#[tokio::test]
async fn test_user_registration_flow_duplicate_email() {
    println!("\n\n[+] Running test: test_user_registration_flow_duplicate_email");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test_data::sample_user_with("dup@example.com", "first_player");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&first)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Registering a second user with the same email.");
    let second = test_data::sample_user_with("dup@example.com", "second_player");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&second)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    println!("[<] Response body: {}", body);
    assert_eq!(body["code"].as_str().unwrap(), "BAD_REQUEST");
    assert_eq!(body["status"].as_u64().unwrap(), 409);
    assert!(body["message"].as_str().unwrap().contains("email"));
    println!("[/] Test passed: duplicate email rejected.");
}

#[tokio::test]
async fn test_user_registration_flow_duplicate_username() {
    println!("\n\n[+] Running test: test_user_registration_flow_duplicate_username");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let first = test_data::sample_user_with("one@example.com", "same_player");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&first)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    println!("[>] Registering a second user with the same username.");
    let second = test_data::sample_user_with("two@example.com", "same_player");
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&second)
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("username"));
    println!("[/] Test passed: duplicate username rejected.");
}

#[tokio::test]
async fn test_user_update_flow_success() {
    println!("\n\n[+] Running test: test_user_update_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (user, token) = client
        .create_test_user(None)
        .await
        .expect("Failed creating a test user");
    println!("[<] User created with ID: {}", user.id);

    println!("[>] Updating email and password for user: {}", user.id);
    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", user.id))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "email": "renamed@test.com",
            "password": "newpass123",
            "avatar": "https://cdn.test/avatar.png"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"].as_str().unwrap(), "renamed@test.com");
    assert_eq!(
        body["user"]["avatar"].as_str().unwrap(),
        "https://cdn.test/avatar.png"
    );

    println!("[>] Verifying the new password hash in database.");
    let updated = ctx.db.get_user_by_id(&user.id).await.unwrap();
    assert!(verify_password("newpass123", &updated.password_hash).unwrap());
    assert!(!verify_password("test", &updated.password_hash).unwrap());
    println!("[/] Test passed: update flow successful.");
}

#[tokio::test]
async fn test_user_update_flow_missing_auth() {
    println!("\n\n[+] Running test: test_user_update_flow_missing_auth");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", Uuid::new_v4()))
        .set_json(serde_json::json!({
            "email": "nobody@test.com",
            "password": "whatever"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    println!("[/] Test passed: correctly returned UNAUTHORIZED for missing auth.");
}

#[tokio::test]
async fn test_user_update_flow_not_found() {
    println!("\n\n[+] Running test: test_user_update_flow_not_found");
    let ctx = TestContext::new().await;
    let client = TestClient::new(ctx.db.clone());
    let app = test::init_service(client.create_app()).await;

    let (_user, token) = client
        .create_test_user(None)
        .await
        .expect("Failed creating a test user");

    println!("[>] Updating a user id that does not exist.");
    let req = test::TestRequest::put()
        .uri(&format!("/users/{}", Uuid::new_v4()))
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .set_json(serde_json::json!({
            "email": "ghost@test.com",
            "password": "newpass123"
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    println!("[/] Test passed: unknown id returned NOT_FOUND.");
}
