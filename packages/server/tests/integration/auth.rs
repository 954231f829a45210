use crate::common::{
    JWT_SECRET, PNG_STUB, TestApp, form, image_part, project_fields, routes, token_for,
};

#[tokio::test]
async fn health_needs_no_token() {
    let app = TestApp::spawn().await;

    let res = app.get_without_token(routes::HEALTH).await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["status"], "ok");
}

#[tokio::test]
async fn missing_token_is_rejected_everywhere() {
    let app = TestApp::spawn().await;

    for path in [
        routes::PROJECT_LIST,
        routes::BLOG_LIST,
        routes::LEGACY_PROJECT_LIST,
    ] {
        let res = app.get_without_token(path).await;
        res.assert_error(401, "TOKEN_MISSING");
    }
}

#[tokio::test]
async fn create_without_token_stores_nothing() {
    let app = TestApp::spawn().await;

    let res = app
        .post_form_without_token(
            routes::PROJECT_ADD,
            form(
                &project_fields("Lighthouse", "Ongoing"),
                Some(image_part("lighthouse.png", &PNG_STUB)),
            ),
        )
        .await;
    res.assert_error(401, "TOKEN_MISSING");
    assert_eq!(app.project_count().await, 0);
}

#[tokio::test]
async fn malformed_token_is_invalid() {
    let app = TestApp::spawn().await;

    let res = app
        .get_with_token(routes::PROJECT_LIST, "not-a-jwt")
        .await;
    res.assert_error(401, "TOKEN_INVALID");

    let res = app
        .get_with_header(routes::PROJECT_LIST, &format!("Token {}", app.admin_token))
        .await;
    res.assert_error(401, "TOKEN_INVALID");
}

#[tokio::test]
async fn token_signed_with_other_secret_is_invalid() {
    let app = TestApp::spawn().await;

    let forged = server::utils::jwt::sign(
        "some-other-secret",
        "root",
        server::utils::jwt::ADMIN_ROLE,
        chrono::Duration::hours(1),
    )
    .unwrap();
    let res = app.get_with_token(routes::BLOG_LIST, &forged).await;
    res.assert_error(401, "TOKEN_INVALID");
}

#[tokio::test]
async fn expired_token_is_invalid() {
    let app = TestApp::spawn().await;

    let expired = server::utils::jwt::sign(
        JWT_SECRET,
        "root",
        server::utils::jwt::ADMIN_ROLE,
        chrono::Duration::hours(-2),
    )
    .unwrap();
    let res = app.get_with_token(routes::PROJECT_LIST, &expired).await;
    res.assert_error(401, "TOKEN_INVALID");
}

#[tokio::test]
async fn non_admin_role_is_forbidden() {
    let app = TestApp::spawn().await;
    let editor = token_for("guest", "viewer");

    let res = app.get_with_token(routes::PROJECT_LIST, &editor).await;
    res.assert_error(403, "PERMISSION_DENIED");

    let res = app
        .post_form(
            routes::PROJECT_ADD,
            form(
                &project_fields("Lighthouse", "Ongoing"),
                Some(image_part("lighthouse.png", &PNG_STUB)),
            ),
            &editor,
        )
        .await;
    res.assert_error(403, "PERMISSION_DENIED");
    assert_eq!(app.project_count().await, 0);
}

#[tokio::test]
async fn non_multipart_body_is_a_validation_error() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .post(format!("http://{}{}", app.addr, routes::PROJECT_ADD))
        .header("Authorization", format!("Bearer {}", app.admin_token))
        .json(&serde_json::json!({ "projectName": "Lighthouse" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status().as_u16(), 400);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
}
