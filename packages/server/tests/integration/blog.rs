use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::json;

use crate::common::{JPEG_STUB, PNG_STUB, TestApp, blog_fields, form, image_part, routes};

#[tokio::test]
async fn create_then_list_blog() {
    let app = TestApp::spawn().await;

    let res = app
        .post_form(
            routes::BLOG_ADD,
            form(
                &blog_fields("Restoring the lamp room", "2024-05-01"),
                Some(image_part("lamp.jpg", &JPEG_STUB)),
            ),
            &app.admin_token,
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["message"], "Blog created successfully");
    let created = &res.body["blog"];
    assert_eq!(created["title"], "Restoring the lamp room");
    assert_eq!(created["author"], "A. Keeper");
    assert_eq!(created["date_published"], "2024-05-01");
    assert_eq!(created["content"], "# Notes from the lamp room");
    assert_eq!(created["imageContentType"], "image/jpeg");
    assert_eq!(created["version"], 1);

    let res = app.get_with_token(routes::BLOG_LIST, &app.admin_token).await;
    assert_eq!(res.status, 200, "{}", res.text);
    let entry = &res.body[0];
    assert_eq!(entry["title"], "Restoring the lamp room");
    assert_eq!(
        STANDARD
            .decode(entry["imageBase64"].as_str().unwrap())
            .unwrap(),
        JPEG_STUB
    );
    assert!(
        entry["imageDataUri"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );
}

#[tokio::test]
async fn date_accepts_rfc3339_timestamp() {
    let app = TestApp::spawn().await;

    let res = app
        .post_form(
            routes::BLOG_ADD,
            form(
                &blog_fields("Storm season", "2024-11-02T18:30:00Z"),
                Some(image_part("storm.png", &PNG_STUB)),
            ),
            &app.admin_token,
        )
        .await;
    assert_eq!(res.status, 201, "{}", res.text);
    assert_eq!(res.body["blog"]["date_published"], "2024-11-02");
}

#[tokio::test]
async fn create_rejects_each_missing_field() {
    let app = TestApp::spawn().await;
    let complete = blog_fields("Lamp room", "2024-05-01");

    for omitted in ["title", "author", "date_published", "content"] {
        let fields: Vec<_> = complete
            .iter()
            .copied()
            .filter(|(name, _)| *name != omitted)
            .collect();
        let res = app
            .post_form(
                routes::BLOG_ADD,
                form(&fields, Some(image_part("lamp.jpg", &JPEG_STUB))),
                &app.admin_token,
            )
            .await;
        res.assert_error(400, "VALIDATION_ERROR");
        assert!(
            res.body["message"].as_str().unwrap().contains(omitted),
            "message should name {omitted}: {}",
            res.text
        );
    }

    let res = app
        .post_form(routes::BLOG_ADD, form(&complete, None), &app.admin_token)
        .await;
    res.assert_error(400, "VALIDATION_ERROR");

    assert_eq!(app.blog_count().await, 0);
}

#[tokio::test]
async fn create_rejects_bad_date() {
    let app = TestApp::spawn().await;

    let res = app
        .post_form(
            routes::BLOG_ADD,
            form(
                &blog_fields("Lamp room", "next tuesday"),
                Some(image_part("lamp.jpg", &JPEG_STUB)),
            ),
            &app.admin_token,
        )
        .await;
    res.assert_error(400, "VALIDATION_ERROR");
    assert!(
        res.body["message"]
            .as_str()
            .unwrap()
            .starts_with("date_published")
    );
    assert_eq!(app.blog_count().await, 0);
}

#[tokio::test]
async fn create_rejects_overlong_title() {
    let app = TestApp::spawn().await;
    let title = "x".repeat(257);

    let res = app
        .post_form(
            routes::BLOG_ADD,
            form(
                &blog_fields(&title, "2024-05-01"),
                Some(image_part("lamp.jpg", &JPEG_STUB)),
            ),
            &app.admin_token,
        )
        .await;
    res.assert_error(400, "VALIDATION_ERROR");
}

#[tokio::test]
async fn partial_update_keeps_other_fields() {
    let app = TestApp::spawn().await;
    let id = app.create_blog("Lamp room").await;

    let res = app
        .put_form(
            &routes::blog_update(id),
            form(&[("title", "The lamp room, revisited")], None),
            &app.admin_token,
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["message"], "Blog updated successfully");
    let updated = &res.body["blog"];
    assert_eq!(updated["title"], "The lamp room, revisited");
    assert_eq!(updated["author"], "A. Keeper");
    assert_eq!(updated["date_published"], "2024-05-01");
    assert_eq!(updated["image"], json!(JPEG_STUB.to_vec()));
    assert_eq!(updated["version"], 2);
}

#[tokio::test]
async fn update_replaces_image_only_when_sent() {
    let app = TestApp::spawn().await;
    let id = app.create_blog("Lamp room").await;

    let res = app
        .put_form(
            &routes::blog_update(id),
            form(
                &[("date_published", "2025-01-15")],
                Some(image_part("new.png", &PNG_STUB)),
            ),
            &app.admin_token,
        )
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["blog"]["date_published"], "2025-01-15");
    assert_eq!(res.body["blog"]["image"], json!(PNG_STUB.to_vec()));
    assert_eq!(res.body["blog"]["imageContentType"], "image/png");
}

#[tokio::test]
async fn delete_removes_exactly_one_post() {
    let app = TestApp::spawn().await;
    let first = app.create_blog("First light").await;
    let second = app.create_blog("Second watch").await;

    let res = app
        .delete_with_token(&routes::blog_delete(first), &app.admin_token)
        .await;
    assert_eq!(res.status, 200, "{}", res.text);
    assert_eq!(res.body["message"], "Blog deleted successfully");

    let res = app.get_with_token(routes::BLOG_LIST, &app.admin_token).await;
    let list = res.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], second);
    assert_eq!(list[0]["title"], "Second watch");
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let app = TestApp::spawn().await;

    let res = app
        .put_form(
            &routes::blog_update(42),
            form(&[("title", "Ghost")], None),
            &app.admin_token,
        )
        .await;
    res.assert_error(404, "NOT_FOUND");
    assert_eq!(res.body["message"], "Blog not found");

    let res = app
        .delete_with_token(&routes::blog_delete(42), &app.admin_token)
        .await;
    res.assert_error(404, "NOT_FOUND");
    assert_eq!(app.blog_count().await, 0);
}

#[tokio::test]
async fn non_numeric_version_is_rejected() {
    let app = TestApp::spawn().await;
    let id = app.create_blog("Lamp room").await;

    let res = app
        .put_form(
            &routes::blog_update(id),
            form(&[("title", "Edited"), ("version", "latest")], None),
            &app.admin_token,
        )
        .await;
    res.assert_error(400, "VALIDATION_ERROR");
}

#[tokio::test]
async fn out_of_range_id_is_not_found() {
    let app = TestApp::spawn().await;
    app.create_blog("Lamp room").await;

    let res = app
        .delete_with_token("/api/blog/delete/99999999999", &app.admin_token)
        .await;
    res.assert_error(404, "NOT_FOUND");

    let res = app
        .put_form(
            "/api/blog/update/first",
            form(&[("title", "Ghost")], None),
            &app.admin_token,
        )
        .await;
    res.assert_error(404, "NOT_FOUND");

    assert_eq!(app.blog_count().await, 1);
}
