//! Integration tests for the `/api/v1/projects` resource.

mod common;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use ceral_api::config::ServerConfig;
use ceral_media::memory::MemoryBlobStore;
use common::{body_json, delete, get, send_form, MultipartForm, MEDIA_URL};

fn vadi_parki() -> MultipartForm {
    MultipartForm::project("Vadi Parkı", "public", false)
}

async fn create(app: axum::Router, form: MultipartForm) -> serde_json::Value {
    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

#[tokio::test]
async fn create_with_three_images_and_no_video() {
    let (app, backends) = common::build_test_app();
    let form = vadi_parki()
        .file("images", "f1.jpg", "image/jpeg", b"one")
        .file("images", "f2.jpg", "image/jpeg", b"two")
        .file("images", "f3.png", "image/png", b"three");

    let json = create(app.clone(), form).await;

    assert_eq!(json["title"], "Vadi Parkı");
    assert_eq!(json["year"], 2023);
    assert_eq!(json["location"], "Ankara");
    assert_eq!(json["type"], "public");
    assert_eq!(json["isFeatured"], false);
    assert!(json["video"].is_null());
    assert!(json["createdAt"].is_string());

    let id = json["id"].as_i64().unwrap();
    let images = json["images"].as_array().unwrap();
    assert_eq!(images.len(), 3);
    for (index, url) in images.iter().enumerate() {
        let url = url.as_str().unwrap();
        assert!(url.starts_with(&format!("{MEDIA_URL}/projects/{id}/image_{index}_")));
    }

    assert_eq!(backends.store.len(), 1);
    let log = backends.blobs.put_log();
    assert_eq!(backends.blobs.get(&log[2]).unwrap(), b"three");
    assert_eq!(backends.blobs.content_type(&log[2]).unwrap(), "image/png");
}

#[tokio::test]
async fn create_with_video() {
    let (app, _backends) = common::build_test_app();
    let form = vadi_parki().file("video", "tour.mp4", "video/mp4", b"mp4");

    let json = create(app, form).await;

    let id = json["id"].as_i64().unwrap();
    assert!(json["video"]
        .as_str()
        .unwrap()
        .starts_with(&format!("{MEDIA_URL}/projects/{id}/video_")));
    assert_eq!(json["images"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn empty_file_parts_are_ignored() {
    let (app, backends) = common::build_test_app();
    let form = vadi_parki().file("video", "", "application/octet-stream", b"");

    let json = create(app, form).await;

    assert!(json["video"].is_null());
    assert!(backends.blobs.is_empty());
}

#[tokio::test]
async fn content_type_is_guessed_from_file_name() {
    let (app, backends) = common::build_test_app();
    let form = vadi_parki().file("images", "plan.webp", "application/octet-stream", b"x");

    create(app, form).await;

    let log = backends.blobs.put_log();
    assert_eq!(backends.blobs.content_type(&log[0]).unwrap(), "image/webp");
}

#[tokio::test]
async fn missing_fields_are_listed_before_any_write() {
    let (app, backends) = common::build_test_app();
    let form = MultipartForm::new()
        .text("title", "")
        .text("description", "d")
        .text("type", "residential")
        .file("images", "a.jpg", "image/jpeg", b"a");

    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Missing required fields: title, year, location");
    assert!(backends.store.is_empty());
    assert!(backends.blobs.is_empty());
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let (app, _backends) = common::build_test_app();
    let form = MultipartForm::project("Fabrika", "industrial", false);

    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn non_numeric_year_is_a_bad_request() {
    let (app, _backends) = common::build_test_app();
    let form = MultipartForm::new()
        .text("title", "t")
        .text("description", "d")
        .text("location", "l")
        .text("year", "geçen yıl")
        .text("type", "public");

    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn wrong_file_kind_is_rejected() {
    let (app, backends) = common::build_test_app();
    let form = vadi_parki().file("images", "tour.mp4", "video/mp4", b"mp4");

    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(backends.store.is_empty());
}

#[tokio::test]
async fn upload_failure_returns_generic_message_and_leaves_orphan() {
    let (app, backends) = common::build_test_app();
    backends.blobs.fail_after_puts(1);
    let form = vadi_parki()
        .file("images", "a.jpg", "image/jpeg", b"a")
        .file("images", "b.jpg", "image/jpeg", b"b");

    let response = send_form(app.clone(), Method::POST, "/api/v1/projects", form).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPLOAD_ERROR");
    assert_eq!(json["error"], "Bir hata oluştu. Lütfen tekrar deneyin.");

    let listed = body_json(get(app, "/api/v1/projects").await).await;
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["images"].as_array().unwrap().len(), 0);
}

/// Three uploads of 700ms each outlast the 1s request timeout; the
/// submission must still run to completion.
#[tokio::test]
async fn slow_uploads_are_not_cut_by_the_request_timeout() {
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..common::test_config()
    };
    let blobs = MemoryBlobStore::new(MEDIA_URL).with_put_delay(Duration::from_millis(700));
    let (app, backends) = common::build_test_app_over(config, blobs, Duration::from_secs(5));
    let form = vadi_parki()
        .file("images", "f1.jpg", "image/jpeg", b"one")
        .file("images", "f2.jpg", "image/jpeg", b"two")
        .file("images", "f3.jpg", "image/jpeg", b"three");

    let json = create(app, form).await;

    assert_eq!(json["images"].as_array().unwrap().len(), 3);
    assert_eq!(backends.blobs.len(), 3);
}

#[tokio::test]
async fn upload_timeout_returns_json_error_body() {
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..common::test_config()
    };
    let blobs = MemoryBlobStore::new(MEDIA_URL).with_put_delay(Duration::from_millis(700));
    let (app, backends) =
        common::build_test_app_over(config, blobs, Duration::from_millis(200));
    let form = vadi_parki()
        .file("images", "f1.jpg", "image/jpeg", b"one")
        .file("images", "f2.jpg", "image/jpeg", b"two");

    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPLOAD_ERROR");
    assert_eq!(json["error"], "Bir hata oluştu. Lütfen tekrar deneyin.");
    assert!(backends.blobs.is_empty());
    assert_eq!(backends.store.len(), 1);
}

#[tokio::test]
async fn store_failure_returns_generic_message() {
    let (app, backends) = common::build_test_app();
    backends.store.set_failing(true);

    let response = send_form(app, Method::POST, "/api/v1/projects", vadi_parki()).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PERSISTENCE_ERROR");
    assert_eq!(json["error"], "Bir hata oluştu. Lütfen tekrar deneyin.");
}

#[tokio::test]
async fn list_is_newest_first() {
    let (app, _backends) = common::build_test_app();
    for title in ["Birinci", "İkinci", "Üçüncü"] {
        create(app.clone(), MultipartForm::project(title, "residential", false)).await;
    }

    let json = body_json(get(app, "/api/v1/projects").await).await;
    let titles: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(titles, ["Üçüncü", "İkinci", "Birinci"]);
}

#[tokio::test]
async fn get_missing_project_is_404() {
    let (app, _backends) = common::build_test_app();
    let response = get(app, "/api/v1/projects/42").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[tokio::test]
async fn edit_without_files_keeps_media() {
    let (app, _backends) = common::build_test_app();
    let created = create(
        app.clone(),
        vadi_parki()
            .file("images", "a.jpg", "image/jpeg", b"a")
            .file("video", "tour.mp4", "video/mp4", b"v"),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let form = MultipartForm::project("Vadi Parkı 2. Etap", "public", true);
    let response = send_form(app, Method::PUT, &format!("/api/v1/projects/{id}"), form).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Vadi Parkı 2. Etap");
    assert_eq!(json["isFeatured"], true);
    assert_eq!(json["images"], created["images"]);
    assert_eq!(json["video"], created["video"]);
    assert_eq!(json["createdAt"], created["createdAt"]);
}

#[tokio::test]
async fn edit_with_images_replaces_the_list() {
    let (app, _backends) = common::build_test_app();
    let created = create(
        app.clone(),
        vadi_parki()
            .file("images", "a.jpg", "image/jpeg", b"a")
            .file("images", "b.jpg", "image/jpeg", b"b"),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let form = vadi_parki().file("images", "c.jpg", "image/jpeg", b"c");
    let response = send_form(app, Method::PUT, &format!("/api/v1/projects/{id}"), form).await;

    let json = body_json(response).await;
    assert_eq!(json["images"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn edit_missing_project_is_404_without_uploads() {
    let (app, backends) = common::build_test_app();
    let form = vadi_parki().file("images", "a.jpg", "image/jpeg", b"a");

    let response = send_form(app, Method::PUT, "/api/v1/projects/9", form).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(backends.blobs.is_empty());
}

#[tokio::test]
async fn delete_removes_record_but_keeps_media_by_default() {
    let (app, backends) = common::build_test_app();
    let created = create(
        app.clone(),
        vadi_parki().file("images", "a.jpg", "image/jpeg", b"a"),
    )
    .await;
    let uri = format!("/api/v1/projects/{}", created["id"]);

    assert_eq!(delete(app.clone(), &uri).await.status(), StatusCode::NO_CONTENT);
    assert_eq!(get(app.clone(), &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(backends.blobs.len(), 1);
}

#[tokio::test]
async fn delete_missing_project_leaves_catalog_unchanged() {
    let (app, _backends) = common::build_test_app();
    create(app.clone(), vadi_parki()).await;
    let before = body_json(get(app.clone(), "/api/v1/projects").await).await;

    let response = delete(app.clone(), "/api/v1/projects/777").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let after = body_json(get(app, "/api/v1/projects").await).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn delete_purges_media_when_enabled() {
    let config = ceral_api::config::ServerConfig {
        purge_media_on_delete: true,
        ..common::test_config()
    };
    let (app, backends) = common::build_test_app_with(config);
    let created = create(
        app.clone(),
        vadi_parki()
            .file("images", "a.jpg", "image/jpeg", b"a")
            .file("video", "tour.mp4", "video/mp4", b"v"),
    )
    .await;
    assert_eq!(backends.blobs.len(), 2);

    let uri = format!("/api/v1/projects/{}", created["id"]);
    assert_eq!(delete(app, &uri).await.status(), StatusCode::NO_CONTENT);
    assert!(backends.blobs.is_empty());
}

#[tokio::test]
async fn oversized_upload_is_rejected() {
    let (app, backends) = common::build_test_app();
    let big = vec![0u8; 2 * 1024 * 1024];
    let form = vadi_parki().file("images", "huge.jpg", "image/jpeg", &big);

    let response = send_form(app, Method::POST, "/api/v1/projects", form).await;

    assert!(response.status().is_client_error());
    assert!(backends.blobs.is_empty());
}
