//! HTTP-level integration tests for the `/forms` API endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Forms are seeded through the repository layer to set up test scenarios,
//! then exercised through the HTTP API.

mod common;

use axum::http::StatusCode;
use common::{auth_delete, auth_get, auth_post_json, body_json, build_test_app, get, test_token};
use serde_json::json;

use formforge_core::editor::Draft;
use formforge_core::form::Form;
use formforge_core::question::{Question, QuestionList, QuestionType};
use formforge_core::theme::Theme;
use formforge_core::types::new_id;
use formforge_store::{DraftRepo, FormRepo, PublishedRepo, Storage};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn seed_form(storage: &dyn Storage, title: &str) -> Form {
    let mut question = Question::new(QuestionType::Text);
    question.text = "Favorite color".to_string();

    let form = Form {
        id: new_id(),
        title: title.to_string(),
        description: "A seeded form".to_string(),
        theme: Theme::default(),
        questions: QuestionList::from(vec![question]),
        published: false,
        created_at: chrono::Utc::now(),
    };
    FormRepo::upsert(storage, &form).unwrap();
    form
}

// ---------------------------------------------------------------------------
// Test: endpoints require authentication
// ---------------------------------------------------------------------------

#[tokio::test]
async fn forms_endpoints_require_auth() {
    let (app, _storage) = build_test_app();

    let response = get(app, "/api/v1/forms").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/forms returns an empty page on a fresh store
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_forms_empty() {
    let (app, _storage) = build_test_app();
    let token = test_token();

    let response = auth_get(app, &token, "/api/v1/forms").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["forms"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["page"], 1);
    assert_eq!(json["data"]["page_size"], 6);
}

// ---------------------------------------------------------------------------
// Test: search filters case-insensitively; pagination slices at 6 per page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_forms_search_and_pagination() {
    let (app, storage) = build_test_app();
    let token = test_token();

    for i in 0..8 {
        seed_form(storage.as_ref(), &format!("Survey {i}"));
    }
    seed_form(storage.as_ref(), "Quiz");

    // Case-insensitive substring match on the title.
    let response = auth_get(app.clone(), &token, "/api/v1/forms?search=SURVEY").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 8);
    assert_eq!(json["data"]["forms"].as_array().unwrap().len(), 6);

    // Page 2 holds the remaining two matches.
    let response = auth_get(app.clone(), &token, "/api/v1/forms?search=survey&page=2").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 8);
    assert_eq!(json["data"]["forms"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["page"], 2);

    // An out-of-range page is an empty page, not a reset to page 1.
    let response = auth_get(app, &token, "/api/v1/forms?search=quiz&page=2").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert!(json["data"]["forms"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["page"], 2);
}

// ---------------------------------------------------------------------------
// Test: an extreme page index is still an empty page, never a panic
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_forms_extreme_page_is_empty() {
    let (app, storage) = build_test_app();
    let token = test_token();

    seed_form(storage.as_ref(), "Survey");

    let uri = format!("/api/v1/forms?page={}", usize::MAX);
    let response = auth_get(app, &token, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["total"], 1);
    assert!(json["data"]["forms"].as_array().unwrap().is_empty());
    assert_eq!(json["data"]["page"].as_u64(), Some(u64::MAX));
}

// ---------------------------------------------------------------------------
// Test: first save assigns an id, returns 201, and clears the draft slot
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_save_assigns_id_and_clears_draft() {
    let (app, storage) = build_test_app();
    let token = test_token();

    let draft = Draft {
        title: "Half-typed".to_string(),
        description: String::new(),
        theme: Theme::default(),
        questions: QuestionList::new(),
    };
    DraftRepo::save(storage.as_ref(), &draft).unwrap();

    let question_id = new_id();
    let response = auth_post_json(
        app,
        &token,
        "/api/v1/forms",
        json!({
            "title": "My Form",
            "description": "About things",
            "theme": "blue",
            "questions": [
                { "id": question_id, "text": "Name", "required": true, "type": "text" }
            ]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert!(json["data"]["id"].is_string(), "save must assign an id");
    assert_eq!(json["data"]["title"], "My Form");
    assert_eq!(json["data"]["published"], false);

    assert!(
        DraftRepo::load(storage.as_ref()).unwrap().is_none(),
        "first save must clear the draft slot"
    );
}

// ---------------------------------------------------------------------------
// Test: re-save preserves the publish flag and creation time
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resave_preserves_publish_flag_and_created_at() {
    let (app, storage) = build_test_app();
    let token = test_token();

    let mut form = seed_form(storage.as_ref(), "Original");
    form.published = true;
    FormRepo::upsert(storage.as_ref(), &form).unwrap();

    let response = auth_post_json(
        app,
        &token,
        "/api/v1/forms",
        json!({
            "id": form.id,
            "title": "Renamed",
            "description": form.description,
            "theme": "purple",
            "questions": serde_json::to_value(&form.questions).unwrap()
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let saved = FormRepo::find(storage.as_ref(), form.id).unwrap().unwrap();
    assert_eq!(saved.title, "Renamed");
    assert!(saved.published, "re-save must not clear the publish flag");
    assert_eq!(saved.created_at, form.created_at);
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/forms/{id} returns 404 for an unknown id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_form_not_found() {
    let (app, _storage) = build_test_app();
    let token = test_token();

    let response = auth_get(app, &token, &format!("/api/v1/forms/{}", new_id())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: publish rejects an invalid form and leaves it unpublished
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_rejects_invalid_form() {
    let (app, storage) = build_test_app();
    let token = test_token();

    let mut form = seed_form(storage.as_ref(), "No Questions");
    form.questions = QuestionList::new();
    FormRepo::upsert(storage.as_ref(), &form).unwrap();

    let response =
        auth_post_json(app, &token, &format!("/api/v1/forms/{}/publish", form.id), json!({}))
            .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let saved = FormRepo::find(storage.as_ref(), form.id).unwrap().unwrap();
    assert!(!saved.published, "failed publish must not mark the form");
    assert!(PublishedRepo::find(storage.as_ref(), form.id)
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: publish writes an independent snapshot with a shareable link
// ---------------------------------------------------------------------------

#[tokio::test]
async fn publish_creates_independent_snapshot() {
    let (app, storage) = build_test_app();
    let token = test_token();

    let form = seed_form(storage.as_ref(), "Snapshot Test");

    let response = auth_post_json(
        app.clone(),
        &token,
        &format!("/api/v1/forms/{}/publish", form.id),
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let link = json["data"]["link"].as_str().unwrap();
    assert!(link.ends_with(&format!("/respond/{}", form.id)));

    // Editing the saved copy must not reach into the snapshot.
    let mut edited = FormRepo::find(storage.as_ref(), form.id).unwrap().unwrap();
    edited.title = "Edited After Publish".to_string();
    FormRepo::upsert(storage.as_ref(), &edited).unwrap();

    let snapshot = PublishedRepo::find(storage.as_ref(), form.id)
        .unwrap()
        .unwrap();
    assert_eq!(snapshot.form.title, "Snapshot Test");

    // The editable copy now reports its published link.
    let response = auth_get(app, &token, &format!("/api/v1/forms/{}", form.id)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["link"].as_str().unwrap(), link);
}

// ---------------------------------------------------------------------------
// Test: the link endpoint never fabricates a link for an unpublished form
// ---------------------------------------------------------------------------

#[tokio::test]
async fn copy_link_unpublished_conflicts() {
    let (app, storage) = build_test_app();
    let token = test_token();

    let form = seed_form(storage.as_ref(), "Not Yet Published");

    let response = auth_get(app.clone(), &token, &format!("/api/v1/forms/{}/link", form.id)).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_PUBLISHED");

    // An unknown id is NotFound, not NotPublished.
    let response = auth_get(app, &token, &format!("/api/v1/forms/{}/link", new_id())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: delete removes the saved copy only (no cascade)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_form_keeps_snapshot_and_responses() {
    let (app, storage) = build_test_app();
    let token = test_token();

    let form = seed_form(storage.as_ref(), "Doomed");
    auth_post_json(
        app.clone(),
        &token,
        &format!("/api/v1/forms/{}/publish", form.id),
        json!({}),
    )
    .await;

    let response = auth_delete(app.clone(), &token, &format!("/api/v1/forms/{}", form.id)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Deleting again is 404.
    let response = auth_delete(app.clone(), &token, &format!("/api/v1/forms/{}", form.id)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The published snapshot stays answerable.
    let response = get(app, &format!("/api/v1/respond/{}", form.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
}
