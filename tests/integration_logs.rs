mod common;

use axum::http::StatusCode;

use common::{ADMIN_EMAIL, SEED_PASSWORD, USER_EMAIL, get, login_token, setup_test_app};

#[tokio::test]
async fn test_global_log_listing_requires_an_admin() {
    let (app, _) = setup_test_app();

    let (status, _) = get(&app, "/api/logs", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let user_token = login_token(&app, USER_EMAIL, SEED_PASSWORD).await;
    let (status, body) = get(&app, "/api/logs", Some(&user_token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["error"],
        "Access denied. Administrator privileges required."
    );
}

#[tokio::test]
async fn test_single_log_reads_need_only_a_valid_token() {
    let (app, state) = setup_test_app();
    let user_token = login_token(&app, USER_EMAIL, SEED_PASSWORD).await;

    let (status, _) = get(&app, "/api/logs/1", Some(&user_token)).await;
    assert_eq!(status, StatusCode::OK);

    let user = state.store.find_by_email(USER_EMAIL).await.unwrap();
    let (status, _) = get(
        &app,
        &format!("/api/users/{}/logs", user.id),
        Some(&user_token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, "/api/logs/1", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_logs_newest_first() {
    let (app, _) = setup_test_app();
    let token = login_token(&app, ADMIN_EMAIL, SEED_PASSWORD).await;

    let (status, body) = get(&app, "/api/logs", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    // Seeding writes one "Add User" entry per seed user.
    let total = body["meta"]["total"].as_i64().unwrap();
    assert!(total >= 11);

    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids.len(), 10);
    assert!(ids.windows(2).all(|w| w[0] > w[1]), "ids: {:?}", ids);
}

#[tokio::test]
async fn test_list_logs_pagination() {
    let (app, _) = setup_test_app();
    let token = login_token(&app, ADMIN_EMAIL, SEED_PASSWORD).await;

    let (status, body) = get(&app, "/api/logs?limit=5", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["meta"]["limit"], 5);
    assert_eq!(body["meta"]["has_more"], true);

    let (status, body) = get(&app, "/api/logs?limit=5&offset=10", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_logs_filters_by_action() {
    let (app, state) = setup_test_app();
    let token = login_token(&app, ADMIN_EMAIL, SEED_PASSWORD).await;

    // Seeding records exactly one "Add User" per seed user.
    let (status, body) = get(&app, "/api/logs?action=Add&limit=20", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 11);
    assert!(
        body["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|l| l["performed_action"] == "Add User")
    );

    let (status, body) = get(&app, "/api/logs?action=Edit", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 0);

    // Viewing a user shows up under the View filter.
    let user = state.store.find_by_email(USER_EMAIL).await.unwrap();
    let (status, _) = get(&app, &format!("/api/users/{}", user.id), Some(&token)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, "/api/logs?action=View", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);

    // The per-user listing honors the same filter.
    let (status, body) = get(
        &app,
        &format!("/api/users/{}/logs?action=View", user.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["meta"]["total"], 1);

    // Unrecognized values leave the listing unfiltered.
    let (status, body) = get(&app, "/api/logs?action=Bogus", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["meta"]["total"].as_i64().unwrap() >= 12);
}

#[tokio::test]
async fn test_get_log_by_id() {
    let (app, _) = setup_test_app();
    let token = login_token(&app, ADMIN_EMAIL, SEED_PASSWORD).await;

    let (status, body) = get(&app, "/api/logs/1", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["performed_action"], "Add User");

    let (status, _) = get(&app, "/api/logs/99999", Some(&token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_logs_are_scoped_to_that_user() {
    let (app, state) = setup_test_app();
    let token = login_token(&app, ADMIN_EMAIL, SEED_PASSWORD).await;
    let user = state.store.find_by_email(USER_EMAIL).await.unwrap();

    let (status, body) = get(
        &app,
        &format!("/api/users/{}/logs", user.id),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert!(!entries.is_empty());
    assert!(
        entries
            .iter()
            .all(|l| l["user_id"] == user.id.to_string().as_str())
    );
}

#[tokio::test]
async fn test_user_logs_404_for_unknown_user() {
    let (app, _) = setup_test_app();
    let token = login_token(&app, ADMIN_EMAIL, SEED_PASSWORD).await;

    let (status, _) = get(
        &app,
        &format!("/api/users/{}/logs", uuid::Uuid::new_v4()),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
