mod test_utils;

use actix_web::{
    http::StatusCode,
    test::{call_service, init_service, read_body_json, TestRequest},
    App,
};
use serde_json::json;
use test_utils::test_state;

use skillpath_backend::{entities::profile::Profile, routes::configure_routes};

macro_rules! test_app {
    () => {
        init_service(
            App::new()
                .app_data(test_state())
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_rt::test]
async fn get_profile_creates_and_returns_an_empty_document() {
    let app = test_app!();

    let response = call_service(&app, TestRequest::get().uri("/profile/u1").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.profile_id, "u1");
    assert!(profile.skills.is_empty());
}

#[actix_rt::test]
async fn post_about_me_updates_the_field() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/profile/aboutMe")
            .set_json(json!({"profileId": "u1", "value": "hi"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.about_me, "hi");
    assert_eq!(profile.profile_id, "u1");
}

#[actix_rt::test]
async fn unknown_field_is_a_400_with_the_documented_body() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/profile/hobbies")
            .set_json(json!({"profileId": "u1", "value": "chess"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(response).await;
    assert_eq!(body, json!({"error": "Invalid field name"}));
}

#[actix_rt::test]
async fn badges_route_reaches_the_merge_operation_not_the_field_policy() {
    // `badges` is not a whitelisted field, so falling through to the generic
    // `/{field}` matcher would 400; a 200 with the merged badge proves the
    // fixed route won.
    let app = test_app!();
    call_service(&app, TestRequest::get().uri("/profile/u1").to_request()).await;

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/profile/badges")
            .set_json(json!({
                "profileId": "u1",
                "value": [{"name": "X", "skills": ["a", "b"]}]
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.badges.len(), 1);
    assert_eq!(profile.badges[0].name, "X");
}

#[actix_rt::test]
async fn badges_route_on_missing_profile_is_a_404() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/profile/badges")
            .set_json(json!({"profileId": "ghost", "value": [{"name": "X", "skills": []}]}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn projects_routes_append_and_delete_by_id() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/profile/projects")
            .set_json(json!({
                "profileId": "u1",
                "project": {"name": "P", "description": "D", "link": ""}
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.projects.len(), 1);
    let project_id = profile.projects[0].id;

    let response = call_service(
        &app,
        TestRequest::delete()
            .uri("/profile/projects")
            .set_json(json!({"profileId": "u1", "projectId": project_id}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert!(profile.projects.is_empty());
}

#[actix_rt::test]
async fn tested_skills_route_wins_over_the_generic_field_matcher() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/profile/skills/tested")
            .set_json(json!({
                "profileId": "u1",
                "testedSkill": {"skill": "sql", "score": 90}
            }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.tested_skills.len(), 1);
    assert_eq!(profile.tested_skills[0].skill, "sql");
}

#[actix_rt::test]
async fn delete_by_index_maps_out_of_range_to_400_and_missing_profile_to_404() {
    let app = test_app!();
    call_service(
        &app,
        TestRequest::post()
            .uri("/profile/skills")
            .set_json(json!({"profileId": "u1", "value": ["a", "b"]}))
            .to_request(),
    )
    .await;

    let response = call_service(
        &app,
        TestRequest::delete().uri("/profile/u1/skills/5").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = call_service(
        &app,
        TestRequest::delete().uri("/profile/ghost/skills/0").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = call_service(
        &app,
        TestRequest::delete().uri("/profile/u1/skills/1").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.skills, vec!["a"]);
}

#[actix_rt::test]
async fn delete_by_index_rejects_non_removable_lists() {
    let app = test_app!();
    call_service(&app, TestRequest::get().uri("/profile/u1").to_request()).await;

    for field in ["badges", "testedSkills", "aboutMe"] {
        let response = call_service(
            &app,
            TestRequest::delete()
                .uri(&format!("/profile/u1/{field}/0"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
    }
}

#[actix_rt::test]
async fn skills_patch_applies_the_op_and_validates_profile_id() {
    let app = test_app!();
    call_service(
        &app,
        TestRequest::post()
            .uri("/profile/skills")
            .set_json(json!({"profileId": "u1", "value": ["rust"]}))
            .to_request(),
    )
    .await;

    let response = call_service(
        &app,
        TestRequest::patch()
            .uri("/profile/skills")
            .set_json(json!({"profileId": "u1", "op": "add", "value": ["sql", "rust"]}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let profile: Profile = read_body_json(response).await;
    assert_eq!(profile.skills, vec!["rust", "sql"]);

    let response = call_service(
        &app,
        TestRequest::patch()
            .uri("/profile/skills")
            .set_json(json!({"profileId": "", "op": "add", "value": ["go"]}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(response).await;
    assert_eq!(body["error"], "Validation failed");
}

#[actix_rt::test]
async fn codechef_sync_route_upserts_and_reports_the_platform() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/codechef")
            .set_json(json!({"profileId": "u1", "username": "suchzz"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = read_body_json(response).await;
    assert_eq!(body["platform"], "codechef");
    assert_eq!(body["rating"], 1764);
    assert_eq!(body["profile"]["codeChef"]["username"], "suchzz");
}

#[actix_rt::test]
async fn leetcode_sync_route_is_a_404_for_an_unknown_profile() {
    let app = test_app!();

    let response = call_service(
        &app,
        TestRequest::post()
            .uri("/leetcode")
            .set_json(json!({"profileId": "ghost", "username": "someone"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
