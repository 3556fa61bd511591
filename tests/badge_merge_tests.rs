mod test_utils;

use test_utils::{profile_handler, CountingRepo};

use skillpath_backend::{
    entities::profile::Badge, errors::AppError, use_cases::profile::ProfileHandler,
};

fn badge(name: &str, skills: &[&str]) -> Badge {
    Badge {
        name: name.into(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

#[actix_rt::test]
async fn merge_on_missing_profile_is_not_found() {
    let handler = profile_handler();

    let err = handler
        .merge_badges("ghost", vec![badge("X", &["a"])])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::ProfileNotFound(_)));
}

#[actix_rt::test]
async fn new_badges_are_appended() {
    let handler = profile_handler();
    handler.get_or_create("u1").await.unwrap();

    let profile = handler
        .merge_badges("u1", vec![badge("Data Analyst", &["sql", "excel"])])
        .await
        .unwrap();

    assert_eq!(profile.badges.len(), 1);
    assert_eq!(profile.badges[0].name, "Data Analyst");
    assert_eq!(profile.badges[0].skills, vec!["sql", "excel"]);
}

#[actix_rt::test]
async fn merging_the_same_badge_twice_changes_nothing() {
    let handler = profile_handler();
    handler.get_or_create("u1").await.unwrap();

    let batch = vec![badge("X", &["a", "b"])];
    handler.merge_badges("u1", batch.clone()).await.unwrap();
    let profile = handler.merge_badges("u1", batch).await.unwrap();

    assert_eq!(profile.badges.len(), 1);
    assert_eq!(profile.badges[0].skills, vec!["a", "b"]);
}

#[actix_rt::test]
async fn merging_an_existing_name_unions_the_skill_sets() {
    let handler = profile_handler();
    handler.get_or_create("u1").await.unwrap();
    handler
        .merge_badges("u1", vec![badge("X", &["a"])])
        .await
        .unwrap();

    let profile = handler
        .merge_badges("u1", vec![badge("X", &["b"])])
        .await
        .unwrap();

    assert_eq!(profile.badges.len(), 1);
    assert_eq!(profile.badges[0].skills, vec!["a", "b"]);
}

#[actix_rt::test]
async fn a_batch_persists_exactly_once() {
    let handler = ProfileHandler::new(CountingRepo::new());
    handler.get_or_create("u1").await.unwrap();
    let writes_before = handler.repo.upsert_count();

    handler
        .merge_badges(
            "u1",
            vec![
                badge("X", &["a"]),
                badge("Y", &["b"]),
                badge("X", &["c"]),
            ],
        )
        .await
        .unwrap();

    assert_eq!(handler.repo.upsert_count(), writes_before + 1);

    let profile = handler.get_or_create("u1").await.unwrap();
    assert_eq!(profile.badges.len(), 2);
    assert_eq!(profile.badges[0].skills, vec!["a", "c"]);
}

#[actix_rt::test]
async fn incoming_badge_with_duplicate_skills_is_stored_as_a_set() {
    let handler = profile_handler();
    handler.get_or_create("u1").await.unwrap();

    let profile = handler
        .merge_badges("u1", vec![badge("X", &["a", "a", "b"])])
        .await
        .unwrap();

    assert_eq!(profile.badges[0].skills, vec!["a", "b"]);
}
