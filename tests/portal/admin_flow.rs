use healcheck::{
    controller::{PageStatus, UserForm},
    session::Session,
    view::ImageDetail,
};

use super::*;

fn logged_in(test: &TestSetup) -> Portal {
    let portal = Portal::new(test);
    portal
        .sessions()
        .save(&Session {
            id: TEST_USER_ID,
            username: TEST_USERNAME.to_string(),
            token: Some(TEST_TOKEN.to_string()),
        })
        .unwrap();
    portal
}

/// Tests deleting an image from the images tab.
///
/// Expected: the row disappears without a list refetch, an open detail of that image is
/// closed and the stats reflect the server after the delete
#[tokio::test]
async fn delete_image_updates_tab_and_stats() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_users_endpoint(factory::users(2), 1)
        .with_image_endpoint(2, factory::complete_image(2, 1), 1)
        .with_delete_image_endpoint(2, 1)
        .build()
        .await?;
    let before = test
        .create_endpoint(Endpoint::list_images(vec![
            factory::image(1, 1),
            factory::image(2, 1),
            factory::image(3, 2),
        ]))
        .await;
    let admin = logged_in(&test).admin();

    admin.load_images(None).await.unwrap();
    let detail = admin.view_image(2).await.unwrap();
    assert!(matches!(detail, ImageDetail::Found(_)));

    before.remove_async().await;
    test.add_endpoint(Endpoint::list_images(vec![
        factory::image(1, 1),
        factory::image(3, 2),
    ]))
    .await;

    admin.delete_image(2).await.unwrap();

    let ids: Vec<i64> = admin.image_rows().iter().map(|row| row.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(admin.detail(), None);
    assert_eq!(admin.stats().total_images, 2);
    assert_eq!(admin.stats().total_users, 2);
    assert!(admin.stats().online);
    test.assert_mocks().await;

    Ok(())
}

/// Tests editing a user after loading the users tab.
///
/// Expected: the edited row is patched in place and the other rows are untouched
#[tokio::test]
async fn edit_user_patches_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_users_endpoint(factory::users(3), 2)
        .with_images_endpoint(Vec::new(), 1)
        .with_endpoint(Endpoint::update_user(2, &factory::user(2, "renamed")))
        .build()
        .await?;
    let admin = logged_in(&test).admin();
    admin.load_users().await.unwrap();

    let mut form = UserForm::edit(&admin.user(2).unwrap());
    form.username = "renamed".to_string();
    admin.save_user(&form).await.unwrap();

    let usernames: Vec<String> = admin
        .user_rows()
        .into_iter()
        .map(|row| row.username)
        .collect();
    assert_eq!(usernames, vec!["user1", "renamed", "user3"]);
    assert!(matches!(admin.status(), PageStatus::Success(_)));
    test.assert_mocks().await;

    Ok(())
}

/// Tests the admin panel against an unreachable backend.
///
/// Expected: the stats show offline and loading users surfaces an error on the page
#[tokio::test]
async fn unreachable_backend_shows_offline() {
    let config = Config::new("http://127.0.0.1:9");
    let api = ApiClient::new(&config).unwrap();
    let sessions = SessionStore::new(MemoryStorage::new());
    sessions
        .save(&Session {
            id: TEST_USER_ID,
            username: TEST_USERNAME.to_string(),
            token: Some(TEST_TOKEN.to_string()),
        })
        .unwrap();
    let admin = AdminController::new(api, sessions, config);

    let stats = admin.refresh_stats().await;
    let result = admin.load_users().await;

    assert!(!stats.online);
    assert!(result.is_err());
    assert!(matches!(admin.status(), PageStatus::Error(_)));
}
