use healcheck::{
    controller::PageStatus, error::Error, validation::LoginForm, view::ImageSource,
};

use super::*;

fn credentials() -> LoginForm {
    LoginForm {
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

/// Tests logging in, analysing a meal and seeing it in the history.
///
/// Expected: upload and history requests carry the login token, the analysis renders with
/// the uploaded image and the history lists the new upload
#[tokio::test]
async fn login_upload_and_history() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response(TEST_USER_ID, TEST_USERNAME), 1)
        .with_endpoint(Endpoint::upload(&factory::upload_result(3, TEST_USER_ID)).bearer(TEST_TOKEN))
        .with_endpoint(
            Endpoint::list_user_images(
                TEST_USER_ID,
                vec![
                    factory::complete_image(3, TEST_USER_ID),
                    factory::complete_image(1, TEST_USER_ID),
                ],
            )
            .bearer(TEST_TOKEN),
        )
        .build()
        .await?;
    let portal = Portal::new(&test);

    portal.auth().login(&credentials()).await.unwrap();
    let dashboard = portal.dashboard();
    let analysis = dashboard.upload(Some(&jpeg())).await.unwrap();

    assert_eq!(analysis.id, 3);
    assert_eq!(analysis.food_name, "Pho");
    assert!(matches!(analysis.image, ImageSource::Url(_)));
    assert_eq!(dashboard.status(), PageStatus::Success("Analysis complete".to_string()));

    let history = dashboard.history_rows();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, 3);
    assert_eq!(history[0].kcal, "420 kcal");
    test.assert_mocks().await;

    Ok(())
}

/// Tests reopening the portal with a session left in storage.
///
/// Expected: a fresh client picks the token back up before its first request
#[tokio::test]
async fn stored_session_survives_reload() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response(TEST_USER_ID, TEST_USERNAME), 1)
        .with_endpoint(
            Endpoint::list_user_images(TEST_USER_ID, vec![factory::image(1, TEST_USER_ID)])
                .bearer(TEST_TOKEN),
        )
        .build()
        .await?;
    let first = Portal::new(&test);
    first.auth().login(&credentials()).await.unwrap();

    let reloaded = Portal::with_storage(&test, first.storage.clone());
    assert_eq!(reloaded.api.token(), None);

    let dashboard = reloaded.dashboard();
    dashboard.load_history().await.unwrap();

    assert_eq!(reloaded.api.token().as_deref(), Some(TEST_TOKEN));
    assert_eq!(dashboard.history_rows().len(), 1);
    test.assert_mocks().await;

    Ok(())
}

/// Tests uploading after logging out.
///
/// Expected: Err(Error::Unauthenticated) without reaching the upload endpoint
#[tokio::test]
async fn logout_ends_dashboard_access() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_login_endpoint(factory::login_response(TEST_USER_ID, TEST_USERNAME), 1)
        .with_upload_endpoint(factory::upload_result(3, TEST_USER_ID), 0)
        .build()
        .await?;
    let portal = Portal::new(&test);
    let auth = portal.auth();
    auth.login(&credentials()).await.unwrap();

    auth.logout();
    let result = portal.dashboard().upload(Some(&jpeg())).await;

    assert!(matches!(result, Err(Error::Unauthenticated)));
    assert_eq!(portal.api.token(), None);
    test.assert_mocks().await;

    Ok(())
}
