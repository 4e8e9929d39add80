use std::{cell::RefCell, collections::HashSet, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    api::{ApiClient, ImageApi, StatsApi, UserApi},
    cache::CollectionCache,
    config::Config,
    controller::{restore_session, BusyFlag, InFlight, PageStatus, StatusCell},
    error::{Error, ValidationError},
    model::{
        image::ImageRecord,
        stats::ServiceStats,
        user::{RegisterDto, UpdateUserDto, UserRecord},
    },
    session::{Session, SessionStorage, SessionStore},
    validation::{parse_user_filter, validate_email, MIN_PASSWORD_LEN, MIN_USERNAME_LEN},
    view::{render_detail, render_images, render_users, ImageDetail, ImageRow, UserRow},
};

pub const LOAD_USERS_FALLBACK: &str = "Failed to load users";
pub const LOAD_IMAGES_FALLBACK: &str = "Failed to load images";
pub const SAVE_USER_FALLBACK: &str = "Failed to save user. Please try again.";
pub const DELETE_USER_FALLBACK: &str = "Failed to delete user. Please try again.";
pub const DELETE_IMAGE_FALLBACK: &str = "Failed to delete image. Please try again.";
pub const VIEW_IMAGE_FALLBACK: &str = "Failed to view image. Please try again.";

/// The add/edit user modal.
///
/// `id` is `None` when creating a user. The password is required on create and optional on
/// edit, where blank means "keep the current password".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserForm {
    /// Prefill the edit modal from a cached user
    pub fn edit(user: &UserRecord) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.clone(),
            email: user.email.clone().unwrap_or_default(),
            password: String::new(),
        }
    }
}

/// Outcome of a scheduled stats poll
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    Refreshed,
    /// A refresh was already in flight
    Skipped,
}

#[derive(Default)]
struct AdminState {
    users: CollectionCache<UserRecord>,
    images: CollectionCache<ImageRecord>,
    image_filter: Option<i64>,
    stats: ServiceStats,
    detail: Option<ImageDetail>,
    /// Images this panel deleted; a by-id fetch answered after the delete must not revive them
    deleted_images: HashSet<i64>,
}

/// Controller of the admin panel: users tab, images tab and service stats.
///
/// Both tabs follow the same pattern: a list fetch rebuilds the tab's cache, single-record
/// operations patch it only after the server confirmed the change, and every write is followed
/// by a stats refresh.
#[derive(Clone)]
pub struct AdminController<S> {
    api: ApiClient,
    sessions: SessionStore<S>,
    config: Config,
    state: Rc<RefCell<AdminState>>,
    status: StatusCell,
    deleting_users: InFlight,
    deleting_images: InFlight,
    refreshing_stats: BusyFlag,
}

impl<S: SessionStorage + Clone> AdminController<S> {
    pub fn new(api: ApiClient, sessions: SessionStore<S>, config: Config) -> Self {
        Self {
            api,
            sessions,
            config,
            state: Rc::new(RefCell::new(AdminState::default())),
            status: StatusCell::default(),
            deleting_users: InFlight::default(),
            deleting_images: InFlight::default(),
            refreshing_stats: BusyFlag::default(),
        }
    }

    /// The logged in administrator; the panel redirects to login without one.
    pub fn require_session(&self) -> Result<Session, Error> {
        restore_session(&self.sessions, &self.api)
    }

    pub fn status(&self) -> PageStatus {
        self.status.get()
    }

    pub fn dismiss_status(&self) {
        self.status.reset();
    }

    pub fn stats(&self) -> ServiceStats {
        self.state.borrow().stats.clone()
    }

    pub fn user_rows(&self) -> Vec<UserRow> {
        render_users(&self.state.borrow().users)
    }

    pub fn image_rows(&self) -> Vec<ImageRow> {
        render_images(&self.state.borrow().images, &self.config)
    }

    /// User id the images tab is filtered by
    pub fn image_filter(&self) -> Option<i64> {
        self.state.borrow().image_filter
    }

    pub fn user(&self, id: i64) -> Option<UserRecord> {
        self.state.borrow().users.find_by_id(id).cloned()
    }

    pub fn image(&self, id: i64) -> Option<ImageRecord> {
        self.state.borrow().images.find_by_id(id).cloned()
    }

    /// The open image detail modal, if any
    pub fn detail(&self) -> Option<ImageDetail> {
        self.state.borrow().detail.clone()
    }

    pub fn close_detail(&self) {
        self.state.borrow_mut().detail = None;
    }

    pub fn is_deleting_user(&self, id: i64) -> bool {
        self.deleting_users.contains(id)
    }

    pub fn is_deleting_image(&self, id: i64) -> bool {
        self.deleting_images.contains(id)
    }

    /// Rebuild the users cache from `GET /users`.
    pub async fn load_users(&self) -> Result<(), Error> {
        let result = self.fetch_users().await;

        if let Err(err) = &result {
            self.status.fail("Loading users", err, LOAD_USERS_FALLBACK);
        }

        result
    }

    async fn fetch_users(&self) -> Result<(), Error> {
        let ticket = self.state.borrow_mut().users.begin_fetch();

        let users = UserApi::new(&self.api).list().await?;
        let count = users.len();

        if self
            .state
            .borrow_mut()
            .users
            .replace_all_if_current(ticket, users)
        {
            tracing::debug!("Loaded {} users", count);
        } else {
            tracing::warn!("Discarded stale users list");
        }

        Ok(())
    }

    /// Rebuild the images cache, optionally only with images of one user.
    pub async fn load_images(&self, user_filter: Option<i64>) -> Result<(), Error> {
        let result = self.fetch_images(user_filter).await;

        if let Err(err) = &result {
            self.status.fail("Loading images", err, LOAD_IMAGES_FALLBACK);
        }

        result
    }

    async fn fetch_images(&self, user_filter: Option<i64>) -> Result<(), Error> {
        let ticket = {
            let mut state = self.state.borrow_mut();
            state.image_filter = user_filter;
            state.images.begin_fetch()
        };

        let images = ImageApi::new(&self.api).list(user_filter).await?;
        let count = images.len();

        if self
            .state
            .borrow_mut()
            .images
            .replace_all_if_current(ticket, images)
        {
            tracing::debug!("Loaded {} images (filter: {:?})", count, user_filter);
        } else {
            tracing::warn!("Discarded stale images list (filter: {:?})", user_filter);
        }

        Ok(())
    }

    /// Search the images tab by the user id typed into the search box; blank clears it.
    pub async fn search_images(&self, input: &str) -> Result<(), Error> {
        let filter = match parse_user_filter(input) {
            Ok(filter) => filter,
            Err(e) => {
                let err = Error::from(e);
                self.status.fail("Image search", &err, LOAD_IMAGES_FALLBACK);
                return Err(err);
            }
        };

        self.load_images(filter).await
    }

    /// Create or update a user, patch the users cache and refresh the stats.
    pub async fn save_user(&self, form: &UserForm) -> Result<(), Error> {
        let result = self.try_save_user(form).await;

        match &result {
            Ok(()) => {
                let message = match form.id {
                    Some(_) => "User updated successfully!",
                    None => "User created successfully!",
                };
                self.status.succeed(message);
                self.refresh_stats().await;
            }
            Err(err) => self.status.fail("Saving user", err, SAVE_USER_FALLBACK),
        }

        result
    }

    async fn try_save_user(&self, form: &UserForm) -> Result<(), Error> {
        let username = form.username.trim().to_string();
        let email = validate_email(&form.email)?;
        let password = Some(form.password.clone()).filter(|p| !p.is_empty());

        if username.is_empty() || (form.id.is_none() && password.is_none()) {
            return Err(ValidationError::MissingRequiredFields.into());
        }
        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort.into());
        }
        if password
            .as_ref()
            .is_some_and(|p| p.chars().count() < MIN_PASSWORD_LEN)
        {
            return Err(ValidationError::PasswordTooShort.into());
        }

        self.status.loading();
        let users = UserApi::new(&self.api);

        match form.id {
            None => {
                let dto = RegisterDto {
                    username,
                    password: password.unwrap_or_default(),
                    email,
                };

                match users.register(&dto).await? {
                    Some(created) => {
                        tracing::info!("Created user {}", created.id);
                        self.state.borrow_mut().users.upsert(created);
                    }
                    None => {
                        // Without the new record there is no id to patch in; refetch instead
                        tracing::info!("Created user {}", dto.username);
                        if let Err(e) = self.fetch_users().await {
                            tracing::warn!("Users reload after create failed: {}", e);
                        }
                    }
                }
            }
            Some(id) => {
                let dto = UpdateUserDto {
                    username,
                    email,
                    password,
                };

                let record = match users.update(id, &dto).await? {
                    Some(updated) => updated,
                    None => self.merge_update(id, &dto),
                };

                tracing::info!("Updated user {}", id);
                self.state.borrow_mut().users.upsert(record);
            }
        }

        Ok(())
    }

    /// The cached user with the submitted fields applied.
    fn merge_update(&self, id: i64, dto: &UpdateUserDto) -> UserRecord {
        let created_at = self
            .state
            .borrow()
            .users
            .find_by_id(id)
            .and_then(|user| user.created_at);

        UserRecord {
            id,
            username: dto.username.clone(),
            email: dto.email.clone(),
            created_at,
        }
    }

    /// Delete a user, then drop it from the cache and refresh the stats.
    ///
    /// A second delete for the same id while the first is running fails with
    /// [`Error::Busy`] without issuing a request.
    pub async fn delete_user(&self, id: i64) -> Result<(), Error> {
        let result = self.try_delete_user(id).await;

        match &result {
            Ok(()) => {
                self.status.succeed("User deleted successfully!");
                self.refresh_stats().await;
            }
            Err(err) => self.status.fail("Deleting user", err, DELETE_USER_FALLBACK),
        }

        result
    }

    async fn try_delete_user(&self, id: i64) -> Result<(), Error> {
        let _deleting = self
            .deleting_users
            .try_begin(id)
            .ok_or_else(|| Error::Busy(format!("user {}", id)))?;
        self.status.loading();

        UserApi::new(&self.api).delete(id).await?;

        self.state.borrow_mut().users.remove_by_id(id);
        tracing::info!("Deleted user {}", id);

        Ok(())
    }

    /// Delete an image, then drop it from the cache and refresh the stats.
    pub async fn delete_image(&self, id: i64) -> Result<(), Error> {
        let result = self.try_delete_image(id).await;

        match &result {
            Ok(()) => {
                self.status.succeed("Image deleted successfully!");
                self.refresh_stats().await;
            }
            Err(err) => self.status.fail("Deleting image", err, DELETE_IMAGE_FALLBACK),
        }

        result
    }

    async fn try_delete_image(&self, id: i64) -> Result<(), Error> {
        let _deleting = self
            .deleting_images
            .try_begin(id)
            .ok_or_else(|| Error::Busy(format!("image {}", id)))?;
        self.status.loading();

        ImageApi::new(&self.api).delete(id).await?;

        let mut state = self.state.borrow_mut();
        state.images.remove_by_id(id);
        state.deleted_images.insert(id);
        if matches!(&state.detail, Some(ImageDetail::Found(view)) if view.id == id) {
            state.detail = None;
        }
        drop(state);

        tracing::info!("Deleted image {}", id);

        Ok(())
    }

    /// Open the detail modal for an image.
    ///
    /// A complete cached record is shown as is. Otherwise the record is fetched by id and
    /// upserted into the cache; an image the server does not know renders as unavailable.
    pub async fn view_image(&self, id: i64) -> Result<ImageDetail, Error> {
        let result = self.try_view_image(id).await;

        match &result {
            Ok(detail) => {
                self.state.borrow_mut().detail = Some(detail.clone());
            }
            Err(err) => self.status.fail("Viewing image", err, VIEW_IMAGE_FALLBACK),
        }

        result
    }

    async fn try_view_image(&self, id: i64) -> Result<ImageDetail, Error> {
        if let Some(cached) = self.image(id).filter(ImageRecord::is_complete) {
            return Ok(render_detail(Some(&cached), &self.config));
        }

        tracing::debug!("Image {} incomplete or not cached, fetching", id);

        let fetched = match ImageApi::new(&self.api).get(id).await {
            Ok(record) => record,
            Err(Error::Api(e)) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        let Some(record) = fetched else {
            tracing::warn!("Image {} not found", id);
            return Ok(ImageDetail::Unavailable);
        };

        let mut state = self.state.borrow_mut();
        if state.deleted_images.contains(&id) {
            tracing::warn!("Image {} was deleted while its detail loaded", id);
            return Ok(ImageDetail::Unavailable);
        }

        let detail = render_detail(Some(&record), &self.config);
        state.images.upsert(record);

        Ok(detail)
    }

    /// Refresh the stats cards; never fails, an unreachable backend shows as offline.
    pub async fn refresh_stats(&self) -> ServiceStats {
        let _refreshing = self.refreshing_stats.enter();

        let stats = StatsApi::new(&self.api).fetch().await;
        self.state.borrow_mut().stats = stats.clone();

        stats
    }

    /// Scheduled refresh; skipped while another refresh is still running.
    pub async fn poll_stats(&self) -> PollOutcome {
        if self.refreshing_stats.is_busy() {
            tracing::debug!("Stats refresh in flight, skipping poll");
            return PollOutcome::Skipped;
        }

        self.refresh_stats().await;
        PollOutcome::Refreshed
    }
}

#[cfg(test)]
mod tests {
    use healcheck_test_utils::prelude::*;

    use crate::{session::MemoryStorage, view::image::NO_IMAGE_AVAILABLE, view::ImageSource};

    use super::*;

    fn controller(test: &TestSetup) -> AdminController<MemoryStorage> {
        let config = Config::new(&test.url());
        let api = ApiClient::new(&config).unwrap();
        AdminController::new(api, SessionStore::new(MemoryStorage::new()), config)
    }

    mod users_tests {
        use super::*;

        /// Tests loading the users tab.
        #[tokio::test]
        async fn load_users_fills_cache() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_users_endpoint(factory::users(3), 1)
                .build()
                .await?;
            let admin = controller(&test);

            admin.load_users().await.unwrap();

            let rows = admin.user_rows();
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[0].username, "user1");
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests an update answered without a body.
        ///
        /// Expected: cached user patched from the form, creation date kept
        #[tokio::test]
        async fn update_patches_cache_from_form() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_users_endpoint(factory::users(2), 2)
                .with_images_endpoint(Vec::new(), 1)
                .with_endpoint(Endpoint::new("PUT", "/users/2").status(204))
                .build()
                .await?;
            let admin = controller(&test);
            admin.load_users().await.unwrap();
            let created_at = admin.user(2).unwrap().created_at;

            let mut form = UserForm::edit(&admin.user(2).unwrap());
            form.username = "renamed".to_string();
            form.email = String::new();
            admin.save_user(&form).await.unwrap();

            let user = admin.user(2).unwrap();
            assert_eq!(user.username, "renamed");
            assert_eq!(user.email, None);
            assert_eq!(user.created_at, created_at);
            assert_eq!(admin.user_rows().len(), 2, "Update should not add a row");
            assert_eq!(
                admin.status(),
                PageStatus::Success("User updated successfully!".to_string())
            );
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests creating a user that the server echoes back.
        ///
        /// Expected: the new user is appended to the cache
        #[tokio::test]
        async fn create_appends_returned_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_users_endpoint(factory::users(1), 2)
                .with_images_endpoint(Vec::new(), 1)
                .with_endpoint(Endpoint::register(&factory::user(9, "carol")))
                .build()
                .await?;
            let admin = controller(&test);
            admin.load_users().await.unwrap();

            let form = UserForm {
                id: None,
                username: "carol".to_string(),
                email: "carol@example.com".to_string(),
                password: "secret1".to_string(),
            };
            admin.save_user(&form).await.unwrap();

            let ids: Vec<i64> = admin.user_rows().iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![1, 9]);

            Ok(())
        }

        /// Tests creating a user without a password.
        ///
        /// Expected: rejected locally, no request issued
        #[tokio::test]
        async fn create_requires_password() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_endpoint(Endpoint::register(&factory::user(9, "carol")).expect(0))
                .build()
                .await?;
            let admin = controller(&test);

            let form = UserForm {
                username: "carol".to_string(),
                ..UserForm::default()
            };
            let result = admin.save_user(&form).await;

            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::MissingRequiredFields))
            ));
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests deleting user 5 answered with `204`.
        ///
        /// Expected: user removed from the cache and total users drops by exactly one
        #[tokio::test]
        async fn delete_decrements_total_users() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_images_endpoint(Vec::new(), 2)
                .with_delete_user_endpoint(5, 1)
                .build()
                .await?;
            let before = test
                .create_endpoint(Endpoint::list_users(factory::users(5)).expect(2))
                .await;
            let admin = controller(&test);
            admin.load_users().await.unwrap();
            let total_before = admin.refresh_stats().await.total_users;

            // The server no longer lists the deleted user
            before.remove_async().await;
            let remaining: Vec<_> = factory::users(5)
                .into_iter()
                .filter(|u| u["id"] != 5)
                .collect();
            test.add_endpoint(Endpoint::list_users(remaining)).await;

            admin.delete_user(5).await.unwrap();

            assert_eq!(admin.stats().total_users, total_before - 1);
            assert!(admin.user(5).is_none());
            assert_eq!(admin.user_rows().len(), 4);
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests a failed delete.
        ///
        /// Expected: the user stays in the cache
        #[tokio::test]
        async fn failed_delete_keeps_cache() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_users_endpoint(factory::users(2), 1)
                .with_endpoint(
                    Endpoint::new("DELETE", "/users/2")
                        .status(500)
                        .json(&factory::error_body("Database unavailable")),
                )
                .build()
                .await?;
            let admin = controller(&test);
            admin.load_users().await.unwrap();

            let result = admin.delete_user(2).await;

            assert!(result.is_err());
            assert!(admin.user(2).is_some());
            assert_eq!(
                admin.status(),
                PageStatus::Error("Database unavailable".to_string())
            );

            Ok(())
        }

        /// Tests two delete triggers for the same user.
        ///
        /// Expected: the second fails with Busy, exactly one request issued
        #[tokio::test]
        async fn duplicate_delete_is_rejected() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_delete_user_endpoint(5, 1)
                .with_users_endpoint(factory::users(4), 1)
                .with_images_endpoint(Vec::new(), 1)
                .build()
                .await?;
            let admin = controller(&test);

            let (first, second) = tokio::join!(admin.delete_user(5), admin.delete_user(5));

            assert!(first.is_ok());
            assert!(matches!(second, Err(Error::Busy(_))));
            assert!(!admin.is_deleting_user(5));
            test.assert_mocks().await;

            Ok(())
        }
    }

    mod images_tests {
        use super::*;

        /// Tests viewing a sparse image not in the cache.
        ///
        /// Expected: fetched by id, upserted, detail shows the "No image available" placeholder
        #[tokio::test]
        async fn view_fetches_incomplete_image() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_image_endpoint(42, factory::image(42, 7), 1)
                .build()
                .await?;
            let admin = controller(&test);

            let detail = admin.view_image(42).await.unwrap();

            let ImageDetail::Found(view) = detail else {
                panic!("Expected a detail view");
            };
            assert_eq!(view.user_id, "7");
            assert_eq!(view.image, ImageSource::Placeholder(NO_IMAGE_AVAILABLE));
            assert!(admin.image(42).is_some(), "Fetched record should be cached");
            assert!(admin.detail().is_some());
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests viewing a complete cached image.
        ///
        /// Expected: no detail request issued
        #[tokio::test]
        async fn view_uses_complete_cache_entry() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_images_endpoint(vec![factory::complete_image(1, 7)], 1)
                .with_image_endpoint(1, factory::complete_image(1, 7), 0)
                .build()
                .await?;
            let admin = controller(&test);
            admin.load_images(None).await.unwrap();

            let detail = admin.view_image(1).await.unwrap();

            assert!(matches!(detail, ImageDetail::Found(_)));
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests viewing an image the server does not know.
        ///
        /// Expected: the unavailable state rather than an error
        #[tokio::test]
        async fn view_missing_image() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_endpoint(
                    Endpoint::get_image(99, &factory::error_body("Image not found")).status(404),
                )
                .build()
                .await?;
            let admin = controller(&test);

            let detail = admin.view_image(99).await.unwrap();

            assert_eq!(detail, ImageDetail::Unavailable);

            Ok(())
        }

        /// Tests searching images by user id.
        #[tokio::test]
        async fn search_filters_by_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user_images_endpoint(7, vec![factory::image(1, 7)], 1)
                .build()
                .await?;
            let admin = controller(&test);

            admin.search_images(" 7 ").await.unwrap();

            assert_eq!(admin.image_filter(), Some(7));
            assert_eq!(admin.image_rows().len(), 1);
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests an invalid search.
        ///
        /// Expected: rejected locally
        #[tokio::test]
        async fn invalid_search_is_local() -> Result<(), TestError> {
            let test = TestSetup::new().await?;
            let admin = controller(&test);

            let result = admin.search_images("abc").await;

            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::InvalidUserId))
            ));

            Ok(())
        }

        /// Tests deleting a cached image.
        #[tokio::test]
        async fn delete_removes_from_cache() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_images_endpoint(
                    vec![factory::complete_image(1, 7), factory::complete_image(2, 7)],
                    2,
                )
                .with_users_endpoint(factory::users(1), 1)
                .with_delete_image_endpoint(1, 1)
                .build()
                .await?;
            let admin = controller(&test);
            admin.load_images(None).await.unwrap();

            admin.delete_image(1).await.unwrap();

            let ids: Vec<i64> = admin.image_rows().iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![2]);
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests a detail fetch that resolves after the same image was deleted.
        ///
        /// Expected: the deleted image stays out of the cache and the detail shows it as
        /// unavailable
        #[tokio::test]
        async fn view_resolving_after_delete_does_not_revive_image() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_images_endpoint(
                    vec![factory::image(1, 7), factory::complete_image(2, 7)],
                    2,
                )
                .with_users_endpoint(factory::users(1), 1)
                .with_image_endpoint(1, factory::complete_image(1, 7), 1)
                .with_delete_image_endpoint(1, 1)
                .build()
                .await?;
            let admin = controller(&test);
            admin.load_images(None).await.unwrap();

            let viewing = admin.view_image(1);
            tokio::pin!(viewing);

            // Poll once so the detail fetch is waiting on the network
            tokio::select! {
                biased;
                _ = &mut viewing => panic!("Detail fetch should still be waiting on the network"),
                _ = tokio::task::yield_now() => {}
            }

            admin.delete_image(1).await.unwrap();
            let detail = viewing.await.unwrap();

            assert_eq!(detail, ImageDetail::Unavailable);
            assert!(admin.image(1).is_none(), "Deleted image should not be cached again");
            let ids: Vec<i64> = admin.image_rows().iter().map(|r| r.id).collect();
            assert_eq!(ids, vec![2]);
            assert_eq!(admin.detail(), Some(ImageDetail::Unavailable));
            test.assert_mocks().await;

            Ok(())
        }
    }

    mod stats_tests {
        use super::*;

        /// Tests a poll while a refresh is in flight.
        ///
        /// Expected: the poll is skipped without a request
        #[tokio::test]
        async fn poll_skipped_while_refreshing() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_users_endpoint(factory::users(2), 1)
                .with_images_endpoint(Vec::new(), 1)
                .build()
                .await?;
            let admin = controller(&test);

            let (stats, outcome) = tokio::join!(admin.refresh_stats(), admin.poll_stats());

            assert_eq!(outcome, PollOutcome::Skipped);
            assert_eq!(stats.total_users, 2);
            test.assert_mocks().await;

            Ok(())
        }

        /// Tests a poll with nothing in flight.
        #[tokio::test]
        async fn poll_refreshes() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_users_endpoint(factory::users(3), 1)
                .with_images_endpoint(vec![factory::image_created_today(1, 1)], 1)
                .build()
                .await?;
            let admin = controller(&test);

            let outcome = admin.poll_stats().await;

            assert_eq!(outcome, PollOutcome::Refreshed);
            assert_eq!(
                admin.stats(),
                ServiceStats {
                    total_users: 3,
                    total_images: 1,
                    today_analyses: 1,
                    online: true,
                }
            );

            Ok(())
        }
    }
}
