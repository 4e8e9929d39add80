use std::{cell::RefCell, rc::Rc};

use dioxus_logger::tracing;

use crate::{
    api::{image::ImageFile, ApiClient, ImageApi},
    cache::CollectionCache,
    config::Config,
    controller::{restore_session, BusyFlag, PageStatus, StatusCell},
    error::{Error, ValidationError},
    model::image::ImageRecord,
    session::{Session, SessionStorage, SessionStore},
    validation::validate_image_file,
    view::{render_analysis, render_images, AnalysisView, ImageRow},
};

pub const UPLOAD_FALLBACK: &str = "Failed to analyze image";
pub const HISTORY_FALLBACK: &str = "Failed to load your history";

#[derive(Default)]
struct DashboardState {
    history: CollectionCache<ImageRecord>,
    analysis: Option<AnalysisView>,
}

/// Controller of the end-user dashboard: upload for analysis and upload history
#[derive(Clone)]
pub struct DashboardController<S> {
    api: ApiClient,
    sessions: SessionStore<S>,
    config: Config,
    state: Rc<RefCell<DashboardState>>,
    status: StatusCell,
    uploading: BusyFlag,
}

impl<S: SessionStorage + Clone> DashboardController<S> {
    pub fn new(api: ApiClient, sessions: SessionStore<S>, config: Config) -> Self {
        Self {
            api,
            sessions,
            config,
            state: Rc::new(RefCell::new(DashboardState::default())),
            status: StatusCell::default(),
            uploading: BusyFlag::default(),
        }
    }

    /// The logged in user; the page redirects to login on `Err(Error::Unauthenticated)`.
    pub fn require_session(&self) -> Result<Session, Error> {
        restore_session(&self.sessions, &self.api)
    }

    pub fn status(&self) -> PageStatus {
        self.status.get()
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading.is_busy()
    }

    /// Result of the last successful upload
    pub fn analysis(&self) -> Option<AnalysisView> {
        self.state.borrow().analysis.clone()
    }

    pub fn history_rows(&self) -> Vec<ImageRow> {
        render_images(&self.state.borrow().history, &self.config)
    }

    /// Check a picked file before it is accepted for upload.
    pub fn validate_file(&self, content_type: &str, size: u64) -> Result<(), Error> {
        let result = validate_image_file(content_type, size).map_err(Error::from);

        match &result {
            Ok(()) => self.status.reset(),
            Err(err) => self.status.fail("File selection", err, UPLOAD_FALLBACK),
        }

        result
    }

    /// Forget the previous analysis, e.g. when the picked file is removed.
    pub fn clear_analysis(&self) {
        self.state.borrow_mut().analysis = None;
        self.status.reset();
    }

    /// Upload a file for analysis, then reload the history.
    ///
    /// A history reload failure is logged but does not fail the upload, whose result is
    /// already rendered.
    pub async fn upload(&self, file: Option<&ImageFile>) -> Result<AnalysisView, Error> {
        let result = self.try_upload(file).await;

        match &result {
            Ok(view) => {
                tracing::info!("Image {} analysed", view.id);
                self.status.succeed("Analysis complete");
            }
            Err(err) => self.status.fail("Upload", err, UPLOAD_FALLBACK),
        }

        if result.is_ok() {
            if let Err(e) = self.reload_history().await {
                tracing::warn!("History reload after upload failed: {}", e);
            }
        }

        result
    }

    async fn try_upload(&self, file: Option<&ImageFile>) -> Result<AnalysisView, Error> {
        let file = file.ok_or(ValidationError::NoFileSelected)?;
        validate_image_file(&file.content_type, file.size())?;
        let session = self.require_session()?;

        let _uploading = self
            .uploading
            .try_enter()
            .ok_or_else(|| Error::Busy("upload".to_string()))?;
        self.status.loading();

        let upload = ImageApi::new(&self.api).upload(session.id, file).await?;
        let view = render_analysis(&upload, &self.config);

        self.state.borrow_mut().analysis = Some(view.clone());

        Ok(view)
    }

    /// Fetch the logged in user's uploads into the history cache.
    pub async fn load_history(&self) -> Result<(), Error> {
        let result = self.reload_history().await;

        if let Err(err) = &result {
            self.status.fail("History load", err, HISTORY_FALLBACK);
        }

        result
    }

    async fn reload_history(&self) -> Result<(), Error> {
        let session = self.require_session()?;
        let ticket = self.state.borrow_mut().history.begin_fetch();

        let records = ImageApi::new(&self.api).list(Some(session.id)).await?;

        let applied = self
            .state
            .borrow_mut()
            .history
            .replace_all_if_current(ticket, records);

        if !applied {
            tracing::warn!("Discarded stale history for user {}", session.id);
        }

        Ok(())
    }
}
