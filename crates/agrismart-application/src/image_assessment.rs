//! Image assessment screen controller.
//!
//! Uploads one selected image as multipart form data. Submitting with no
//! image selected is a no-op, matching the original screen.

use std::path::PathBuf;
use std::sync::Arc;

use agrismart_core::error::Result;
use agrismart_core::form::{SubmitGuard, SubmitState, SubmitToken};
use agrismart_gateway::backend::{BackendApi, ImageOutcome};

pub struct ImageAssessmentController {
    backend: Arc<dyn BackendApi>,
    image: Option<PathBuf>,
    state: SubmitState<ImageOutcome>,
    guard: SubmitGuard,
}

impl ImageAssessmentController {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            backend,
            image: None,
            state: SubmitState::Idle,
            guard: SubmitGuard::new(),
        }
    }

    pub fn select_image(&mut self, path: impl Into<PathBuf>) {
        self.image = Some(path.into());
    }

    pub fn state(&self) -> &SubmitState<ImageOutcome> {
        &self.state
    }

    pub async fn submit(&mut self) {
        let Some(image) = self.image.clone() else {
            tracing::debug!("image assessment submitted with no file selected");
            return;
        };

        let token = self.guard.begin();
        let result = self.backend.assess_image(&image).await;
        self.complete(token, result);
    }

    pub fn complete(&mut self, token: SubmitToken, result: Result<ImageOutcome>) {
        if !self.guard.is_current(token) {
            tracing::debug!("discarding stale image assessment result");
            return;
        }

        self.state = match result {
            Ok(outcome) => SubmitState::Success(outcome),
            Err(err) => SubmitState::Error(err.user_message()),
        };
    }
}
