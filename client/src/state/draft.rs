//! Create-article draft held entirely in the browser.
//!
//! There is no article backend yet. Upload produces a [`DraftSubmission`],
//! waits [`SIMULATED_UPLOAD_DELAY`], and returns to the dashboard.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::time::Duration;

use serde::Serialize;

use crate::util::format::word_count;

pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];
pub const SIMULATED_UPLOAD_DELAY: Duration = Duration::from_millis(1500);
pub const DASHBOARD_ROUTE: &str = "/admin/dashboard";

/// `(value, label)` pairs offered in the category select.
pub const ARTICLE_CATEGORIES: [(&str, &str); 3] =
    [("technology", "Technology"), ("design", "Design"), ("finance", "Finance")];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DraftPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Selected thumbnail and its object-URL preview.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Thumbnail {
    pub file_name: String,
    pub mime_type: String,
    pub preview_url: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Please select a valid image file (jpg or png).")]
    UnsupportedImage(String),
    #[error("upload already in progress")]
    AlreadySubmitting,
}

/// Payload a real article backend would receive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DraftSubmission {
    pub title: String,
    pub category: String,
    pub content: String,
    pub thumbnail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DraftState {
    pub title: String,
    pub category: String,
    pub content: String,
    pub word_count: usize,
    pub thumbnail: Option<Thumbnail>,
    pub phase: DraftPhase,
}

impl DraftState {
    pub fn set_content(&mut self, text: String) {
        self.word_count = word_count(&text);
        self.content = text;
    }

    /// Accept a picked file as the thumbnail.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedImage` for anything but JPEG/PNG; the previous
    /// preview is cleared in that case too.
    pub fn select_thumbnail(&mut self, file_name: &str, mime_type: &str, preview_url: String) -> Result<(), DraftError> {
        if !ACCEPTED_IMAGE_TYPES.contains(&mime_type) {
            self.thumbnail = None;
            return Err(DraftError::UnsupportedImage(mime_type.to_owned()));
        }
        self.thumbnail =
            Some(Thumbnail { file_name: file_name.to_owned(), mime_type: mime_type.to_owned(), preview_url });
        Ok(())
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == DraftPhase::Submitting
    }

    #[must_use]
    pub fn submission(&self) -> DraftSubmission {
        DraftSubmission {
            title: self.title.clone(),
            category: self.category.clone(),
            content: self.content.clone(),
            thumbnail: self.thumbnail.as_ref().map(|t| t.file_name.clone()),
        }
    }

    /// Move to `Submitting` and hand back the payload to upload.
    ///
    /// # Errors
    ///
    /// Returns `AlreadySubmitting` if an upload is in flight.
    pub fn begin_submit(&mut self) -> Result<DraftSubmission, DraftError> {
        if self.is_submitting() {
            return Err(DraftError::AlreadySubmitting);
        }
        self.phase = DraftPhase::Submitting;
        Ok(self.submission())
    }

    /// Mark the upload done; returns where to navigate.
    pub fn finish_submit(&mut self) -> &'static str {
        self.phase = DraftPhase::Submitted;
        DASHBOARD_ROUTE
    }

    /// Human-readable summary for the preview notice.
    #[must_use]
    pub fn preview_summary(&self) -> String {
        let summary = serde_json::json!({
            "title": self.title,
            "category": self.category,
            "content": self.content,
            "thumbnail": if self.thumbnail.is_some() { "Image attached" } else { "No image" },
        });
        format!("Preview is not available yet. Draft: {summary}")
    }
}
