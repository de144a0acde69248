//! Upload form validation.
//!
//! Nothing is transferred anywhere: a valid draft yields a `Submission`
//! receipt that is pending admin review.

use crate::error::{Error, Result};

/// Audio formats accepted by the upload form.
pub const AUDIO_FORMATS: &[&str] = &["MP3", "WAV", "FLAC", "AAC"];

/// The fields of the upload form as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub title: String,
    pub artist_name: String,
    pub isrc: String,
    pub genre: String,
    pub description: String,
    pub lyrics: String,
    pub release_date: String,
    pub explicit: bool,
    pub audio_format: String,
    pub owns_rights: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReviewStatus {
    PendingReview,
}

/// Receipt for a submitted draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub artist_name: String,
    pub genre: String,
    pub status: ReviewStatus,
}

impl UploadDraft {
    /// Check the draft the way the form does before submitting.
    ///
    /// Required fields are reported together, before the rights check.
    /// The form offers formats from a fixed list; the format check guards
    /// callers that fill a draft without going through that list.
    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.artist_name.trim().is_empty() {
            missing.push("artist name");
        }
        if self.genre.trim().is_empty() {
            missing.push("genre");
        }
        if !missing.is_empty() {
            return Err(Error::MissingRequiredFields(missing));
        }

        if !self.owns_rights {
            return Err(Error::RightsNotConfirmed);
        }

        // Only reachable when the draft was built outside the format picker.
        let format = self.audio_format.trim();
        if !format.is_empty() && !AUDIO_FORMATS.iter().any(|f| f.eq_ignore_ascii_case(format)) {
            return Err(Error::UnsupportedAudioFormat(format.to_string()));
        }

        Ok(())
    }

    /// Validate and "submit" the draft. No I/O happens here.
    pub fn submit(&self) -> Result<Submission> {
        self.validate()?;
        log::info!(
            "upload submitted for review: {:?} by {:?}",
            self.title.trim(),
            self.artist_name.trim()
        );
        Ok(Submission {
            title: self.title.trim().to_string(),
            artist_name: self.artist_name.trim().to_string(),
            genre: self.genre.trim().to_string(),
            status: ReviewStatus::PendingReview,
        })
    }
}
