use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::catalog::Catalog;
use crate::derived::certificate_unlocked;
use crate::progress::ProgressTracker;

pub const COURSE_TITLE: &str = "Python for Beginners Course";
pub const SIGNATORY: &str = "Python Learner Team";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CertificateError {
    #[error("certificate is locked: {completed} of {total} lessons completed")]
    Locked { completed: usize, total: usize },
    #[error("recipient name cannot be empty")]
    EmptyRecipient,
}

/// Certificate of completion for the whole curriculum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    recipient: String,
    course: &'static str,
    issued_on: NaiveDate,
    signed_by: &'static str,
}

impl Certificate {
    /// Issues a certificate once every lesson is completed.
    ///
    /// # Errors
    ///
    /// Returns `CertificateError::Locked` while any lesson is incomplete, and
    /// `CertificateError::EmptyRecipient` for a blank name.
    pub fn issue(
        recipient: &str,
        catalog: &Catalog,
        progress: &ProgressTracker,
        issued_at: DateTime<Utc>,
    ) -> Result<Self, CertificateError> {
        if !certificate_unlocked(catalog, progress) {
            return Err(CertificateError::Locked {
                completed: progress.completed_count(),
                total: progress.total_count(catalog),
            });
        }
        let recipient = recipient.trim();
        if recipient.is_empty() {
            return Err(CertificateError::EmptyRecipient);
        }

        Ok(Self {
            recipient: recipient.to_string(),
            course: COURSE_TITLE,
            issued_on: issued_at.date_naive(),
            signed_by: SIGNATORY,
        })
    }

    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[must_use]
    pub fn course(&self) -> &str {
        self.course
    }

    #[must_use]
    pub fn issued_on(&self) -> NaiveDate {
        self.issued_on
    }

    #[must_use]
    pub fn signed_by(&self) -> &str {
        self.signed_by
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn completed_everything(catalog: &Catalog) -> ProgressTracker {
        let mut progress = ProgressTracker::new();
        for lesson in catalog.lessons() {
            progress.mark_complete(lesson.id().clone());
        }
        progress
    }

    #[test]
    fn locked_until_every_lesson_is_completed() {
        let catalog = Catalog::builtin().unwrap();
        let mut progress = ProgressTracker::new();
        for lesson in catalog.lessons().skip(1) {
            progress.mark_complete(lesson.id().clone());
        }

        let err = Certificate::issue("Ada", &catalog, &progress, fixed_now()).unwrap_err();
        assert_eq!(
            err,
            CertificateError::Locked {
                completed: 38,
                total: 39
            }
        );
    }

    #[test]
    fn issues_with_trimmed_name_and_date() {
        let catalog = Catalog::builtin().unwrap();
        let progress = completed_everything(&catalog);

        let cert = Certificate::issue("  Ada Lovelace ", &catalog, &progress, fixed_now()).unwrap();

        assert_eq!(cert.recipient(), "Ada Lovelace");
        assert_eq!(cert.course(), COURSE_TITLE);
        assert_eq!(cert.signed_by(), SIGNATORY);
        assert_eq!(cert.issued_on(), NaiveDate::from_ymd_opt(2023, 11, 14).unwrap());
    }

    #[test]
    fn blank_name_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let progress = completed_everything(&catalog);

        let err = Certificate::issue("   ", &catalog, &progress, fixed_now()).unwrap_err();
        assert_eq!(err, CertificateError::EmptyRecipient);
    }
}
