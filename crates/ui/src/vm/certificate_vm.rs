use learner_core::{Certificate, CertificateError, LearnerSession};

use crate::vm::time_fmt::format_issue_date;

/// What the certificate page shows before a name is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertificateGateVm {
    Locked {
        completed: usize,
        total: usize,
        percent: u8,
    },
    Unlocked,
}

impl CertificateGateVm {
    #[must_use]
    pub fn from_session(session: &LearnerSession) -> Self {
        let snapshot = session.snapshot();
        if snapshot.certificate_unlocked {
            Self::Unlocked
        } else {
            Self::Locked {
                completed: snapshot.completed,
                total: snapshot.total,
                percent: snapshot.percent,
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateVm {
    pub recipient: String,
    pub course: String,
    pub issued_on: String,
    pub signed_by: String,
}

impl From<&Certificate> for CertificateVm {
    fn from(certificate: &Certificate) -> Self {
        Self {
            recipient: certificate.recipient().to_string(),
            course: certificate.course().to_string(),
            issued_on: format_issue_date(certificate.issued_on()),
            signed_by: certificate.signed_by().to_string(),
        }
    }
}

/// # Errors
///
/// Returns the user-facing message when the certificate cannot be issued.
pub fn issue_certificate(
    session: &LearnerSession,
    name: &str,
) -> Result<CertificateVm, &'static str> {
    match session.issue_certificate(name) {
        Ok(certificate) => Ok(CertificateVm::from(&certificate)),
        Err(CertificateError::EmptyRecipient) => Err("Please enter your name."),
        Err(_) => Err("Complete all exercises to unlock your certificate."),
    }
}
