use chrono::{DateTime, Duration, Utc};

use crate::model::LessonId;

/// How long the "Lesson Completed!" banner stays up, in seconds.
pub const NOTICE_SECONDS: i64 = 3;

#[must_use]
pub fn notice_duration() -> Duration {
    Duration::seconds(NOTICE_SECONDS)
}

/// Transient celebration raised the first time a lesson is completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionNotice {
    lesson_id: LessonId,
    shown_at: DateTime<Utc>,
}

impl CompletionNotice {
    #[must_use]
    pub fn new(lesson_id: LessonId, shown_at: DateTime<Utc>) -> Self {
        Self { lesson_id, shown_at }
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        &self.lesson_id
    }

    #[must_use]
    pub fn shown_at(&self) -> DateTime<Utc> {
        self.shown_at
    }

    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + notice_duration()
    }

    #[must_use]
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn visible_for_exactly_three_seconds() {
        let now = fixed_now();
        let notice = CompletionNotice::new(LessonId::new("a"), now);

        assert!(notice.is_visible(now));
        assert!(notice.is_visible(now + Duration::milliseconds(2_999)));
        assert!(!notice.is_visible(now + Duration::seconds(3)));
    }
}
