use learner_core::LearnerSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderVm {
    pub percent: u8,
    pub dark_mode: bool,
    pub sidebar_open: bool,
    pub show_notice: bool,
}

impl HeaderVm {
    #[must_use]
    pub fn from_session(session: &LearnerSession) -> Self {
        Self {
            percent: session.overall_progress_percent(),
            dark_mode: session.dark_mode(),
            sidebar_open: session.sidebar_open(),
            show_notice: session.notice().is_some(),
        }
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Total Progress: {}%", self.percent)
    }

    #[must_use]
    pub fn theme_toggle_title(&self) -> &'static str {
        if self.dark_mode {
            "Switch to Light Mode"
        } else {
            "Switch to Dark Mode"
        }
    }

    #[must_use]
    pub fn theme_toggle_glyph(&self) -> &'static str {
        if self.dark_mode { "\u{2600}" } else { "\u{263E}" }
    }

    #[must_use]
    pub fn root_class(&self) -> &'static str {
        if self.dark_mode { "shell dark" } else { "shell" }
    }
}
