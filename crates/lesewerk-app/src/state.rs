// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signal contents for the Dioxus UI.
//
// The session is the single authority for content and formatting. Everything
// else here is presentation bookkeeping.

use lesewerk_core::error::{FormattingField, LesewerkError};
use lesewerk_core::human_errors::{Severity, humanize_error};
use lesewerk_document::ViewerSession;

/// A line of feedback under the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
    /// Errors the user can fix get a different colour from hard failures.
    pub needs_action: bool,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            needs_action: false,
        }
    }

    pub fn from_error(err: &LesewerkError) -> Self {
        let human = humanize_error(err);
        Self {
            text: human.status_line(),
            is_error: true,
            needs_action: human.severity == Severity::ActionRequired,
        }
    }

    /// CSS colour for the message.
    pub fn color(&self) -> &'static str {
        match (self.is_error, self.needs_action) {
            (false, _) => "#666",
            (true, true) => "#c77700",
            (true, false) => "#ff3b30",
        }
    }
}

/// Shared state accessible to the page via `use_context`.
#[derive(Debug, Clone, Default)]
pub struct ViewerState {
    /// The open document and where it came from.
    pub session: ViewerSession,
    /// Status message for user feedback.
    pub status: Option<StatusMessage>,
    /// Whether OCR is running on a worker thread.
    pub busy: bool,
    /// What the user has typed into the size field but not committed yet.
    pub size_draft: Option<String>,
}

impl ViewerState {
    pub fn new(session: ViewerSession) -> Self {
        Self {
            session,
            status: None,
            busy: false,
            size_draft: None,
        }
    }

    /// Text for the size field: the pending entry, else the document's size.
    ///
    /// Clearing the draft on commit makes a rejected entry snap back to the
    /// size the document kept.
    pub fn size_field(&self) -> String {
        match &self.size_draft {
            Some(draft) => draft.clone(),
            None => self.session.document().formatting().font_size.get().to_string(),
        }
    }

    pub fn edit_size(&mut self, raw: String) {
        self.size_draft = Some(raw);
    }

    /// Parse and apply a size entry, reporting the outcome.
    pub fn commit_size(&mut self, raw: &str) {
        self.size_draft = None;
        let result = match raw.trim().parse::<i64>() {
            Ok(points) => self
                .session
                .document_mut()
                .resize(points)
                .map(|()| format!("Text resized to {points}pt.")),
            Err(_) => Err(LesewerkError::invalid(
                FormattingField::FontSize,
                format!("{raw:?} is not a whole number"),
            )),
        };
        self.report(result);
    }

    /// Record the outcome of a user action on the status line.
    pub fn report(&mut self, result: Result<String, LesewerkError>) {
        self.status = Some(match result {
            Ok(msg) => StatusMessage::info(msg),
            Err(e) => {
                tracing::warn!(error = %e, "viewer action failed");
                StatusMessage::from_error(&e)
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_error_keeps_document() {
        let mut state = ViewerState::default();
        state.session.document_mut().replace_content("Hello");

        let result = state.session.document_mut().resize(0).map(|_| String::new());
        state.report(result);

        let status = state.status.unwrap();
        assert!(status.is_error);
        assert!(status.needs_action);
        assert_eq!(state.session.document().content(), "Hello");
        assert_eq!(state.session.document().formatting().font_size.get(), 12);
    }

    #[test]
    fn rejected_size_entry_snaps_back() {
        let mut state = ViewerState::default();
        assert_eq!(state.size_field(), "12");

        state.edit_size("0".into());
        assert_eq!(state.size_field(), "0");
        state.commit_size("0");

        assert_eq!(state.size_field(), "12");
        assert_eq!(state.session.document().formatting().font_size.get(), 12);
        let status = state.status.clone().unwrap();
        assert!(status.is_error && status.needs_action);
        assert!(status.text.contains("between 1 and 100"));

        state.edit_size("big".into());
        state.commit_size("big");
        assert_eq!(state.size_field(), "12");
    }

    #[test]
    fn accepted_size_entry_updates_document() {
        let mut state = ViewerState::default();
        state.edit_size(" 30 ".into());
        state.commit_size(" 30 ");
        assert_eq!(state.size_field(), "30");
        assert_eq!(state.status, Some(StatusMessage::info("Text resized to 30pt.")));
    }

    #[test]
    fn report_success_is_info() {
        let mut state = ViewerState::default();
        state.report(Ok("Opened notes.txt".into()));
        assert_eq!(state.status, Some(StatusMessage::info("Opened notes.txt")));
        assert_eq!(state.status.unwrap().color(), "#666");
    }
}
