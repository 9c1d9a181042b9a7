//! Transient toast notices for transport and auth failures.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// At most one notice is visible; a newer notice replaces the current one.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Show `message`, returning the id used to dismiss it later.
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, kind, message: message.into() });
        id
    }

    /// Dismiss notice `id`. Returns `false` if it was already replaced or dismissed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
