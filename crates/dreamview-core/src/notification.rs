//! Transient notification banners.

use std::fmt;

/// Banner severity, which fixes its colour and CSS modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Completed action.
    Success,
    /// Rejected or failed action.
    Error,
    /// Neutral information.
    Info,
    /// Action ignored but nothing went wrong.
    Warning,
}

impl Severity {
    /// All severities.
    pub const ALL: [Self; 4] = [Self::Success, Self::Error, Self::Info, Self::Warning];

    /// Banner background colour.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Info => "#3b82f6",
            Self::Warning => "#f59e0b",
        }
    }

    /// Lowercase name, used as a CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one shown notification, so late timer callbacks can tell
/// whether the banner they were started for is still on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// The banner currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    leaving: bool,
}

impl Notification {
    pub(crate) fn new(id: NotificationId, severity: Severity, message: String) -> Self {
        Self {
            id,
            severity,
            message,
            leaving: false,
        }
    }

    /// Unique id of this banner.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Banner severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Banner text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the exit animation is playing.
    #[must_use]
    pub const fn is_leaving(&self) -> bool {
        self.leaving
    }

    pub(crate) const fn start_leaving(&mut self) {
        self.leaving = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_match_palette() {
        assert_eq!(Severity::Success.color(), "#10b981");
        assert_eq!(Severity::Error.color(), "#ef4444");
        assert_eq!(Severity::Info.color(), "#3b82f6");
        assert_eq!(Severity::Warning.color(), "#f59e0b");
    }

    #[test]
    fn every_severity_has_distinct_modifier() {
        let mut seen = std::collections::HashSet::new();
        for severity in Severity::ALL {
            assert!(seen.insert(severity.as_str()), "{severity} shares a modifier");
        }
    }

    #[test]
    fn new_notification_is_not_leaving() {
        let mut n = Notification::new(NotificationId::new(1), Severity::Info, "hi".into());
        assert!(!n.is_leaving());
        n.start_leaving();
        assert!(n.is_leaving());
        assert_eq!(n.id().get(), 1);
        assert_eq!(n.message(), "hi");
    }
}
