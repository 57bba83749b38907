//! User-facing notifications raised by handlers.

use serde::{Deserialize, Serialize};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationVariant {
    #[default]
    Default,
    /// Failed precondition or action.
    Destructive,
}

/// A toast-style message for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_variant() {
        assert!(!Notification::info("Downloading PDF", "").is_destructive());
        assert!(Notification::destructive("No results", "").is_destructive());
    }

    #[test]
    fn serializes_variant_in_snake_case() {
        let json = serde_json::to_value(Notification::destructive("a", "b")).unwrap();
        assert_eq!(json["variant"], "destructive");
        assert_eq!(json["title"], "a");
    }
}
