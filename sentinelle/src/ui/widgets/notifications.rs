//! # Notifications Widget
//!
//! Toast notification system using egui-notify for transient auth and
//! mutation feedback.

use egui_notify::Toasts;

use crate::app::NotifyLevel;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a queued app notification to the matching toast style.
    pub fn push(&mut self, level: NotifyLevel, message: String) {
        match level {
            NotifyLevel::Success => {
                self.toasts.success(message);
            }
            NotifyLevel::Error => {
                self.toasts.error(message);
            }
            NotifyLevel::Warning => {
                self.toasts.warning(message);
            }
            NotifyLevel::Info => {
                self.toasts.info(message);
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
