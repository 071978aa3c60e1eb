//! Toast notifications that slide in from the right and expire.

/// Delay before a toast starts sliding in
pub const SLIDE_IN_DELAY_MS: u64 = 100;
/// Slide transition length
pub const SLIDE_MS: u64 = 300;
/// Time from raise to the start of the slide-out
pub const DISMISS_AFTER_MS: u64 = 3000;

pub const RESUME_FILE_NAME: &str = "Zian_Resume.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NoticeKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NoticeKind::Info)
    }

    pub fn resume_download() -> Self {
        Self::success("Resume download started!")
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    raised_ms: u64,
}

impl Toast {
    /// Horizontal slide: 1.0 fully off-screen right, 0.0 in place.
    pub fn offset(&self, now_ms: u64) -> f32 {
        let age = now_ms.saturating_sub(self.raised_ms);
        if age < SLIDE_IN_DELAY_MS {
            1.0
        } else if age < DISMISS_AFTER_MS {
            1.0 - ((age - SLIDE_IN_DELAY_MS) as f32 / SLIDE_MS as f32).min(1.0)
        } else {
            ((age - DISMISS_AFTER_MS) as f32 / SLIDE_MS as f32).min(1.0)
        }
    }

    fn expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.raised_ms) >= DISMISS_AFTER_MS + SLIDE_MS
    }
}

/// Stack of live toasts, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification, now_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        log::debug!("toast {}: {}", id, notification.message);
        self.toasts.push(Toast {
            id,
            notification,
            raised_ms: now_ms,
        });
        id
    }

    /// Drop toasts whose slide-out has finished.
    pub fn tick(&mut self, now_ms: u64) {
        self.toasts.retain(|t| !t.expired(now_ms));
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lifecycle() {
        let mut center = NotificationCenter::new();
        center.push(Notification::success("Message sent successfully!"), 1_000);
        let toast = center.toasts()[0].clone();
        assert_eq!(toast.offset(1_050), 1.0);
        assert!((toast.offset(1_250) - 0.5).abs() < 1e-6);
        assert_eq!(toast.offset(2_000), 0.0);
        assert!((toast.offset(4_150) - 0.5).abs() < 1e-6);
        center.tick(4_299);
        assert_eq!(center.toasts().len(), 1);
        center.tick(4_300);
        assert!(center.is_empty());
    }

    #[test]
    fn test_toasts_stack_and_expire_independently() {
        let mut center = NotificationCenter::new();
        let a = center.push(Notification::info("a"), 0);
        let b = center.push(Notification::resume_download(), 2_000);
        assert_ne!(a, b);
        center.tick(3_400);
        assert_eq!(center.toasts().len(), 1);
        assert_eq!(center.toasts()[0].notification.kind, NoticeKind::Success);
    }
}
