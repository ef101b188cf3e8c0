//! Transient notification queue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push toasts after mutations (news created, comment failed, ...);
//! the `ToastHost` component renders the queue and schedules auto-dismiss.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    /// CSS modifier suffix for the toast element.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), kind, message: message.into() });
        id
    }

    /// Remove a toast by id; unknown ids are ignored (already dismissed).
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}
