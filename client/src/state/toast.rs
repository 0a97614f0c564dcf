//! Transient notifications.
//!
//! Toasts are pushed by actions on success or failure and dismissed either
//! by the user or by a timer (`TOAST_TTL_MS`). At most `TOAST_LIMIT` are
//! visible; the oldest is dropped first.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_TTL_MS: u32 = 4_000;
pub const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Add a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, text: text.into() });
        if self.toasts.len() > TOAST_LIMIT {
            let overflow = self.toasts.len() - TOAST_LIMIT;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
