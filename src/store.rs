//! Cross-cutting UI state: auth flag, toasts, confirm dialog, and the
//! per-module record stores.

use std::time::{Duration, Instant};

use crate::client::Mutation;
use crate::display::{DisplayConfigs, Module};
use crate::models::{Applicant, Employee};
use crate::router::Route;
use crate::table::TableRecord;

/// Login state.
#[derive(Debug, Clone, Default)]
pub struct AuthStore {
    pub is_logged_in: bool,
    pub username: Option<String>,
}

impl AuthStore {
    pub fn login(&mut self, username: impl Into<String>) {
        self.is_logged_in = true;
        self.username = Some(username.into());
    }

    pub fn logout(&mut self) {
        self.is_logged_in = false;
        self.username = None;
    }
}

/// Toast kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Success,
    Error,
    Warning,
}

impl ToastState {
    pub fn default_message(&self) -> &'static str {
        match self {
            ToastState::Success => "Saved successfully",
            ToastState::Error => "Something went wrong, please try again",
            ToastState::Warning => "Please check the highlighted fields",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub state: ToastState,
    pub message: String,
    pub expires_at: Instant,
}

/// Transient notifications.
#[derive(Debug, Clone)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    duration: Duration,
    next_id: u64,
}

impl ToastStore {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration,
            next_id: 0,
        }
    }

    /// Show a toast with the default message for its state.
    pub fn show_toast(&mut self, state: ToastState, now: Instant) -> u64 {
        self.show_message(state, state.default_message(), now)
    }

    pub fn show_message(&mut self, state: ToastState, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            state,
            message: message.into(),
            expires_at: now + self.duration,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// What happens when a confirm dialog is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    /// Send a mutation and open `then` once confirmed.
    Submit { mutation: Mutation, then: Option<Route> },
    Logout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialog {
    pub title: Option<String>,
    pub message: String,
    pub is_closable: bool,
    pub action: ConfirmAction,
}

/// At most one pending confirmation.
#[derive(Debug, Clone, Default)]
pub struct ConfirmDialogStore {
    dialog: Option<ConfirmDialog>,
}

impl ConfirmDialogStore {
    pub fn open_confirm_dialog(&mut self, dialog: ConfirmDialog) {
        self.dialog = Some(dialog);
    }

    pub fn dialog(&self) -> Option<&ConfirmDialog> {
        self.dialog.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// Close the dialog and hand back its action.
    pub fn confirm(&mut self) -> Option<ConfirmAction> {
        self.dialog.take().map(|d| d.action)
    }

    pub fn cancel(&mut self) {
        self.dialog = None;
    }
}

/// Cached list, selection, and display configs of one record module.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    pub records: Vec<T>,
    pub display_configs: DisplayConfigs,
    pub is_loading: bool,
    pub search: String,
    /// Gender values to show; empty shows everyone.
    pub gender_filter: Vec<String>,
    selected: Option<T>,
}

impl<T: TableRecord + Clone> RecordStore<T> {
    pub fn new(module: Module) -> Self {
        Self {
            records: Vec::new(),
            display_configs: DisplayConfigs::for_module(module),
            is_loading: false,
            search: String::new(),
            gender_filter: Vec::new(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn select(&mut self, record: T) {
        self.selected = Some(record);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.as_ref().is_some_and(|s| s.key() == key)
    }

    /// Replace the cached list; the selection follows its record or is dropped.
    pub fn set_records(&mut self, records: Vec<T>) {
        self.selected = self
            .selected
            .take()
            .and_then(|s| records.iter().find(|r| r.key() == s.key()).cloned());
        self.records = records;
        self.is_loading = false;
    }
}

pub type ApplicantStore = RecordStore<Applicant>;
pub type EmployeeStore = RecordStore<Employee>;
