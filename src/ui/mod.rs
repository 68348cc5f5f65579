//! Page model that stands in for the browser DOM.
//!
//! Pages own raw form inputs, result panels, tab state and a notification
//! stack. Every submission replaces exactly one panel.

pub mod confirm;
pub mod notify;
pub mod pages;
pub mod panel;
pub mod search;
pub mod tabs;

pub use confirm::{AlwaysConfirm, Confirm, TerminalConfirm};
pub use notify::{Notification, NotificationCenter, Severity};
pub use panel::Panel;
pub use search::SearchMode;
pub use tabs::{ApiSection, PostTab, Tab, TabSet, UserTab};
