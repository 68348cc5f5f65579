//! One struct per page. Each submit method follows the same cycle:
//! parse the form, validate, show a loading panel, call the API, then replace
//! the panel with the outcome and raise a notification.

mod docs;
mod home;
mod posts;
mod users;

pub use docs::{Clipboard, CopyButton, DocsPage, MemoryClipboard, Osc52Clipboard, SnippetId};
pub use home::{ApiStatus, HomePage};
pub use posts::{PostFormInput, PostSearchInput, PostUpdateInput, PostsPage};
pub use users::{UserDeleteInput, UserFormInput, UserSearchInput, UserUpdateInput, UsersPage};

use crate::error::{ClientError, ValidationError};
use crate::ui::{NotificationCenter, Panel};

// Validation failures only notify. Everything else also replaces the local panel.
fn report_failure(
    notifications: &mut NotificationCenter,
    panel: &mut Panel,
    title: &str,
    prefix: &str,
    err: &ClientError,
) {
    if err.is_validation() {
        notifications.error(err.to_string());
        return;
    }
    *panel = Panel::error(title, err.to_string());
    notifications.error(format!("{prefix}: {err}"));
}

fn reject(notifications: &mut NotificationCenter, err: ValidationError) {
    tracing::debug!(%err, "form rejected before submission");
    notifications.error(err.to_string());
}

fn parse_id(raw: &str, field: &'static str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotANumber(field))
}
