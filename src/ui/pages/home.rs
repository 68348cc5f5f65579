use std::fmt;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::services::http::HttpTransport;
use crate::ui::NotificationCenter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Checking,
    Active,
    /// The server answered with a non-2xx status.
    Error,
    /// No answer at all.
    Unavailable,
}

impl fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApiStatus::Unknown => "—",
            ApiStatus::Checking => "Проверка...",
            ApiStatus::Active => "Активно",
            ApiStatus::Error => "Ошибка",
            ApiStatus::Unavailable => "Недоступен",
        })
    }
}

#[derive(Debug, Default)]
pub struct HomePage {
    pub status: ApiStatus,
    pub notifications: NotificationCenter,
}

impl HomePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn check_api_status<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.status = ApiStatus::Checking;

        match client.health().await {
            Ok(()) => {
                self.status = ApiStatus::Active;
                self.notifications.success("API сервер работает нормально");
            }
            Err(ClientError::Http { .. }) => {
                self.status = ApiStatus::Error;
                self.notifications.error("API сервер недоступен");
            }
            Err(e) => {
                self.status = ApiStatus::Unavailable;
                self.notifications
                    .error(format!("Ошибка подключения к API: {e}"));
            }
        }
    }
}
