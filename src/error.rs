/*
 * Responsibility
 * - client 共通の ClientError 定義
 * - (a) 入力バリデーション (b) HTTP non-2xx (c) 通信失敗 を一つの型で表す
 * - Display がそのまま通知メッセージになる
 */
use thiserror::Error;

use crate::services::http::TransportError;

/// Failures detected before any request is sent.
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Пароль должен быть не менее 8 символов")]
    PasswordTooShort,
    #[error("ID и пароль обязательны")]
    MissingIdOrPassword,
    #[error("Не указаны данные для обновления")]
    NothingToUpdate,
    #[error("Введите ID поста")]
    MissingPostId,
    #[error("Введите заголовок для поиска")]
    MissingSearchTitle,
    #[error("Изменение текста поста не поддерживается API")]
    PostBodyNotSupported,
    #[error("Поле «{0}» обязательно")]
    Required(&'static str),
    #[error("Поле «{0}» должно быть числом")]
    NotANumber(&'static str),
    #[error("Пол должен быть male или female")]
    InvalidGender,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("{0}")]
    Decode(String),
}

impl ClientError {
    /// Validation failures never reached the network and only raise a notification.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_uses_status_banner() {
        let err = ClientError::Http { status: 422 };
        assert_eq!(err.to_string(), "HTTP error! status: 422");
        assert!(!err.is_validation());
    }

    #[test]
    fn validation_message_is_passed_through() {
        let err = ClientError::from(ValidationError::MissingIdOrPassword);
        assert_eq!(err.to_string(), "ID и пароль обязательны");
        assert!(err.is_validation());
    }

    #[test]
    fn transport_message_is_verbatim() {
        let err = ClientError::from(TransportError::Connect("connection refused".into()));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn decode_message_is_verbatim() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = source.to_string();
        let err = ClientError::from(source);
        assert_eq!(err.to_string(), expected);
        assert!(!err.is_validation());
    }
}
