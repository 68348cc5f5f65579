/*
 * Responsibility
 * - Users の request/response DTO
 * - request 側は validate() を持ち、送信前に呼ばれる
 */
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Label shown in the users table.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Male => "male",
            Gender::Female => "female",
        })
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(ValidationError::InvalidGender),
        }
    }
}

/// Body of `POST /user/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub password: String,
    pub age: i32,
    pub gender: Gender,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), ValidationError> {
        // The backend also requires a digit and a letter; only length is checked here.
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }
}

/// A user as returned by the backend.
///
/// `id` is optional: the search endpoint serialises users without it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub age: i32,
    pub gender: Gender,
}

/// Query of `GET /user/get`. Both fields absent means "everyone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub first_name: Option<String>,
    pub second_name: Option<String>,
}

impl UserFilter {
    pub fn new(first_name: &str, second_name: &str) -> Self {
        Self {
            first_name: non_empty(first_name),
            second_name: non_empty(second_name),
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.first_name {
            pairs.push(("first_name", v.as_str()));
        }
        if let Some(v) = &self.second_name {
            pairs.push(("second_name", v.as_str()));
        }
        pairs
    }
}

/// Partial user fields. Unset fields are left out of the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.second_name.is_none()
            && self.email.is_none()
            && self.age.is_none()
            && self.gender.is_none()
    }
}

/// Body of `PATCH /user/user_{id}/update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdateRequest {
    pub user_password: String,
    pub update_data: UserChanges,
}

impl UserUpdateRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.user_password.is_empty() {
            return Err(ValidationError::MissingIdOrPassword);
        }
        if self.update_data.is_empty() {
            return Err(ValidationError::NothingToUpdate);
        }
        Ok(())
    }
}

/// Body of `POST /user/{id}/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteUserRequest {
    pub input_password: String,
}

impl DeleteUserRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_password.is_empty() {
            return Err(ValidationError::MissingIdOrPassword);
        }
        Ok(())
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivan(password: &str) -> NewUser {
        NewUser {
            first_name: "Ivan".into(),
            second_name: "Petrov".into(),
            email: "ivan@x.com".into(),
            password: password.into(),
            age: 30,
            gender: Gender::Male,
        }
    }

    #[test]
    fn password_shorter_than_eight_is_rejected() {
        assert_eq!(ivan("pass123").validate(), Err(ValidationError::PasswordTooShort));
        assert_eq!(ivan("password1").validate(), Ok(()));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        // 7 Cyrillic chars are 14 bytes
        assert_eq!(ivan("пароль1").validate(), Err(ValidationError::PasswordTooShort));
    }

    #[test]
    fn new_user_serialises_lowercase_gender() {
        let json = serde_json::to_value(ivan("password1")).unwrap();
        assert_eq!(json["gender"], "male");
        assert_eq!(json["age"], 30);
    }

    #[test]
    fn record_without_id_still_decodes() {
        let record: UserRecord = serde_json::from_str(
            r#"{"first_name":"A","second_name":"B","email":"a@b.c","age":20,"gender":"female","password":"x"}"#,
        )
        .unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.gender.label(), "Женский");
    }

    #[test]
    fn empty_changes_are_rejected() {
        let req = UserUpdateRequest {
            user_password: "secret".into(),
            update_data: UserChanges::default(),
        };
        assert_eq!(req.validate(), Err(ValidationError::NothingToUpdate));
    }

    #[test]
    fn changes_skip_unset_fields() {
        let changes = UserChanges {
            age: Some(31),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&changes).unwrap(), serde_json::json!({"age": 31}));
    }

    #[test]
    fn filter_drops_blank_fields() {
        let filter = UserFilter::new("", "Petrov");
        assert_eq!(filter.pairs(), vec![("second_name", "Petrov")]);
        assert!(UserFilter::new("", "").pairs().is_empty());
    }
}
