/*
 * Responsibility
 * - Posts の request/response DTO
 * - 検索 (id / title) の問い合わせ型と、一覧のサンプルデータ
 */
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Body of `POST /post/create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub author_id: i64,
    pub title: String,
    pub body: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::Required("Заголовок"));
        }
        if self.body.trim().is_empty() {
            return Err(ValidationError::Required("Текст"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub likes: u32,
}

// Accepts both naive (`2024-01-20T14:30:00`) and offset (`...Z`, `...+03:00`) timestamps.
fn timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(naive));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.naive_local()))
        .map_err(serde::de::Error::custom)
}

/// Body of `PATCH /post/post_{id}/update_title`. The endpoint accepts nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostTitleUpdate {
    pub title: String,
}

impl PostTitleUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::NothingToUpdate);
        }
        Ok(())
    }
}

/// Exactly one search mode is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostQuery {
    ById(i64),
    ByTitle(String),
}

impl PostQuery {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            PostQuery::ById(_) => Ok(()),
            PostQuery::ByTitle(title) if title.is_empty() => Err(ValidationError::MissingSearchTitle),
            PostQuery::ByTitle(_) => Ok(()),
        }
    }
}

/// Result of "list posts".
///
/// The backend has no listing endpoint, so the only variant is a fixed sample set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostListing {
    Sample(Vec<PostRecord>),
}

impl PostListing {
    pub fn posts(&self) -> &[PostRecord] {
        match self {
            PostListing::Sample(posts) => posts,
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, PostListing::Sample(_))
    }
}

pub fn sample_posts() -> Vec<PostRecord> {
    let at = |s: &str| s.parse::<NaiveDateTime>().ok();
    vec![
        PostRecord {
            id: 1,
            title: "Как я начал изучать программирование".into(),
            body: "Сегодня я начал изучать Python и FastAPI. Это оказалось не так сложно, как я думал! Уже создал свой первый API для социальной сети.".into(),
            author_id: 1,
            author_name: Some("Иван Петров".into()),
            created_at: at("2024-01-20T14:30:00"),
            likes: 15,
        },
        PostRecord {
            id: 2,
            title: "Мой первый проект на FastAPI".into(),
            body: "Наконец-то закончил свой первый проект на FastAPI! Это API для блога с возможностью создания постов, комментариев и лайков.".into(),
            author_id: 2,
            author_name: Some("Мария Иванова".into()),
            created_at: at("2024-01-18T10:15:00"),
            likes: 32,
        },
    ]
}
