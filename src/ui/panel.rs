/*
 * Responsibility
 * - 各フォーム専用の結果表示領域 (DOM subtree の代替)
 * - 置き換えのみ。差分更新はしない
 * - Display で端末向けのテキストに描画
 */
use std::fmt;

use chrono::{Locale, NaiveDateTime};

use crate::api::dto::{posts::PostRecord, users::UserRecord};

const SEARCH_EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Empty,
    Loading(String),
    Success {
        title: String,
        lines: Vec<String>,
    },
    Error {
        title: String,
        message: String,
    },
    /// Users table; empty means the explicit "not found" state.
    Users(Vec<UserRecord>),
    /// Post cards, optionally narrowed by a client-side filter.
    Posts(PostList),
    /// Post search hits.
    PostMatches(Vec<PostRecord>),
}

impl Panel {
    pub fn loading(text: impl Into<String>) -> Self {
        Panel::Loading(text.into())
    }

    pub fn success(title: impl Into<String>, lines: Vec<String>) -> Self {
        Panel::Success {
            title: title.into(),
            lines,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Panel::Error {
            title: title.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostList {
    pub posts: Vec<PostRecord>,
    pub filter: String,
    pub notice: Option<String>,
}

impl PostList {
    /// Posts whose title or body contains the filter text, case-insensitively.
    pub fn visible(&self) -> Vec<&PostRecord> {
        let needle = self.filter.to_lowercase();
        self.posts
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.body.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Panel::Empty => Ok(()),
            Panel::Loading(text) => writeln!(f, "… {text}"),
            Panel::Success { title, lines } => {
                writeln!(f, "✓ {title}")?;
                for line in lines {
                    writeln!(f, "  {line}")?;
                }
                Ok(())
            }
            Panel::Error { title, message } => {
                writeln!(f, "✗ {title}")?;
                writeln!(f, "  {message}")
            }
            Panel::Users(users) => write_users(f, users),
            Panel::Posts(list) => write_post_list(f, list),
            Panel::PostMatches(posts) => write_post_matches(f, posts),
        }
    }
}

fn write_users(f: &mut fmt::Formatter<'_>, users: &[UserRecord]) -> fmt::Result {
    if users.is_empty() {
        return writeln!(f, "Пользователи не найдены");
    }
    writeln!(
        f,
        "{:<6} {:<16} {:<16} {:<28} {:<7} {}",
        "ID", "Имя", "Фамилия", "Email", "Возраст", "Пол"
    )?;
    for user in users {
        let id = user
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        writeln!(
            f,
            "{:<6} {:<16} {:<16} {:<28} {:<7} {}",
            id,
            user.first_name,
            user.second_name,
            user.email,
            user.age,
            user.gender.label()
        )?;
    }
    Ok(())
}

fn write_post_list(f: &mut fmt::Formatter<'_>, list: &PostList) -> fmt::Result {
    if let Some(notice) = &list.notice {
        writeln!(f, "i {notice}")?;
    }
    let visible = list.visible();
    if visible.is_empty() {
        return writeln!(f, "Посты не найдены");
    }
    for post in visible {
        writeln!(f, "── {}", post.title)?;
        if let Some(created_at) = post.created_at {
            writeln!(f, "   {}", format_ru_datetime(created_at))?;
        }
        writeln!(f, "   {}", author_label(post))?;
        writeln!(f, "   {}", post.body)?;
        writeln!(f, "   ♡ {} лайков · 0 комментариев · #{}", post.likes, post.id)?;
    }
    Ok(())
}

fn write_post_matches(f: &mut fmt::Formatter<'_>, posts: &[PostRecord]) -> fmt::Result {
    if posts.is_empty() {
        return writeln!(f, "i Посты не найдены");
    }
    writeln!(f, "Найденные посты:")?;
    for post in posts {
        writeln!(f, "── {}", post.title)?;
        writeln!(f, "   ID: {}", post.id)?;
        writeln!(f, "   Автор ID: {}", post.author_id)?;
        writeln!(f, "   Текст: {}", excerpt(&post.body))?;
    }
    Ok(())
}

pub fn author_label(post: &PostRecord) -> String {
    match &post.author_name {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("Пользователь #{}", post.author_id),
    }
}

/// First 100 characters followed by `...`, whatever the length.
pub fn excerpt(body: &str) -> String {
    let head: String = body.chars().take(SEARCH_EXCERPT_CHARS).collect();
    format!("{head}...")
}

/// `20 января 2024 г., 14:30`
pub fn format_ru_datetime(at: NaiveDateTime) -> String {
    at.and_utc()
        .format_localized("%-d %B %Y г., %H:%M", Locale::ru_RU)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::posts::sample_posts;
    use crate::api::dto::users::Gender;

    #[test]
    fn empty_user_table_shows_not_found_state() {
        assert_eq!(Panel::Users(vec![]).to_string(), "Пользователи не найдены\n");
    }

    #[test]
    fn user_table_marks_missing_ids() {
        let panel = Panel::Users(vec![UserRecord {
            id: None,
            first_name: "Мария".into(),
            second_name: "Иванова".into(),
            email: "m@x.com".into(),
            age: 28,
            gender: Gender::Female,
        }]);
        let text = panel.to_string();
        assert!(text.contains("N/A"));
        assert!(text.contains("Женский"));
    }

    #[test]
    fn dates_render_in_russian() {
        let at = "2024-01-20T14:30:00".parse().unwrap();
        assert_eq!(format_ru_datetime(at), "20 января 2024 г., 14:30");

        let at = "2024-03-05T09:07:00".parse().unwrap();
        assert_eq!(format_ru_datetime(at), "5 марта 2024 г., 09:07");
    }

    #[test]
    fn excerpt_cuts_at_hundred_chars() {
        let long = "я".repeat(150);
        assert_eq!(excerpt(&long).chars().count(), 103);
        assert_eq!(excerpt("short"), "short...");
    }

    #[test]
    fn author_falls_back_to_user_number() {
        let mut post = sample_posts().remove(0);
        post.author_name = None;
        assert_eq!(author_label(&post), "Пользователь #1");
    }

    #[test]
    fn filter_matches_title_or_body_ignoring_case() {
        let list = PostList {
            posts: sample_posts(),
            filter: "БЛОГА".into(),
            notice: None,
        };
        let ids: Vec<_> = list.visible().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn filtered_out_list_shows_empty_state() {
        let panel = Panel::Posts(PostList {
            posts: sample_posts(),
            filter: "nothing like this".into(),
            notice: None,
        });
        assert!(panel.to_string().contains("Посты не найдены"));
    }

    #[test]
    fn notice_line_leads_the_post_list() {
        let panel = Panel::Posts(PostList {
            posts: sample_posts(),
            filter: String::new(),
            notice: Some("примерные данные".into()),
        });
        assert!(panel.to_string().starts_with("i примерные данные\n── "));
    }

    #[test]
    fn search_hits_are_listed_with_excerpt() {
        let text = Panel::PostMatches(sample_posts()).to_string();
        assert!(text.starts_with("Найденные посты:"));
        assert!(text.contains("Автор ID: 2"));
        assert!(text.contains("..."));
    }
}
