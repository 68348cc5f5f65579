//! API documentation page: endpoint examples grouped by section, each with a
//! copy button. Buttons are bound to their snippet when the page is built.
use std::fmt;
use std::io::{self, Write};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use url::Url;

use crate::ui::{ApiSection, NotificationCenter, Tab, TabSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetId {
    Health,
    CreateUser,
    SearchUsers,
    UpdateUser,
    DeleteUser,
    CreatePost,
    PostById,
    PostByTitle,
    UpdatePostTitle,
}

impl SnippetId {
    pub const ALL: [SnippetId; 9] = [
        SnippetId::Health,
        SnippetId::CreateUser,
        SnippetId::SearchUsers,
        SnippetId::UpdateUser,
        SnippetId::DeleteUser,
        SnippetId::CreatePost,
        SnippetId::PostById,
        SnippetId::PostByTitle,
        SnippetId::UpdatePostTitle,
    ];

    pub fn section(&self) -> ApiSection {
        match self {
            SnippetId::Health => ApiSection::Health,
            SnippetId::CreateUser
            | SnippetId::SearchUsers
            | SnippetId::UpdateUser
            | SnippetId::DeleteUser => ApiSection::Users,
            SnippetId::CreatePost
            | SnippetId::PostById
            | SnippetId::PostByTitle
            | SnippetId::UpdatePostTitle => ApiSection::Posts,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SnippetId::Health => "GET / — проверка статуса",
            SnippetId::CreateUser => "POST /user/create — создать пользователя",
            SnippetId::SearchUsers => "GET /user/get — найти пользователей",
            SnippetId::UpdateUser => "PATCH /user/user_{id}/update — обновить пользователя",
            SnippetId::DeleteUser => "POST /user/{id}/delete — удалить пользователя",
            SnippetId::CreatePost => "POST /post/create — создать пост",
            SnippetId::PostById => "GET /post/get_by_id — пост по ID",
            SnippetId::PostByTitle => "GET /post/get_by_title — пост по заголовку",
            SnippetId::UpdatePostTitle => "PATCH /post/post_{id}/update_title — новый заголовок",
        }
    }

    /// Example `curl` invocation against `base`.
    pub fn code(&self, base: &Url) -> String {
        let base = base.as_str().trim_end_matches('/');
        let json = "-H 'Content-Type: application/json'";
        match self {
            SnippetId::Health => format!("curl {base}/"),
            SnippetId::CreateUser => format!(
                r#"curl -X POST {base}/user/create {json} -d '{{"first_name":"Иван","second_name":"Петров","email":"ivan@example.com","password":"password1","age":30,"gender":"male"}}'"#
            ),
            SnippetId::SearchUsers => {
                format!("curl '{base}/user/get?first_name=Иван&second_name=Петров'")
            }
            SnippetId::UpdateUser => format!(
                r#"curl -X PATCH {base}/user/user_1/update {json} -d '{{"user_password":"password1","update_data":{{"age":31}}}}'"#
            ),
            SnippetId::DeleteUser => format!(
                r#"curl -X POST {base}/user/1/delete {json} -d '{{"input_password":"password1"}}'"#
            ),
            SnippetId::CreatePost => format!(
                r#"curl -X POST {base}/post/create {json} -d '{{"author_id":1,"title":"Заголовок","body":"Текст поста"}}'"#
            ),
            SnippetId::PostById => format!("curl '{base}/post/get_by_id?post_id=1'"),
            SnippetId::PostByTitle => {
                format!("curl -G {base}/post/get_by_title --data-urlencode 'title=Заголовок'")
            }
            SnippetId::UpdatePostTitle => format!(
                r#"curl -X PATCH {base}/post/post_1/update_title {json} -d '{{"title":"Новый заголовок"}}'"#
            ),
        }
    }
}

/// A copy control and the snippet it copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyButton {
    pub number: usize,
    pub target: SnippetId,
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Terminal clipboard through the OSC 52 escape sequence.
#[derive(Debug)]
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))?;
        self.out.flush()
    }
}

#[derive(Debug)]
pub struct DocsPage {
    base_url: Url,
    pub sections: TabSet<ApiSection>,
    buttons: Vec<CopyButton>,
    pub notifications: NotificationCenter,
}

impl DocsPage {
    pub fn new(base_url: Url) -> Self {
        let buttons = SnippetId::ALL
            .iter()
            .enumerate()
            .map(|(i, &target)| CopyButton {
                number: i + 1,
                target,
            })
            .collect();

        Self {
            base_url,
            sections: TabSet::new(ApiSection::Users),
            buttons,
            notifications: NotificationCenter::new(),
        }
    }

    pub fn buttons(&self) -> &[CopyButton] {
        &self.buttons
    }

    pub fn button_for(&self, target: SnippetId) -> Option<&CopyButton> {
        self.buttons.iter().find(|b| b.target == target)
    }

    pub fn show_section(&mut self, section: ApiSection) {
        self.sections.activate(section);
    }

    pub fn snippet(&self, id: SnippetId) -> String {
        id.code(&self.base_url)
    }

    /// Copy the snippet bound to button `number`. Returns whether anything was copied.
    pub fn copy(&mut self, number: usize, clipboard: &mut impl Clipboard) -> bool {
        let Some(button) = self.buttons.iter().find(|b| b.number == number).copied() else {
            tracing::warn!(number, "no copy button with this number");
            self.notifications
                .error(format!("Ошибка копирования: нет кнопки №{number}"));
            return false;
        };

        match clipboard.write_text(&self.snippet(button.target)) {
            Ok(()) => {
                self.notifications.success("Код скопирован в буфер обмена");
                true
            }
            Err(e) => {
                self.notifications.error(format!("Ошибка копирования: {e}"));
                false
            }
        }
    }
}

impl fmt::Display for DocsPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.sections)?;
        let active = self.sections.active();
        writeln!(f, "== {} ==", active.label())?;
        for button in self.buttons.iter().filter(|b| b.target.section() == active) {
            writeln!(f, "[{}] {}", button.number, button.target.title())?;
            writeln!(f, "    {}", self.snippet(button.target))?;
        }
        Ok(())
    }
}
