//! Mutually exclusive panels, one active at a time.
//!
//! The active panel is an explicit enum value. Its control is derived from the
//! same value, so a panel and its selector can never disagree.
use std::fmt;

use url::Url;

pub trait Tab: Copy + Eq + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// Identifier used in navigation (`?action=<name>`) and on the command line.
    fn name(&self) -> &'static str;

    /// Text of the selector control.
    fn label(&self) -> &'static str;

    /// Tabs reachable through `?action=`. Defaults to none.
    fn from_action(_action: &str) -> Option<Self> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabControl<T: Tab> {
    pub tab: T,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet<T: Tab> {
    active: T,
}

impl<T: Tab> TabSet<T> {
    pub fn new(initial: T) -> Self {
        Self { active: initial }
    }

    /// Initial state from a page location such as `users.html?action=search`.
    /// Unknown or missing actions keep `default`.
    pub fn from_location(default: T, location: &str) -> Self {
        let tab = action_from_location(location)
            .and_then(|action| T::from_action(&action))
            .unwrap_or(default);
        Self::new(tab)
    }

    pub fn activate(&mut self, tab: T) {
        tracing::debug!(from = ?self.active, to = ?tab, "activate tab");
        self.active = tab;
    }

    pub fn active(&self) -> T {
        self.active
    }

    pub fn is_active(&self, tab: T) -> bool {
        self.active == tab
    }

    pub fn controls(&self) -> Vec<TabControl<T>> {
        T::ALL
            .iter()
            .map(|&tab| TabControl {
                tab,
                active: tab == self.active,
            })
            .collect()
    }
}

impl<T: Tab> fmt::Display for TabSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<String> = self
            .controls()
            .into_iter()
            .map(|c| {
                if c.active {
                    format!("[{}]", c.tab.label())
                } else {
                    c.tab.label().to_string()
                }
            })
            .collect();
        f.write_str(&labels.join(" | "))
    }
}

/// Value of the `action` query parameter of a page location.
pub fn action_from_location(location: &str) -> Option<String> {
    let url = Url::parse(location)
        .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(location)))
        .ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "action")
        .map(|(_, value)| value.into_owned())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserTab {
    Create,
    Search,
    Update,
    Delete,
}

impl Tab for UserTab {
    const ALL: &'static [Self] = &[Self::Create, Self::Search, Self::Update, Self::Delete];

    fn name(&self) -> &'static str {
        match self {
            UserTab::Create => "create",
            UserTab::Search => "search",
            UserTab::Update => "update",
            UserTab::Delete => "delete",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UserTab::Create => "Создать",
            UserTab::Search => "Поиск",
            UserTab::Update => "Обновить",
            UserTab::Delete => "Удалить",
        }
    }

    fn from_action(action: &str) -> Option<Self> {
        match action {
            "create" => Some(UserTab::Create),
            "search" => Some(UserTab::Search),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostTab {
    Create,
    List,
    Search,
    Update,
}

impl Tab for PostTab {
    const ALL: &'static [Self] = &[Self::Create, Self::List, Self::Search, Self::Update];

    fn name(&self) -> &'static str {
        match self {
            PostTab::Create => "create",
            PostTab::List => "list",
            PostTab::Search => "search",
            PostTab::Update => "update",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PostTab::Create => "Создать",
            PostTab::List => "Все посты",
            PostTab::Search => "Поиск",
            PostTab::Update => "Обновить",
        }
    }

    fn from_action(action: &str) -> Option<Self> {
        match action {
            "create" => Some(PostTab::Create),
            "list" => Some(PostTab::List),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiSection {
    Users,
    Posts,
    Health,
}

impl Tab for ApiSection {
    const ALL: &'static [Self] = &[Self::Users, Self::Posts, Self::Health];

    fn name(&self) -> &'static str {
        match self {
            ApiSection::Users => "users",
            ApiSection::Posts => "posts",
            ApiSection::Health => "health",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ApiSection::Users => "Пользователи",
            ApiSection::Posts => "Посты",
            ApiSection::Health => "Статус",
        }
    }

    fn from_action(action: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == action)
    }
}
