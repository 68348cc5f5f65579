/*
 * Responsibility
 * - posts ページ: 作成 / 一覧 / 検索 / 更新 のフォームとタブ
 * - 検索は id / title のどちらか一方 (SearchMode)
 * - 更新 API は title のみ受け付ける。本文だけの更新は送信前に拒否
 * - 一覧は backend に endpoint が無いのでサンプル表示
 */
use crate::api::ApiClient;
use crate::api::dto::posts::{NewPost, PostQuery, PostTitleUpdate};
use crate::error::ValidationError;
use crate::services::http::HttpTransport;
use crate::ui::pages::{parse_id, reject, report_failure};
use crate::ui::panel::PostList;
use crate::ui::{NotificationCenter, Panel, PostTab, SearchMode, TabSet};

const SAMPLE_NOTICE: &str = "Эндпоинт списка постов пока не реализован: показаны примерные данные";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFormInput {
    pub author_id: String,
    pub title: String,
    pub body: String,
}

impl PostFormInput {
    pub fn to_new_post(&self) -> Result<NewPost, ValidationError> {
        if self.author_id.trim().is_empty() {
            return Err(ValidationError::Required("ID автора"));
        }
        let post = NewPost {
            author_id: parse_id(&self.author_id, "ID автора")?,
            title: self.title.clone(),
            body: self.body.clone(),
        };
        post.validate()?;
        Ok(post)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSearchInput {
    pub mode: SearchMode,
    pub id: String,
    pub title: String,
}

impl PostSearchInput {
    /// Only the input of the selected mode is read.
    pub fn to_query(&self) -> Result<PostQuery, ValidationError> {
        match self.mode {
            SearchMode::Id => {
                if self.id.trim().is_empty() {
                    return Err(ValidationError::MissingPostId);
                }
                Ok(PostQuery::ById(parse_id(&self.id, "ID")?))
            }
            SearchMode::Title => {
                let query = PostQuery::ByTitle(self.title.clone());
                query.validate()?;
                Ok(query)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdateInput {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl PostUpdateInput {
    pub fn to_request(&self) -> Result<(i64, PostTitleUpdate), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingPostId);
        }
        let post_id = parse_id(&self.id, "ID")?;

        match (self.title.is_empty(), self.body.is_empty()) {
            (true, true) => Err(ValidationError::NothingToUpdate),
            (true, false) => Err(ValidationError::PostBodyNotSupported),
            (false, body_empty) => {
                if !body_empty {
                    tracing::warn!(post_id, "post body is not sent: only the title can be updated");
                }
                Ok((
                    post_id,
                    PostTitleUpdate {
                        title: self.title.clone(),
                    },
                ))
            }
        }
    }
}

#[derive(Debug)]
pub struct PostsPage {
    pub tabs: TabSet<PostTab>,

    pub create_form: PostFormInput,
    pub search_form: PostSearchInput,
    pub update_form: PostUpdateInput,

    pub create_result: Panel,
    pub posts_list: Panel,
    pub search_result: Panel,
    pub update_result: Panel,

    pub notifications: NotificationCenter,
}

impl Default for PostsPage {
    fn default() -> Self {
        Self {
            tabs: TabSet::new(PostTab::Create),
            create_form: PostFormInput::default(),
            search_form: PostSearchInput::default(),
            update_form: PostUpdateInput::default(),
            create_result: Panel::Empty,
            posts_list: Panel::Empty,
            search_result: Panel::Empty,
            update_result: Panel::Empty,
            notifications: NotificationCenter::new(),
        }
    }
}

impl PostsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page load. `?action=list` opens and fills the list tab.
    pub fn open<T: HttpTransport>(location: &str, client: &ApiClient<T>) -> Self {
        let mut page = Self::default();
        let tab = TabSet::from_location(PostTab::Create, location).active();
        page.show_tab(tab, client);
        page
    }

    /// Switching to the list tab reloads it.
    pub fn show_tab<T: HttpTransport>(&mut self, tab: PostTab, client: &ApiClient<T>) {
        self.tabs.activate(tab);
        if tab == PostTab::List {
            self.load_posts(client);
        }
    }

    pub fn active_panel(&self) -> &Panel {
        match self.tabs.active() {
            PostTab::Create => &self.create_result,
            PostTab::List => &self.posts_list,
            PostTab::Search => &self.search_result,
            PostTab::Update => &self.update_result,
        }
    }

    pub fn toggle_search_mode(&mut self, mode: SearchMode) {
        self.search_form.mode = mode;
    }

    pub fn load_posts<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        let listing = client.list_posts();
        let notice = listing.is_sample().then(|| SAMPLE_NOTICE.to_string());
        let filter = match &self.posts_list {
            Panel::Posts(list) => list.filter.clone(),
            _ => String::new(),
        };
        self.posts_list = Panel::Posts(PostList {
            posts: listing.posts().to_vec(),
            filter,
            notice,
        });
    }

    /// Narrow the displayed posts without another load.
    pub fn filter_posts(&mut self, text: &str) {
        if let Panel::Posts(list) = &mut self.posts_list {
            list.filter = text.to_string();
        }
    }

    pub async fn create_post<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(PostTab::Create);
        let post = match self.create_form.to_new_post() {
            Ok(post) => post,
            Err(e) => return reject(&mut self.notifications, e),
        };

        self.create_result = Panel::loading("Создание поста...");
        match client.create_post(&post).await {
            Ok(record) => {
                self.create_result = Panel::success(
                    "Пост успешно создан!",
                    vec![
                        format!("ID: {}", record.id),
                        format!("Заголовок: {}", record.title),
                        format!("Автор ID: {}", record.author_id),
                    ],
                );
                self.notifications.success("Пост успешно создан!");
                self.create_form = PostFormInput::default();
            }
            Err(e) => report_failure(
                &mut self.notifications,
                &mut self.create_result,
                "Ошибка создания поста:",
                "Ошибка",
                &e,
            ),
        }
    }

    pub async fn search_post<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(PostTab::Search);
        let query = match self.search_form.to_query() {
            Ok(query) => query,
            Err(e) => return reject(&mut self.notifications, e),
        };

        self.search_result = Panel::loading("Поиск поста...");
        match client.search_post(&query).await {
            Ok(posts) => self.search_result = Panel::PostMatches(posts),
            Err(e) => report_failure(
                &mut self.notifications,
                &mut self.search_result,
                "Ошибка поиска:",
                "Ошибка",
                &e,
            ),
        }
    }

    pub async fn update_post<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(PostTab::Update);
        let (post_id, update) = match self.update_form.to_request() {
            Ok(parsed) => parsed,
            Err(e) => return reject(&mut self.notifications, e),
        };

        self.update_result = Panel::loading("Обновление поста...");
        match client.update_post(post_id, &update).await {
            Ok(record) => {
                self.update_result = Panel::success(
                    "Пост успешно обновлен!",
                    vec![
                        format!("ID: {}", record.id),
                        format!("Новый заголовок: {}", record.title),
                    ],
                );
                self.notifications.success("Пост успешно обновлен");
                self.update_form = PostUpdateInput::default();
            }
            Err(e) => report_failure(
                &mut self.notifications,
                &mut self.update_result,
                "Ошибка обновления:",
                "Ошибка",
                &e,
            ),
        }
    }
}
