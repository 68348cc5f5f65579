/*
 * Responsibility
 * - users ページ: 作成 / 検索 / 更新 / 削除 の 4 フォームとタブ
 * - フォームは入力文字列のまま保持し、送信時に DTO へ変換 + validate
 * - 成功したフォームはリセットする
 */
use crate::api::ApiClient;
use crate::api::dto::users::{
    DeleteUserRequest, MIN_PASSWORD_LEN, NewUser, UserChanges, UserFilter, UserRecord,
    UserUpdateRequest, non_empty,
};
use crate::error::ValidationError;
use crate::services::http::HttpTransport;
use crate::ui::pages::{parse_id, reject, report_failure};
use crate::ui::tabs::action_from_location;
use crate::ui::{Confirm, NotificationCenter, Panel, TabSet, UserTab};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFormInput {
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub gender: String,
}

impl UserFormInput {
    pub fn to_new_user(&self) -> Result<NewUser, ValidationError> {
        // password length is reported before anything else
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        let age = self
            .age
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::NotANumber("Возраст"))?;

        let user = NewUser {
            first_name: self.first_name.clone(),
            second_name: self.second_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            age,
            gender: self.gender.parse()?,
        };
        user.validate()?;
        Ok(user)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchInput {
    pub first_name: String,
    pub second_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdateInput {
    pub id: String,
    pub password: String,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
}

impl UserUpdateInput {
    pub fn to_request(&self) -> Result<(i64, UserUpdateRequest), ValidationError> {
        if self.id.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingIdOrPassword);
        }
        let user_id = parse_id(&self.id, "ID")?;

        let age = match self.age.trim() {
            "" => None,
            raw => Some(
                raw.parse::<i32>()
                    .map_err(|_| ValidationError::NotANumber("Возраст"))?,
            ),
        };
        let gender = match self.gender.trim() {
            "" => None,
            raw => Some(raw.parse()?),
        };

        let request = UserUpdateRequest {
            user_password: self.password.clone(),
            update_data: UserChanges {
                first_name: non_empty(&self.first_name),
                second_name: non_empty(&self.second_name),
                email: non_empty(&self.email),
                age,
                gender,
            },
        };
        request.validate()?;
        Ok((user_id, request))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDeleteInput {
    pub id: String,
    pub password: String,
}

impl UserDeleteInput {
    pub fn to_request(&self) -> Result<(i64, DeleteUserRequest), ValidationError> {
        if self.id.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingIdOrPassword);
        }
        let user_id = parse_id(&self.id, "ID")?;
        Ok((
            user_id,
            DeleteUserRequest {
                input_password: self.password.clone(),
            },
        ))
    }
}

#[derive(Debug)]
pub struct UsersPage {
    pub tabs: TabSet<UserTab>,

    pub create_form: UserFormInput,
    pub search_form: UserSearchInput,
    pub update_form: UserUpdateInput,
    pub delete_form: UserDeleteInput,

    pub create_result: Panel,
    pub users_table: Panel,
    pub update_result: Panel,
    pub delete_result: Panel,

    pub notifications: NotificationCenter,
}

impl Default for UsersPage {
    fn default() -> Self {
        Self {
            tabs: TabSet::new(UserTab::Create),
            create_form: UserFormInput::default(),
            search_form: UserSearchInput::default(),
            update_form: UserUpdateInput::default(),
            delete_form: UserDeleteInput::default(),
            create_result: Panel::Empty,
            users_table: Panel::Empty,
            update_result: Panel::Empty,
            delete_result: Panel::Empty,
            notifications: NotificationCenter::new(),
        }
    }
}

impl UsersPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page load. `?action=search` also lists every user.
    pub async fn open<T: HttpTransport>(location: &str, client: &ApiClient<T>) -> Self {
        let mut page = Self {
            tabs: TabSet::from_location(UserTab::Create, location),
            ..Self::default()
        };
        if action_from_location(location).as_deref() == Some("search") {
            page.load_all_users(client).await;
        }
        page
    }

    /// The panel belonging to the active tab.
    pub fn active_panel(&self) -> &Panel {
        match self.tabs.active() {
            UserTab::Create => &self.create_result,
            UserTab::Search => &self.users_table,
            UserTab::Update => &self.update_result,
            UserTab::Delete => &self.delete_result,
        }
    }

    pub async fn create_user<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(UserTab::Create);
        let user = match self.create_form.to_new_user() {
            Ok(user) => user,
            Err(e) => return reject(&mut self.notifications, e),
        };

        self.create_result = Panel::loading("Создание пользователя...");
        match client.create_user(&user).await {
            Ok(record) => {
                self.create_result = Panel::success(
                    "Пользователь успешно создан!",
                    vec![
                        format!("ID: {}", display_id(&record)),
                        format!("Имя: {}", record.first_name),
                        format!("Фамилия: {}", record.second_name),
                        format!("Email: {}", record.email),
                    ],
                );
                self.notifications.success("Пользователь успешно создан!");
                self.create_form = UserFormInput::default();
            }
            Err(e) => report_failure(
                &mut self.notifications,
                &mut self.create_result,
                "Ошибка создания пользователя:",
                "Ошибка",
                &e,
            ),
        }
    }

    pub async fn search_users<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(UserTab::Search);
        let filter = UserFilter::new(&self.search_form.first_name, &self.search_form.second_name);
        self.fetch_users(client, &filter, "Ошибка поиска").await;
    }

    pub async fn load_all_users<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(UserTab::Search);
        self.fetch_users(client, &UserFilter::default(), "Ошибка загрузки")
            .await;
    }

    async fn fetch_users<T: HttpTransport>(
        &mut self,
        client: &ApiClient<T>,
        filter: &UserFilter,
        prefix: &str,
    ) {
        match client.search_users(filter).await {
            Ok(users) => self.users_table = Panel::Users(users),
            Err(e) => report_failure(
                &mut self.notifications,
                &mut self.users_table,
                &format!("{prefix}:"),
                prefix,
                &e,
            ),
        }
    }

    pub async fn update_user<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        self.tabs.activate(UserTab::Update);
        let (user_id, request) = match self.update_form.to_request() {
            Ok(parsed) => parsed,
            Err(e) => return reject(&mut self.notifications, e),
        };

        self.update_result = Panel::loading("Обновление пользователя...");
        match client.update_user(user_id, &request).await {
            Ok(record) => {
                self.update_result = Panel::success(
                    "Пользователь успешно обновлен!",
                    vec![
                        format!("ID: {}", display_id(&record)),
                        format!("Имя: {}", record.first_name),
                        format!("Фамилия: {}", record.second_name),
                    ],
                );
                self.notifications.success("Пользователь успешно обновлен");
                self.update_form = UserUpdateInput::default();
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

    /// Declining the confirmation leaves everything untouched.
    pub async fn delete_user<T: HttpTransport>(
        &mut self,
        client: &ApiClient<T>,
        confirm: &mut impl Confirm,
    ) {
        self.tabs.activate(UserTab::Delete);
        let (user_id, request) = match self.delete_form.to_request() {
            Ok(parsed) => parsed,
            Err(e) => return reject(&mut self.notifications, e),
        };

        if !confirm.confirm(&format!(
            "Вы уверены, что хотите удалить пользователя с ID {user_id}?"
        )) {
            tracing::debug!(user_id, "delete declined");
            return;
        }

        self.delete_result = Panel::loading("Удаление пользователя...");
        match client.delete_user(user_id, &request).await {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Операция выполнена успешно".to_string());
                self.delete_result = Panel::success("Пользователь успешно удален!", vec![message]);
                self.notifications.success("Пользователь успешно удален");
                self.delete_form = UserDeleteInput::default();
            }
            Err(e) => report_failure(
                &mut self.notifications,
                &mut self.delete_result,
                "Ошибка удаления:",
                "Ошибка",
                &e,
            ),
        }
    }
}

fn display_id(record: &UserRecord) -> String {
    record
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}
