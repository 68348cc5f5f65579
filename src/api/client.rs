/*
 * Responsibility
 * - UI の意図 → HTTP 呼び出し → 型付きの結果
 * - 送信前に DTO の validate() を必ず通す (失敗時は通信しない)
 * - non-2xx は ClientError::Http、通信失敗は ClientError::Transport
 * - retry / timeout / 重複排除はしない
 */
use serde::de::DeserializeOwned;

use crate::{
    api::{
        dto::{
            MessageResponse,
            posts::{NewPost, PostListing, PostQuery, PostRecord, PostTitleUpdate, sample_posts},
            users::{DeleteUserRequest, NewUser, UserFilter, UserRecord, UserUpdateRequest},
        },
        routes,
    },
    config::Config,
    error::ClientError,
    services::http::{ApiRequest, HttpTransport, ReqwestTransport, TransportError},
};

#[derive(Clone, Debug)]
pub struct ApiClient<T: HttpTransport> {
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        Ok(Self::new(ReqwestTransport::new(config.base_url.clone())?))
    }
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn execute(&self, request: ApiRequest) -> Result<String, ClientError> {
        let method = request.method;
        let path = request.path.clone();
        let request_id = request.request_id;

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(
                backend = self.transport.backend_name(),
                %method,
                %path,
                %request_id,
                error = %e,
                "request failed"
            );
            e
        })?;

        if !response.is_success() {
            tracing::warn!(%method, %path, %request_id, status = response.status, "non-success status");
            return Err(ClientError::Http {
                status: response.status,
            });
        }

        tracing::info!(%method, %path, %request_id, status = response.status, "request completed");
        Ok(response.body)
    }

    async fn execute_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ClientError> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `GET /`. Any 2xx counts as healthy; the body is not inspected.
    pub async fn health(&self) -> Result<(), ClientError> {
        self.execute(routes::health()).await.map(|_| ())
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<UserRecord, ClientError> {
        user.validate()?;
        self.execute_json(routes::create_user().json(user)?).await
    }

    /// An empty filter lists every user. `null` is treated as no users.
    pub async fn search_users(&self, filter: &UserFilter) -> Result<Vec<UserRecord>, ClientError> {
        let mut request = routes::search_users();
        for (key, value) in filter.pairs() {
            request = request.query(key, value);
        }
        let users: Option<Vec<UserRecord>> = self.execute_json(request).await?;
        Ok(users.unwrap_or_default())
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update: &UserUpdateRequest,
    ) -> Result<UserRecord, ClientError> {
        update.validate()?;
        self.execute_json(routes::update_user(user_id).json(update)?)
            .await
    }

    pub async fn delete_user(
        &self,
        user_id: i64,
        delete: &DeleteUserRequest,
    ) -> Result<MessageResponse, ClientError> {
        delete.validate()?;
        let body = self.execute(routes::delete_user(user_id).json(delete)?).await?;
        if body.trim().is_empty() {
            return Ok(MessageResponse::default());
        }
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<PostRecord, ClientError> {
        post.validate()?;
        self.execute_json(routes::create_post().json(post)?).await
    }

    /// Always returns a list: zero or one post for a lookup.
    pub async fn search_post(&self, query: &PostQuery) -> Result<Vec<PostRecord>, ClientError> {
        query.validate()?;
        let request = match query {
            PostQuery::ById(id) => routes::post_by_id(*id),
            PostQuery::ByTitle(title) => routes::post_by_title(title),
        };
        let body = self.execute(request).await?;
        normalize_posts(&body)
    }

    pub async fn update_post(
        &self,
        post_id: i64,
        update: &PostTitleUpdate,
    ) -> Result<PostRecord, ClientError> {
        update.validate()?;
        self.execute_json(routes::update_post_title(post_id).json(update)?)
            .await
    }

    /// No listing endpoint exists; this never touches the network.
    pub fn list_posts(&self) -> PostListing {
        PostListing::Sample(sample_posts())
    }
}

// The backend answers a miss with `null`, an empty body or `{"message": "..."}`.
fn normalize_posts(body: &str) -> Result<Vec<PostRecord>, ClientError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(body)?;
    let is_post = matches!(&value, serde_json::Value::Object(map) if map.contains_key("id"));
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        _ if is_post => Ok(vec![serde_json::from_value(value)?]),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dto::users::{Gender, UserChanges};
    use crate::error::ValidationError;
    use crate::services::http::{Method, testing::RecordingTransport};

    fn client(transport: &RecordingTransport) -> ApiClient<RecordingTransport> {
        ApiClient::new(transport.clone())
    }

    fn new_user(password: &str) -> NewUser {
        NewUser {
            first_name: "Ivan".into(),
            second_name: "Petrov".into(),
            email: "ivan@x.com".into(),
            password: password.into(),
            age: 30,
            gender: Gender::Male,
        }
    }

    #[tokio::test]
    async fn short_password_never_hits_the_network() {
        let transport = RecordingTransport::default();
        let err = client(&transport)
            .create_user(&new_user("short"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Validation(ValidationError::PasswordTooShort)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn create_user_posts_json_and_decodes_record() {
        let transport = RecordingTransport::default();
        transport.respond(
            200,
            r#"{"id":1,"first_name":"Ivan","second_name":"Petrov","email":"ivan@x.com","age":30,"gender":"male"}"#,
        );

        let record = client(&transport).create_user(&new_user("password1")).await.unwrap();
        assert_eq!(record.id, Some(1));

        let sent = transport.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].path, "/user/create");
        assert_eq!(sent[0].body.as_ref().unwrap()["password"], "password1");
    }

    #[tokio::test]
    async fn non_success_status_becomes_http_error() {
        let transport = RecordingTransport::default();
        transport.respond(400, r#"{"detail":"bad"}"#);

        let err = client(&transport)
            .create_user(&new_user("password1"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 400");
    }

    #[tokio::test]
    async fn transport_failure_is_surfaced_verbatim() {
        let transport = RecordingTransport::default();
        transport.fail("connection refused");

        let err = client(&transport).health().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn empty_update_is_blocked() {
        let transport = RecordingTransport::default();
        let update = UserUpdateRequest {
            user_password: "password1".into(),
            update_data: UserChanges::default(),
        };

        let err = client(&transport).update_user(3, &update).await.unwrap_err();
        assert!(err.is_validation());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn search_users_sends_only_filled_params() {
        let transport = RecordingTransport::default();
        transport.respond(200, "[]");

        let users = client(&transport)
            .search_users(&UserFilter::new("Ivan", ""))
            .await
            .unwrap();
        assert!(users.is_empty());
        assert_eq!(
            transport.requests()[0].query,
            vec![("first_name".to_string(), "Ivan".to_string())]
        );
    }

    #[tokio::test]
    async fn search_users_treats_null_as_empty() {
        let transport = RecordingTransport::default();
        transport.respond(200, "null");

        let users = client(&transport).search_users(&UserFilter::default()).await.unwrap();
        assert!(users.is_empty());
        assert!(transport.requests()[0].query.is_empty());
    }

    #[tokio::test]
    async fn post_lookup_normalises_to_a_list() {
        let transport = RecordingTransport::default();
        transport.respond(200, r#"{"id":7,"title":"t","body":"b","author_id":1}"#);
        transport.respond(200, "null");
        transport.respond(200, r#"{"message":"пост не найден"}"#);

        let c = client(&transport);
        assert_eq!(c.search_post(&PostQuery::ById(7)).await.unwrap().len(), 1);
        assert!(c.search_post(&PostQuery::ById(8)).await.unwrap().is_empty());
        assert!(
            c.search_post(&PostQuery::ByTitle("x".into()))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn delete_tolerates_empty_body() {
        let transport = RecordingTransport::default();
        transport.respond(200, "");

        let res = client(&transport)
            .delete_user(
                5,
                &DeleteUserRequest {
                    input_password: "password1".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(res.message, None);
        assert_eq!(transport.requests()[0].path, "/user/5/delete");
    }

    #[test]
    fn list_posts_is_the_sample_set() {
        let transport = RecordingTransport::default();
        let listing = client(&transport).list_posts();
        assert!(listing.is_sample());
        assert_eq!(listing.posts().len(), 2);
        assert!(transport.requests().is_empty());
    }
}
