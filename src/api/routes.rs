/*
 * Responsibility
 * - backend の URL 構造を一か所で定義
 * - 各 endpoint の method + path を ApiRequest として返す (query/body は呼び出し側)
 */
use crate::services::http::{ApiRequest, Method};

pub fn health() -> ApiRequest {
    ApiRequest::get("/")
}

pub fn create_user() -> ApiRequest {
    ApiRequest::new(Method::Post, "/user/create")
}

pub fn search_users() -> ApiRequest {
    ApiRequest::get("/user/get")
}

pub fn update_user(user_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("/user/user_{user_id}/update"))
}

pub fn delete_user(user_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Post, format!("/user/{user_id}/delete"))
}

pub fn create_post() -> ApiRequest {
    ApiRequest::new(Method::Post, "/post/create")
}

pub fn post_by_id(post_id: i64) -> ApiRequest {
    ApiRequest::get("/post/get_by_id").query("post_id", post_id.to_string())
}

pub fn post_by_title(title: &str) -> ApiRequest {
    ApiRequest::get("/post/get_by_title").query("title", title)
}

pub fn update_post_title(post_id: i64) -> ApiRequest {
    ApiRequest::new(Method::Patch, format!("/post/post_{post_id}/update_title"))
}
