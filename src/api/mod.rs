/*
 * Responsibility
 * - backend REST API の公開ポイント (client / dto / routes の re-export)
 */
pub mod client;
pub mod dto;
pub mod routes;

pub use client::ApiClient;
