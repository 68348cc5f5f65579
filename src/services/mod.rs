/*
 * Responsibility
 * - 外部 I/O (HTTP) の境界
 * - 上位 (api::client) は trait 越しにのみ触る
 */
pub mod http;
