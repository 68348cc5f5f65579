/*
 * Responsibility
 * - 1 プロセス分の共有コンテキスト (AppContext)
 *   - config と、それから組み立てた ApiClient
 * - 各ページはここから client を借りて使う
 */
use crate::api::ApiClient;
use crate::config::Config;
use crate::services::http::{ReqwestTransport, TransportError};

#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: Config,
    pub client: ApiClient<ReqwestTransport>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self, TransportError> {
        let client = ApiClient::from_config(&config)?;
        Ok(Self { config, client })
    }
}
