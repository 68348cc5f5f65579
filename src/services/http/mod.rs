mod reqwest_client;
mod transport;

pub use reqwest_client::ReqwestTransport;
pub use transport::{
    ApiRequest, ApiResponse, HttpTransport, Method, TransportError, TransportResult,
};

#[cfg(test)]
pub(crate) mod testing;
