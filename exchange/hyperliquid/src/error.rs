use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("msgpack: {0}")]
    Msgpack(#[from] rmp_serde::encode::Error),
    #[error("wallet: {0}")]
    Wallet(#[from] ethers::signers::WalletError),
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("response error {status}: {body}")]
    Response { status: u16, body: String },
    /// The exchange answered with `{"status": "err", "response": ...}`
    #[error("api error: {0}")]
    Api(String),
    #[error("request aborted")]
    Aborted,
    #[error("unknown asset: {0}")]
    UnknownAsset(String),
}

impl Error {
    pub fn response_error(status: u16, body: impl Into<String>) -> Self {
        Error::Response {
            status,
            body: body.into(),
        }
    }
}
