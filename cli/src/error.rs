use store::ApiError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("login needs both --email and --password")]
    MissingCredentials,
    #[error("could not determine the public IP address; pass one explicitly")]
    NoPublicIp,
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
