use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0} {1}")]
    Http(u16, String),

    #[error("Error in the request: {0}")]
    GenericError(String),

    #[error("Error parsing json: {0}")]
    Json(String),

    #[error("Failed to parse url")]
    UrlParsing,

    #[error("Not logged in, run `labdesk login` first")]
    MissingToken,
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            return Self::Json(value.to_string());
        }

        Self::GenericError(value.to_string())
    }
}
