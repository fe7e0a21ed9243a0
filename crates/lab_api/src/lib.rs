use errors::*;
use models::{
    session::{LoginPayload, LoginResponse},
    Collection, Record, RecordId,
};
use reqwest::{header::*, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub mod errors;
pub mod models;

type Result<T> = std::result::Result<T, ApiError>;

pub const ENV_NAME: &str = "LABDESK_API_URL";

fn get_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    headers
}

#[derive(Debug, Clone)]
pub enum Param {
    Name(String),
    Staff(String),
}

#[allow(clippy::from_over_into)]
impl Into<(String, String)> for Param {
    fn into(self) -> (String, String) {
        match self {
            Self::Name(value) => ("name".to_string(), value),
            Self::Staff(value) => ("staff".to_string(), value),
        }
    }
}

/// HTTP client for the lab records API.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .default_headers(get_headers())
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn make_url<I>(&self, path: &str, params: I) -> Result<reqwest::Url>
    where
        I: IntoIterator<Item = Param>,
    {
        let params: Vec<(String, String)> = params.into_iter().map(|p| p.into()).collect();
        let path = path.trim_start_matches('/');

        reqwest::Url::parse_with_params(&format!("{}/api/{path}", self.base_url), params)
            .map_err(|_| ApiError::UrlParsing)
    }

    /// URL of a single entry. The id is pushed as one escaped path segment.
    fn make_entry_url(&self, collection: Collection, id: &RecordId) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&format!("{}/api/{collection}", self.base_url))
            .map_err(|_| ApiError::UrlParsing)?;

        url.path_segments_mut()
            .map_err(|_| ApiError::UrlParsing)?
            .push(&id.to_string());

        Ok(url)
    }

    fn request(&self, method: Method, url: reqwest::Url) -> Result<reqwest::RequestBuilder> {
        let token = self.token.as_ref().ok_or(ApiError::MissingToken)?;

        tracing::debug!("{method} {url}");

        Ok(self.http.request(method, url).bearer_auth(token))
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http(status.as_u16(), body));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Json(e.to_string()))
    }

    async fn fetch<T, I>(&self, path: &str, params: I) -> Result<T>
    where
        I: IntoIterator<Item = Param>,
        T: DeserializeOwned,
    {
        let url = self.make_url(path, params)?;
        let response = self.request(Method::GET, url)?.send().await?;

        Self::decode(response).await
    }

    async fn put<T: DeserializeOwned, P: Serialize>(
        &self,
        url: reqwest::Url,
        payload: &P,
    ) -> Result<T> {
        let response = self.request(Method::PUT, url)?.json(payload).send().await?;

        Self::decode(response).await
    }

    /// Exchanges credentials for a bearer token. The only unauthenticated call.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = self.make_url("auth/login", [])?;
        let payload = LoginPayload {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.http.post(url).json(&payload).send().await?;

        Self::decode(response).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_entries_by_name(
        &self,
        text: &str,
        collection: Collection,
    ) -> Result<Vec<Record>> {
        self.fetch(collection.as_ref(), [Param::Name(text.to_string())])
            .await
    }

    /// `Ok(false)` when the record did not exist.
    #[tracing::instrument(skip(self))]
    pub async fn delete_entry_by_id(&self, id: &RecordId, collection: Collection) -> Result<bool> {
        let url = self.make_entry_url(collection, id)?;
        let response = self.request(Method::DELETE, url)?.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Http(status.as_u16(), body));
        }

        Ok(true)
    }

    #[tracing::instrument(skip(self, record))]
    pub async fn update_entry_by_id(
        &self,
        id: &RecordId,
        collection: Collection,
        record: &Record,
    ) -> Result<Record> {
        let url = self.make_entry_url(collection, id)?;

        self.put(url, record).await
    }

    #[tracing::instrument(skip(self, staff), fields(staff = %staff.id))]
    pub async fn get_equipments_by_staff(&self, staff: &Record) -> Result<Vec<Record>> {
        self.fetch(
            Collection::Equipments.as_ref(),
            [Param::Staff(staff.id.to_string())],
        )
        .await
    }
}
