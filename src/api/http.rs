use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::Serialize;

use super::{ApiError, UserApi};
use crate::config::ApiConfig;
use crate::model::UserRecord;

#[derive(Serialize)]
struct ChangeAliasBody<'a> {
    alias: &'a str,
}

/// [`UserApi`] over HTTP.
///
/// - `GET  {base}/api/users/{name}`
/// - `POST {base}/api/users/{target}/changeAlias` with `{"alias": ...}`
#[derive(Clone)]
pub struct HttpUserApi {
    client: Client,
    base_url: Url,
}

impl HttpUserApi {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let invalid = || ApiError::InvalidBaseUrl {
            url: config.base_url.clone(),
        };
        let base_url = Url::parse(&config.base_url).map_err(|_| invalid())?;
        if base_url.cannot_be_a_base() {
            return Err(invalid());
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { client, base_url })
    }

    /// Appends percent-encoded segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base can always take path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

async fn error_message(response: reqwest::Response) -> String {
    response.text().await.unwrap_or_default()
}

impl UserApi for HttpUserApi {
    async fn fetch_user(&self, name: &str) -> Result<UserRecord, ApiError> {
        let url = self.endpoint(&["api", "users", name]);
        tracing::debug!(%url, "Fetching user");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }

        response.json::<UserRecord>().await.map_err(ApiError::Decode)
    }

    async fn change_user_alias(&self, target_user: &str, alias: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "users", target_user, "changeAlias"]);
        tracing::debug!(%url, "Changing user alias");

        let response = self
            .client
            .post(url)
            .json(&ChangeAliasBody { alias })
            .send()
            .await
            .map_err(ApiError::Connection)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(response).await,
            });
        }
        Ok(())
    }
}
