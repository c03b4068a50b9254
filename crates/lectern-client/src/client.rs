use lectern_config::ApiConfig;
use lectern_core::ProfileField;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::identity::RemoteIdentity;
use crate::token::LoginTokens;
use crate::upload::{AvatarFile, UploadReceipt};
use crate::IdentityApi;

/// `reqwest`-backed implementation of [`IdentityApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    asset_path: String,
    upload_category: String,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base().to_string(),
            asset_path: config.asset_path.clone(),
            upload_category: config.upload_category.clone(),
        }
    }

    /// Use a custom HTTP client (for connection pool reuse or testing).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http = client;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Checks HTTP status; returns the response on success or an error carrying the body.
    async fn ensure_success(
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(operation, status, "request rejected");
        Err(ApiError::Status {
            operation,
            status,
            body: body.trim().to_string(),
        })
    }

    fn transport(operation: &'static str) -> impl FnOnce(reqwest::Error) -> ApiError {
        move |source| ApiError::Transport { operation, source }
    }

    fn decode(operation: &'static str) -> impl FnOnce(reqwest::Error) -> ApiError {
        move |e| ApiError::Decode {
            operation,
            reason: e.to_string(),
        }
    }
}

impl IdentityApi for ApiClient {
    async fn fetch_identity(&self, token: &str, user_id: &str) -> Result<RemoteIdentity, ApiError> {
        const OP: &str = "fetch identity";
        let url = self.url(&format!("/api/users/{}", urlencoding::encode(user_id)));
        let response = self
            .http
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(Self::transport(OP))?;

        let response = Self::ensure_success(response, OP).await?;
        response.json::<RemoteIdentity>().await.map_err(Self::decode(OP))
    }

    async fn update_field(
        &self,
        token: &str,
        user_id: &str,
        field: ProfileField,
        value: &str,
    ) -> Result<(), ApiError> {
        const OP: &str = "update field";
        let url = self.url(&format!(
            "/api/users?id={}&target_field={}",
            urlencoding::encode(user_id),
            field.wire_name()
        ));
        let mut body = Map::new();
        body.insert(field.body_key().to_string(), Value::String(value.to_string()));

        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(Self::transport(OP))?;

        Self::ensure_success(response, OP).await?;
        tracing::debug!(%field, "field updated");
        Ok(())
    }

    async fn upload_avatar(&self, token: &str, file: &AvatarFile) -> Result<UploadReceipt, ApiError> {
        const OP: &str = "upload avatar";
        let url = self.url(&format!(
            "/api/upload?location={}",
            urlencoding::encode(&self.upload_category)
        ));
        let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("location", self.upload_category.clone());

        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await
            .map_err(Self::transport(OP))?;

        let response = Self::ensure_success(response, OP).await?;
        let receipt = response.json::<UploadReceipt>().await.map_err(Self::decode(OP))?;
        tracing::debug!(size = file.bytes.len(), asset_id = ?receipt.asset_id, "avatar uploaded");
        Ok(receipt)
    }

    async fn fetch_asset(&self, asset_id: &str) -> Result<usize, ApiError> {
        const OP: &str = "fetch asset";
        let response = self
            .http
            .get(self.asset_url(asset_id))
            .send()
            .await
            .map_err(Self::transport(OP))?;

        let response = Self::ensure_success(response, OP).await?;
        let bytes = response.bytes().await.map_err(Self::decode(OP))?;
        Ok(bytes.len())
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginTokens, ApiError> {
        const OP: &str = "login";
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&serde_json::json!({
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .map_err(Self::transport(OP))?;

        let response = Self::ensure_success(response, OP).await?;
        response.json::<LoginTokens>().await.map_err(Self::decode(OP))
    }

    fn asset_url(&self, asset_id: &str) -> String {
        self.url(
            &self
                .asset_path
                .replace("{id}", &urlencoding::encode(asset_id)),
        )
    }
}
