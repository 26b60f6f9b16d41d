use super::wire::{PasswordGrantRequest, SignUpRequest, TokenResponse, api_error};
use crate::{AuthContext, Gateway, GatewayError, GatewayResult, Session};

use mf_config::GatewayConfig;
use mf_core::{
    MissingPersonReport, NewRecord, Record, RecordId, RecordKind, SightingReport, SignUpProfile,
};

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client as ReqwestClient, Method};
use serde_json::Value;
use uuid::Uuid;

const REST_PREFIX: &str = "/rest/v1";
const AUTH_PREFIX: &str = "/auth/v1";

/// Gateway backed by a Supabase project (PostgREST data API + GoTrue auth API)
pub struct SupabaseGateway {
    pub base_url: String,
    anon_key: Option<String>,
    auth: AuthContext,
    client: ReqwestClient,
}

impl SupabaseGateway {
    /// Create a new gateway client
    ///
    /// # Arguments
    /// * `base_url` - Project URL (e.g., "https://xyz.supabase.co")
    /// * `anon_key` - Public API key sent as `apikey` on every request
    /// * `auth` - Session holder; its access token authorizes requests when present
    pub fn new(base_url: &str, anon_key: Option<&str>, auth: AuthContext) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.map(String::from),
            auth,
            client: ReqwestClient::new(),
        }
    }

    pub fn from_config(config: &GatewayConfig, auth: AuthContext) -> Self {
        Self::new(&config.url, config.anon_key.as_deref(), auth)
    }

    /// Build a request carrying the API key and the best available bearer token
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        let mut req = self.client.request(method, &url);

        if let Some(ref key) = self.anon_key {
            req = req.header("apikey", key);
        }

        let bearer = self.auth.access_token().or_else(|| self.anon_key.clone());
        if let Some(token) = bearer {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        req
    }

    /// Execute request and map non-2xx responses to [`GatewayError::Api`]
    async fn execute(&self, req: reqwest::RequestBuilder) -> GatewayResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let err = api_error(status.as_u16(), &body);
            warn!("Gateway returned {status}: {err}");
            return Err(err);
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&body)?)
    }

    fn table_path(kind: RecordKind) -> GatewayResult<String> {
        kind.table()
            .map(|table| format!("{REST_PREFIX}/{table}"))
            .ok_or_else(|| GatewayError::unsupported_kind(kind))
    }

    fn decode_rows(kind: RecordKind, body: Value) -> GatewayResult<Vec<Record>> {
        let rows = match body {
            Value::Array(rows) => rows,
            Value::Null => Vec::new(),
            other => {
                return Err(GatewayError::unexpected(format!(
                    "expected an array of {kind} rows, got {other}"
                )));
            }
        };

        let total = rows.len();
        let mut records = Vec::with_capacity(total);
        for row in rows {
            let decoded = match kind {
                RecordKind::MissingPerson => {
                    serde_json::from_value::<MissingPersonReport>(row).map(Record::MissingPerson)
                }
                RecordKind::Sighting => {
                    serde_json::from_value::<SightingReport>(row).map(Record::Sighting)
                }
                RecordKind::UserAccount => return Err(GatewayError::unsupported_kind(kind)),
            };
            match decoded {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping undecodable {kind} row: {e}"),
            }
        }

        if records.len() < total {
            warn!("Decoded {} of {total} {kind} rows", records.len());
        }
        Ok(records)
    }
}

#[async_trait]
impl Gateway for SupabaseGateway {
    async fn insert(&self, record: &NewRecord) -> GatewayResult<RecordId> {
        let path = Self::table_path(record.kind())?;
        let req = self
            .request(Method::POST, &path)
            .header("Prefer", "return=representation")
            .json(&[record]);
        let body = self.execute(req).await?;

        let id = body
            .as_array()
            .and_then(|rows| rows.first())
            .and_then(|row| row.get("id"))
            .and_then(Value::as_str)
            .and_then(|id| Uuid::parse_str(id).ok())
            .ok_or_else(|| GatewayError::unexpected("insert did not return the created row"))?;

        debug!("Inserted {} {id}", record.kind());
        Ok(RecordId(id))
    }

    async fn select_all(&self, kind: RecordKind) -> GatewayResult<Vec<Record>> {
        let path = format!("{}?select=*", Self::table_path(kind)?);
        let req = self.request(Method::GET, &path);
        let body = self.execute(req).await?;
        let records = Self::decode_rows(kind, body)?;

        debug!("Fetched {} {kind} records", records.len());
        Ok(records)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> GatewayResult<()> {
        let body = SignUpRequest {
            email,
            password,
            data: profile,
        };
        let req = self
            .request(Method::POST, &format!("{AUTH_PREFIX}/signup"))
            .json(&body);
        self.execute(req).await?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session> {
        let body = PasswordGrantRequest { email, password };
        let req = self
            .request(
                Method::POST,
                &format!("{AUTH_PREFIX}/token?grant_type=password"),
            )
            .json(&body);
        let body = self.execute(req).await?;

        let token: TokenResponse = serde_json::from_value(body)?;
        Ok(token.into_session(email))
    }

    async fn sign_out(&self) -> GatewayResult<()> {
        if !self.auth.is_signed_in() {
            debug!("No session to revoke");
            return Ok(());
        }

        let req = self.request(Method::POST, &format!("{AUTH_PREFIX}/logout"));
        self.execute(req).await?;
        Ok(())
    }

    async fn ping(&self) -> GatewayResult<()> {
        let path = format!(
            "{}?select=id&limit=1",
            Self::table_path(RecordKind::MissingPerson)?
        );
        let req = self.request(Method::GET, &path);
        self.execute(req).await?;
        Ok(())
    }
}
