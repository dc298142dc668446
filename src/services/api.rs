use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, error};

use crate::clients::HttpClient;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::{ApprovalStatus, RpcEnvelope, Vendor};

/// Remote vendor-service surface. The controllers depend on this trait so
/// the whole moderation workflow can run against an in-memory backend in
/// tests.
#[async_trait]
pub trait VendorApi: Send + Sync {
    async fn list_vendors(
        &self,
        limit: i64,
        offset: i64,
        search: &str,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<Vendor>>;

    async fn vendor_details(&self, vendor_id: &str) -> Result<Option<Vendor>>;

    async fn set_approval(
        &self,
        vendor_id: &str,
        status: ApprovalStatus,
        reject_reason: Option<&str>,
    ) -> Result<()>;
}

/// Calls the backend's admin RPC endpoints. Requests are single round trips:
/// no retries and no timeouts, a hung call stays in flight until the
/// transport gives up.
pub struct ApiService {
    client: HttpClient,
    base_url: String,
}

impl ApiService {
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(settings)?,
            base_url: settings.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn rpc<T: DeserializeOwned>(
        &self,
        function: &str,
        params: serde_json::Value,
    ) -> Result<Option<T>> {
        let url = format!("{}/rest/v1/rpc/{}", self.base_url, function);

        let request = self.client.post_json(&url, &params);
        let response = self.client.send(request).await?;

        debug!(
            status = response.status().as_u16(),
            function = function,
            "RPC response received"
        );

        if response.status() != StatusCode::OK {
            return Err(Error::Http(response.error_for_status().unwrap_err()));
        }

        let body = response.bytes().await?;
        let envelope: RpcEnvelope<T> = serde_json::from_slice(&body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&body);
            error!(
                error = %e,
                function = function,
                body = %body_str,
                "Failed to parse RPC envelope"
            );
            Error::from(e)
        })?;

        envelope.into_result()
    }
}

#[async_trait]
impl VendorApi for ApiService {
    async fn list_vendors(
        &self,
        limit: i64,
        offset: i64,
        search: &str,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<Vendor>> {
        let params = json!({
            "p_limit": limit,
            "p_offset": offset,
            "p_text_search": search,
            "p_vendor_status": status.map(|s| s.as_str()),
        });

        let rows = self
            .rpc::<Vec<Vendor>>("get_all_vendors_admin", params)
            .await?;
        Ok(rows.unwrap_or_default())
    }

    async fn vendor_details(&self, vendor_id: &str) -> Result<Option<Vendor>> {
        let params = json!({ "p_vendor_id": vendor_id });
        self.rpc::<Vendor>("get_vendor_details_admin", params).await
    }

    async fn set_approval(
        &self,
        vendor_id: &str,
        status: ApprovalStatus,
        reject_reason: Option<&str>,
    ) -> Result<()> {
        let params = json!({
            "p_vendor_id": vendor_id,
            "p_approval_status": status.as_str(),
            "p_reject_reason": reject_reason,
        });

        self.rpc::<serde_json::Value>("approve_reject_vendor_admin", params)
            .await?;
        Ok(())
    }
}
