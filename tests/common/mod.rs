#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::ErrorKind;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use vendor_admin::error::{Error, Result};
use vendor_admin::models::{ApprovalStatus, Vendor};
use vendor_admin::services::VendorApi;

/// Captured parameters of one `get_all_vendors_admin` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub limit: i64,
    pub offset: i64,
    pub search: String,
    pub status: Option<ApprovalStatus>,
}

/// In-memory stand-in for the remote vendor service. Failure injection and
/// per-call delays let tests exercise the error-degradation and
/// out-of-order-completion paths.
#[derive(Default)]
pub struct FakeApi {
    pub vendors: Mutex<Vec<Vendor>>,
    pub list_requests: Mutex<Vec<ListRequest>>,
    pub detail_calls: AtomicUsize,
    pub approval_calls: AtomicUsize,
    pub list_delays_ms: Mutex<VecDeque<u64>>,
    pub detail_delays_ms: Mutex<VecDeque<u64>>,
    rpc_error: Mutex<Option<String>>,
    transport_error: AtomicBool,
}

impl FakeApi {
    pub fn with_vendors(vendors: Vec<Vendor>) -> Self {
        Self { vendors: Mutex::new(vendors), ..Default::default() }
    }

    /// Every subsequent call returns an application-level error envelope.
    pub fn fail_rpc(&self, message: &str) {
        *self.rpc_error.lock().unwrap() = Some(message.to_string());
    }

    /// Every subsequent call fails at the transport level.
    pub fn fail_transport(&self) {
        self.transport_error.store(true, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_requests.lock().unwrap().len()
    }

    pub fn last_list_request(&self) -> ListRequest {
        self.list_requests.lock().unwrap().last().cloned().expect("no list call recorded")
    }

    fn injected_failure(&self) -> Option<Error> {
        if self.transport_error.load(Ordering::SeqCst) {
            return Some(Error::Io(std::io::Error::new(
                ErrorKind::ConnectionReset,
                "connection reset",
            )));
        }
        self.rpc_error.lock().unwrap().clone().map(Error::Rpc)
    }

    fn matches(vendor: &Vendor, search: &str, status: Option<ApprovalStatus>) -> bool {
        if let Some(status) = status {
            if vendor.approval_status != status {
                return false;
            }
        }
        if search.is_empty() {
            return true;
        }
        let needle = search.to_ascii_lowercase();
        [&vendor.full_name, &vendor.shop_name, &vendor.contact_number]
            .into_iter()
            .flatten()
            .any(|v| v.to_ascii_lowercase().contains(&needle))
    }
}

#[async_trait]
impl VendorApi for FakeApi {
    async fn list_vendors(
        &self,
        limit: i64,
        offset: i64,
        search: &str,
        status: Option<ApprovalStatus>,
    ) -> Result<Vec<Vendor>> {
        self.list_requests.lock().unwrap().push(ListRequest {
            limit,
            offset,
            search: search.to_string(),
            status,
        });

        let delay = self.list_delays_ms.lock().unwrap().pop_front();
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        if let Some(error) = self.injected_failure() {
            return Err(error);
        }

        let vendors = self.vendors.lock().unwrap();
        Ok(vendors
            .iter()
            .filter(|v| Self::matches(v, search, status))
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn vendor_details(&self, vendor_id: &str) -> Result<Option<Vendor>> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);

        let delay = self.detail_delays_ms.lock().unwrap().pop_front();
        if let Some(ms) = delay {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }

        if let Some(error) = self.injected_failure() {
            return Err(error);
        }

        Ok(self.vendors.lock().unwrap().iter().find(|v| v.id == vendor_id).cloned())
    }

    async fn set_approval(
        &self,
        vendor_id: &str,
        status: ApprovalStatus,
        reject_reason: Option<&str>,
    ) -> Result<()> {
        self.approval_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.injected_failure() {
            return Err(error);
        }

        // Mirror what the backend function does to the row.
        if let Some(vendor) = self.vendors.lock().unwrap().iter_mut().find(|v| v.id == vendor_id) {
            vendor.approval_status = status;
            vendor.reject_reason = reject_reason.map(str::to_string);
        }
        Ok(())
    }
}

pub fn vendor(id: &str, status: ApprovalStatus) -> Vendor {
    Vendor {
        id: id.to_string(),
        full_name: Some(format!("Raj {id}")),
        shop_name: Some(format!("Shop {id}")),
        contact_number: Some("9876543210".to_string()),
        approval_status: status,
        ..Default::default()
    }
}

pub fn vendors(count: usize, status: ApprovalStatus) -> Vec<Vendor> {
    (0..count).map(|i| vendor(&format!("v{i}"), status)).collect()
}
