use std::sync::Arc;

use tracing::{debug, error};

use crate::models::{ApprovalStatus, Notice, Vendor};
use crate::services::api::VendorApi;
use crate::services::list::ListQuery;
use crate::store::VendorStore;
use crate::utils::RequestSeq;

/// Staff-initiated transitions of the moderation state machine. Accept is
/// the expected-path action and fires immediately; the other three restrict
/// or accuse a vendor and must not be one click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Accept,
    Reject,
    Block,
    Unblock,
}

impl ModerationAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::Block => "Block",
            Self::Unblock => "Unblock",
        }
    }

    pub fn requires_confirmation(&self) -> bool {
        !matches!(self, Self::Accept)
    }

    pub fn confirmation_prompt(&self) -> Option<&'static str> {
        match self {
            Self::Accept => None,
            Self::Reject => Some(
                "Please provide a reason for rejecting this vendor. \
                 This will be shared with the vendor.",
            ),
            Self::Block => Some(
                "Are you sure you want to block this vendor? This will prevent \
                 the vendor from accessing their account. This action can be \
                 undone later.",
            ),
            Self::Unblock => Some(
                "Are you sure you want to unblock this vendor? This will allow \
                 the vendor to access their account. This action can be undone \
                 later.",
            ),
        }
    }
}

/// Outcome of resolving a vendor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found,
    NotFound,
    /// A newer resolve was issued while this one was in flight; the stale
    /// response was discarded.
    Superseded,
}

/// Resolves one vendor and executes the moderation state machine against it.
/// The shared `RequestSeq` spans navigations, so a detail response that
/// lands after the user has already moved on is dropped.
pub struct DetailController {
    api: Arc<dyn VendorApi>,
    store: Arc<VendorStore>,
    seq: RequestSeq,
    vendor_id: String,
    vendor: Option<Vendor>,
    resolved: bool,
}

impl DetailController {
    pub fn new(
        api: Arc<dyn VendorApi>,
        store: Arc<VendorStore>,
        seq: RequestSeq,
        vendor_id: impl Into<String>,
    ) -> Self {
        Self {
            api,
            store,
            seq,
            vendor_id: vendor_id.into(),
            vendor: None,
            resolved: false,
        }
    }

    pub fn vendor_id(&self) -> &str {
        &self.vendor_id
    }

    pub fn vendor(&self) -> Option<&Vendor> {
        self.vendor.as_ref()
    }

    /// Store hit first (zero network on the list-to-detail path), otherwise
    /// a single detail fetch. A fetch error and a null record are both
    /// NotFound; neither outcome is retried on a later call.
    pub async fn resolve(&mut self) -> Resolution {
        if self.vendor.is_some() {
            return Resolution::Found;
        }
        if self.resolved {
            return Resolution::NotFound;
        }

        if let Some(vendor) = self.store.find(&self.vendor_id) {
            self.vendor = Some(vendor);
            self.resolved = true;
            return Resolution::Found;
        }

        let ticket = self.seq.issue();

        let fetched = match self.api.vendor_details(&self.vendor_id).await {
            Ok(vendor) => vendor,
            Err(e) => {
                error!(
                    error = %e,
                    vendor_id = %self.vendor_id,
                    "Error fetching vendor details"
                );
                None
            }
        };

        if !self.seq.is_current(ticket) {
            debug!(
                vendor_id = %self.vendor_id,
                "Discarding superseded vendor detail response"
            );
            return Resolution::Superseded;
        }

        self.resolved = true;
        match fetched {
            Some(vendor) => {
                self.vendor = Some(vendor);
                Resolution::Found
            }
            None => Resolution::NotFound,
        }
    }

    /// Path back to the list view, carrying the caller's page/search/status
    /// so back navigation restores the filtered context.
    pub fn back_link(query: &ListQuery) -> String {
        let query_string = query.to_query_string();
        if query_string.is_empty() {
            "/vendor-management".to_string()
        } else {
            format!("/vendor-management?{}", query_string)
        }
    }

    /// Legal actions for the vendor's current status.
    pub fn available_actions(&self) -> &'static [ModerationAction] {
        match self.vendor.as_ref().map(|v| v.approval_status) {
            Some(ApprovalStatus::Pending) => {
                &[ModerationAction::Accept, ModerationAction::Reject]
            }
            Some(ApprovalStatus::Approved) => &[ModerationAction::Block],
            Some(ApprovalStatus::Blocked) => &[ModerationAction::Unblock],
            _ => &[],
        }
    }

    pub async fn accept(&mut self) -> Notice {
        self.apply(
            ApprovalStatus::Approved,
            None,
            "Vendor has been approved successfully.",
            "Failed to approve vendor. Please try again.",
        )
        .await
    }

    /// A blank reason never reaches the backend; the warning is raised
    /// locally before any call is made.
    pub async fn reject(&mut self, reason: &str) -> Notice {
        if reason.trim().is_empty() {
            return Notice::warning("Please provide a reason for rejection.");
        }
        self.apply(
            ApprovalStatus::Rejected,
            Some(reason.to_string()),
            "Vendor has been rejected.",
            "Failed to reject vendor. Please try again.",
        )
        .await
    }

    pub async fn block(&mut self) -> Notice {
        self.apply(
            ApprovalStatus::Blocked,
            None,
            "Vendor has been blocked successfully.",
            "Failed to block vendor. Please try again.",
        )
        .await
    }

    pub async fn unblock(&mut self) -> Notice {
        self.apply(
            ApprovalStatus::Approved,
            None,
            "Vendor has been unblocked successfully.",
            "Failed to unblock vendor. Please try again.",
        )
        .await
    }

    /// Every transition goes through the same remote mutation. Failure
    /// leaves local state untouched; success patches only the in-memory
    /// record (status, plus reason when rejecting) and never re-fetches, so
    /// the displayed state is an optimistic reflection of the just-accepted
    /// change.
    async fn apply(
        &mut self,
        target: ApprovalStatus,
        reason: Option<String>,
        success_message: &str,
        failure_fallback: &str,
    ) -> Notice {
        let result = self
            .api
            .set_approval(&self.vendor_id, target, reason.as_deref())
            .await;

        match result {
            Ok(()) => {
                if let Some(vendor) = self.vendor.as_mut() {
                    vendor.approval_status = target;
                    if target == ApprovalStatus::Rejected {
                        vendor.reject_reason = reason;
                    }
                }
                Notice::success(success_message)
            }
            Err(e) => {
                error!(
                    error = %e,
                    vendor_id = %self.vendor_id,
                    target = %target,
                    "Moderation action failed"
                );
                Notice::error(e.user_message(failure_fallback))
            }
        }
    }
}
