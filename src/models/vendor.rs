use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation state of a vendor account. Unrecognised wire values land on
/// `Unknown` so a bad row degrades to a neutral badge instead of failing the
/// whole page's deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Blocked,
    #[serde(other)]
    Unknown,
}

impl ApprovalStatus {
    /// Parses a status token from a query string. Returns `None` for
    /// anything outside the four moderation states, including `all`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            "blocked" => Some(Self::Blocked),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Blocked => "blocked",
            Self::Unknown => "unknown",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            Self::Approved => BadgeVariant::Success,
            Self::Pending => BadgeVariant::Secondary,
            Self::Rejected => BadgeVariant::Destructive,
            Self::Blocked => BadgeVariant::Blocked,
            Self::Unknown => BadgeVariant::Outline,
        }
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual treatment of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Success,
    Secondary,
    Destructive,
    Blocked,
    Outline,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopPicture {
    pub id: String,
    pub image_url: String,
    pub thumbnail_url: String,
    pub vendor_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full vendor record as returned by the backend. The client never
/// originates one of these; every field except identity and moderation state
/// is nullable at the source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Vendor {
    pub id: String,
    pub full_name: Option<String>,
    pub shop_name: Option<String>,
    pub contact_number: Option<String>,
    pub alternate_contact_number: Option<String>,
    pub email: Option<String>,
    pub shop_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub vendor_type: Option<String>,
    pub daily_chicken_supply: Option<i64>,
    pub daily_mutton_supply: Option<i64>,
    pub primary_supply_source: Option<String>,
    pub business_registration_number: Option<String>,
    pub fssai_registration_number: Option<String>,
    pub years_of_experience: Option<i64>,
    pub shop_size: Option<i64>,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub off_days: Option<Vec<String>>,
    pub payment_methods: Option<Vec<String>>,
    pub cold_storage_available: Option<bool>,
    pub home_delivery_available: Option<bool>,
    pub hygiene_certification_available: Option<bool>,
    pub additional_comments: Option<String>,
    pub vendor_signature: Option<String>,
    pub shop_pictures: Option<Vec<ShopPicture>>,
    pub approval_status: ApprovalStatus,
    pub is_available: bool,
    pub reject_reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub sign_up_phase: Option<String>,
    pub fcm_token: Option<String>,
}
