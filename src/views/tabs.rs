use crate::models::Vendor;
use crate::utils::format_time;

/// The four logical tabs of the vendor detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    VendorInfo,
    SupplyInfo,
    BusinessDetails,
    AdditionalInfo,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::VendorInfo,
        Tab::SupplyInfo,
        Tab::BusinessDetails,
        Tab::AdditionalInfo,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::VendorInfo => "VENDOR INFORMATION",
            Tab::SupplyInfo => "SUPPLY INFORMATION",
            Tab::BusinessDetails => "BUSINESS DETAILS",
            Tab::AdditionalInfo => "ADDITIONAL INFORMATION",
        }
    }
}

/// One labelled value of a detail tab. Absent data always renders a
/// placeholder, never blank space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: &'static str,
    pub value: String,
}

impl Field {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

fn text_or_na(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

fn number_or_na(value: Option<i64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn yes_no(flag: Option<bool>) -> &'static str {
    if flag == Some(true) { "Yes" } else { "No" }
}

fn clock(time: Option<&str>) -> String {
    let formatted = format_time(time);
    if formatted.period.is_empty() {
        formatted.time
    } else {
        format!("{} {}", formatted.time, formatted.period)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Display labels for the enumerated payment-method tokens, in the order the
/// detail view lists them.
const PAYMENT_METHODS: [(&str, &str); 4] = [
    ("credit_card_debit_card", "Debit or Credit Card"),
    ("wallet", "Wallet"),
    ("net_banking", "Net Banking"),
    ("upi", "UPI"),
];

pub fn payment_method_label(token: &str) -> Option<&'static str> {
    PAYMENT_METHODS
        .iter()
        .find(|(key, _)| *key == token)
        .map(|(_, label)| *label)
}

fn payment_methods(vendor: &Vendor) -> String {
    let accepted = vendor.payment_methods.as_deref().unwrap_or_default();
    let labels: Vec<&str> = PAYMENT_METHODS
        .iter()
        .filter(|(key, _)| accepted.iter().any(|m| m == key))
        .map(|(_, label)| *label)
        .collect();

    if labels.is_empty() {
        "N/A".to_string()
    } else {
        labels.join(", ")
    }
}

fn off_days(vendor: &Vendor) -> String {
    match vendor.off_days.as_deref() {
        Some(days) if !days.is_empty() => days
            .iter()
            .map(|d| capitalize(d))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "No off days".to_string(),
    }
}

fn shop_pictures(vendor: &Vendor) -> String {
    match vendor.shop_pictures.as_deref() {
        Some(pictures) if !pictures.is_empty() => pictures
            .iter()
            .map(|p| p.thumbnail_url.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => "No pictures available".to_string(),
    }
}

fn vendor_type(vendor: &Vendor) -> String {
    match vendor.vendor_type.as_deref() {
        Some("both") => "Both Chicken and Mutton".to_string(),
        other => text_or_na(other),
    }
}

fn signature(vendor: &Vendor) -> String {
    match vendor.vendor_signature.as_deref().map(str::trim) {
        Some(sig) if !sig.is_empty() && sig != "{}" => sig.to_string(),
        _ => "No signature available".to_string(),
    }
}

/// Pure projection of a resolved vendor record onto one tab's fields.
pub fn fields(vendor: &Vendor, tab: Tab) -> Vec<Field> {
    match tab {
        Tab::VendorInfo => vec![
            Field::new("Vendor Name", text_or_na(vendor.full_name.as_deref())),
            Field::new("Shop Name", text_or_na(vendor.shop_name.as_deref())),
            Field::new("Shop Address", text_or_na(vendor.shop_address.as_deref())),
            Field::new("City/Town", text_or_na(vendor.city.as_deref())),
            Field::new("State", text_or_na(vendor.state.as_deref())),
            Field::new("Pincode", text_or_na(vendor.postal_code.as_deref())),
            Field::new("Email", text_or_na(vendor.email.as_deref())),
            Field::new("Contact Number", text_or_na(vendor.contact_number.as_deref())),
            Field::new(
                "Alternate Contact Number",
                text_or_na(vendor.alternate_contact_number.as_deref()),
            ),
            Field::new("Shop Pictures", shop_pictures(vendor)),
        ],
        Tab::SupplyInfo => vec![
            Field::new(
                "Daily Chicken Supply (Kilograms)",
                vendor.daily_chicken_supply.unwrap_or(0).to_string(),
            ),
            Field::new(
                "Daily Mutton Supply (Kilograms)",
                vendor.daily_mutton_supply.unwrap_or(0).to_string(),
            ),
            Field::new(
                "Primary Supplier/Source",
                text_or_na(vendor.primary_supply_source.as_deref()),
            ),
            Field::new("Cold Storage Available?", yes_no(vendor.cold_storage_available)),
            Field::new("Home Delivery Service?", yes_no(vendor.home_delivery_available)),
            Field::new("Accepted Payment Methods", payment_methods(vendor)),
        ],
        Tab::BusinessDetails => vec![
            Field::new("Type of Vendor", vendor_type(vendor)),
            Field::new(
                "Business Registration Number",
                text_or_na(vendor.business_registration_number.as_deref()),
            ),
            Field::new(
                "FSSAI License Number",
                text_or_na(vendor.fssai_registration_number.as_deref()),
            ),
            Field::new("Years in Business", number_or_na(vendor.years_of_experience)),
            Field::new("Shop Size (Square Feet)", number_or_na(vendor.shop_size)),
            Field::new("Opening Time", clock(vendor.opening_time.as_deref())),
            Field::new("Closing Time", clock(vendor.closing_time.as_deref())),
            Field::new("Weekly Off Day", off_days(vendor)),
        ],
        Tab::AdditionalInfo => vec![
            Field::new(
                "Hygiene Certification Available?",
                yes_no(vendor.hygiene_certification_available),
            ),
            Field::new(
                "Additional Comments",
                text_or_na(vendor.additional_comments.as_deref()),
            ),
            Field::new("Vendor Signature", signature(vendor)),
        ],
    }
}
