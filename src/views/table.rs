use crate::models::{BadgeVariant, Vendor};
use crate::services::list::{ListPage, PAGE_SIZE};

/// Placeholder shown as a single row spanning all columns when a page comes
/// back empty.
pub const EMPTY_PLACEHOLDER: &str = "No vendors found.";

/// One rendered row of the vendor table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub serial: usize,
    pub vendor_id: String,
    pub vendor_name: String,
    pub shop_name: String,
    pub phone: String,
    pub status: String,
    pub badge: BadgeVariant,
}

fn cell(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

fn row(vendor: &Vendor, serial: usize) -> ListRow {
    ListRow {
        serial,
        vendor_id: vendor.id.clone(),
        vendor_name: cell(vendor.full_name.as_deref()),
        shop_name: cell(vendor.shop_name.as_deref()),
        phone: cell(vendor.contact_number.as_deref()),
        status: vendor.approval_status.to_string(),
        badge: vendor.approval_status.badge(),
    }
}

/// Rows with a running 1-based serial that continues across pages.
pub fn rows(page: &ListPage) -> Vec<ListRow> {
    let base = (page.current_page.max(1) as usize - 1) * PAGE_SIZE;
    page.vendors
        .iter()
        .enumerate()
        .map(|(index, vendor)| row(vendor, base + index + 1))
        .collect()
}

/// Pagination controls. Rendered only when a move is actually possible; a
/// lone first page with no next page shows no controls at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationControls {
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
}

pub fn pagination(page: &ListPage) -> Option<PaginationControls> {
    let previous_page = (page.current_page > 1).then(|| page.current_page - 1);
    let next_page = page.has_next_page.then(|| page.current_page + 1);

    if previous_page.is_none() && next_page.is_none() {
        return None;
    }
    Some(PaginationControls { previous_page, next_page })
}
