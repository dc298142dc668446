use std::sync::Mutex;

use crate::models::Vendor;

/// Shared holder of the most recently fetched vendor page. The list
/// controller is the only writer; the detail controller reads from it so the
/// common list-to-detail navigation costs no second fetch. The held list is
/// transient and rebuilt on every list load; the backend stays the source of
/// truth.
#[derive(Default)]
pub struct VendorStore {
    vendors: Mutex<Vec<Vendor>>,
}

impl VendorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wholesale replacement, no merge semantics.
    pub fn set_vendors(&self, vendors: Vec<Vendor>) {
        *self.vendors.lock().unwrap() = vendors;
    }

    /// Snapshot of the held list; empty before the first population.
    pub fn vendors(&self) -> Vec<Vendor> {
        self.vendors.lock().unwrap().clone()
    }

    pub fn find(&self, vendor_id: &str) -> Option<Vendor> {
        self.vendors
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == vendor_id)
            .cloned()
    }
}
