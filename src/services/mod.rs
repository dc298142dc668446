pub mod api;
pub mod detail;
pub mod list;

pub use api::{ApiService, VendorApi};
pub use detail::{DetailController, ModerationAction, Resolution};
pub use list::{ListController, ListPage, ListQuery, PAGE_SIZE, StatusFilter};
