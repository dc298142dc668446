mod notice;
mod response;
mod vendor;

pub use notice::{Notice, NoticeLevel};
pub use response::{RpcEnvelope, RpcStatus};
pub use vendor::{ApprovalStatus, BadgeVariant, ShopPicture, Vendor};
