pub mod debounce;
pub mod seq;
pub mod time;

pub use debounce::Debouncer;
pub use seq::RequestSeq;
pub use time::{FormattedTime, format_time};
