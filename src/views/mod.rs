pub mod dashboard;
pub mod table;
pub mod tabs;
