pub mod action;
pub mod binding;
pub mod entry;
pub mod report;
pub mod status;
