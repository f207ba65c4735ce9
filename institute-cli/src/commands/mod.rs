//! CLI Commands

pub mod content;
pub mod enquiries;
pub mod items;
