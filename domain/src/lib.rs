pub mod listing_filter;
pub mod models;
pub mod property_draft;
pub mod search;
