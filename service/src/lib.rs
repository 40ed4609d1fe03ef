pub mod error;
pub mod photo_upload;
pub mod pipeline;
pub mod settings_service;
pub mod view_models;
