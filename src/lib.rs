pub mod app;
pub mod domain;
pub mod error;
pub mod fetch;
pub mod layout;
pub mod manifest;
pub mod rename;
