pub mod abstract_trait;
pub mod app;
pub mod config;
pub mod handler;
pub mod service;
pub mod template;
