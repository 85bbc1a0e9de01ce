//! Core library modules.
//!
//! - **Domain**: the task record and its form decoding ([`task`])
//! - **Presentation**: template rendering ([`view`])
//! - **Errors**: the handler error taxonomy and its HTTP mapping ([`error`])
//! - **Infrastructure**: configuration, data directory, messages, logging

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
