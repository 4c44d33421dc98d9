//! Notification layer for delivering status messages to Telegram.
//!
//! This module provides types and traits for:
//! - The JSON POST sent to the Bot API ([`HttpRequest`], [`HttpResponse`])
//! - Abstracting HTTP clients ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Message delivery ([`Notifier`], [`TelegramNotifier`])
//! - How many attempts one message gets ([`DeliveryBudget`])

mod budget;
mod client;
mod error;
mod http;
mod telegram;

#[cfg(test)]
mod budget_tests;
#[cfg(test)]
mod http_tests;

pub use budget::DeliveryBudget;
pub use client::ReqwestClient;
pub use error::{AttemptError, HttpError, NotifyError};
pub use http::{HttpClient, HttpRequest, HttpResponse};
pub use telegram::{Notifier, TelegramNotifier, send_message_url};
