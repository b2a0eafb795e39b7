//! Identity OCR Gateway
//!
//! This library provides the core functionality for the ocr-gateway service,
//! which brokers OAuth2 client-credentials tokens and forwards identity OCR
//! verification payloads to the vendor API on behalf of browser clients.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
