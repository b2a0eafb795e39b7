pub mod auth;
pub mod ocr;
