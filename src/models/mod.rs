pub mod ocr;
pub mod token;
