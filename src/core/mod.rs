//! Общие типы и утилиты, независимые от конкретных семейств кодов.

pub mod digits;
pub mod types;

pub use digits::{digit_array, normalize};
pub use types::{BarcodeType, ParseBarcodeTypeError, Symbology, ValidationIssue, ValidationResult};
