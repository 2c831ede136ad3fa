//! `use shelfscan::prelude::*;` — всё, что нужно вызывающему коду.

pub use crate::api::{extract_from_scanned_text, validate, AcceptedTypes};
pub use crate::compat::{extract_isbn_from_scanned_text, format_isbn, is_valid_isbn};
pub use crate::core::{normalize, BarcodeType, Symbology, ValidationIssue, ValidationResult};
pub use crate::one_d::{append_check_digit, detect_barcode_type, format_barcode};
pub use crate::scan::{ConfigError, ScanConfig, ScanGate, ScanOutcome};
