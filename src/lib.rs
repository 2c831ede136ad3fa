#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Публичные модули
pub mod api;     // validate / extract_from_scanned_text
pub mod core;    // общие типы и нормализация
pub mod prelude; // удобные re-export'ы

pub mod one_d;   // семейства 1D: ISBN/JAN/EAN-13/EAN-8
pub mod samples; // образцы кодов для демо и тестов
pub mod scan;    // шлюз для потока сканера (троттлинг, single-shot)

// Старый ISBN-only API
mod compat;
pub use compat::*;

pub use crate::api::{extract_from_scanned_text, validate, AcceptedTypes};
pub use crate::core::{normalize, BarcodeType, Symbology, ValidationIssue, ValidationResult};
pub use crate::one_d::{detect_barcode_type, format_barcode};
pub use crate::scan::{ScanConfig, ScanGate, ScanOutcome};
