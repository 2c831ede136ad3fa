// src/compat.rs
//! Совместимость со старым ISBN-only API (вызовы времён «только книги»).
//! Всё делегирует общей машинерии из `api` и `one_d`.

use crate::api::{extract_from_scanned_text, validate};
use crate::core::{normalize, BarcodeType};
use crate::one_d::{format_barcode, ISBN_PREFIXES};

/// Валидный код, и это именно ISBN.
#[must_use]
pub fn is_valid_isbn(code: &str) -> bool {
    let r = validate(code);
    r.is_valid() && r.kind() == BarcodeType::Isbn
}

/// Формат ISBN-13 (`978-4-79806-937-1`); другие длины — цифры как есть.
#[must_use]
pub fn format_isbn(code: &str) -> String {
    format_barcode(code, BarcodeType::Isbn)
}

/// Старый строгий префильтр: 13 цифр и префикс 978/979, до всякой контрольной суммы.
/// Совпадает с правилом ISBN в `detect_barcode_type`.
fn is_isbn_shaped(clean: &str) -> bool {
    clean.len() == 13 && ISBN_PREFIXES.iter().any(|p| clean.starts_with(p))
}

/// Чистый ISBN из текста сканера или `None`.
#[must_use]
pub fn extract_isbn_from_scanned_text(text: &str) -> Option<String> {
    if !is_isbn_shaped(&normalize(text)) {
        return None;
    }
    extract_from_scanned_text(text, BarcodeType::Isbn).map(crate::core::ValidationResult::into_clean_code)
}
