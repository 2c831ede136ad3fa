//! Линейные (1D) коды: определение семейства, контрольные цифры, форматирование.

pub mod checksum;
pub mod format;

pub use checksum::{append_check_digit, check_ean8, check_gtin13, CheckDigit};
pub use format::format_barcode;

use crate::core::{normalize, BarcodeType};

/// Префиксы ISBN-13 (Bookland).
pub const ISBN_PREFIXES: [&str; 2] = ["978", "979"];
/// Префиксы японских товаров (JAN).
pub const JAN_PREFIXES: [&str; 2] = ["45", "49"];

#[inline]
fn has_prefix(clean: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|p| clean.starts_with(p))
}

/// Определить семейство по длине и префиксу; первое совпадение выигрывает:
///
/// 1. 13 цифр, `978`/`979` → `ISBN`;
/// 2. 13 цифр, `45`/`49` → `JAN`;
/// 3. 13 цифр, прочее → `EAN`;
/// 4. 8 цифр → `EAN`;
/// 5. иначе → `UNKNOWN`.
///
/// Правило ISBN всегда проверяется раньше JAN. Нецифровые символы игнорируются.
#[must_use]
pub fn detect_barcode_type(code: &str) -> BarcodeType {
    let clean = normalize(code);
    match clean.len() {
        13 if has_prefix(&clean, &ISBN_PREFIXES) => BarcodeType::Isbn,
        13 if has_prefix(&clean, &JAN_PREFIXES) => BarcodeType::Jan,
        13 | 8 => BarcodeType::Ean,
        _ => BarcodeType::Unknown,
    }
}
