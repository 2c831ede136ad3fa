// src/api.rs
//
// Верхнеуровневый API: полная проверка строки и фильтр для потока сканера.
// Всё здесь чистое: без I/O, без состояния, без логов — безопасно вызывать
// на каждый распознанный кадр из любого потока.

use crate::core::{digit_array, normalize, BarcodeType, Symbology, ValidationIssue, ValidationResult};
use crate::one_d::{check_ean8, check_gtin13, detect_barcode_type, format_barcode, CheckDigit};

/// Проверка контрольной цифры для уже подтверждённой символики.
/// `None` — если `clean` не совпал с ней по длине (сюда так не попадаем).
fn check_digit(symbology: Symbology, clean: &str) -> Option<CheckDigit> {
    match symbology {
        Symbology::Isbn13 | Symbology::Jan13 | Symbology::Ean13 => {
            digit_array::<13>(clean).map(|d| check_gtin13(&d))
        }
        Symbology::Ean8 => digit_array::<8>(clean).map(|d| check_ean8(&d)),
    }
}

/// Полная проверка произвольной строки.
///
/// 1. Нормализация (только цифры); пусто → `Empty`.
/// 2. Определение семейства.
/// 3. Длина, затем контрольная цифра. `UNKNOWN` сразу даёт `UnsupportedFormat`,
///    контрольная сумма на коде неверной длины не считается.
/// 4. Форматирование — всегда, даже для невалидного кода.
///
/// Никогда не паникует: все ошибки — в `errors` при `is_valid() == false`.
#[must_use]
pub fn validate(raw: &str) -> ValidationResult {
    let clean = normalize(raw);
    if clean.is_empty() {
        return ValidationResult::empty();
    }

    let kind = detect_barcode_type(&clean);
    let digits = clean.len();
    let mut errors = Vec::new();

    if kind == BarcodeType::Unknown {
        errors.push(ValidationIssue::UnsupportedFormat { digits });
    } else {
        match Symbology::resolve(kind, digits).and_then(|s| Some((s, check_digit(s, &clean)?))) {
            None => errors.push(ValidationIssue::InvalidDigitCount { kind, digits }),
            Some((symbology, cd)) if !cd.is_ok() => {
                errors.push(ValidationIssue::ChecksumMismatch {
                    symbology,
                    expected: cd.expected,
                    found: cd.found,
                });
            }
            Some(_) => {}
        }
    }

    let formatted = format_barcode(&clean, kind);
    ValidationResult::new(kind, clean, formatted, errors)
}

/// Набор допустимых семейств для `extract_from_scanned_text`.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct AcceptedTypes(u8);

impl AcceptedTypes {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b1111);
    /// Книги.
    pub const BOOKS: Self = Self::only(BarcodeType::Isbn);
    /// Продукты: JAN и EAN-13/EAN-8.
    pub const FOOD: Self = Self::only(BarcodeType::Jan).with(BarcodeType::Ean);

    #[inline]
    const fn bit(kind: BarcodeType) -> u8 {
        1 << kind as u8
    }

    #[inline]
    #[must_use]
    pub const fn only(kind: BarcodeType) -> Self {
        Self(Self::bit(kind))
    }

    #[inline]
    #[must_use]
    pub const fn with(self, kind: BarcodeType) -> Self {
        Self(self.0 | Self::bit(kind))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, kind: BarcodeType) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = BarcodeType> {
        BarcodeType::ALL.into_iter().filter(move |&t| self.contains(t))
    }
}

impl std::fmt::Debug for AcceptedTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl From<BarcodeType> for AcceptedTypes {
    fn from(kind: BarcodeType) -> Self {
        Self::only(kind)
    }
}

impl FromIterator<BarcodeType> for AcceptedTypes {
    fn from_iter<I: IntoIterator<Item = BarcodeType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl From<&[BarcodeType]> for AcceptedTypes {
    fn from(kinds: &[BarcodeType]) -> Self {
        kinds.iter().copied().collect()
    }
}

impl<const N: usize> From<[BarcodeType; N]> for AcceptedTypes {
    fn from(kinds: [BarcodeType; N]) -> Self {
        kinds.into_iter().collect()
    }
}

/// Фильтр для потока сканера: результат только если код валиден
/// и его семейство входит в `accepted`. Иначе `None` — сканер остаётся взведённым.
#[must_use]
pub fn extract_from_scanned_text(
    text: &str,
    accepted: impl Into<AcceptedTypes>,
) -> Option<ValidationResult> {
    let accepted = accepted.into();
    let result = validate(text);
    (result.is_valid() && accepted.contains(result.kind())).then_some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_isbn() {
        let r = validate("9784798069371");
        assert!(r.is_valid());
        assert_eq!(r.kind(), BarcodeType::Isbn);
        assert_eq!(r.clean_code(), "9784798069371");
        assert_eq!(r.formatted_code(), "978-4-79806-937-1");
        assert!(r.errors().is_empty());
        assert_eq!(r.symbology(), Some(Symbology::Isbn13));
    }

    #[test]
    fn empty_input() {
        for raw in ["", "abcdefghijk", "ISBN -- ?"] {
            let r = validate(raw);
            assert!(!r.is_valid());
            assert_eq!(r.kind(), BarcodeType::Unknown);
            assert_eq!(r.clean_code(), "");
            assert_eq!(r.formatted_code(), "");
            assert_eq!(r.errors(), &[ValidationIssue::Empty]);
        }
    }

    #[test]
    fn unknown_length_reports_unsupported_format() {
        let r = validate("123456789012");
        assert!(!r.is_valid());
        assert_eq!(r.kind(), BarcodeType::Unknown);
        assert_eq!(r.formatted_code(), "123456789012");
        assert_eq!(r.errors(), &[ValidationIssue::UnsupportedFormat { digits: 12 }]);
    }

    #[test]
    fn checksum_mismatch_keeps_type_and_formatting() {
        let r = validate("4901301234567");
        assert!(!r.is_valid());
        assert_eq!(r.kind(), BarcodeType::Jan);
        assert_eq!(r.formatted_code(), "4-901301-23456-7");
        assert_eq!(
            r.errors(),
            &[ValidationIssue::ChecksumMismatch {
                symbology: Symbology::Jan13,
                expected: 8,
                found: 7
            }]
        );
    }

    #[test]
    fn ean8_checksum_error_names_ean8() {
        let r = validate("87654321");
        assert_eq!(r.kind(), BarcodeType::Ean);
        assert!(matches!(
            r.errors(),
            [ValidationIssue::ChecksumMismatch { symbology: Symbology::Ean8, .. }]
        ));
    }

    #[test]
    fn check_digit_refuses_wrong_length() {
        assert_eq!(check_digit(Symbology::Ean8, "9784798069371"), None);
        assert_eq!(check_digit(Symbology::Isbn13, "12345670"), None);
    }

    #[test]
    fn accepted_types_set_ops() {
        let s = AcceptedTypes::from([BarcodeType::Isbn, BarcodeType::Ean]);
        assert!(s.contains(BarcodeType::Isbn));
        assert!(s.contains(BarcodeType::Ean));
        assert!(!s.contains(BarcodeType::Jan));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![BarcodeType::Isbn, BarcodeType::Ean]);
        assert!(AcceptedTypes::NONE.is_empty());
        assert!(BarcodeType::ALL.iter().all(|&t| AcceptedTypes::ALL.contains(t)));
        assert!(AcceptedTypes::FOOD.contains(BarcodeType::Jan));
        assert!(!AcceptedTypes::FOOD.contains(BarcodeType::Isbn));
        assert_eq!(format!("{:?}", AcceptedTypes::BOOKS), "{Isbn}");
    }

    #[test]
    fn extraction_gates_on_type() {
        assert!(extract_from_scanned_text("4901301234568", BarcodeType::Jan).is_some());
        assert!(extract_from_scanned_text("4901301234568", BarcodeType::Isbn).is_none());
        assert!(extract_from_scanned_text("4901301234568", AcceptedTypes::NONE).is_none());
        let r = extract_from_scanned_text("JAN: 4901301234568", AcceptedTypes::FOOD).unwrap();
        assert_eq!(r.clean_code(), "4901301234568");
    }

    #[test]
    fn extraction_rejects_invalid_even_if_type_accepted() {
        assert!(extract_from_scanned_text("4901301234567", AcceptedTypes::ALL).is_none());
        assert!(extract_from_scanned_text("hello world", AcceptedTypes::ALL).is_none());
    }
}
