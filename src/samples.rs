//! Образцы кодов для ручной проверки и демо (`barcode_samples`).
//!
//! Часть «виртуальных» JAN/EAN в наборе с неверной контрольной цифрой —
//! оставлены как есть, ожидаемая валидность закреплена тестами.

pub const ISBN: &[&str] = &[
    "9784798069371", // Clean Code
    "9784873119038", // リーダブルコード
    "9784797382570", // JavaScript本格入門
    "9784774182209", // Web API: The Good Parts
    "9784873118468", // Effective TypeScript
];

pub const JAN: &[&str] = &[
    "4901301234567", // контрольная должна быть 8
    "4912345678901", // контрольная должна быть 4
    "4567890123456",
    "4901301234568",
];

pub const EAN13: &[&str] = &["5012345678900", "8901234567890", "4006381333931"];

pub const EAN8: &[&str] = &[
    "12345670",
    "87654321", // контрольная должна быть 5
    "96385074",
];

pub const INVALID: &[&str] = &[
    "1234567890123",  // контрольная цифра
    "123456789012",   // 12 цифр
    "12345678901234", // 14 цифр
    "97847973825701", // 14 цифр
    "abcdefghijk",    // нет цифр
];

/// Типичный «шумный» вывод декодера.
pub const SCANNED_TEXTS: &[&str] = &[
    "9784798069371",
    "ISBN 978-4-7981-6957-0",
    "9784798069371 Japan",
    "4901301234567",
    "JAN: 4901301234568",
    "hello world",
];

/// Все наборы с подписью, для отчётов.
pub const ALL_SETS: &[(&str, &[&str])] = &[
    ("ISBN", ISBN),
    ("JAN", JAN),
    ("EAN-13", EAN13),
    ("EAN-8", EAN8),
    ("INVALID", INVALID),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::validate;
    use crate::core::BarcodeType;

    fn valid(code: &str) -> bool {
        validate(code).is_valid()
    }

    #[test]
    fn isbn_samples_are_valid_isbns() {
        for code in ISBN {
            let r = validate(code);
            assert!(r.is_valid(), "{code}");
            assert_eq!(r.kind(), BarcodeType::Isbn);
        }
    }

    #[test]
    fn jan_samples() {
        for code in JAN {
            assert_eq!(validate(code).kind(), BarcodeType::Jan, "{code}");
        }
        assert_eq!(JAN.iter().map(|c| valid(c)).collect::<Vec<_>>(), [false, false, true, true]);
    }

    #[test]
    fn ean_samples() {
        for code in EAN13.iter().chain(EAN8) {
            assert_eq!(validate(code).kind(), BarcodeType::Ean, "{code}");
        }
        assert!(EAN13.iter().all(|c| valid(c)));
        assert_eq!(EAN8.iter().map(|c| valid(c)).collect::<Vec<_>>(), [true, false, true]);
    }

    #[test]
    fn invalid_samples_are_invalid() {
        assert!(INVALID.iter().all(|c| !valid(c)));
    }
}
