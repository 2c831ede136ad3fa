//! Форматирование для показа: разделители по соглашению семейства.
//! Только косметика, ключ хранения/сравнения — всегда `clean_code`.

use crate::core::{normalize, BarcodeType};

const ISBN13_GROUPS: &[usize] = &[3, 1, 5, 3, 1];
const GTIN13_GROUPS: &[usize] = &[1, 6, 5, 1];
const EAN8_GROUPS: &[usize] = &[4, 3, 1];

/// Вставить дефисы между группами. Сумма групп должна равняться длине `clean`.
fn group(clean: &str, sizes: &[usize]) -> String {
    let mut out = String::with_capacity(clean.len() + sizes.len());
    let mut start = 0;
    for (i, &n) in sizes.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push_str(&clean[start..start + n]);
        start += n;
    }
    out
}

/// Отформатировать код для типа `kind`.
///
/// - `ISBN`, 13 цифр: `ddd-d-ddddd-ddd-d`;
/// - `JAN`/`EAN`, 13 цифр: `d-dddddd-ddddd-d`;
/// - `EAN`, 8 цифр: `dddd-ddd-d`;
/// - всё остальное — цифры как есть, без групп.
///
/// Нецифровые символы во входе отбрасываются.
#[must_use]
pub fn format_barcode(code: &str, kind: BarcodeType) -> String {
    let clean = normalize(code);
    let groups = match (kind, clean.len()) {
        (BarcodeType::Isbn, 13) => ISBN13_GROUPS,
        (BarcodeType::Jan | BarcodeType::Ean, 13) => GTIN13_GROUPS,
        (BarcodeType::Ean, 8) => EAN8_GROUPS,
        _ => return clean,
    };
    group(&clean, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_each_layout() {
        assert_eq!(format_barcode("9784798069371", BarcodeType::Isbn), "978-4-79806-937-1");
        assert_eq!(format_barcode("4901301234568", BarcodeType::Jan), "4-901301-23456-8");
        assert_eq!(format_barcode("5012345678900", BarcodeType::Ean), "5-012345-67890-0");
        assert_eq!(format_barcode("12345670", BarcodeType::Ean), "1234-567-0");
    }

    #[test]
    fn unmatched_lengths_stay_ungrouped() {
        assert_eq!(format_barcode("12345670", BarcodeType::Isbn), "12345670");
        assert_eq!(format_barcode("12345670", BarcodeType::Jan), "12345670");
        assert_eq!(format_barcode("123456789012", BarcodeType::Ean), "123456789012");
        assert_eq!(format_barcode("9784798069371", BarcodeType::Unknown), "9784798069371");
        assert_eq!(format_barcode("", BarcodeType::Isbn), "");
    }

    #[test]
    fn reformatting_formatted_input_is_stable() {
        let once = format_barcode("9784798069371", BarcodeType::Isbn);
        assert_eq!(format_barcode(&once, BarcodeType::Isbn), once);
    }

    #[test]
    fn group_sizes_cover_their_lengths() {
        assert_eq!(ISBN13_GROUPS.iter().sum::<usize>(), 13);
        assert_eq!(GTIN13_GROUPS.iter().sum::<usize>(), 13);
        assert_eq!(EAN8_GROUPS.iter().sum::<usize>(), 8);
    }
}
