//! Нормализация ввода сканера: остаются только ASCII-цифры.

/// Подпоследовательность ASCII-цифр `0`–`9` из `raw`, порядок сохраняется.
/// Всё остальное (буквы, дефисы, пробелы, пунктуация, эмодзи) отбрасывается.
/// Тотальна: пустой вход или вход без цифр даёт пустую строку.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Цифры строки ровно длины `N` в виде массива значений 0..=9.
/// `None`, если длина другая или встретился не-цифровой символ.
#[must_use]
pub fn digit_array<const N: usize>(clean: &str) -> Option<[u8; N]> {
    let bytes = clean.as_bytes();
    if bytes.len() != N {
        return None;
    }
    let mut out = [0u8; N];
    for (slot, &b) in out.iter_mut().zip(bytes) {
        if !b.is_ascii_digit() {
            return None;
        }
        *slot = b - b'0';
    }
    Some(out)
}
