//! Контрольные цифры линейных кодов.
//!
//! ISBN-13, JAN и EAN-13 — все из семейства GTIN-13, алгоритм один:
//! веса 1,3,1,3… слева по первым 12 цифрам. У EAN-8 веса инвертированы:
//! 3,1,3,1… по первым 7 цифрам. В обоих случаях `check = (10 - sum % 10) % 10`.
//!
//! Длина проверяется типом: сюда попадают только массивы нужного размера.

/// Контрольная цифра по телу кода и весам для чётных/нечётных позиций (0-based).
#[inline]
fn weighted_check_digit(body: &[u8], even_weight: u32, odd_weight: u32) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { even_weight } else { odd_weight })
        .sum();
    // sum % 10 < 10, результат влезает в u8
    ((10 - sum % 10) % 10) as u8
}

/// Ожидаемая 13-я цифра для первых 12 цифр GTIN-13 (ISBN/JAN/EAN-13).
#[inline]
#[must_use]
pub fn gtin13_check_digit(body: &[u8; 12]) -> u8 {
    weighted_check_digit(body, 1, 3)
}

/// Ожидаемая 8-я цифра для первых 7 цифр EAN-8.
#[inline]
#[must_use]
pub fn ean8_check_digit(body: &[u8; 7]) -> u8 {
    weighted_check_digit(body, 3, 1)
}

/// Пара «ожидали / нашли» для последней цифры кода.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CheckDigit {
    pub expected: u8,
    pub found: u8,
}

impl CheckDigit {
    #[inline]
    #[must_use]
    pub fn is_ok(self) -> bool {
        self.expected == self.found
    }
}

#[must_use]
pub fn check_gtin13(d: &[u8; 13]) -> CheckDigit {
    let mut body = [0u8; 12];
    body.copy_from_slice(&d[..12]);
    CheckDigit {
        expected: gtin13_check_digit(&body),
        found: d[12],
    }
}

#[must_use]
pub fn check_ean8(d: &[u8; 8]) -> CheckDigit {
    let mut body = [0u8; 7];
    body.copy_from_slice(&d[..7]);
    CheckDigit {
        expected: ean8_check_digit(&body),
        found: d[7],
    }
}

/// Достроить код контрольной цифрой: 12 цифр → GTIN-13, 7 цифр → EAN-8.
/// Нецифровые символы игнорируются; для других длин — `None`.
#[must_use]
pub fn append_check_digit(body: &str) -> Option<String> {
    let clean = crate::core::normalize(body);
    let check = match clean.len() {
        12 => gtin13_check_digit(&crate::core::digit_array::<12>(&clean)?),
        7 => ean8_check_digit(&crate::core::digit_array::<7>(&clean)?),
        _ => return None,
    };
    let mut out = clean;
    out.push(char::from(b'0' + check));
    Some(out)
}
