// src/core/types.rs
//
// Общие типы результата проверки, независимые от конкретных семейств кодов.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Семейство штрих-кода. Ровно одно значение на одну попытку классификации.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BarcodeType {
    #[serde(alias = "isbn")]
    Isbn,
    #[serde(alias = "jan")]
    Jan,
    #[serde(alias = "ean")]
    Ean,
    #[serde(alias = "unknown")]
    Unknown,
}

impl BarcodeType {
    pub const ALL: [BarcodeType; 4] = [Self::Isbn, Self::Jan, Self::Ean, Self::Unknown];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Isbn => "ISBN",
            Self::Jan => "JAN",
            Self::Ean => "EAN",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for BarcodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Имя типа не распознано.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown barcode type `{0}` (expected ISBN, JAN, EAN or UNKNOWN)")]
pub struct ParseBarcodeTypeError(pub String);

impl FromStr for BarcodeType {
    type Err = ParseBarcodeTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseBarcodeTypeError(name.to_string()))
    }
}

/// Конкретная символика: семейство + длина. Нужна для проверки контрольной
/// цифры и для текста диагностики (EAN-13 и EAN-8 — один `BarcodeType::Ean`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Symbology {
    Isbn13,
    Jan13,
    Ean13,
    Ean8,
}

impl Symbology {
    /// Символика по семейству и числу цифр; `None`, если такой пары не бывает.
    #[must_use]
    pub const fn resolve(kind: BarcodeType, digits: usize) -> Option<Self> {
        match (kind, digits) {
            (BarcodeType::Isbn, 13) => Some(Self::Isbn13),
            (BarcodeType::Jan, 13) => Some(Self::Jan13),
            (BarcodeType::Ean, 13) => Some(Self::Ean13),
            (BarcodeType::Ean, 8) => Some(Self::Ean8),
            _ => None,
        }
    }

    #[must_use]
    pub const fn kind(self) -> BarcodeType {
        match self {
            Self::Isbn13 => BarcodeType::Isbn,
            Self::Jan13 => BarcodeType::Jan,
            Self::Ean13 | Self::Ean8 => BarcodeType::Ean,
        }
    }

    #[must_use]
    pub const fn digit_count(self) -> usize {
        match self {
            Self::Ean8 => 8,
            _ => 13,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Isbn13 => "ISBN",
            Self::Jan13 => "JAN",
            Self::Ean13 => "EAN-13",
            Self::Ean8 => "EAN-8",
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Диагностика проверки. Порядок в результате: сначала проблемы типа,
/// потом контрольная цифра (за один прогон срабатывает только одна).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ValidationIssue {
    /// Во входе нет ни одной цифры.
    #[error("barcode is empty")]
    Empty,
    /// Длина/префикс не подходят ни одному семейству.
    #[error("barcode format not supported ({digits} digits)")]
    UnsupportedFormat { digits: usize },
    /// Семейство угадано, но длина для него невозможна.
    #[error("invalid digit count for {kind}: {digits}")]
    InvalidDigitCount { kind: BarcodeType, digits: usize },
    /// Длина и префикс верные, контрольная цифра — нет.
    #[error("{symbology} check digit is invalid: expected {expected}, found {found}")]
    ChecksumMismatch {
        symbology: Symbology,
        expected: u8,
        found: u8,
    },
}

// Наружу (JSON для UI) диагностика уходит строкой сообщения.
impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Результат одного прохода классификации и проверки.
///
/// Инвариант: `clean_code` — это `formatted_code` без нецифровых символов.
/// Для хранения и сравнения используется только `clean_code`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(rename = "type")]
    kind: BarcodeType,
    clean_code: String,
    formatted_code: String,
    errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub(crate) fn new(
        kind: BarcodeType,
        clean_code: String,
        formatted_code: String,
        errors: Vec<ValidationIssue>,
    ) -> Self {
        Self {
            is_valid: errors.is_empty(),
            kind,
            clean_code,
            formatted_code,
            errors,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new(
            BarcodeType::Unknown,
            String::new(),
            String::new(),
            vec![ValidationIssue::Empty],
        )
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Определённое семейство — независимо от валидности.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> BarcodeType {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn clean_code(&self) -> &str {
        &self.clean_code
    }

    #[inline]
    #[must_use]
    pub fn formatted_code(&self) -> &str {
        &self.formatted_code
    }

    #[inline]
    #[must_use]
    pub fn errors(&self) -> &[ValidationIssue] {
        &self.errors
    }

    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Символика (семейство + длина), если длина подходит семейству.
    #[must_use]
    pub fn symbology(&self) -> Option<Symbology> {
        Symbology::resolve(self.kind, self.clean_code.len())
    }

    #[must_use]
    pub fn into_clean_code(self) -> String {
        self.clean_code
    }
}
