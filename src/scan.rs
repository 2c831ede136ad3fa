//! Шлюз между декодером камеры и UI.
//!
//! Декодер присылает текст на каждый распознанный кадр. Шлюз:
//! - пропускает события не чаще `scan_delay_ms`;
//! - отдаёт `Accepted` только для валидного кода допустимого семейства;
//! - после первого `Accepted` выключается, если не включён `continuous_scan`.
//!
//! Чистое ядро (`api`) не логирует; логи проверки живут здесь.

use std::path::Path;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{validate, AcceptedTypes};
use crate::core::{BarcodeType, ValidationResult};

/// Верхняя граница `scan_delay_ms`: дольше минуты — почти наверняка опечатка.
pub const MAX_SCAN_DELAY_MS: u64 = 60_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scan config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scan config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn default_scan_delay_ms() -> u64 {
    100
}

fn default_accepted_types() -> Vec<BarcodeType> {
    vec![BarcodeType::Isbn]
}

/// Настройки шлюза сканера.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Минимальный интервал между обработанными событиями декодера.
    #[serde(default = "default_scan_delay_ms")]
    pub scan_delay_ms: u64,
    /// Оставаться взведённым после успешного считывания.
    #[serde(default)]
    pub continuous_scan: bool,
    #[serde(default = "default_accepted_types")]
    pub accepted_types: Vec<BarcodeType>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            scan_delay_ms: default_scan_delay_ms(),
            continuous_scan: false,
            accepted_types: default_accepted_types(),
        }
    }
}

impl ScanConfig {
    /// Продуктовый сканер: JAN и EAN.
    #[must_use]
    pub fn food() -> Self {
        Self {
            accepted_types: vec![BarcodeType::Jan, BarcodeType::Ean],
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// `Parse` при битом TOML, `InvalidValue` при недопустимых значениях.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// `Io`, если файл не читается; иначе как у [`ScanConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// # Errors
    ///
    /// `InvalidValue` для пустого `accepted_types` или слишком большого `scan_delay_ms`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan_delay_ms > MAX_SCAN_DELAY_MS {
            return Err(ConfigError::InvalidValue {
                field: "scan_delay_ms",
                reason: format!("{} exceeds {MAX_SCAN_DELAY_MS}", self.scan_delay_ms),
            });
        }
        if self.accepted_types.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "accepted_types",
                reason: "at least one barcode type is required".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    #[must_use]
    pub fn accepted(&self) -> AcceptedTypes {
        self.accepted_types.iter().copied().collect()
    }
}

/// Итог одного события декодера.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Шлюз выключен, событие проигнорировано.
    Disarmed,
    /// Слишком рано после предыдущего обработанного события.
    Throttled,
    /// Проверено, но не принято; сканер остаётся взведённым.
    Rejected(ValidationResult),
    Accepted(ValidationResult),
}

impl ScanOutcome {
    #[must_use]
    pub fn accepted(self) -> Option<ValidationResult> {
        match self {
            Self::Accepted(r) => Some(r),
            _ => None,
        }
    }
}

/// Состояние одной сессии сканирования. Ядро памяти не имеет,
/// поэтому подавление повторов одного и того же кадра — здесь.
#[derive(Debug, Clone)]
pub struct ScanGate {
    scan_delay: Duration,
    continuous: bool,
    accepted: AcceptedTypes,
    armed: bool,
    last_event: Option<Instant>,
}

impl ScanGate {
    #[must_use]
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            scan_delay: config.scan_delay(),
            continuous: config.continuous_scan,
            accepted: config.accepted(),
            armed: true,
            last_event: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    #[inline]
    #[must_use]
    pub fn accepted_types(&self) -> AcceptedTypes {
        self.accepted
    }

    pub fn offer(&mut self, text: &str) -> ScanOutcome {
        self.offer_at(text, Instant::now())
    }

    /// Как [`ScanGate::offer`], но с явным моментом события.
    pub fn offer_at(&mut self, text: &str, now: Instant) -> ScanOutcome {
        if !self.armed {
            return ScanOutcome::Disarmed;
        }
        if let Some(last) = self.last_event {
            if now.saturating_duration_since(last) < self.scan_delay {
                debug!(text, "barcode_throttled");
                return ScanOutcome::Throttled;
            }
        }
        self.last_event = Some(now);

        let result = validate(text);
        if !result.is_valid() {
            debug!(text, errors = ?result.error_messages(), "barcode_rejected");
            return ScanOutcome::Rejected(result);
        }
        if !self.accepted.contains(result.kind()) {
            debug!(
                code = result.clean_code(),
                kind = %result.kind(),
                accepted = ?self.accepted,
                "barcode_type_not_accepted"
            );
            return ScanOutcome::Rejected(result);
        }

        info!(
            code = result.clean_code(),
            kind = %result.kind(),
            formatted = result.formatted_code(),
            "barcode_accepted"
        );
        if !self.continuous {
            self.disarm();
        }
        ScanOutcome::Accepted(result)
    }

    /// Ошибка на стороне декодера (не «ничего не найдено»). Состояние не меняется.
    pub fn report_error(&self, message: &str) {
        warn!(error = message, armed = self.armed, "scanner_error");
    }

    pub fn disarm(&mut self) {
        if self.armed {
            debug!("scan_gate_disarmed");
        }
        self.armed = false;
    }

    pub fn rearm(&mut self) {
        self.armed = true;
        self.last_event = None;
        debug!("scan_gate_rearmed");
    }
}

impl Default for ScanGate {
    fn default() -> Self {
        Self::new(&ScanConfig::default())
    }
}
