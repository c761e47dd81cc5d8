use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::model::{KitId, MAX_QUANTITY, MIN_QUANTITY};

/// Rejections raised by the order catalog itself. Nothing is retried; the
/// caller decides how to present them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("delivery date must be in the future (requested {requested}, now {now})")]
    InvalidDeliveryDate {
        requested: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("invalid kit id: {kit_id}")]
    UnknownKit { kit_id: KitId },

    #[error(
        "quantity out of range: {quantity} (must be between {min} and {max})",
        min = MIN_QUANTITY,
        max = MAX_QUANTITY
    )]
    QuantityOutOfRange { quantity: i32 },

    #[error("source data cannot be empty")]
    EmptyImportBatch,

    #[error("duplicate kit id: {kit_id}")]
    DuplicateKitId { kit_id: KitId },

    #[error(
        "base price must be positive and allow an order of {max} kits: kit {kit_id} has {base_price}",
        max = MAX_QUANTITY
    )]
    InvalidBasePrice { kit_id: KitId, base_price: Decimal },
}

#[derive(Error, Debug)]
pub enum KitOrderError {
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KitOrderError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            KitOrderError::ValidationError(_) => ErrorSeverity::Medium,
            KitOrderError::ConfigError { .. }
            | KitOrderError::InvalidConfigValueError { .. }
            | KitOrderError::TomlError(_)
            | KitOrderError::CsvError(_) => ErrorSeverity::High,
            KitOrderError::SerializationError(_) => ErrorSeverity::High,
            KitOrderError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            KitOrderError::ValidationError(ValidationError::InvalidDeliveryDate { .. }) => {
                "Pick a delivery date after the current time"
            }
            KitOrderError::ValidationError(ValidationError::UnknownKit { .. }) => {
                "Import the kit into the catalog before ordering it"
            }
            KitOrderError::ValidationError(ValidationError::QuantityOutOfRange { .. }) => {
                "Order between 1 and 999 kits"
            }
            KitOrderError::ValidationError(ValidationError::EmptyImportBatch) => {
                "Provide at least one kit in the catalog data"
            }
            KitOrderError::ValidationError(ValidationError::DuplicateKitId { .. }) => {
                "Give every kit a unique id, or clear the default catalog first"
            }
            KitOrderError::ValidationError(ValidationError::InvalidBasePrice { .. }) => {
                "Use a base price greater than zero and within currency range"
            }
            KitOrderError::CsvError(_) => {
                "Check that the catalog CSV has a kit_id,variant,base_price header"
            }
            KitOrderError::TomlError(_) => "Check the session file for TOML syntax errors",
            KitOrderError::ConfigError { .. } | KitOrderError::InvalidConfigValueError { .. } => {
                "Fix the reported configuration value and retry"
            }
            KitOrderError::SerializationError(_) => "Retry without --json",
            KitOrderError::IoError(_) => "Make sure the file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, KitOrderError>;
