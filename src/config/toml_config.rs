use crate::core::{CustomerId, KitEntry, KitId, KitSource, OrderRequest};
use crate::utils::error::{KitOrderError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_positive_number, Validate};
use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A scripted session: catalog setup followed by a list of orders to place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub orders: Vec<OrderConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Drop the built-in default kit before importing.
    #[serde(default)]
    pub clear_default: bool,
    #[serde(default)]
    pub kits: Vec<KitEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    pub customer_id: CustomerId,
    pub kit_id: KitId,
    pub quantity: i32,
    pub delivery_date: Option<DateTime<Utc>>,
    pub delivery_in_days: Option<i64>,
}

impl OrderConfig {
    /// Resolves a relative delivery date against `now`.
    pub fn to_request(&self, now: DateTime<Utc>) -> Result<OrderRequest> {
        let expected_delivery_date = match (self.delivery_date, self.delivery_in_days) {
            (Some(date), None) => date,
            (None, Some(days)) => Duration::try_days(days)
                .and_then(|offset| now.checked_add_signed(offset))
                .ok_or_else(|| KitOrderError::InvalidConfigValueError {
                    field: "delivery_in_days".to_string(),
                    value: days.to_string(),
                    reason: "Delivery date out of range".to_string(),
                })?,
            _ => {
                return Err(KitOrderError::ConfigError {
                    message: format!(
                        "order for customer {} must set exactly one of delivery_date or delivery_in_days",
                        self.customer_id
                    ),
                })
            }
        };

        Ok(OrderRequest {
            customer_id: self.customer_id,
            expected_delivery_date,
            quantity: self.quantity,
            kit_id: self.kit_id,
        })
    }
}

impl SessionConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the value of the environment variable; unknown
    /// variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KitOrderError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl KitSource for SessionConfig {
    fn load_kits(&self) -> Result<Vec<KitEntry>> {
        Ok(self.catalog.kits.clone())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        for (i, kit) in self.catalog.kits.iter().enumerate() {
            validate_non_empty_string(&format!("catalog.kits[{}].variant", i), &kit.variant)?;
        }

        for (i, order) in self.orders.iter().enumerate() {
            match (order.delivery_date, order.delivery_in_days) {
                (Some(_), None) => {}
                (None, Some(days)) => {
                    validate_positive_number(&format!("orders[{}].delivery_in_days", i), days, 1)?
                }
                _ => {
                    return Err(KitOrderError::InvalidConfigValueError {
                        field: format!("orders[{}]", i),
                        value: format!("customer {}", order.customer_id),
                        reason: "Set exactly one of delivery_date or delivery_in_days".to_string(),
                    })
                }
            }
        }

        Ok(())
    }
}
