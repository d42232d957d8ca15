//! Customization selections and their validation against a garment's
//! declared option lists.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The customization map persisted on an order.
///
/// `options` holds selections drawn from the garment's declared lists
/// (e.g. `collar -> "Button Down"`); the remaining fields are free-form and
/// are never validated against the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Customizations {
    /// Option name → chosen value. Must be a subset of the garment's
    /// declared `customization_options`.
    #[serde(default)]
    pub options: BTreeMap<String, String>,
    /// Premium lining selected (surcharged).
    #[serde(default)]
    pub lining: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embroidery: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monogram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

/// A single rejected selection.
#[derive(Debug, Clone, Serialize)]
pub struct OptionViolation {
    pub option: String,
    pub message: String,
}

/// Check every chosen option against the garment's declared
/// `customization_options` map (option name → ordered list of allowed
/// string values, as stored in the catalog JSONB column).
///
/// Returns all violations rather than stopping at the first so the wizard
/// can surface them together.
pub fn check_options(
    chosen: &BTreeMap<String, String>,
    declared: &serde_json::Value,
) -> Vec<OptionViolation> {
    let mut violations = Vec::new();

    for (name, value) in chosen {
        let allowed = declared.get(name).and_then(|v| v.as_array());
        match allowed {
            None => violations.push(OptionViolation {
                option: name.clone(),
                message: format!("Garment has no customization option '{name}'"),
            }),
            Some(values) => {
                let permitted = values.iter().any(|v| v.as_str() == Some(value.as_str()));
                if !permitted {
                    violations.push(OptionViolation {
                        option: name.clone(),
                        message: format!("'{value}' is not an allowed value for '{name}'"),
                    });
                }
            }
        }
    }

    violations
}

/// [`check_options`] folded into a domain error for submission paths.
pub fn validate_options(
    chosen: &BTreeMap<String, String>,
    declared: &serde_json::Value,
) -> Result<(), CoreError> {
    let violations = check_options(chosen, declared);
    if violations.is_empty() {
        return Ok(());
    }
    let combined = violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ");
    Err(CoreError::Validation(combined))
}
