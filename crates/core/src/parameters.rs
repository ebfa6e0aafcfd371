//! Patient health parameters and the form-field catalog

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::ParameterError;

/// Display metadata for one form field
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
}

/// A titled group of form fields
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FieldSection {
    pub section: &'static str,
    pub fields: &'static [FieldSpec],
}

/// The eleven inputs, grouped the way the form presents them
pub const FIELD_SECTIONS: &[FieldSection] = &[
    FieldSection {
        section: "General Health Parameters",
        fields: &[
            FieldSpec { key: "age", label: "Age", unit: "years" },
            FieldSpec { key: "systolicBP", label: "Systolic Blood Pressure", unit: "mmHg" },
            FieldSpec { key: "diastolicBP", label: "Diastolic Blood Pressure", unit: "mmHg" },
            FieldSpec { key: "glucose", label: "Blood Glucose", unit: "mg/dL" },
            FieldSpec { key: "cholesterol", label: "Total Cholesterol", unit: "mg/dL" },
        ],
    },
    FieldSection {
        section: "Thyroid Function Tests",
        fields: &[
            FieldSpec { key: "tsh", label: "TSH (Thyroid Stimulating Hormone)", unit: "μIU/mL" },
            FieldSpec { key: "t3", label: "T3 (Triiodothyronine)", unit: "ng/dL" },
            FieldSpec { key: "t4", label: "T4 (Thyroxine)", unit: "μg/dL" },
        ],
    },
    FieldSection {
        section: "Liver Function Tests",
        fields: &[
            FieldSpec { key: "alt", label: "ALT (Alanine Aminotransferase)", unit: "U/L" },
            FieldSpec { key: "ast", label: "AST (Aspartate Aminotransferase)", unit: "U/L" },
            FieldSpec { key: "bilirubin", label: "Total Bilirubin", unit: "mg/dL" },
        ],
    },
];

/// Wire names of all fields, in form order
pub const FIELD_KEYS: [&str; 11] = [
    "age",
    "systolicBP",
    "diastolicBP",
    "glucose",
    "cholesterol",
    "tsh",
    "t3",
    "t4",
    "alt",
    "ast",
    "bilirubin",
];

/// Look up the static wire name for a field key
pub fn field_key(name: &str) -> Option<&'static str> {
    FIELD_KEYS.iter().copied().find(|k| *k == name)
}

/// Vitals and lab values for one patient.
///
/// Deserializes from a JSON object whose values may be numbers or numeric
/// strings, since HTML number inputs post their values as text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JsonValue")]
pub struct HealthParameters {
    pub age: f64,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: f64,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: f64,
    pub glucose: f64,
    pub cholesterol: f64,
    pub tsh: f64,
    pub t3: f64,
    pub t4: f64,
    pub alt: f64,
    pub ast: f64,
    pub bilirubin: f64,
}

impl HealthParameters {
    /// Build parameters by resolving each field through `lookup`.
    ///
    /// Fields are checked in form order, so the first missing or invalid one
    /// is reported.
    pub fn from_lookup<'a, F>(mut lookup: F) -> Result<Self, ParameterError>
    where
        F: FnMut(&'static str) -> Option<RawValue<'a>>,
    {
        let mut values = [0.0_f64; 11];
        for (slot, key) in values.iter_mut().zip(FIELD_KEYS) {
            *slot = parse_field(key, lookup(key))?;
        }
        let [age, systolic_bp, diastolic_bp, glucose, cholesterol, tsh, t3, t4, alt, ast, bilirubin] =
            values;

        Ok(Self {
            age,
            systolic_bp,
            diastolic_bp,
            glucose,
            cholesterol,
            tsh,
            t3,
            t4,
            alt,
            ast,
            bilirubin,
        })
    }
}

impl TryFrom<JsonValue> for HealthParameters {
    type Error = ParameterError;

    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        Self::from_lookup(|key| value.get(key).map(RawValue::Json))
    }
}

/// A submitted field value before numeric parsing
#[derive(Debug, Clone, Copy)]
pub enum RawValue<'a> {
    Json(&'a JsonValue),
    Text(&'a str),
}

fn parse_field(key: &'static str, raw: Option<RawValue<'_>>) -> Result<f64, ParameterError> {
    let not_numeric = |value: String| ParameterError::NotNumeric { field: key, value };

    let parsed = match raw {
        None | Some(RawValue::Json(JsonValue::Null)) => return Err(ParameterError::Missing(key)),
        Some(RawValue::Json(JsonValue::Number(n))) => {
            n.as_f64().ok_or_else(|| not_numeric(n.to_string()))?
        }
        Some(RawValue::Json(JsonValue::String(s))) => parse_text(key, s)?,
        Some(RawValue::Text(s)) => parse_text(key, s)?,
        Some(RawValue::Json(other)) => return Err(not_numeric(other.to_string())),
    };

    if !parsed.is_finite() {
        return Err(not_numeric(parsed.to_string()));
    }
    Ok(parsed)
}

fn parse_text(key: &'static str, text: &str) -> Result<f64, ParameterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParameterError::Missing(key));
    }
    trimmed.parse::<f64>().map_err(|_| ParameterError::NotNumeric {
        field: key,
        value: text.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!({
            "age": 45, "systolicBP": 150, "diastolicBP": 95, "glucose": 130,
            "cholesterol": 220, "tsh": 2.5, "t3": 120, "t4": 8,
            "alt": 40, "ast": 38, "bilirubin": 1.1
        })
    }

    #[test]
    fn test_parses_numbers() {
        let params: HealthParameters = serde_json::from_value(sample()).unwrap();
        assert_eq!(params.age, 45.0);
        assert_eq!(params.systolic_bp, 150.0);
        assert_eq!(params.tsh, 2.5);
        assert_eq!(params.bilirubin, 1.1);
    }

    #[test]
    fn test_parses_numeric_strings() {
        let mut body = sample();
        body["glucose"] = json!(" 130.5 ");
        body["age"] = json!("45");
        let params = HealthParameters::try_from(body).unwrap();
        assert_eq!(params.glucose, 130.5);
        assert_eq!(params.age, 45.0);
    }

    #[test]
    fn test_missing_field() {
        let mut body = sample();
        body.as_object_mut().unwrap().remove("t4");
        assert_eq!(
            HealthParameters::try_from(body),
            Err(ParameterError::Missing("t4"))
        );
    }

    #[test]
    fn test_empty_string_is_missing() {
        let mut body = sample();
        body["alt"] = json!("");
        assert_eq!(
            HealthParameters::try_from(body),
            Err(ParameterError::Missing("alt"))
        );
    }

    #[test]
    fn test_rejects_non_numeric() {
        let mut body = sample();
        body["cholesterol"] = json!("high");
        assert!(matches!(
            HealthParameters::try_from(body),
            Err(ParameterError::NotNumeric { field: "cholesterol", .. })
        ));

        let mut body = sample();
        body["ast"] = json!(true);
        assert!(matches!(
            HealthParameters::try_from(body),
            Err(ParameterError::NotNumeric { field: "ast", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let mut body = sample();
        body["tsh"] = json!("NaN");
        assert!(HealthParameters::try_from(body).is_err());
    }

    #[test]
    fn test_serializes_wire_names() {
        let params = HealthParameters::try_from(sample()).unwrap();
        let value = serde_json::to_value(params).unwrap();
        assert_eq!(value["systolicBP"], 150.0);
        assert_eq!(value["diastolicBP"], 95.0);
        assert_eq!(value.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_catalog_covers_every_field() {
        let keys: Vec<&str> = FIELD_SECTIONS
            .iter()
            .flat_map(|s| s.fields.iter().map(|f| f.key))
            .collect();
        assert_eq!(keys, FIELD_KEYS);
    }
}
