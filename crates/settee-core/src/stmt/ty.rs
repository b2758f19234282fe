use super::Value;
use crate::{Error, Result};
use serde_json::Value as Json;

/// A field type.
///
/// Documents are schemaless JSON, so each field type carries the coercion
/// applied to the raw member value on the way in (`typecast`) and the
/// encoding applied on the way out (`dump`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    /// Boolean value
    Bool,

    /// Signed 64-bit integer
    I64,

    /// 64-bit float
    F64,

    /// String type
    String,

    /// Structured JSON stored as-is (attachments, embedded objects)
    Json,

    /// The `couchdb_type` discriminator
    Discriminator,
}

impl Type {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "Bool",
            Self::I64 => "I64",
            Self::F64 => "F64",
            Self::String => "String",
            Self::Json => "Json",
            Self::Discriminator => "Discriminator",
        }
    }

    /// Coerces a raw document member into a field value.
    ///
    /// A missing or `null` member is always `Value::Null`.
    pub fn typecast(self, raw: &Json) -> Result<Value> {
        if raw.is_null() {
            return Ok(Value::Null);
        }

        let value = match (self, raw) {
            (Self::Json, raw) => Value::Json(raw.clone()),
            (Self::Bool, Json::Bool(v)) => Value::Bool(*v),
            (Self::Bool, Json::String(v)) if v == "true" => Value::Bool(true),
            (Self::Bool, Json::String(v)) if v == "false" => Value::Bool(false),
            (Self::I64, Json::Number(v)) => match v.as_i64() {
                Some(v) => Value::I64(v),
                None => match v.as_f64() {
                    Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                        Value::I64(f as i64)
                    }
                    _ => return Err(Error::type_conversion(raw, self.name())),
                },
            },
            (Self::I64, Json::String(v)) => match v.trim().parse() {
                Ok(v) => Value::I64(v),
                Err(_) => return Err(Error::type_conversion(raw, self.name())),
            },
            (Self::F64, Json::Number(v)) => match v.as_f64() {
                Some(v) => Value::F64(v),
                None => return Err(Error::type_conversion(raw, self.name())),
            },
            (Self::F64, Json::String(v)) => match v.trim().parse() {
                Ok(v) => Value::F64(v),
                Err(_) => return Err(Error::type_conversion(raw, self.name())),
            },
            (Self::String | Self::Discriminator, Json::String(v)) => Value::String(v.clone()),
            (Self::String, Json::Number(v)) => Value::String(v.to_string()),
            (Self::String, Json::Bool(v)) => Value::String(v.to_string()),
            _ => return Err(Error::type_conversion(raw, self.name())),
        };

        Ok(value)
    }

    /// Encodes a field value as a document member.
    pub fn dump(self, value: &Value) -> Json {
        match (self, value) {
            // Structured fields may be assigned as JSON text.
            (Self::Json, Value::String(text)) => {
                serde_json::from_str(text).unwrap_or_else(|_| Json::String(text.clone()))
            }
            (_, value) => value.to_json(),
        }
    }
}
