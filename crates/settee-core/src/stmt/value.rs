use serde_json::Value as Json;

#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Arbitrary JSON, used by fields that store structured data
    Json(Json),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for single, non-null values: everything that can name a
    /// document directly.
    pub fn is_scalar(&self) -> bool {
        match self {
            Self::Bool(_) | Self::I64(_) | Self::F64(_) | Self::String(_) => true,
            Self::Json(json) => !(json.is_array() || json.is_object() || json.is_null()),
            Self::Null => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            Self::Json(Json::String(v)) => Some(&**v),
            _ => None,
        }
    }


    /// Encodes the value as JSON. Non-finite floats have no JSON form and
    /// encode as `null`.
    pub fn to_json(&self) -> Json {
        match self {
            Self::Null => Json::Null,
            Self::Bool(v) => Json::Bool(*v),
            Self::I64(v) => Json::from(*v),
            Self::F64(v) => serde_json::Number::from_f64(*v)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Self::String(v) => Json::String(v.clone()),
            Self::Json(v) => v.clone(),
        }
    }

    /// Renders a scalar as a document identifier.
    pub fn to_key_string(&self) -> Option<String> {
        match self {
            Self::String(v) => Some(v.clone()),
            Self::I64(v) => Some(v.to_string()),
            Self::F64(v) => Some(v.to_string()),
            Self::Bool(v) => Some(v.to_string()),
            Self::Json(Json::String(v)) => Some(v.clone()),
            Self::Json(json @ (Json::Number(_) | Json::Bool(_))) => Some(json.to_string()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Json> for Value {
    fn from(src: Json) -> Self {
        Self::Json(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
