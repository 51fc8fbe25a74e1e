//! Owned scalar values crossing the database capability boundary.
//!
//! [`SqlValue`] is used both for bound statement parameters and for result
//! cells. The variants mirror what relational drivers actually hand back for
//! the queries this engine issues: integers, floats, text, and NULL.

/// A single SQL scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Interpret the value as an integer.
    ///
    /// Drivers frequently return numeric columns as text, so `Text` is parsed
    /// rather than rejected. `Null` has no integer interpretation.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            SqlValue::Null => None,
            SqlValue::Int(v) => Some(*v),
            SqlValue::Float(v) => Some(*v as i64),
            SqlValue::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Render the value for use as a mapping key or table name.
    pub fn to_key_string(&self) -> String {
        match self {
            SqlValue::Null => String::new(),
            SqlValue::Int(v) => v.to_string(),
            SqlValue::Float(v) => v.to_string(),
            SqlValue::Text(s) => s.clone(),
        }
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_i64_int() {
        assert_eq!(SqlValue::Int(42).as_i64(), Some(42));
    }

    #[test]
    fn test_as_i64_text() {
        assert_eq!(SqlValue::Text(" 17 ".to_string()).as_i64(), Some(17));
        assert_eq!(SqlValue::Text("abc".to_string()).as_i64(), None);
    }

    #[test]
    fn test_as_i64_null() {
        assert_eq!(SqlValue::Null.as_i64(), None);
        assert!(SqlValue::Null.is_null());
    }

    #[test]
    fn test_as_i64_float_truncates() {
        assert_eq!(SqlValue::Float(3.9).as_i64(), Some(3));
    }

    #[test]
    fn test_key_string() {
        assert_eq!(SqlValue::from("users").to_key_string(), "users");
        assert_eq!(SqlValue::from(7i64).to_key_string(), "7");
        assert_eq!(SqlValue::Null.to_key_string(), "");
    }
}
