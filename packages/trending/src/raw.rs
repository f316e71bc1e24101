//! Read-only access to raw provider records.
//!
//! Search providers return loosely typed JSON: a review count may arrive as a
//! number or a numeric string, a price as `19.99` or `"$19.99"`. Every field
//! read during extraction goes through [`FieldAccess`], which answers with an
//! explicit [`Field`] instead of an `Option` so that "not there" and "there
//! but unusable" stay distinguishable.

use serde_json::{Map, Value};

/// Outcome of reading one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<T> {
    /// Present and of the requested type.
    Present(T),
    /// Missing or `null`.
    Absent,
    /// Present but not coercible to the requested type.
    Invalid,
}

impl<T> Field<T> {
    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Field::Invalid)
    }
}

/// A mapping from field name to an optional value of known type.
pub trait FieldAccess {
    /// Whether the field exists with a non-null value.
    fn contains(&self, name: &str) -> bool;

    /// Read a field as text. Scalars are rendered.
    fn text(&self, name: &str) -> Field<String>;

    /// Read a field as a finite decimal. Numeric strings are accepted.
    fn number(&self, name: &str) -> Field<f64>;

    /// Read a field as a whole number. Integral floats and numeric strings are accepted.
    fn integer(&self, name: &str) -> Field<i64>;
}

impl FieldAccess for Map<String, Value> {
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_null())
    }

    fn text(&self, name: &str) -> Field<String> {
        match self.get(name) {
            None | Some(Value::Null) => Field::Absent,
            Some(Value::String(s)) => Field::Present(s.clone()),
            Some(Value::Number(n)) => Field::Present(n.to_string()),
            Some(Value::Bool(b)) => Field::Present(b.to_string()),
            Some(Value::Array(_)) | Some(Value::Object(_)) => Field::Invalid,
        }
    }

    fn number(&self, name: &str) -> Field<f64> {
        match self.get(name) {
            None | Some(Value::Null) => Field::Absent,
            Some(Value::Number(n)) => match n.as_f64() {
                Some(v) if v.is_finite() => Field::Present(v),
                _ => Field::Invalid,
            },
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    return Field::Absent;
                }
                match s.parse::<f64>() {
                    Ok(v) if v.is_finite() => Field::Present(v),
                    _ => Field::Invalid,
                }
            }
            Some(_) => Field::Invalid,
        }
    }

    fn integer(&self, name: &str) -> Field<i64> {
        match self.get(name) {
            None | Some(Value::Null) => Field::Absent,
            Some(Value::Number(n)) => {
                if let Some(v) = n.as_i64() {
                    return Field::Present(v);
                }
                match n.as_f64() {
                    Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                        Field::Present(v as i64)
                    }
                    _ => Field::Invalid,
                }
            }
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    return Field::Absent;
                }
                s.parse::<i64>().map_or(Field::Invalid, Field::Present)
            }
            Some(_) => Field::Invalid,
        }
    }
}
