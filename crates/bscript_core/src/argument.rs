use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;
use crate::opcode::{ArgSpec, ArgumentType};

/// A decoded argument value. String values hold the resolved text, never
/// the pointer they were stored behind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    U16(u16),
    Float32(f32),
    AsciiString(String),
}

impl ArgumentValue {
    pub fn kind(&self) -> ArgumentType {
        match self {
            Self::U16(_) => ArgumentType::U16,
            Self::Float32(_) => ArgumentType::Float32,
            Self::AsciiString(_) => ArgumentType::AsciiString,
        }
    }

    pub fn default_for(kind: ArgumentType) -> Self {
        match kind {
            ArgumentType::U16 => Self::U16(0),
            ArgumentType::Float32 => Self::Float32(0.0),
            ArgumentType::AsciiString => Self::AsciiString(String::new()),
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match *self {
            Self::U16(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Float32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::AsciiString(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U16(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::AsciiString(v) => write!(f, "\"{v}\""),
        }
    }
}

/// A value coming from an editor before it is checked against the
/// argument's type. Deserializes from a bare JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditValue {
    Number(f64),
    Text(String),
}

impl From<i64> for EditValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for EditValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u16> for EditValue {
    fn from(value: u16) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<f64> for EditValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for EditValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for EditValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for EditValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    name: &'static str,
    value: ArgumentValue,
}

impl Argument {
    pub fn new(name: &'static str, value: ArgumentValue) -> Self {
        Self { name, value }
    }

    pub(crate) fn from_spec(spec: &ArgSpec) -> Self {
        Self::new(spec.name, ArgumentValue::default_for(spec.kind))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ArgumentType {
        self.value.kind()
    }

    pub fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// Replace the value with one of the same type. The type of an argument
    /// is fixed by its opcode schema and never changes.
    pub fn set_value(&mut self, value: ArgumentValue) -> Result<(), ScriptError> {
        if value.kind() != self.kind() {
            return Err(ScriptError::invalid_argument(
                self.name,
                format!("expected {}, got {}", self.kind(), value.kind()),
            ));
        }
        if let ArgumentValue::AsciiString(text) = &value {
            check_storable(self.name, text)?;
        }
        self.value = value;
        Ok(())
    }

    /// Convert and store an editor value. Numeric text is accepted for
    /// numeric arguments; a failed assignment leaves the old value in place.
    pub fn assign(&mut self, value: impl Into<EditValue>) -> Result<(), ScriptError> {
        let converted = match (self.kind(), value.into()) {
            (ArgumentType::U16, EditValue::Number(n)) => ArgumentValue::U16(to_u16(self.name, n)?),
            (ArgumentType::U16, EditValue::Text(text)) => {
                let n = text.trim().parse::<i64>().map_err(|_| {
                    ScriptError::invalid_argument(self.name, format!("{text:?} is not an integer"))
                })?;
                ArgumentValue::U16(to_u16(self.name, n as f64)?)
            }
            (ArgumentType::Float32, EditValue::Number(n)) => {
                ArgumentValue::Float32(to_f32(self.name, n)?)
            }
            (ArgumentType::Float32, EditValue::Text(text)) => {
                let n = text.trim().parse::<f32>().map_err(|_| {
                    ScriptError::invalid_argument(self.name, format!("{text:?} is not a number"))
                })?;
                ArgumentValue::Float32(to_f32(self.name, f64::from(n))?)
            }
            (ArgumentType::AsciiString, EditValue::Text(text)) => {
                ArgumentValue::AsciiString(text)
            }
            (ArgumentType::AsciiString, EditValue::Number(_)) => {
                return Err(ScriptError::invalid_argument(
                    self.name,
                    "value must be a string",
                ));
            }
        };
        self.set_value(converted)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

fn to_u16(name: &str, n: f64) -> Result<u16, ScriptError> {
    if n.fract() != 0.0 || !(0.0..=f64::from(u16::MAX)).contains(&n) {
        return Err(ScriptError::invalid_argument(
            name,
            format!("{n} is not an integer between 0 and 65535"),
        ));
    }
    Ok(n as u16)
}

fn to_f32(name: &str, n: f64) -> Result<f32, ScriptError> {
    let narrowed = n as f32;
    if !narrowed.is_finite() {
        return Err(ScriptError::invalid_argument(
            name,
            format!("{n} is not a finite 32-bit float"),
        ));
    }
    Ok(narrowed)
}

/// Strings are stored one byte per character and null-terminated.
fn check_storable(name: &str, text: &str) -> Result<(), ScriptError> {
    if let Some(c) = text.chars().find(|&c| c == '\0' || u32::from(c) > 0xFF) {
        return Err(ScriptError::invalid_argument(
            name,
            format!("character {c:?} cannot be stored in a single-byte string"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn u16_arg() -> Argument {
        Argument::new("label", ArgumentValue::U16(7))
    }

    fn f32_arg() -> Argument {
        Argument::new("interpolateTime", ArgumentValue::Float32(0.5))
    }

    fn string_arg() -> Argument {
        Argument::new("message", ArgumentValue::AsciiString("hi".to_string()))
    }

    #[test]
    fn u16_accepts_its_full_range() {
        let mut arg = u16_arg();
        arg.assign(0).unwrap();
        assert_eq!(arg.value(), &ArgumentValue::U16(0));
        arg.assign(65535).unwrap();
        assert_eq!(arg.value(), &ArgumentValue::U16(65535));
    }

    #[test]
    fn u16_rejects_out_of_range_and_keeps_old_value() {
        let mut arg = u16_arg();
        let err = arg.assign(65536).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(arg.assign(-1).is_err());
        assert!(arg.assign(1.5).is_err());
        assert_eq!(arg.value(), &ArgumentValue::U16(7));
    }

    #[test]
    fn u16_parses_numeric_text() {
        let mut arg = u16_arg();
        arg.assign(" 42 ").unwrap();
        assert_eq!(arg.value().as_u16(), Some(42));
        assert!(arg.assign("forty").is_err());
        assert!(arg.assign("70000").is_err());
    }

    #[test]
    fn float_accepts_numeric_string() {
        let mut arg = f32_arg();
        arg.assign("3.14").unwrap();
        assert_eq!(arg.value(), &ArgumentValue::Float32(3.14));
    }

    #[test]
    fn float_rejects_non_numeric_string() {
        let mut arg = f32_arg();
        assert!(arg.assign("fast").is_err());
        assert!(arg.assign(f64::MAX).is_err());
        assert_eq!(arg.value(), &ArgumentValue::Float32(0.5));
    }

    #[test]
    fn string_rejects_numbers_and_unstorable_text() {
        let mut arg = string_arg();
        assert!(arg.assign(3).is_err());
        assert!(arg.assign("nul\0inside").is_err());
        assert!(arg.assign("snow \u{2603}").is_err());
        arg.assign("caf\u{e9}").unwrap();
        assert_eq!(arg.value().as_str(), Some("caf\u{e9}"));
    }

    #[test]
    fn typed_setter_refuses_type_change() {
        let mut arg = u16_arg();
        let err = arg.set_value(ArgumentValue::Float32(1.0)).unwrap_err();
        assert!(matches!(err, ScriptError::InvalidArgument { .. }));
        assert_eq!(arg.kind(), ArgumentType::U16);
    }

    #[test]
    fn edit_values_deserialize_from_json() {
        let n: EditValue = serde_json::from_str("12").unwrap();
        assert_eq!(n, EditValue::Number(12.0));
        let s: EditValue = serde_json::from_str("\"3.5\"").unwrap();
        assert_eq!(s, EditValue::Text("3.5".to_string()));

        let mut arg = f32_arg();
        arg.assign(s).unwrap();
        assert_eq!(arg.value().as_f32(), Some(3.5));
    }

    #[test]
    fn display_quotes_strings_only() {
        assert_eq!(u16_arg().to_string(), "label: 7");
        assert_eq!(f32_arg().to_string(), "interpolateTime: 0.5");
        assert_eq!(string_arg().to_string(), "message: \"hi\"");
    }
}
