mod action;
mod demo;
mod field;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScriptError;

/// Size of the `frame: u16, opcode: u16` prefix every command starts with.
pub const COMMAND_HEADER_SIZE: u32 = 4;

/// Which instruction set a script is written against. Chosen once per
/// document; every command in it is interpreted through the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Action,
    Demo,
    Field,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Action, Flavor::Demo, Flavor::Field];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Demo => "demo",
            Self::Field => "field",
        }
    }

    /// The enumeration tail value. It is one past the last real opcode and
    /// must never be decoded or encoded as a command.
    pub fn sentinel_opcode(&self) -> u16 {
        match self {
            Self::Action => action::SENTINEL,
            Self::Demo => demo::SENTINEL,
            Self::Field => field::SENTINEL,
        }
    }

    /// Number of defined opcodes, `0..opcode_count()`.
    pub fn opcode_count(&self) -> u16 {
        self.sentinel_opcode()
    }

    fn table(&self) -> &'static [OpcodeInfo] {
        match self {
            Self::Action => &action::OPCODES,
            Self::Demo => &demo::OPCODES,
            Self::Field => &field::OPCODES,
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "action" => Ok(Self::Action),
            "demo" => Ok(Self::Demo),
            "field" => Ok(Self::Field),
            other => Err(format!(
                "unknown script flavor {other:?}, expected action, demo or field"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgumentType {
    U16,
    Float32,
    AsciiString,
}

impl ArgumentType {
    /// Bytes the argument occupies inside a command record. Strings are
    /// stored as a 4-byte absolute pointer into the string table.
    pub fn encoded_size(&self) -> u32 {
        match self {
            Self::U16 => 2,
            Self::Float32 | Self::AsciiString => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U16 => "u16",
            Self::Float32 => "f32",
            Self::AsciiString => "string",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an opcode schema. `offset` is relative to the start of the
/// command record, so the first argument usually sits at 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgumentType,
    pub offset: u32,
}

impl ArgSpec {
    pub const fn u16(name: &'static str, offset: u32) -> Self {
        Self {
            name,
            kind: ArgumentType::U16,
            offset,
        }
    }

    pub const fn f32(name: &'static str, offset: u32) -> Self {
        Self {
            name,
            kind: ArgumentType::Float32,
            offset,
        }
    }

    pub const fn string(name: &'static str, offset: u32) -> Self {
        Self {
            name,
            kind: ArgumentType::AsciiString,
            offset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeInfo {
    pub name: &'static str,
    pub args: &'static [ArgSpec],
}

impl OpcodeInfo {
    pub const fn new(name: &'static str, args: &'static [ArgSpec]) -> Self {
        Self { name, args }
    }

    /// Raw record length before alignment padding.
    pub fn unpadded_size(&self) -> u32 {
        COMMAND_HEADER_SIZE + self.args.iter().map(|a| a.kind.encoded_size()).sum::<u32>()
    }
}

/// Look up the argument layout for `opcode`.
///
/// Values outside the table are tolerated and yield `Ok(None)`: such a
/// command decodes with no arguments. The sentinel value is rejected.
pub fn schema(flavor: Flavor, opcode: u16) -> Result<Option<&'static OpcodeInfo>, ScriptError> {
    if opcode == flavor.sentinel_opcode() {
        return Err(ScriptError::SentinelOpcode { flavor, opcode });
    }
    Ok(flavor.table().get(opcode as usize))
}

pub fn opcode_name(flavor: Flavor, opcode: u16) -> Option<&'static str> {
    flavor.table().get(opcode as usize).map(|info| info.name)
}

/// Reverse lookup by instruction name, case-sensitive.
pub fn find_opcode(flavor: Flavor, name: &str) -> Option<u16> {
    flavor
        .table()
        .iter()
        .position(|info| info.name == name)
        .map(|index| index as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_stop_at_their_sentinel() {
        assert_eq!(Flavor::Action.sentinel_opcode(), 73);
        assert_eq!(Flavor::Demo.sentinel_opcode(), 135);
        assert_eq!(Flavor::Field.sentinel_opcode(), 455);
        for flavor in Flavor::ALL {
            assert_eq!(flavor.table().len(), flavor.opcode_count() as usize);
        }
    }

    #[test]
    fn sentinel_is_rejected_and_values_past_it_are_unknown() {
        let err = schema(Flavor::Action, 73).unwrap_err();
        assert!(matches!(err, ScriptError::SentinelOpcode { opcode: 73, .. }));
        assert_eq!(schema(Flavor::Action, 74).unwrap(), None);
        assert_eq!(schema(Flavor::Field, 0xFFFF).unwrap(), None);
    }

    #[test]
    fn argument_offsets_are_packed_after_the_header() {
        for flavor in Flavor::ALL {
            for info in flavor.table() {
                let mut expected = COMMAND_HEADER_SIZE;
                for arg in info.args {
                    assert_eq!(arg.offset, expected, "{flavor} {} {}", info.name, arg.name);
                    expected += arg.kind.encoded_size();
                }
            }
        }
    }

    #[test]
    fn shared_prefix_opcodes_match_across_flavors() {
        for flavor in Flavor::ALL {
            assert_eq!(opcode_name(flavor, 0), Some("Start"));
            assert_eq!(opcode_name(flavor, 4), Some("Jump"));
            assert_eq!(find_opcode(flavor, "Print"), Some(5));
        }
    }

    #[test]
    fn action_animation_layout() {
        let info = schema(Flavor::Action, 12).unwrap().unwrap();
        assert_eq!(info.name, "Animation");
        let layout: Vec<_> = info.args.iter().map(|a| (a.name, a.kind, a.offset)).collect();
        assert_eq!(
            layout,
            vec![
                ("interpolateTime", ArgumentType::Float32, 4),
                ("animationNumber", ArgumentType::U16, 8),
                ("startFrame", ArgumentType::U16, 10),
                ("animationType", ArgumentType::U16, 12),
            ]
        );
        assert_eq!(info.unpadded_size(), 14);
    }

    #[test]
    fn flavor_parses_case_insensitively() {
        assert_eq!("Demo".parse::<Flavor>().unwrap(), Flavor::Demo);
        assert!("cutscene".parse::<Flavor>().is_err());
    }
}
