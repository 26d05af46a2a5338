use std::io;

use thiserror::Error;

use crate::opcode::Flavor;

/// Coarse classification of [`ScriptError`], for callers that only need to
/// decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Io,
    Format,
    CorruptData,
    InvalidArgument,
    Programmer,
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read script: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    #[error("invalid script format: version 0x{version:08X} does not match 0x{expected:08X}")]
    InvalidFormat { version: u32, expected: u32 },

    #[error("corrupt script data at offset 0x{offset:X}: {context}")]
    CorruptData { offset: u64, context: String },

    #[error("invalid value for argument {name:?}: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("opcode 0x{opcode:04X} is the {flavor} table sentinel, not an instruction")]
    SentinelOpcode { flavor: Flavor, opcode: u16 },

    #[error("command belongs to the {command} table but the script is {script}")]
    FlavorMismatch { script: Flavor, command: Flavor },

    #[error("{what} count would exceed {max}")]
    CountOverflow { what: &'static str, max: usize },

    #[error("no string argument pointer at commands offset 0x{relative_offset:X}")]
    UnresolvedSearchString { relative_offset: u16 },
}

impl ScriptError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::Io,
            Self::InvalidFormat { .. } => ErrorCode::Format,
            Self::CorruptData { .. } => ErrorCode::CorruptData,
            Self::InvalidArgument { .. }
            | Self::FlavorMismatch { .. }
            | Self::CountOverflow { .. }
            | Self::UnresolvedSearchString { .. } => ErrorCode::InvalidArgument,
            Self::SentinelOpcode { .. } => ErrorCode::Programmer,
        }
    }

    pub(crate) fn corrupt(offset: u64, context: impl Into<String>) -> Self {
        Self::CorruptData {
            offset,
            context: context.into(),
        }
    }

    pub(crate) fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
