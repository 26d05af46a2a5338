use std::fmt;
use std::io::{self, Read, Seek};

use serde::Serialize;
use tracing::trace;

use crate::argument::{Argument, ArgumentValue};
use crate::error::ScriptError;
use crate::opcode::{self, COMMAND_HEADER_SIZE, Flavor};
use crate::reader::ScriptReader;
use crate::string_table::{StringTable, read_string_at};
use crate::writer::{COMMAND_PADDING, ScriptWriter};

/// One timed instruction: `frame`, `opcode`, then the arguments its opcode
/// schema lays out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    flavor: Flavor,
    frame: u16,
    opcode: u16,
    arguments: Vec<Argument>,
}

impl Command {
    /// Build a command with every argument at its zero value. Opcodes the
    /// table does not know get no arguments.
    pub fn new(flavor: Flavor, frame: u16, opcode: u16) -> Result<Self, ScriptError> {
        let arguments = opcode::schema(flavor, opcode)?
            .map(|info| info.args.iter().map(Argument::from_spec).collect())
            .unwrap_or_default();
        Ok(Self {
            flavor,
            frame,
            opcode,
            arguments,
        })
    }

    /// Build a command from its instruction name, e.g. `"Animation"`.
    pub fn from_name(flavor: Flavor, frame: u16, name: &str) -> Result<Self, ScriptError> {
        let opcode = opcode::find_opcode(flavor, name).ok_or_else(|| {
            ScriptError::invalid_argument("opcode", format!("no {flavor} instruction named {name:?}"))
        })?;
        Self::new(flavor, frame, opcode)
    }

    /// Decode the record at absolute `offset`. String arguments are followed
    /// to the string table and stored as text.
    pub fn decode<R: Read + Seek>(
        reader: &mut ScriptReader<R>,
        flavor: Flavor,
        offset: u64,
    ) -> Result<Self, ScriptError> {
        reader
            .seek_to(offset)
            .map_err(|e| ScriptError::corrupt(offset, format!("cannot seek to command: {e}")))?;
        let frame = reader
            .read_u16()
            .map_err(|_| ScriptError::corrupt(offset, "truncated command header"))?;
        let opcode = reader
            .read_u16()
            .map_err(|_| ScriptError::corrupt(offset, "truncated command header"))?;

        let mut arguments = Vec::new();
        if let Some(info) = opcode::schema(flavor, opcode)? {
            arguments.reserve(info.args.len());
            for spec in info.args {
                let at = offset + u64::from(spec.offset);
                let truncated = |_: io::Error| {
                    ScriptError::corrupt(at, format!("truncated argument {:?}", spec.name))
                };
                reader.seek_to(at).map_err(truncated)?;
                let value = match spec.kind {
                    opcode::ArgumentType::U16 => {
                        ArgumentValue::U16(reader.read_u16().map_err(truncated)?)
                    }
                    opcode::ArgumentType::Float32 => {
                        ArgumentValue::Float32(reader.read_f32().map_err(truncated)?)
                    }
                    opcode::ArgumentType::AsciiString => {
                        let pointer = reader.read_u32().map_err(truncated)?;
                        ArgumentValue::AsciiString(read_string_at(reader, u64::from(pointer))?)
                    }
                };
                arguments.push(Argument::new(spec.name, value));
            }
        }

        let command = Self {
            flavor,
            frame,
            opcode,
            arguments,
        };
        trace!(offset, %command, "decoded command");
        Ok(command)
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn frame(&self) -> u16 {
        self.frame
    }

    pub fn set_frame(&mut self, frame: u16) {
        self.frame = frame;
    }

    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    /// Instruction name, or `None` when the opcode is outside the table.
    pub fn name(&self) -> Option<&'static str> {
        opcode::opcode_name(self.flavor, self.opcode)
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Arguments can be edited in place but never added or removed; their
    /// number and types are fixed by the opcode.
    pub fn arguments_mut(&mut self) -> &mut [Argument] {
        &mut self.arguments
    }

    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.name() == name)
    }

    pub fn argument_mut(&mut self, name: &str) -> Option<&mut Argument> {
        self.arguments.iter_mut().find(|a| a.name() == name)
    }

    /// Encoded record length: header plus arguments, rounded up to 4 bytes.
    pub fn serialized_size(&self) -> u32 {
        let raw = self.unpadded_size();
        if raw % 4 != 0 { raw + 2 } else { raw }
    }

    fn unpadded_size(&self) -> u32 {
        COMMAND_HEADER_SIZE
            + self
                .arguments
                .iter()
                .map(|a| a.kind().encoded_size())
                .sum::<u32>()
    }

    /// The argument whose encoded value starts `relative` bytes into this
    /// record.
    pub fn argument_at(&self, relative: u32) -> Option<&Argument> {
        let mut at = COMMAND_HEADER_SIZE;
        for argument in &self.arguments {
            if at == relative {
                return Some(argument);
            }
            at += argument.kind().encoded_size();
        }
        None
    }

    pub(crate) fn encode(
        &self,
        w: &mut ScriptWriter,
        strings: &mut StringTable,
    ) -> Result<(), ScriptError> {
        if self.opcode == self.flavor.sentinel_opcode() {
            return Err(ScriptError::SentinelOpcode {
                flavor: self.flavor,
                opcode: self.opcode,
            });
        }

        w.write_u16(self.frame);
        w.write_u16(self.opcode);
        for argument in &self.arguments {
            match argument.value() {
                ArgumentValue::U16(v) => w.write_u16(*v),
                ArgumentValue::Float32(v) => w.write_f32(*v),
                ArgumentValue::AsciiString(text) => w.write_u32(strings.intern(text)?),
            }
        }
        if self.unpadded_size() % 4 != 0 {
            w.write_u16(COMMAND_PADDING);
        }
        Ok(())
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(name) = self.name() else {
            return write!(f, "Unknown(0x{:04X})", self.opcode);
        };
        write!(f, "{name}(")?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::options::Endian;

    const JUMP: u16 = 4;
    const PRINT: u16 = 5;
    const ANIMATION: u16 = 12;
    const FACIAL_ANIMATION: u16 = 19;

    fn decode_le(bytes: &[u8], flavor: Flavor, offset: u64) -> Result<Command, ScriptError> {
        let mut r = ScriptReader::new(Cursor::new(bytes), Endian::Little);
        Command::decode(&mut r, flavor, offset)
    }

    #[test]
    fn six_byte_record_pads_to_eight() {
        let mut jump = Command::new(Flavor::Action, 3, JUMP).unwrap();
        jump.argument_mut("label").unwrap().assign(9).unwrap();
        assert_eq!(jump.serialized_size(), 8);

        let mut w = ScriptWriter::with_capacity(8, Endian::Little);
        let mut strings = StringTable::new(0);
        jump.encode(&mut w, &mut strings).unwrap();
        assert_eq!(w.into_inner(), vec![3, 0, 4, 0, 9, 0, 0xEE, 0xEE]);
    }

    #[test]
    fn aligned_record_gets_no_filler() {
        let facial = Command::new(Flavor::Action, 0, FACIAL_ANIMATION).unwrap();
        assert_eq!(facial.arguments().len(), 2);
        assert_eq!(facial.serialized_size(), 8);

        let mut w = ScriptWriter::with_capacity(8, Endian::Little);
        facial.encode(&mut w, &mut StringTable::new(0)).unwrap();
        assert_eq!(w.position(), 8);
    }

    #[test]
    fn size_counts_strings_as_pointers() {
        let mut print = Command::new(Flavor::Demo, 0, PRINT).unwrap();
        print
            .argument_mut("message")
            .unwrap()
            .assign("a rather long message")
            .unwrap();
        assert_eq!(print.serialized_size(), 8);
        assert_eq!(Command::new(Flavor::Action, 0, ANIMATION).unwrap().serialized_size(), 16);
        assert_eq!(Command::new(Flavor::Action, 0, 0).unwrap().serialized_size(), 4);
    }

    #[test]
    fn decodes_arguments_and_follows_string_pointers() {
        let mut bytes = vec![0u8; 4];
        bytes.extend_from_slice(&[0x10, 0x00, 0x05, 0x00]);
        bytes.extend_from_slice(&12u32.to_le_bytes());
        bytes.extend_from_slice(b"hey\0");

        let command = decode_le(&bytes, Flavor::Field, 4).unwrap();
        assert_eq!(command.frame(), 0x10);
        assert_eq!(command.name(), Some("Print"));
        assert_eq!(command.arguments().len(), 1);
        assert_eq!(command.arguments()[0].name(), "message");
        assert_eq!(command.arguments()[0].value().as_str(), Some("hey"));
    }

    #[test]
    fn decodes_mixed_argument_types() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0x02, 0x00, 0x0C, 0x00]);
        bytes.extend_from_slice(&0.25f32.to_le_bytes());
        bytes.extend_from_slice(&[7, 0, 30, 0, 1, 0, 0xEE, 0xEE]);

        let command = decode_le(&bytes, Flavor::Action, 0).unwrap();
        assert_eq!(
            command.to_string(),
            "Animation(interpolateTime: 0.25, animationNumber: 7, startFrame: 30, animationType: 1)"
        );
        assert_eq!(command.argument_at(8).map(Argument::name), Some("animationNumber"));
        assert_eq!(command.argument_at(6), None);
    }

    #[test]
    fn unknown_opcode_decodes_without_arguments() {
        let bytes = [0x01, 0x00, 0xF4, 0x01];
        let command = decode_le(&bytes, Flavor::Action, 0).unwrap();
        assert!(command.arguments().is_empty());
        assert_eq!(command.name(), None);
        assert_eq!(command.to_string(), "Unknown(0x01F4)");
    }

    #[test]
    fn sentinel_opcode_is_fatal() {
        let sentinel = Flavor::Demo.sentinel_opcode();
        let mut bytes = vec![0, 0];
        bytes.extend_from_slice(&sentinel.to_le_bytes());
        let err = decode_le(&bytes, Flavor::Demo, 0).unwrap_err();
        assert!(matches!(err, ScriptError::SentinelOpcode { .. }));
        assert!(Command::new(Flavor::Demo, 0, sentinel).is_err());
    }

    #[test]
    fn truncated_argument_is_corrupt() {
        let bytes = [0x00, 0x00, 0x04, 0x00, 0x01];
        let err = decode_le(&bytes, Flavor::Action, 0).unwrap_err();
        assert!(matches!(err, ScriptError::CorruptData { offset: 4, .. }));
    }

    #[test]
    fn from_name_resolves_opcode() {
        let command = Command::from_name(Flavor::Field, 0, "LoopTo").unwrap();
        assert_eq!(command.opcode(), 10);
        assert!(Command::from_name(Flavor::Field, 0, "Teleport").is_err());
    }
}
