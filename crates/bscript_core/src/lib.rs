//! Reading and writing Klonoa `BScript` files: the timed command scripts
//! that drive character actions, cutscenes and field events.

pub mod argument;
pub mod command;
pub mod document;
pub mod error;
pub mod layout;
pub mod opcode;
pub mod options;
pub mod reader;
pub mod string_table;
pub mod writer;

pub use argument::{Argument, ArgumentValue, EditValue};
pub use command::Command;
pub use document::{BodyOffsets, SCRIPT_VERSION, ScriptBody, ScriptDocument, SearchString};
pub use error::{ErrorCode, ScriptError};
pub use layout::ScriptLayout;
pub use opcode::{ArgumentType, Flavor};
pub use options::{CodecOptions, Endian};
