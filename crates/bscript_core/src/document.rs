use std::io::{self, Cursor, Read, Seek};

use serde::Serialize;
use tracing::{debug, warn};

use crate::argument::ArgumentValue;
use crate::command::Command;
use crate::error::ScriptError;
use crate::layout::{BODY_HEADER_SIZE, DATA_START, HEADER_SIZE, ScriptLayout, SectionId};
use crate::opcode::Flavor;
use crate::options::CodecOptions;
use crate::reader::ScriptReader;
use crate::string_table::{StringTable, legacy_table_size, read_string_at};
use crate::writer::ScriptWriter;

/// The only version stamp the game accepts.
pub const SCRIPT_VERSION: u32 = 0x2008_0306;

const MAX_COUNT: usize = u16::MAX as usize;

/// Absolute byte offsets of the body regions, as stored in the body header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BodyOffsets {
    pub command_offsets: u32,
    pub commands: u32,
    pub label_indices: u32,
    pub action_label_indices: u32,
    pub strings: u32,
    pub search_strings: u32,
}

/// An entry of the search-string index. `relative_offset` points into the
/// commands region at a string argument's pointer slot; `string_offset` is
/// the pointer found there and `value` the text it leads to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchString {
    pub relative_offset: u16,
    pub string_offset: u32,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptBody {
    flavor: Flavor,
    /// Offsets read from a file. Dropped by the first structural edit, after
    /// which offsets are those `encode` would write.
    stored_offsets: Option<BodyOffsets>,
    label_indices: Vec<u16>,
    action_label_indices: Vec<u16>,
    /// Command starts relative to the commands region, parallel to
    /// `commands`. Negative only for corrupt offsets in a decoded file.
    command_starts: Vec<i64>,
    /// Relative end of the commands region.
    commands_end: i64,
    starts_sorted: bool,
    commands: Vec<Command>,
    search_strings: Vec<SearchString>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptDocument {
    version: u32,
    declared_size: u32,
    data_offset: u32,
    is_valid: bool,
    options: CodecOptions,
    body: ScriptBody,
}

/// Everything `encode` needs, computed once so `calculate_size` and the
/// emitted bytes cannot disagree.
struct EncodePlan {
    layout: ScriptLayout,
    offsets: BodyOffsets,
    command_offsets: Vec<u32>,
    strings: StringTable,
}

impl ScriptDocument {
    pub fn new(body: ScriptBody) -> Self {
        Self::with_options(body, CodecOptions::default())
    }

    pub fn with_options(body: ScriptBody, options: CodecOptions) -> Self {
        Self {
            version: SCRIPT_VERSION,
            declared_size: 0,
            data_offset: HEADER_SIZE,
            is_valid: true,
            options,
            body,
        }
    }

    pub fn decode(bytes: &[u8], flavor: Flavor) -> Result<Self, ScriptError> {
        Self::decode_with_options(bytes, flavor, CodecOptions::default())
    }

    pub fn decode_with_options(
        bytes: &[u8],
        flavor: Flavor,
        options: CodecOptions,
    ) -> Result<Self, ScriptError> {
        let mut r = ScriptReader::new(Cursor::new(bytes), options.endian);
        let file_len = bytes.len() as u64;

        let version = r
            .read_u32()
            .map_err(|_| ScriptError::corrupt(0, "file too short for a version stamp"))?;
        if version != SCRIPT_VERSION {
            return Err(ScriptError::InvalidFormat {
                version,
                expected: SCRIPT_VERSION,
            });
        }

        let header = r
            .read_u32_vec(3)
            .map_err(|_| ScriptError::corrupt(4, "truncated file header"))?;
        let (declared_size, data_offset) = (header[0], header[1]);
        // header[2] is the validity word; the game sets it at runtime, so the
        // stored value carries no meaning.

        let body = ScriptBody::decode(&mut r, flavor, data_offset, file_len)?;
        debug!(
            %flavor,
            declared_size,
            commands = body.commands.len(),
            labels = body.label_indices.len(),
            search_strings = body.search_strings.len(),
            "decoded script"
        );

        Ok(Self {
            version,
            declared_size,
            data_offset,
            is_valid: true,
            options,
            body,
        })
    }

    /// Read the whole of `reader` and decode it.
    pub fn read_from<R: Read>(mut reader: R, flavor: Flavor) -> Result<Self, ScriptError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::decode(&bytes, flavor)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// The total size stored in the header when decoded; 0 for documents
    /// built in memory.
    pub fn declared_size(&self) -> u32 {
        self.declared_size
    }

    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn options(&self) -> CodecOptions {
        self.options
    }

    pub fn flavor(&self) -> Flavor {
        self.body.flavor
    }

    pub fn body(&self) -> &ScriptBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut ScriptBody {
        &mut self.body
    }

    pub fn into_body(self) -> ScriptBody {
        self.body
    }

    pub fn commands(&self) -> &[Command] {
        &self.body.commands
    }

    pub fn search_string_to_command(&self, relative_offset: u32) -> Option<&Command> {
        self.body.search_string_to_command(relative_offset)
    }

    /// Region layout `encode` will produce.
    pub fn layout(&self) -> Result<ScriptLayout, ScriptError> {
        Ok(self.body.plan()?.layout)
    }

    /// Exact length of the encoded file.
    pub fn calculate_size(&self) -> Result<u32, ScriptError> {
        Ok(self.body.plan()?.layout.file_len)
    }

    pub fn encode(&self) -> Result<Vec<u8>, ScriptError> {
        let body = &self.body;
        let plan = body.plan()?;
        plan.layout.validate()?;
        body.check_search_string_sizing(&plan);

        let EncodePlan {
            layout,
            offsets,
            command_offsets,
            mut strings,
        } = plan;
        let mut w = ScriptWriter::with_capacity(layout.file_len as usize, self.options.endian);

        w.write_u32(SCRIPT_VERSION);
        w.write_u32(layout.file_len);
        w.write_u32(HEADER_SIZE);
        w.write_u32(0);

        w.write_u16(body.label_index_count());
        w.write_u16(body.action_label_index_count());
        w.write_u16(body.command_count());
        w.write_u16(body.search_string_count());
        w.write_u32(offsets.command_offsets);
        w.write_u32(offsets.commands);
        w.write_u32(offsets.label_indices);
        w.write_u32(offsets.action_label_indices);
        w.write_u32(offsets.strings);
        w.write_u32(offsets.search_strings);

        for &offset in &command_offsets {
            w.write_u32(offset);
        }
        for command in &body.commands {
            command.encode(&mut w, &mut strings)?;
        }
        for &label in &body.label_indices {
            w.write_u16(label);
        }
        for &label in &body.action_label_indices {
            w.write_u16(label);
        }
        expect_position(&w, offsets.strings, "string table")?;
        w.write_bytes(&strings.into_bytes());
        expect_position(&w, offsets.search_strings, "search-string index")?;
        for search in &body.search_strings {
            w.write_u16(search.relative_offset);
        }

        let out = w.into_inner();
        if out.len() as u32 != layout.file_len {
            return Err(ScriptError::corrupt(
                out.len() as u64,
                format!(
                    "emit length mismatch: got {}, expected {}",
                    out.len(),
                    layout.file_len
                ),
            ));
        }
        debug!(
            flavor = %body.flavor,
            size = out.len(),
            commands = body.commands.len(),
            "encoded script"
        );
        Ok(out)
    }
}

fn expect_position(w: &ScriptWriter, expected: u32, region: &str) -> Result<(), ScriptError> {
    if w.position() as u32 != expected {
        return Err(ScriptError::corrupt(
            w.position() as u64,
            format!("{region} expected at 0x{expected:X}"),
        ));
    }
    Ok(())
}

impl ScriptBody {
    pub fn new(flavor: Flavor) -> Self {
        Self {
            flavor,
            stored_offsets: None,
            label_indices: Vec::new(),
            action_label_indices: Vec::new(),
            command_starts: Vec::new(),
            commands_end: 0,
            starts_sorted: true,
            commands: Vec::new(),
            search_strings: Vec::new(),
        }
    }

    fn decode<R: Read + Seek>(
        r: &mut ScriptReader<R>,
        flavor: Flavor,
        data_offset: u32,
        file_len: u64,
    ) -> Result<Self, ScriptError> {
        let at = u64::from(data_offset);
        check_region(file_len, at, u64::from(BODY_HEADER_SIZE), "body header")?;
        let truncated = |_: io::Error| ScriptError::corrupt(at, "truncated body header");
        r.seek_to(at).map_err(truncated)?;
        let counts = r.read_u16_vec(4).map_err(truncated)?;
        let raw = r.read_u32_vec(6).map_err(truncated)?;
        let offsets = BodyOffsets {
            command_offsets: raw[0],
            commands: raw[1],
            label_indices: raw[2],
            action_label_indices: raw[3],
            strings: raw[4],
            search_strings: raw[5],
        };
        let [label_count, action_label_count, command_count, search_count] =
            [counts[0], counts[1], counts[2], counts[3]].map(usize::from);

        let label_indices = read_u16_region(
            r,
            file_len,
            offsets.label_indices,
            label_count,
            "label indices",
        )?;
        let action_label_indices = read_u16_region(
            r,
            file_len,
            offsets.action_label_indices,
            action_label_count,
            "action label indices",
        )?;

        let relative_offsets = read_u16_region(
            r,
            file_len,
            offsets.search_strings,
            search_count,
            "search-string index",
        )?;
        let mut search_strings = Vec::with_capacity(search_count);
        for relative_offset in relative_offsets {
            let slot = u64::from(offsets.commands) + u64::from(relative_offset);
            check_region(file_len, slot, 4, "search-string pointer")?;
            let string_offset = r
                .seek_to(slot)
                .and_then(|_| r.read_u32())
                .map_err(|_| ScriptError::corrupt(slot, "truncated search-string pointer"))?;
            let value = read_string_at(r, u64::from(string_offset))?;
            search_strings.push(SearchString {
                relative_offset,
                string_offset,
                value,
            });
        }

        check_region(
            file_len,
            u64::from(offsets.command_offsets),
            command_count as u64 * 4,
            "command-offset index",
        )?;
        let command_offsets = r
            .seek_to(u64::from(offsets.command_offsets))
            .and_then(|_| r.read_u32_vec(command_count))
            .map_err(|_| {
                ScriptError::corrupt(
                    u64::from(offsets.command_offsets),
                    "truncated command-offset index",
                )
            })?;
        let mut commands = Vec::with_capacity(command_count);
        for &offset in &command_offsets {
            check_region(file_len, u64::from(offset), 4, "command")?;
            commands.push(Command::decode(r, flavor, u64::from(offset))?);
        }

        let base = i64::from(offsets.commands);
        let command_starts: Vec<i64> = command_offsets
            .iter()
            .map(|&offset| i64::from(offset) - base)
            .collect();
        let starts_sorted = command_starts.windows(2).all(|pair| pair[0] <= pair[1]);

        Ok(Self {
            flavor,
            stored_offsets: Some(offsets),
            label_indices,
            action_label_indices,
            command_starts,
            commands_end: i64::from(offsets.label_indices) - base,
            starts_sorted,
            commands,
            search_strings,
        })
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    /// Region offsets as read from the file, or as `encode` would write them
    /// once the body has been built or structurally edited.
    pub fn offsets(&self) -> BodyOffsets {
        if let Some(offsets) = self.stored_offsets {
            return offsets;
        }
        let mut offsets = self.packed_offsets();
        let mut strings = StringTable::new(offsets.strings);
        for text in self.string_arguments() {
            strings.reserve(text);
        }
        offsets.search_strings = offsets.strings + strings.size();
        offsets
    }

    pub fn label_index_count(&self) -> u16 {
        self.label_indices.len() as u16
    }

    pub fn action_label_index_count(&self) -> u16 {
        self.action_label_indices.len() as u16
    }

    pub fn command_count(&self) -> u16 {
        self.commands.len() as u16
    }

    pub fn search_string_count(&self) -> u16 {
        self.search_strings.len() as u16
    }

    pub fn label_indices(&self) -> &[u16] {
        &self.label_indices
    }

    pub fn label_indices_mut(&mut self) -> &mut [u16] {
        &mut self.label_indices
    }

    pub fn action_label_indices(&self) -> &[u16] {
        &self.action_label_indices
    }

    pub fn action_label_indices_mut(&mut self) -> &mut [u16] {
        &mut self.action_label_indices
    }

    /// Absolute offset of each command, parallel to [`ScriptBody::commands`].
    pub fn command_offsets(&self) -> Vec<u32> {
        let base = i64::from(self.commands_base());
        self.command_starts
            .iter()
            .map(|&start| (base + start) as u32)
            .collect()
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Commands can be edited in place. Their encoded sizes cannot change,
    /// so command offsets stay valid; call [`ScriptBody::refresh_layout`] to
    /// bring search-string values and string offsets up to date.
    pub fn commands_mut(&mut self) -> &mut [Command] {
        &mut self.commands
    }

    pub fn search_strings(&self) -> &[SearchString] {
        &self.search_strings
    }

    pub fn push_label_index(&mut self, label: u16) -> Result<(), ScriptError> {
        check_capacity(self.label_indices.len(), "label index")?;
        self.unpin_layout();
        self.label_indices.push(label);
        Ok(())
    }

    pub fn push_action_label_index(&mut self, label: u16) -> Result<(), ScriptError> {
        check_capacity(self.action_label_indices.len(), "action label index")?;
        self.unpin_layout();
        self.action_label_indices.push(label);
        Ok(())
    }

    pub fn push_command(&mut self, command: Command) -> Result<(), ScriptError> {
        if command.flavor() != self.flavor {
            return Err(ScriptError::FlavorMismatch {
                script: self.flavor,
                command: command.flavor(),
            });
        }
        check_capacity(self.commands.len(), "command")?;
        self.unpin_layout();
        self.command_starts.push(self.commands_end);
        self.commands_end += i64::from(command.serialized_size());
        self.commands.push(command);
        Ok(())
    }

    /// Add a search-string entry pointing at the string argument slot that
    /// lies `relative_offset` bytes into the commands region. The entry's
    /// `string_offset` is filled in by [`ScriptBody::refresh_layout`] or by
    /// decoding the encoded file.
    pub fn push_search_string(&mut self, relative_offset: u16) -> Result<(), ScriptError> {
        check_capacity(self.search_strings.len(), "search string")?;
        self.unpin_layout();
        let value = self
            .resolve_search_value(relative_offset)
            .ok_or(ScriptError::UnresolvedSearchString { relative_offset })?
            .to_string();
        self.search_strings.push(SearchString {
            relative_offset,
            string_offset: 0,
            value,
        });
        Ok(())
    }

    /// Lay the body out as `encode` would and bring search-string values and
    /// string offsets up to date with the current commands.
    pub fn refresh_layout(&mut self) -> Result<(), ScriptError> {
        self.stored_offsets = None;
        self.pack_commands();
        let plan = self.plan()?;
        for index in 0..self.search_strings.len() {
            let relative_offset = self.search_strings[index].relative_offset;
            if let Some(value) = self.resolve_search_value(relative_offset) {
                let value = value.to_string();
                let search = &mut self.search_strings[index];
                search.string_offset = plan.strings.offset_of(&value).unwrap_or(0);
                search.value = value;
            }
        }
        Ok(())
    }

    /// The command covering `relative_offset` bytes into the commands
    /// region: the last one starting at or before that byte. `None` when the
    /// target precedes every command or lies at or past the end of the
    /// commands region.
    ///
    /// Older tooling returned nothing for any target past the last command's
    /// start; here that tail belongs to the last command.
    pub fn search_string_to_command(&self, relative_offset: u32) -> Option<&Command> {
        self.command_index_at(relative_offset)
            .map(|index| &self.commands[index])
    }

    /// Forget the offsets read from a file and lay commands out back to
    /// back, as `encode` writes them. Later edits then keep positions exact.
    fn unpin_layout(&mut self) {
        if self.stored_offsets.take().is_some() {
            self.pack_commands();
        }
    }

    fn pack_commands(&mut self) {
        let mut cursor = 0i64;
        for (start, command) in self.command_starts.iter_mut().zip(&self.commands) {
            *start = cursor;
            cursor += i64::from(command.serialized_size());
        }
        self.commands_end = cursor;
        self.starts_sorted = true;
    }

    fn commands_base(&self) -> u32 {
        match self.stored_offsets {
            Some(offsets) => offsets.commands,
            None => DATA_START + self.commands.len() as u32 * 4,
        }
    }

    fn command_index_at(&self, relative_offset: u32) -> Option<usize> {
        let target = i64::from(relative_offset);
        if target >= self.commands_end {
            return None;
        }
        let next = if self.starts_sorted {
            self.command_starts.partition_point(|&start| start <= target)
        } else {
            self.command_starts
                .iter()
                .position(|&start| start > target)
                .unwrap_or(self.command_starts.len())
        };
        next.checked_sub(1)
    }

    fn resolve_search_value(&self, relative_offset: u16) -> Option<&str> {
        let index = self.command_index_at(u32::from(relative_offset))?;
        let within = i64::from(relative_offset) - self.command_starts[index];
        match self.commands[index]
            .argument_at(within as u32)?
            .value()
        {
            ArgumentValue::AsciiString(text) => Some(text.as_str()),
            _ => None,
        }
    }

    fn string_arguments(&self) -> impl Iterator<Item = &str> {
        self.commands
            .iter()
            .flat_map(|command| command.arguments())
            .filter_map(|argument| argument.value().as_str())
    }

    /// Offsets of a back-to-back layout from `DATA_START`. The search-string
    /// offset is left at the string table start.
    fn packed_offsets(&self) -> BodyOffsets {
        let commands = DATA_START + self.commands.len() as u32 * 4;
        let label_indices = commands
            + self
                .commands
                .iter()
                .map(Command::serialized_size)
                .sum::<u32>();
        let action_label_indices = label_indices + self.label_indices.len() as u32 * 2;
        let strings = action_label_indices + self.action_label_indices.len() as u32 * 2;
        BodyOffsets {
            command_offsets: DATA_START,
            commands,
            label_indices,
            action_label_indices,
            strings,
            search_strings: strings,
        }
    }

    fn plan(&self) -> Result<EncodePlan, ScriptError> {
        let mut offsets = self.packed_offsets();

        let mut command_offsets = Vec::with_capacity(self.commands.len());
        let mut cursor = offsets.commands;
        for command in &self.commands {
            command_offsets.push(cursor);
            cursor += command.serialized_size();
        }

        let mut strings = StringTable::new(offsets.strings);
        for text in self.string_arguments() {
            strings.intern(text)?;
        }
        offsets.search_strings = offsets.strings + strings.size();

        let layout = ScriptLayout::from_sizes(&[
            (SectionId::Header, HEADER_SIZE),
            (SectionId::BodyHeader, BODY_HEADER_SIZE),
            (SectionId::CommandOffsets, offsets.commands - offsets.command_offsets),
            (SectionId::Commands, offsets.label_indices - offsets.commands),
            (
                SectionId::LabelIndices,
                offsets.action_label_indices - offsets.label_indices,
            ),
            (
                SectionId::ActionLabelIndices,
                offsets.strings - offsets.action_label_indices,
            ),
            (SectionId::Strings, strings.size()),
            (SectionId::SearchStrings, self.search_strings.len() as u32 * 2),
        ]);

        Ok(EncodePlan {
            layout,
            offsets,
            command_offsets,
            strings,
        })
    }

    /// Older tooling sized the string table from the search-string values
    /// instead of from the command arguments actually written. The two agree
    /// for every shipped script; flag documents where they do not.
    fn check_search_string_sizing(&self, plan: &EncodePlan) {
        let values = self.search_strings.iter().map(|search| {
            self.resolve_search_value(search.relative_offset)
                .unwrap_or(&search.value)
        });
        let legacy = legacy_table_size(values);
        if legacy != plan.strings.size() {
            warn!(
                legacy,
                emitted = plan.strings.size(),
                "string table size from search strings differs from emitted table"
            );
        }
    }
}

fn check_capacity(len: usize, what: &'static str) -> Result<(), ScriptError> {
    if len >= MAX_COUNT {
        return Err(ScriptError::CountOverflow {
            what,
            max: MAX_COUNT,
        });
    }
    Ok(())
}

fn check_region(file_len: u64, start: u64, size: u64, what: &str) -> Result<(), ScriptError> {
    if start + size > file_len {
        return Err(ScriptError::corrupt(
            start,
            format!(
                "{what} ({size} bytes) extends past end of file (length {file_len})"
            ),
        ));
    }
    Ok(())
}

fn read_u16_region<R: Read + Seek>(
    r: &mut ScriptReader<R>,
    file_len: u64,
    offset: u32,
    count: usize,
    what: &str,
) -> Result<Vec<u16>, ScriptError> {
    let start = u64::from(offset);
    check_region(file_len, start, count as u64 * 2, what)?;
    r.seek_to(start)
        .and_then(|_| r.read_u16_vec(count))
        .map_err(|_| ScriptError::corrupt(start, format!("truncated {what}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRINT: u16 = 5;
    const ANIMATION: u16 = 12;

    fn print(frame: u16, message: &str) -> Command {
        let mut command = Command::new(Flavor::Action, frame, PRINT).unwrap();
        command.argument_mut("message").unwrap().assign(message).unwrap();
        command
    }

    fn three_animations() -> ScriptBody {
        let mut body = ScriptBody::new(Flavor::Action);
        for frame in 0..3 {
            body.push_command(Command::new(Flavor::Action, frame, ANIMATION).unwrap())
                .unwrap();
        }
        body
    }

    #[test]
    fn empty_body_is_laid_out_at_data_start() {
        let body = ScriptBody::new(Flavor::Demo);
        let offsets = body.offsets();
        assert_eq!(offsets.command_offsets, DATA_START);
        assert_eq!(offsets.commands, DATA_START);
        assert_eq!(offsets.strings, DATA_START);
        assert_eq!(offsets.search_strings, DATA_START);
    }

    #[test]
    fn search_target_maps_to_covering_command() {
        let body = three_animations();
        // Three 16-byte records after a 12-byte offset table.
        assert_eq!(body.command_offsets(), vec![0x3C, 0x4C, 0x5C]);
        assert_eq!(body.search_string_to_command(0).map(Command::frame), Some(0));
        assert_eq!(body.search_string_to_command(0x15).map(Command::frame), Some(1));
        assert_eq!(body.search_string_to_command(0x2F).map(Command::frame), Some(2));
        assert!(body.search_string_to_command(0x30).is_none());
    }

    #[test]
    fn push_search_string_resolves_string_slot() {
        let mut body = ScriptBody::new(Flavor::Action);
        body.push_command(print(0, "first")).unwrap();
        body.push_command(print(1, "second")).unwrap();
        // Second record starts 8 bytes in; its pointer sits 4 bytes later.
        body.push_search_string(0x0C).unwrap();
        assert_eq!(body.search_strings()[0].value, "second");

        body.refresh_layout().unwrap();
        let search = &body.search_strings()[0];
        assert_eq!(search.value, "second");
        assert_eq!(search.string_offset, body.offsets().strings + 6);

        let err = body.push_search_string(0x0A).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::UnresolvedSearchString { relative_offset: 0x0A }
        ));
    }

    #[test]
    fn refresh_layout_follows_edited_strings() {
        let mut body = ScriptBody::new(Flavor::Action);
        body.push_command(print(0, "old")).unwrap();
        body.push_search_string(4).unwrap();

        body.commands_mut()[0]
            .argument_mut("message")
            .unwrap()
            .assign("new")
            .unwrap();
        body.refresh_layout().unwrap();
        assert_eq!(body.search_strings()[0].value, "new");
    }

    #[test]
    fn commands_must_share_the_body_flavor() {
        let mut body = ScriptBody::new(Flavor::Field);
        let err = body
            .push_command(Command::new(Flavor::Demo, 0, 0).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ScriptError::FlavorMismatch {
                script: Flavor::Field,
                command: Flavor::Demo
            }
        ));
        assert_eq!(body.command_count(), 0);
    }

    #[test]
    fn labels_shift_the_string_table() {
        let mut body = ScriptBody::new(Flavor::Action);
        body.push_command(print(0, "x")).unwrap();
        body.push_label_index(0).unwrap();
        body.push_action_label_index(0).unwrap();
        let offsets = body.offsets();
        assert_eq!(offsets.label_indices, offsets.commands + 8);
        assert_eq!(offsets.action_label_indices, offsets.label_indices + 2);
        assert_eq!(offsets.strings, offsets.action_label_indices + 2);
    }

    #[test]
    fn counts_stop_at_u16_max() {
        let mut body = ScriptBody::new(Flavor::Action);
        let start = Command::new(Flavor::Action, 0, 0).unwrap();
        for _ in 0..MAX_COUNT {
            body.push_command(start.clone()).unwrap();
            body.push_label_index(0).unwrap();
        }
        assert_eq!(body.command_count(), u16::MAX);
        assert_eq!(body.label_index_count(), u16::MAX);

        let err = body.push_command(start).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::CountOverflow {
                what: "command",
                max: MAX_COUNT
            }
        ));
        assert!(matches!(
            body.push_label_index(0).unwrap_err(),
            ScriptError::CountOverflow { what: "label index", .. }
        ));
        assert_eq!(body.commands().len(), MAX_COUNT);

        let offsets = body.offsets();
        assert_eq!(offsets.commands, DATA_START + u16::MAX as u32 * 4);
        assert_eq!(offsets.label_indices, offsets.commands + u16::MAX as u32 * 4);
        assert_eq!(
            body.command_offsets().last().copied(),
            Some(offsets.label_indices - 4)
        );
    }

    #[test]
    fn pushes_after_decode_follow_the_encoded_layout() {
        let mut body = three_animations();
        body.push_command(print(3, "late")).unwrap();
        let bytes = ScriptDocument::new(body).encode().unwrap();

        let mut doc = ScriptDocument::decode(&bytes, Flavor::Action).unwrap();
        doc.body_mut().push_label_index(2).unwrap();
        // Four offsets, three 16-byte animations, then the Print pointer.
        doc.body_mut().push_search_string(0x34).unwrap();
        let expected = doc.body().offsets();

        let reencoded = doc.encode().unwrap();
        let reread = ScriptDocument::decode(&reencoded, Flavor::Action).unwrap();
        assert_eq!(reread.body().offsets(), expected);
        assert_eq!(reread.body().search_strings()[0].value, "late");
        assert_eq!(reread.body().command_offsets(), doc.body().command_offsets());
    }
}
