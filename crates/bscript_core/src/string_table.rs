use std::collections::{HashMap, HashSet};
use std::io::{self, Read, Seek};

use crate::error::ScriptError;
use crate::reader::ScriptReader;
use crate::writer::STRING_FILLER;

/// Deduplicated block of null-terminated strings addressed by absolute
/// offset.
///
/// Layout rules, which the game's own tooling produced and which must be
/// reproduced exactly:
///   - a repeated value reuses its first offset and takes no space;
///   - `""` at an odd offset takes 1 byte (its terminator), at an even
///     offset 2 bytes (`00 EE`);
///   - any other string starts on an even offset, with one `EE` filler byte
///     before it when needed, and takes `len + 1` bytes;
///   - the finished table is padded to an even length with `EE`.
#[derive(Debug, Clone)]
pub struct StringTable {
    start: u32,
    running: u32,
    offsets: HashMap<String, u32>,
    bytes: Vec<u8>,
}

impl StringTable {
    pub fn new(start: u32) -> Self {
        Self {
            start,
            running: start,
            offsets: HashMap::new(),
            bytes: Vec::new(),
        }
    }

    /// Return the absolute offset of `value`, appending it if it is new.
    pub fn intern(&mut self, value: &str) -> Result<u32, ScriptError> {
        if let Some(&offset) = self.offsets.get(value) {
            return Ok(offset);
        }

        let encoded = encode_single_byte(value)?;
        let before = self.running;
        let offset = self.place(value, encoded.len() as u32);
        if value.is_empty() {
            self.bytes.push(0x00);
            if before % 2 == 0 {
                self.bytes.push(STRING_FILLER);
            }
        } else {
            if offset != before {
                self.bytes.push(STRING_FILLER);
            }
            self.bytes.extend_from_slice(&encoded);
            self.bytes.push(0x00);
        }
        Ok(offset)
    }

    /// Like [`StringTable::intern`] but only accounts for the space, without
    /// checking that `value` is storable or producing bytes.
    pub fn reserve(&mut self, value: &str) -> u32 {
        match self.offsets.get(value) {
            Some(&offset) => offset,
            None => self.place(value, value.chars().count() as u32),
        }
    }

    fn place(&mut self, value: &str, encoded_len: u32) -> u32 {
        let offset = if value.is_empty() {
            self.running
        } else {
            self.running + self.running % 2
        };
        self.running = if value.is_empty() {
            offset + 2 - offset % 2
        } else {
            offset + encoded_len + 1
        };
        self.offsets.insert(value.to_string(), offset);
        offset
    }

    pub fn offset_of(&self, value: &str) -> Option<u32> {
        self.offsets.get(value).copied()
    }

    /// Number of distinct strings.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Offset one past the last byte, including the final alignment filler.
    pub fn end_offset(&self) -> u32 {
        self.running + self.running % 2
    }

    pub fn size(&self) -> u32 {
        self.end_offset() - self.start
    }

    /// The finished table bytes, padded to an even length.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.running % 2 == 1 {
            self.bytes.push(STRING_FILLER);
        }
        self.bytes
    }
}

/// Read the null-terminated string stored at absolute `offset`.
pub fn read_string_at<R: Read + Seek>(
    reader: &mut ScriptReader<R>,
    offset: u64,
) -> Result<String, ScriptError> {
    let result = reader
        .seek_to(offset)
        .and_then(|_| reader.read_null_terminated_string());
    result.map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => {
            ScriptError::corrupt(offset, "string runs past the end of the buffer")
        }
        _ => ScriptError::corrupt(offset, format!("failed to read string: {e}")),
    })
}

/// Table size as older tooling estimated it from the search-string values.
///
/// This differs from the emitted table: an empty string landing on an odd
/// size only pads to even and is never recorded, so a later repeat counts
/// again, and an empty string at an even size counts 1 byte instead of 2.
pub fn legacy_table_size<'a, I>(values: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    let mut size = 0u32;
    let mut seen = HashSet::new();
    for value in values {
        if seen.contains(value) {
            continue;
        }
        if size % 2 == 1 {
            size += 1;
            if value.is_empty() {
                continue;
            }
        }
        seen.insert(value);
        size += value.chars().count() as u32 + 1;
    }
    size + size % 2
}

fn encode_single_byte(value: &str) -> Result<Vec<u8>, ScriptError> {
    value
        .chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(0) | Err(_) => Err(ScriptError::invalid_argument(
                "string",
                format!("{value:?} cannot be stored as a single-byte string"),
            )),
            Ok(b) => Ok(b),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::options::Endian;

    #[test]
    fn repeated_values_share_one_offset() {
        let mut table = StringTable::new(0x100);
        let a = table.intern("idle").unwrap();
        let b = table.intern("walk").unwrap();
        let again = table.intern("idle").unwrap();
        assert_eq!(a, 0x100);
        assert_eq!(b, 0x106);
        assert_eq!(again, a);
        assert_eq!(table.len(), 2);
        assert_eq!(table.into_bytes(), b"idle\0\xEEwalk\0\xEE".to_vec());
    }

    #[test]
    fn empty_string_at_even_offset_takes_two_bytes() {
        let mut table = StringTable::new(0x40);
        assert_eq!(table.intern("").unwrap(), 0x40);
        assert_eq!(table.intern("ab").unwrap(), 0x42);
        assert_eq!(table.into_bytes(), vec![0x00, 0xEE, b'a', b'b', 0x00, 0xEE]);
    }

    #[test]
    fn empty_string_at_odd_offset_takes_one_byte() {
        let mut table = StringTable::new(0x40);
        assert_eq!(table.intern("abcd").unwrap(), 0x40);
        // "abcd\0" ends on an odd offset.
        assert_eq!(table.intern("").unwrap(), 0x45);
        assert_eq!(table.intern("x").unwrap(), 0x46);
        assert_eq!(table.size(), 8);
        assert_eq!(table.into_bytes(), b"abcd\0\0x\0".to_vec());
    }

    #[test]
    fn filler_precedes_strings_that_would_start_odd() {
        let mut table = StringTable::new(0);
        table.intern("ab").unwrap();
        assert_eq!(table.intern("cd").unwrap(), 4);
        assert_eq!(table.into_bytes(), b"ab\0\xEEcd\0\xEE".to_vec());
    }

    #[test]
    fn parity_flip_keeps_regions_disjoint() {
        for prefix in ["a", "ab"] {
            let mut table = StringTable::new(0x30);
            let p = table.intern(prefix).unwrap();
            let e = table.intern("").unwrap();
            let t = table.intern("tail").unwrap();
            assert!(e >= p + prefix.len() as u32 + 1);
            assert!(t > e);
            let end = table.end_offset();
            let bytes = table.into_bytes();
            assert_eq!(bytes.len() as u32, end - 0x30);
            assert_eq!(bytes[(e - 0x30) as usize], 0x00);
        }
    }

    #[test]
    fn reserved_size_matches_emitted_length() {
        let values = ["", "a", "", "bcd", "a", "ef"];
        let mut reserved = StringTable::new(0x50);
        let mut table = StringTable::new(0x50);
        for v in values {
            assert_eq!(reserved.reserve(v), table.intern(v).unwrap());
        }
        assert_eq!(reserved.size(), table.size());
        assert_eq!(table.into_bytes().len() as u32, reserved.size());
    }

    #[test]
    fn legacy_size_recounts_unrecorded_empty_strings() {
        assert_eq!(legacy_table_size(["ab", "", "c", ""]), 8);
        assert_eq!(legacy_table_size(["ab", "ab", "cd"]), 8);
        assert_eq!(legacy_table_size(["", ""]), 2);
        assert_eq!(legacy_table_size(Vec::<&str>::new()), 0);

        let mut table = StringTable::new(0);
        for v in ["ab", "", "c", ""] {
            table.intern(v).unwrap();
        }
        assert_eq!(table.size(), 6);
    }

    #[test]
    fn rejects_characters_outside_one_byte() {
        let mut table = StringTable::new(0);
        assert!(table.intern("\u{3042}").is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn reads_string_at_offset() {
        let bytes = b"\xEEhello\0world\0";
        let mut r = ScriptReader::new(Cursor::new(&bytes[..]), Endian::Little);
        assert_eq!(read_string_at(&mut r, 7).unwrap(), "world");
        assert_eq!(read_string_at(&mut r, 6).unwrap(), "");
    }

    #[test]
    fn unterminated_string_is_corrupt_data() {
        let mut r = ScriptReader::new(Cursor::new(&b"abc"[..]), Endian::Little);
        let err = read_string_at(&mut r, 1).unwrap_err();
        assert!(matches!(err, ScriptError::CorruptData { offset: 1, .. }));
    }
}
