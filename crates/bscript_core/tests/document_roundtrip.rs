use bscript_core::{
    CodecOptions, Command, ErrorCode, Flavor, SCRIPT_VERSION, ScriptBody, ScriptDocument,
    ScriptError,
};

const JUMP: u16 = 4;
const PRINT: u16 = 5;

fn u16le(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn u32le(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Action script with four commands, one label, two action labels and one
/// search string, laid out by hand:
///
/// 0x30 offsets, 0x40 commands, 0x60 labels, 0x62 action labels,
/// 0x66 strings ("hello", ""), 0x6E search strings, 0x70 end.
fn action_fixture() -> Vec<u8> {
    let mut out = Vec::new();
    u32le(&mut out, SCRIPT_VERSION);
    u32le(&mut out, 0x70);
    u32le(&mut out, 0x10);
    u32le(&mut out, 0);

    for count in [1, 2, 4, 1] {
        u16le(&mut out, count);
    }
    for offset in [0x30, 0x40, 0x60, 0x62, 0x66, 0x6E] {
        u32le(&mut out, offset);
    }

    for offset in [0x40, 0x48, 0x50, 0x58] {
        u32le(&mut out, offset);
    }
    // Print("hello")
    out.extend_from_slice(&[0x00, 0x00, 0x05, 0x00]);
    u32le(&mut out, 0x66);
    // Jump(label: 0), padded
    out.extend_from_slice(&[0x0A, 0x00, 0x04, 0x00, 0x00, 0x00, 0xEE, 0xEE]);
    // Print("")
    out.extend_from_slice(&[0x14, 0x00, 0x05, 0x00]);
    u32le(&mut out, 0x6C);
    // Print("hello") again, sharing the first pointer
    out.extend_from_slice(&[0x1E, 0x00, 0x05, 0x00]);
    u32le(&mut out, 0x66);

    u16le(&mut out, 1);
    u16le(&mut out, 0);
    u16le(&mut out, 2);

    out.extend_from_slice(b"hello\0\0\xEE");
    u16le(&mut out, 4);

    assert_eq!(out.len(), 0x70);
    out
}

fn print(frame: u16, message: &str) -> Command {
    let mut command = Command::new(Flavor::Action, frame, PRINT).expect("Print is defined");
    command
        .argument_mut("message")
        .expect("Print has a message")
        .assign(message)
        .expect("message should be storable");
    command
}

fn string_table_bytes(doc: &ScriptDocument, bytes: &[u8]) -> Vec<u8> {
    let offsets = doc.body().offsets();
    bytes[offsets.strings as usize..offsets.search_strings as usize].to_vec()
}

#[test]
fn action_fixture_roundtrips_byte_for_byte() {
    let bytes = action_fixture();
    let doc = ScriptDocument::decode(&bytes, Flavor::Action).expect("fixture should decode");

    assert_eq!(doc.version(), SCRIPT_VERSION);
    assert_eq!(doc.declared_size(), 0x70);
    assert_eq!(doc.data_offset(), 0x10);
    assert!(doc.is_valid());

    let body = doc.body();
    assert_eq!(body.command_count(), 4);
    assert_eq!(body.label_indices(), &[1]);
    assert_eq!(body.action_label_indices(), &[0, 2]);
    assert_eq!(body.command_offsets(), vec![0x40, 0x48, 0x50, 0x58]);
    assert_eq!(doc.commands()[0].to_string(), "Print(message: \"hello\")");
    assert_eq!(doc.commands()[1].to_string(), "Jump(label: 0)");
    assert_eq!(doc.commands()[2].to_string(), "Print(message: \"\")");

    let search = &body.search_strings()[0];
    assert_eq!(search.relative_offset, 4);
    assert_eq!(search.string_offset, 0x66);
    assert_eq!(search.value, "hello");

    assert_eq!(doc.calculate_size().expect("size"), 0x70);
    let emitted = doc.encode().expect("fixture should encode");
    assert_eq!(emitted, bytes);
}

#[test]
fn layout_matches_encoded_regions() {
    let doc = ScriptDocument::decode(&action_fixture(), Flavor::Action).expect("decode");
    let layout = doc.layout().expect("layout");
    layout.validate().expect("layout should be contiguous");
    assert_eq!(layout.file_len, 0x70);
}

#[test]
fn edited_document_stays_self_consistent() {
    let mut doc = ScriptDocument::decode(&action_fixture(), Flavor::Action).expect("decode");
    doc.body_mut().commands_mut()[2]
        .argument_mut("message")
        .expect("message")
        .assign("a longer line")
        .expect("assign");
    doc.body_mut().commands_mut()[1]
        .argument_mut("label")
        .expect("label")
        .assign("0")
        .expect("numeric text");

    let size = doc.calculate_size().expect("size");
    let emitted = doc.encode().expect("encode");
    assert_eq!(emitted.len() as u32, size);

    let reread = ScriptDocument::decode(&emitted, Flavor::Action).expect("re-decode");
    assert_eq!(reread.commands(), doc.commands());
    assert_eq!(reread.declared_size(), size);
}

#[test]
fn repeated_strings_are_stored_once() {
    let mut body = ScriptBody::new(Flavor::Action);
    for frame in 0..3 {
        body.push_command(print(frame, "same")).expect("push");
    }
    let doc = ScriptDocument::new(body);
    let bytes = doc.encode().expect("encode");

    assert_eq!(string_table_bytes(&doc, &bytes), b"same\0\xEE".to_vec());
    let pointers: Vec<u32> = doc
        .body()
        .command_offsets()
        .iter()
        .map(|&at| {
            let at = at as usize + 4;
            u32::from_le_bytes(bytes[at..at + 4].try_into().expect("4 bytes"))
        })
        .collect();
    assert_eq!(pointers, vec![doc.body().offsets().strings; 3]);
}

#[test]
fn empty_string_width_depends_on_parity() {
    let mut odd = ScriptBody::new(Flavor::Action);
    odd.push_command(print(0, "abcd")).expect("push");
    odd.push_command(print(1, "")).expect("push");
    let odd = ScriptDocument::new(odd);
    let bytes = odd.encode().expect("encode");
    assert_eq!(string_table_bytes(&odd, &bytes), b"abcd\0\0".to_vec());

    let mut even = ScriptBody::new(Flavor::Action);
    even.push_command(print(0, "abc")).expect("push");
    even.push_command(print(1, "")).expect("push");
    let even = ScriptDocument::new(even);
    let bytes = even.encode().expect("encode");
    assert_eq!(string_table_bytes(&even, &bytes), b"abc\0\0\xEE".to_vec());
}

#[test]
fn built_document_encodes_padding_and_counts() {
    let mut body = ScriptBody::new(Flavor::Demo);
    let mut jump = Command::new(Flavor::Demo, 7, JUMP).expect("Jump");
    jump.argument_mut("label").expect("label").assign(3).expect("assign");
    body.push_command(jump).expect("push");
    body.push_label_index(0).expect("label");

    let doc = ScriptDocument::new(body);
    let bytes = doc.encode().expect("encode");
    // header + body header + one offset + one padded record + one label
    assert_eq!(bytes.len(), 0x10 + 0x20 + 4 + 8 + 2);
    assert_eq!(&bytes[0x10..0x18], &[1, 0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(&bytes[0x34..0x3C], &[7, 0, 4, 0, 3, 0, 0xEE, 0xEE]);
    assert_eq!(u32::from_le_bytes(bytes[4..8].try_into().expect("4 bytes")), bytes.len() as u32);
}

#[test]
fn unknown_opcodes_survive_a_roundtrip() {
    let mut body = ScriptBody::new(Flavor::Action);
    body.push_command(Command::new(Flavor::Action, 2, 0x01F4).expect("unknown"))
        .expect("push");
    let bytes = ScriptDocument::new(body).encode().expect("encode");

    let doc = ScriptDocument::decode(&bytes, Flavor::Action).expect("decode");
    assert_eq!(doc.commands()[0].to_string(), "Unknown(0x01F4)");
    assert_eq!(doc.encode().expect("re-encode"), bytes);
}

#[test]
fn big_endian_documents_roundtrip() {
    let mut body = ScriptBody::new(Flavor::Field);
    body.push_command(Command::from_name(Flavor::Field, 5, "Print").expect("Print"))
        .expect("push");
    let doc = ScriptDocument::with_options(body, CodecOptions::big_endian());
    let bytes = doc.encode().expect("encode");
    assert_eq!(&bytes[..4], &[0x20, 0x08, 0x03, 0x06]);

    let reread = ScriptDocument::decode_with_options(&bytes, Flavor::Field, CodecOptions::big_endian())
        .expect("decode");
    assert_eq!(reread.commands(), doc.commands());
    assert_eq!(reread.encode().expect("re-encode"), bytes);

    let err = ScriptDocument::decode(&bytes, Flavor::Field).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Format);
}

#[test]
fn wrong_magic_is_invalid_format() {
    let mut bytes = action_fixture();
    bytes[0] = 0x07;
    let err = ScriptDocument::decode(&bytes, Flavor::Action).unwrap_err();
    assert!(matches!(err, ScriptError::InvalidFormat { .. }));
}

#[test]
fn truncated_file_is_corrupt_data() {
    let bytes = action_fixture();
    for len in [2, 0x20, 0x5C, 0x68] {
        let err = ScriptDocument::decode(&bytes[..len], Flavor::Action).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CorruptData, "length {len}: {err}");
    }
}

#[test]
fn sentinel_opcode_in_file_is_rejected() {
    let mut bytes = action_fixture();
    let sentinel = Flavor::Action.sentinel_opcode().to_le_bytes();
    bytes[0x4A..0x4C].copy_from_slice(&sentinel);
    let err = ScriptDocument::decode(&bytes, Flavor::Action).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Programmer);
}

#[test]
fn read_from_accepts_any_reader() {
    let bytes = action_fixture();
    let doc = ScriptDocument::read_from(std::io::Cursor::new(bytes), Flavor::Action)
        .expect("decode from reader");
    assert_eq!(doc.body().command_count(), 4);
}
