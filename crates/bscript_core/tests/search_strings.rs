use bscript_core::{Command, Flavor, SCRIPT_VERSION, ScriptBody, ScriptDocument, ScriptError};

fn u16le(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn u32le(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Three `Start` commands placed 0x20, 0x40 and 0x60 bytes into a 0x80 byte
/// commands region, with filler in between.
fn spaced_fixture() -> Vec<u8> {
    const COMMANDS: u32 = 0x3C;
    const END: u32 = COMMANDS + 0x80;

    let mut out = Vec::new();
    u32le(&mut out, SCRIPT_VERSION);
    u32le(&mut out, END);
    u32le(&mut out, 0x10);
    u32le(&mut out, 0);

    for count in [0, 0, 3, 0] {
        u16le(&mut out, count);
    }
    for offset in [0x30, COMMANDS, END, END, END, END] {
        u32le(&mut out, offset);
    }
    for relative in [0x20, 0x40, 0x60] {
        u32le(&mut out, COMMANDS + relative);
    }

    out.resize(END as usize, 0xEE);
    for (frame, relative) in [(1u16, 0x20usize), (2, 0x40), (3, 0x60)] {
        let at = COMMANDS as usize + relative;
        out[at..at + 2].copy_from_slice(&frame.to_le_bytes());
        out[at + 2..at + 4].copy_from_slice(&0u16.to_le_bytes());
    }
    out
}

fn frame_at(doc: &ScriptDocument, relative: u32) -> Option<u16> {
    doc.search_string_to_command(relative).map(Command::frame)
}

#[test]
fn target_resolves_to_last_command_starting_before_it() {
    let doc = ScriptDocument::decode(&spaced_fixture(), Flavor::Action).expect("decode");
    assert_eq!(doc.body().command_count(), 3);

    assert_eq!(frame_at(&doc, 0x20), Some(1));
    assert_eq!(frame_at(&doc, 0x3F), Some(1));
    assert_eq!(frame_at(&doc, 0x40), Some(2));
    assert_eq!(frame_at(&doc, 0x55), Some(2));
}

#[test]
fn target_before_first_command_has_no_owner() {
    let doc = ScriptDocument::decode(&spaced_fixture(), Flavor::Action).expect("decode");
    assert_eq!(frame_at(&doc, 0), None);
    assert_eq!(frame_at(&doc, 0x1F), None);
}

#[test]
fn tail_of_commands_region_belongs_to_last_command() {
    let doc = ScriptDocument::decode(&spaced_fixture(), Flavor::Action).expect("decode");
    assert_eq!(frame_at(&doc, 0x60), Some(3));
    assert_eq!(frame_at(&doc, 0x7F), Some(3));
    assert_eq!(frame_at(&doc, 0x80), None);
    assert_eq!(frame_at(&doc, 0x1000), None);
}

#[test]
fn pushed_search_strings_roundtrip_through_the_index() {
    let mut body = ScriptBody::new(Flavor::Field);
    let mut print = Command::from_name(Flavor::Field, 0, "Print").expect("Print");
    print
        .argument_mut("message")
        .expect("message")
        .assign("look here")
        .expect("assign");
    body.push_command(Command::new(Flavor::Field, 0, 0).expect("Start"))
        .expect("push");
    body.push_command(print).expect("push");
    // Start is 4 bytes; the Print pointer sits 4 bytes into the next record.
    body.push_search_string(8).expect("slot holds a string");

    let bytes = ScriptDocument::new(body).encode().expect("encode");
    let doc = ScriptDocument::decode(&bytes, Flavor::Field).expect("decode");
    let search = &doc.body().search_strings()[0];
    assert_eq!(search.relative_offset, 8);
    assert_eq!(search.value, "look here");
    assert_eq!(search.string_offset, doc.body().offsets().strings);
    assert_eq!(
        doc.search_string_to_command(8).and_then(Command::name),
        Some("Print")
    );
}

#[test]
fn search_string_must_point_at_a_string_slot() {
    let mut body = ScriptBody::new(Flavor::Action);
    body.push_command(Command::from_name(Flavor::Action, 0, "Jump").expect("Jump"))
        .expect("push");
    let err = body.push_search_string(4).unwrap_err();
    assert!(matches!(
        err,
        ScriptError::UnresolvedSearchString { relative_offset: 4 }
    ));
    assert!(body.search_strings().is_empty());
}
