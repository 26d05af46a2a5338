use std::fmt::Write as _;

use bscript_core::{ArgumentValue, Command, ScriptBody, ScriptDocument, SearchString};
use serde_json::{Map as JsonMap, Value as JsonValue};

const FRAME_COL_WIDTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRenderOptions {
    /// Also list label tables and search strings.
    pub verbose: bool,
}

pub fn render_json(doc: &ScriptDocument) -> JsonValue {
    let body = doc.body();
    let mut out = JsonMap::new();

    out.insert(
        "flavor".to_string(),
        JsonValue::String(doc.flavor().to_string()),
    );
    out.insert(
        "version".to_string(),
        JsonValue::String(format!("0x{:08X}", doc.version())),
    );
    out.insert(
        "declared_size".to_string(),
        JsonValue::from(doc.declared_size()),
    );
    out.insert(
        "label_indices".to_string(),
        JsonValue::from(body.label_indices().to_vec()),
    );
    out.insert(
        "action_label_indices".to_string(),
        JsonValue::from(body.action_label_indices().to_vec()),
    );
    out.insert("commands".to_string(), commands_to_json(body));
    out.insert("search_strings".to_string(), search_strings_to_json(body));

    JsonValue::Object(out)
}

pub fn render_text(doc: &ScriptDocument) -> String {
    render_text_with_options(doc, TextRenderOptions::default())
}

pub fn render_text_with_options(doc: &ScriptDocument, options: TextRenderOptions) -> String {
    let body = doc.body();
    let mut out = String::new();

    writeln!(
        out,
        "{} script: {} commands, {} labels, {} action labels, {} search strings",
        doc.flavor(),
        body.command_count(),
        body.label_index_count(),
        body.action_label_index_count(),
        body.search_string_count()
    )
    .expect("writing to String cannot fail");

    let offsets = body.command_offsets();
    for (index, command) in body.commands().iter().enumerate() {
        let offset = offsets.get(index).copied().unwrap_or(0);
        writeln!(
            out,
            "{index:04}  0x{offset:04X}  {:>width$}  {command}",
            command.frame(),
            width = FRAME_COL_WIDTH
        )
        .expect("writing to String cannot fail");
    }

    if options.verbose {
        write_index_list(&mut out, "labels", body.label_indices());
        write_index_list(&mut out, "action labels", body.action_label_indices());
        if !body.search_strings().is_empty() {
            out.push_str("search strings:\n");
            for search in body.search_strings() {
                writeln!(
                    out,
                    "  +0x{:04X}  {:?}  {}",
                    search.relative_offset,
                    search.value,
                    owner_name(body, search)
                )
                .expect("writing to String cannot fail");
            }
        }
    }

    out
}

fn commands_to_json(body: &ScriptBody) -> JsonValue {
    let offsets = body.command_offsets();
    let commands = body
        .commands()
        .iter()
        .enumerate()
        .map(|(index, command)| {
            let mut entry = JsonMap::new();
            if let Some(&offset) = offsets.get(index) {
                entry.insert("offset".to_string(), JsonValue::from(offset));
            }
            entry.insert("frame".to_string(), JsonValue::from(command.frame()));
            entry.insert("opcode".to_string(), JsonValue::from(command.opcode()));
            entry.insert(
                "name".to_string(),
                command
                    .name()
                    .map_or(JsonValue::Null, |name| JsonValue::String(name.to_string())),
            );
            entry.insert("arguments".to_string(), arguments_to_json(command));
            JsonValue::Object(entry)
        })
        .collect();
    JsonValue::Array(commands)
}

fn arguments_to_json(command: &Command) -> JsonValue {
    let mut out = JsonMap::new();
    for argument in command.arguments() {
        let value = match argument.value() {
            ArgumentValue::U16(v) => JsonValue::from(*v),
            ArgumentValue::Float32(v) => JsonValue::from(f64::from(*v)),
            ArgumentValue::AsciiString(text) => JsonValue::String(text.clone()),
        };
        out.insert(argument.name().to_string(), value);
    }
    JsonValue::Object(out)
}

fn search_strings_to_json(body: &ScriptBody) -> JsonValue {
    let entries = body
        .search_strings()
        .iter()
        .map(|search| {
            let mut entry = JsonMap::new();
            entry.insert(
                "relative_offset".to_string(),
                JsonValue::from(search.relative_offset),
            );
            entry.insert(
                "string_offset".to_string(),
                JsonValue::from(search.string_offset),
            );
            entry.insert("value".to_string(), JsonValue::String(search.value.clone()));
            entry.insert(
                "command".to_string(),
                body.search_string_to_command(u32::from(search.relative_offset))
                    .map_or(JsonValue::Null, |command| {
                        JsonValue::String(command.to_string())
                    }),
            );
            JsonValue::Object(entry)
        })
        .collect();
    JsonValue::Array(entries)
}

fn write_index_list(out: &mut String, title: &str, indices: &[u16]) {
    if indices.is_empty() {
        return;
    }
    let joined = indices
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{title}: {joined}").expect("writing to String cannot fail");
}

fn owner_name(body: &ScriptBody, search: &SearchString) -> &'static str {
    body.search_string_to_command(u32::from(search.relative_offset))
        .and_then(Command::name)
        .unwrap_or("?")
}
