use bscript_core::{Command, Flavor, ScriptBody, ScriptDocument};
use bscript_render::{TextRenderOptions, render_json, render_text, render_text_with_options};
use serde_json::Value;

fn sample_document() -> ScriptDocument {
    let mut body = ScriptBody::new(Flavor::Action);
    let mut animation = Command::from_name(Flavor::Action, 2, "Animation").expect("Animation");
    animation
        .argument_mut("interpolateTime")
        .expect("interpolateTime")
        .assign(0.5)
        .expect("assign");
    let mut print = Command::from_name(Flavor::Action, 30, "Print").expect("Print");
    print
        .argument_mut("message")
        .expect("message")
        .assign("hi")
        .expect("assign");

    body.push_command(animation).expect("push");
    body.push_command(print).expect("push");
    body.push_label_index(1).expect("label");
    body.push_search_string(0x14).expect("search string");

    let bytes = ScriptDocument::new(body).encode().expect("encode");
    ScriptDocument::decode(&bytes, Flavor::Action).expect("decode")
}

#[test]
fn json_uses_stable_top_level_order() {
    let value = render_json(&sample_document());
    let keys: Vec<&str> = value
        .as_object()
        .expect("json should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(
        keys,
        vec![
            "flavor",
            "version",
            "declared_size",
            "label_indices",
            "action_label_indices",
            "commands",
            "search_strings",
        ]
    );
}

#[test]
fn json_lists_commands_with_named_arguments() {
    let value = render_json(&sample_document());
    assert_eq!(value["flavor"], "action");
    assert_eq!(value["version"], "0x20080306");

    let commands = value["commands"].as_array().expect("commands array");
    assert_eq!(commands.len(), 2);
    assert_eq!(commands[0]["name"], "Animation");
    assert_eq!(commands[0]["offset"], 0x38);
    assert_eq!(commands[0]["arguments"]["interpolateTime"], 0.5);
    assert_eq!(commands[1]["frame"], 30);
    assert_eq!(commands[1]["arguments"]["message"], "hi");

    let search = &value["search_strings"][0];
    assert_eq!(search["value"], "hi");
    assert_eq!(search["command"], "Print(message: \"hi\")");
    assert_eq!(value["label_indices"], Value::from(vec![1]));
}

#[test]
fn text_listing_has_one_line_per_command() {
    let text = render_text(&sample_document());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("action script: 2 commands, 1 labels"));
    assert!(lines[1].starts_with("0000  0x0038"));
    assert!(lines[1].ends_with(
        "Animation(interpolateTime: 0.5, animationNumber: 0, startFrame: 0, animationType: 0)"
    ));
    assert!(lines[2].ends_with("Print(message: \"hi\")"));
}

#[test]
fn verbose_text_adds_labels_and_search_strings() {
    let text = render_text_with_options(&sample_document(), TextRenderOptions { verbose: true });
    assert!(text.contains("labels: 1\n"));
    assert!(text.contains("search strings:\n  +0x0014  \"hi\"  Print\n"));
}
