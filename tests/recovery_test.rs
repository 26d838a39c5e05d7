use calm_quest::fallback;
use calm_quest::{recover_characters, CharacterRecord, RecoveryResult};

fn record(name: &str, description: &str, help: &str) -> CharacterRecord {
    CharacterRecord {
        name: name.to_string(),
        description: description.to_string(),
        help: help.to_string(),
    }
}

#[test]
fn strict_json_round_trips() {
    let raw = r#"[
        {"name": "A", "description": "B", "help": "C"},
        {"name": "D", "description": "E", "help": "F"}
    ]"#;
    assert_eq!(
        recover_characters(raw),
        RecoveryResult::Recovered(vec![record("A", "B", "C"), record("D", "E", "F")])
    );
}

#[test]
fn valid_json_with_wrong_shape_is_not_recovered() {
    // A single object, an array of scalars and a bare number are all valid
    // JSON but not a sequence of records.
    assert_eq!(
        recover_characters(r#"{"name": "A", "description": "B", "help": "C"}"#),
        RecoveryResult::Unrecovered
    );
    assert_eq!(
        recover_characters(r#"["A", "B", "C"]"#),
        RecoveryResult::Unrecovered
    );
    assert_eq!(recover_characters("42"), RecoveryResult::Unrecovered);
    assert_eq!(
        recover_characters(r#"[{"name": "A", "description": "B", "help": "C"}, "stray"]"#),
        RecoveryResult::Unrecovered
    );
}

#[test]
fn empty_array_is_not_recovered() {
    assert_eq!(recover_characters("[]"), RecoveryResult::Unrecovered);
}

#[test]
fn lenient_parse_handles_single_quotes() {
    let raw = "[{'name': 'A', 'description': 'B', 'help': 'C'}]";
    assert_eq!(
        recover_characters(raw),
        RecoveryResult::Recovered(vec![record("A", "B", "C")])
    );
}

#[test]
fn lenient_parse_handles_trailing_commas() {
    let raw = r#"[
        {"name": "A", "description": "B", "help": "C",},
    ]"#;
    assert_eq!(
        recover_characters(raw),
        RecoveryResult::Recovered(vec![record("A", "B", "C")])
    );
}

#[test]
fn lenient_parse_handles_markdown_fence() {
    let raw = "```json\n[{\"name\": \"A\", \"description\": \"B\", \"help\": \"C\"}]\n```";
    assert_eq!(
        recover_characters(raw),
        RecoveryResult::Recovered(vec![record("A", "B", "C")])
    );
}

#[test]
fn line_scan_extracts_one_record_per_brace_pair() {
    let raw = "\
以下是為你生成的角色:
{
    \"name\": \"A\",
    \"description\": \"B\",
    \"help\": \"C\",
}
{
    name: D
    description: E
    help: F
}
希望這些角色對你有幫助。";
    assert_eq!(
        recover_characters(raw),
        RecoveryResult::Recovered(vec![record("A", "B", "C"), record("D", "E", "F")])
    );
}

#[test]
fn line_scan_drops_lines_outside_records() {
    let raw = "\
name: 不在角色內
{
    \"name\": \"A\",
    \"description\": \"B\",
    \"help\": \"C\"
}";
    assert_eq!(
        recover_characters(raw),
        RecoveryResult::Recovered(vec![record("A", "B", "C")])
    );
}

#[test]
fn prose_and_empty_input_are_unrecovered() {
    assert_eq!(
        recover_characters("抱歉，我無法生成角色。"),
        RecoveryResult::Unrecovered
    );
    assert_eq!(recover_characters("not json at all"), RecoveryResult::Unrecovered);
    assert_eq!(recover_characters(""), RecoveryResult::Unrecovered);
}

#[test]
fn default_character_lists_are_fixed() {
    let characters = fallback::default_characters();
    assert_eq!(characters.len(), 4);
    assert_eq!(
        characters[0],
        record("內心的批評者", "代表你內心的自我懷疑", "挑戰消極想法")
    );
    assert_eq!(characters[3].name, "同理心強的諮詢師");

    let story_characters = fallback::default_story_characters();
    assert_eq!(story_characters.len(), 6);
    // The story list extends the base list rather than replacing it.
    assert_eq!(story_characters[..4], characters[..]);
    assert_eq!(story_characters[4].name, "勇敢的探險家");
    assert_eq!(story_characters[5].name, "溫柔的傾聽者");
}
