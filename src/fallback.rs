use crate::recovery::CharacterRecord;

fn record(name: &str, description: &str, help: &str) -> CharacterRecord {
    CharacterRecord {
        name: name.to_string(),
        description: description.to_string(),
        help: help.to_string(),
    }
}

/// Substituted when character generation cannot be recovered.
pub fn default_characters() -> Vec<CharacterRecord> {
    vec![
        record("內心的批評者", "代表你內心的自我懷疑", "挑戰消極想法"),
        record(
            "冷靜的智者",
            "一位年長的智者，擁有豐富的人生經驗。",
            "提供理性的建議和長遠的視角。",
        ),
        record(
            "活力四射的朋友",
            "一個充滿正能量的年輕人。",
            "通過積極的態度和有趣的活動分散注意力。",
        ),
        record(
            "同理心強的諮詢師",
            "專業的心理諮詢師。",
            "提供專業的心理支持和具體的應對策略。",
        ),
    ]
}

/// Substituted when story-seeded character generation cannot be recovered.
pub fn default_story_characters() -> Vec<CharacterRecord> {
    let mut characters = default_characters();
    characters.push(record(
        "勇敢的探險家",
        "一位無懼挑戰的冒險者。",
        "鼓勵你一步一步面對恐懼。",
    ));
    characters.push(record(
        "溫柔的傾聽者",
        "一位總是耐心陪伴的朋友。",
        "讓你安心說出內心的感受。",
    ));
    characters
}

pub fn placeholder_story(user_name: &str, anxiety_source: &str) -> String {
    format!(
        "{user_name}走進了一個寧靜的小鎮。雖然{anxiety_source}帶來的壓力仍在心頭，但這裡的人們願意傾聽，答案也許就在前方等著你。"
    )
}

pub fn placeholder_interaction(character: &CharacterRecord) -> String {
    format!(
        "{}聆聽了你的煩惱，{}這讓你感到一些釋然。",
        character.name, character.help
    )
}
