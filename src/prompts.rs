use crate::recovery::CharacterRecord;

/// Opening story that sets the scene for the character interactions.
pub fn story(user_name: &str, anxiety_source: &str) -> String {
    format!(
        r#"根據以下訊息生成一個互動故事的開場:
用戶名: {user_name}
焦慮來源: {anxiety_source}
故事應描述主角目前的處境與心情，營造安全、溫暖的氛圍，並為後續與角色的互動留下伏筆。
請直接返回故事內容，不要包含其他說明。"#
    )
}

pub fn characters(user_name: &str, anxiety_source: &str) -> String {
    format!(
        r#"根據以下訊息生成4個角色:
用戶名: {user_name}
焦慮來源: {anxiety_source}
每個角色應包含:名字、描述、如何幫助解決焦慮
請以JSON格式返回結果，格式如下:
[
    {{"name": "角色名", "description": "角色描述", "help": "如何幫助解決焦慮"}},
    ...
]"#
    )
}

/// Character set seeded with a previously generated story.
pub fn story_characters(user_name: &str, anxiety_source: &str, story: &str) -> String {
    format!(
        r#"根據以下訊息生成6個角色:
用戶名: {user_name}
焦慮來源: {anxiety_source}
故事背景: {story}
每個角色應包含:名字、描述、如何幫助解決焦慮
角色應與故事背景相呼應。
請以JSON格式返回結果，格式如下:
[
    {{"name": "角色名", "description": "角色描述", "help": "如何幫助解決焦慮"}},
    ...
]"#
    )
}

pub fn interaction(
    user_name: &str,
    anxiety_source: &str,
    character: &CharacterRecord,
    user_thought: &str,
    progress: f64,
) -> String {
    format!(
        r#"生成一段{user_name}與{name}之間的對話:
用戶名: {user_name}
焦慮來源: {anxiety_source}
角色描述: {description}
角色如何幫助: {help}
用戶當前的想法: {user_thought}
目前進度: {progress}%
對話應該溫暖且具體，幫助用戶緩解焦慮。
請以每行「名字: 內容」的格式返回對話，{user_name}與{name}輪流發言，不要包含其他說明。"#,
        name = character.name,
        description = character.description,
        help = character.help,
    )
}
