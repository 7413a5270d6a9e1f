/// 修复 JSON 字符串值内部未转义的双引号
///
/// 中文引号在某些编辑流程中会被替换成 ASCII 引号，导致 JSON 失效。
/// 字符串内部遇到 `"` 时，只有后面（跳过空格和制表符）紧跟 `, } ] :`
/// 或换行、或文本结束时才视为字符串结束，否则转义为 `\"`
pub fn fix_json_quotes(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 16);
    let mut in_string = false;
    let mut escape_next = false;

    for (i, &c) in chars.iter().enumerate() {
        if escape_next {
            result.push(c);
            escape_next = false;
            continue;
        }

        if c == '\\' {
            result.push(c);
            escape_next = true;
            continue;
        }

        if c != '"' {
            result.push(c);
            continue;
        }

        if !in_string {
            in_string = true;
            result.push(c);
            continue;
        }

        let next = chars[i + 1..]
            .iter()
            .find(|n| **n != ' ' && **n != '\t')
            .copied();

        match next {
            None | Some(',') | Some('}') | Some(']') | Some(':') | Some('\n') | Some('\r') => {
                in_string = false;
                result.push(c);
            }
            _ => {
                result.push('\\');
                result.push(c);
            }
        }
    }

    result
}
