//! 标点规则定义
//!
//! 包含全角标点映射表、替换后的空格修正表

use std::collections::HashSet;

/// 全角标点映射表
///
/// 声明顺序即检测优先级：表中靠前的条目只要在文本中出现，就先于靠后的条目被替换。
pub const PUNCTUATION_TABLE: [(char, &str); 17] = [
    ('，', ", "),
    ('《', "<"),
    ('。', ". "),
    ('》', ">"),
    ('、', ", "),
    ('？', "? "),
    ('；', "; "),
    ('：', ": "),
    ('“', " \""),
    ('”', "\" "),
    ('【', "["),
    ('】', "]"),
    ('！', "! "),
    ('￥', "$"),
    ('（', " ("),
    ('）', ") "),
    ('—', "--"),
];

/// 空格修正表（按顺序整串替换）
///
/// `）` 替换后自带尾随空格，紧跟其后的标点再被替换时会留下多余空格。
pub const FIXUP_TABLE: [(&str, &str); 3] = [(") .", ")."), (") ,", "),"), (": \"", ":\"")];

lazy_static::lazy_static! {
    /// 全部源字符（预计算，O(1) 查找）
    static ref SOURCE_CHARS: HashSet<char> =
        PUNCTUATION_TABLE.iter().map(|(source, _)| *source).collect();
}

/// 判断字符是否为映射表中的全角标点
pub fn is_source_char(ch: char) -> bool {
    SOURCE_CHARS.contains(&ch)
}

/// 文本中是否还残留任一全角标点
pub fn contains_source_punctuation(text: &str) -> bool {
    text.chars().any(is_source_char)
}
