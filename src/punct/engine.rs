//! 标点转换主引擎
//!
//! 组合检测、逐个替换、空格修正

use crate::punct::rules::{FIXUP_TABLE, PUNCTUATION_TABLE};
use crate::punct::types::{ConversionResult, Detection};

/// 检测文本中的全角标点
///
/// 按映射表声明顺序扫描，返回第一个在文本中出现过的条目及其首次出现的字节偏移。
/// 注意是表序优先：即使靠后条目的字符在文本更靠前的位置，也先返回靠前的条目。
pub fn detect(text: &str) -> Option<Detection> {
    PUNCTUATION_TABLE
        .iter()
        .enumerate()
        .find_map(|(table_index, (source, _))| {
            text.find(*source).map(|byte_offset| Detection {
                table_index,
                byte_offset,
            })
        })
}

/// 转换文本，只返回结果字符串
pub fn convert(text: &str) -> String {
    PunctuationConverter::new().convert(text).text
}

/// 标点转换器（无状态，可复用）
#[derive(Debug, Default, Clone, Copy)]
pub struct PunctuationConverter;

impl PunctuationConverter {
    pub fn new() -> Self {
        Self
    }

    /// 转换文本
    ///
    /// 纯函数，不可失败
    pub fn convert(&self, text: &str) -> ConversionResult {
        if text.is_empty() {
            return ConversionResult::unchanged(String::new());
        }

        // 1. 主替换：每轮只替换命中字符的第一次出现，然后从头重新检测
        let (mut content, substitutions) = self.substitute(text);

        // 2. 空格修正：不含全角标点的快照整体跳过；一旦有替换，修正作用于整串
        let fixups = if substitutions > 0 {
            self.apply_fixups(&mut content)
        } else {
            0
        };

        let changed = content != text;
        if changed {
            tracing::debug!(
                "标点转换完成: 替换 {} 处, 修正 {} 处",
                substitutions,
                fixups
            );
        }

        ConversionResult {
            text: content,
            changed,
            substitutions,
            fixups,
        }
    }

    fn substitute(&self, text: &str) -> (String, usize) {
        let mut content = text.to_string();
        let mut substitutions = 0;

        // 每次替换都消去一个全角字符，且替换串不含全角字符，因此必然终止
        while let Some(hit) = detect(&content) {
            let (source, replacement) = PUNCTUATION_TABLE[hit.table_index];
            let end = hit.byte_offset + source.len_utf8();
            content.replace_range(hit.byte_offset..end, replacement);
            substitutions += 1;
        }

        (content, substitutions)
    }

    fn apply_fixups(&self, content: &mut String) -> usize {
        let mut fixups = 0;
        for (pattern, correction) in FIXUP_TABLE {
            let count = content.matches(pattern).count();
            if count > 0 {
                *content = content.replace(pattern, correction);
                fixups += count;
            }
        }
        fixups
    }
}
