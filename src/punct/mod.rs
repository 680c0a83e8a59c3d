//! 标点转换层
//!
//! 把剪贴板文本中的中文全角标点替换为英文标点。
//!
//! ## 处理流程
//! 1. 按映射表声明顺序检测全角标点（表序优先，而非文本中最左优先）
//! 2. 每次只替换命中字符的第一次出现，然后从头重新检测
//! 3. 主替换结束后，按顺序应用修正表，消除相邻替换产生的多余空格

mod engine;
mod rules;
mod types;

pub use engine::{convert, detect, PunctuationConverter};
pub use rules::{contains_source_punctuation, FIXUP_TABLE, PUNCTUATION_TABLE};
pub use types::{ConversionResult, Detection};
