// src/clipboard_manager.rs
//
// 剪贴板访问模块
//
// 把系统剪贴板抽象为“读取文本快照 / 写入文本快照”两个能力

use arboard::Clipboard;

use crate::error::{ClipboardAccessError, ClipboardResult};

/// 剪贴板能力
pub trait ClipboardProvider {
    /// 读取当前文本快照，剪贴板为空或不是文本时返回 `None`
    fn get_text(&mut self) -> ClipboardResult<Option<String>>;

    /// 用给定文本替换剪贴板内容
    fn set_text(&mut self, text: &str) -> ClipboardResult<()>;
}

/// 基于 arboard 的系统剪贴板
pub struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    pub fn new() -> ClipboardResult<Self> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardAccessError::Open(e.to_string()))?;
        tracing::debug!("clipboard_manager: 已打开系统剪贴板");
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn get_text(&mut self) -> ClipboardResult<Option<String>> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            // 空剪贴板或非文本内容（如图片）
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(ClipboardAccessError::Read(e.to_string())),
        }
    }

    fn set_text(&mut self, text: &str) -> ClipboardResult<()> {
        self.clipboard
            .set_text(text)
            .map_err(|e| ClipboardAccessError::Write(e.to_string()))
    }
}
