//! 剪贴板中文标点转换工具
//!
//! 轮询系统剪贴板，把中文全角标点替换为英文标点后写回。

pub mod clipboard_manager;
pub mod error;
pub mod monitor;
pub mod punct;

use anyhow::{Context, Result};

use clipboard_manager::SystemClipboard;
use monitor::ClipboardMonitor;

pub use error::ClipboardAccessError;
pub use punct::{convert, detect, ConversionResult, Detection, PunctuationConverter};

/// 启动监听，正常情况下永不返回
///
/// 只有无法打开系统剪贴板时才返回错误
pub fn run() -> Result<()> {
    tracing_subscriber::fmt::init();

    let clipboard = SystemClipboard::new().context("无法访问系统剪贴板")?;

    ClipboardMonitor::new(clipboard).run()
}
