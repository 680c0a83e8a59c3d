use thiserror::Error;

/// 剪贴板访问错误
#[derive(Error, Debug)]
pub enum ClipboardAccessError {
    #[error("Clipboard open failed: {0}")]
    Open(String),

    #[error("Clipboard read failed: {0}")]
    Read(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

pub type ClipboardResult<T> = Result<T, ClipboardAccessError>;
