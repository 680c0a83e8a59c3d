// 剪贴板监听模块 - 轮询检测变化，转换标点后写回
use std::thread;
use std::time::Duration;

use crate::clipboard_manager::ClipboardProvider;
use crate::punct::PunctuationConverter;

/// 剪贴板轮询间隔（毫秒）
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 200;

/// 剪贴板监听器
///
/// 单线程轮询，独占“上一次看到的剪贴板内容”，不需要任何锁
pub struct ClipboardMonitor<C: ClipboardProvider> {
    clipboard: C,
    converter: PunctuationConverter,
    poll_interval: Duration,
    /// 首轮直接读取当前内容，不等待变化
    first: bool,
}

impl<C: ClipboardProvider> ClipboardMonitor<C> {
    pub fn new(clipboard: C) -> Self {
        Self::with_poll_interval(clipboard, Duration::from_millis(DEFAULT_POLL_INTERVAL_MS))
    }

    pub(crate) fn with_poll_interval(clipboard: C, poll_interval: Duration) -> Self {
        Self {
            clipboard,
            converter: PunctuationConverter::new(),
            poll_interval,
            first: true,
        }
    }

    /// 永久运行，只能通过结束进程停止
    pub fn run(mut self) -> ! {
        tracing::info!(
            "开始监听剪贴板 (轮询间隔 {}ms)",
            self.poll_interval.as_millis()
        );
        loop {
            let snapshot = self.next_snapshot();
            self.process_snapshot(snapshot.as_deref());
        }
    }

    /// 获取下一份快照：首轮立即读取，之后阻塞直到内容变化
    pub fn next_snapshot(&mut self) -> Option<String> {
        if self.first {
            self.first = false;
            return self.read_until_ok();
        }
        self.wait_for_change()
    }

    /// 阻塞直到剪贴板内容与等待开始时不同
    ///
    /// 读取失败的轮次不参与比较，下一轮重试
    pub fn wait_for_change(&mut self) -> Option<String> {
        let origin = self.read_until_ok();
        loop {
            match self.clipboard.get_text() {
                Ok(current) if current != origin => return current,
                Ok(_) => {}
                Err(e) => tracing::warn!("monitor: {}，稍后重试", e),
            }
            thread::sleep(self.poll_interval);
        }
    }

    /// 处理一份快照，返回写回剪贴板的文本（若有）
    pub fn process_snapshot(&mut self, snapshot: Option<&str>) -> Option<String> {
        let raw = match snapshot {
            Some(text) if !text.is_empty() => text,
            _ => {
                tracing::debug!("monitor: 剪贴板为空或不是文本，跳过");
                return None;
            }
        };

        tracing::info!("Get Content: {{ \"{}\" }}.", raw);

        let result = self.converter.convert(raw);
        if !result.changed {
            return None;
        }

        tracing::info!("Converted To: {{ \"{}\" }}.", result.text);

        // 单一写入者，后写覆盖即可；写入失败时丢弃本次结果，不重试
        if let Err(e) = self.clipboard.set_text(&result.text) {
            tracing::error!("monitor: {}", e);
            return None;
        }

        Some(result.text)
    }

    fn read_until_ok(&mut self) -> Option<String> {
        loop {
            match self.clipboard.get_text() {
                Ok(text) => return text,
                Err(e) => {
                    tracing::warn!("monitor: {}，稍后重试", e);
                    thread::sleep(self.poll_interval);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard_manager::memory::MemoryClipboard;

    fn monitor(clipboard: MemoryClipboard) -> ClipboardMonitor<MemoryClipboard> {
        ClipboardMonitor::with_poll_interval(clipboard, Duration::from_millis(1))
    }

    #[test]
    fn test_default_poll_interval() {
        let monitor = ClipboardMonitor::new(MemoryClipboard::default());
        assert_eq!(monitor.poll_interval, Duration::from_millis(200));
        assert!(monitor.first);
    }

    #[test]
    fn test_first_snapshot_is_immediate() {
        let mut monitor = monitor(MemoryClipboard::with_text("你好，世界。"));

        let snapshot = monitor.next_snapshot();
        assert_eq!(snapshot.as_deref(), Some("你好，世界。"));
        assert_eq!(monitor.clipboard.reads, 1);
    }

    #[test]
    fn test_process_publishes_converted_text() {
        let mut monitor = monitor(MemoryClipboard::default());

        let published = monitor.process_snapshot(Some("你好，世界。"));
        assert_eq!(published.as_deref(), Some("你好, 世界. "));
        assert_eq!(monitor.clipboard.written, vec!["你好, 世界. ".to_string()]);
    }

    #[test]
    fn test_process_skips_clean_text() {
        let mut monitor = monitor(MemoryClipboard::default());

        assert_eq!(monitor.process_snapshot(Some("hello, world.")), None);
        assert!(monitor.clipboard.written.is_empty());
    }

    #[test]
    fn test_process_skips_empty_snapshot() {
        let mut monitor = monitor(MemoryClipboard::default());

        assert_eq!(monitor.process_snapshot(None), None);
        assert_eq!(monitor.process_snapshot(Some("")), None);
        assert!(monitor.clipboard.written.is_empty());
    }

    #[test]
    fn test_write_failure_is_dropped() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.fail_writes = true;
        let mut monitor = monitor(clipboard);

        assert_eq!(monitor.process_snapshot(Some("好。")), None);
        assert!(monitor.clipboard.written.is_empty());
    }

    #[test]
    fn test_wait_for_change_blocks_until_different() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.push_text(Some("a"));
        clipboard.push_text(Some("a"));
        clipboard.push_text(Some("a"));
        clipboard.push_text(Some("b"));
        let mut monitor = monitor(clipboard);

        assert_eq!(monitor.wait_for_change().as_deref(), Some("b"));
        assert_eq!(monitor.clipboard.reads, 4);
    }

    #[test]
    fn test_wait_for_change_retries_read_failures() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.push_failure();
        clipboard.push_text(Some("a"));
        clipboard.push_failure();
        clipboard.push_text(Some("b"));
        let mut monitor = monitor(clipboard);

        assert_eq!(monitor.wait_for_change().as_deref(), Some("b"));
        assert_eq!(monitor.clipboard.reads, 4);
    }

    #[test]
    fn test_wait_for_change_reports_cleared_clipboard() {
        let mut clipboard = MemoryClipboard::default();
        clipboard.push_text(Some("a"));
        clipboard.push_text(None);
        let mut monitor = monitor(clipboard);

        assert_eq!(monitor.wait_for_change(), None);
        assert_eq!(monitor.process_snapshot(None), None);
    }

    #[test]
    fn test_two_iterations() {
        let mut monitor = monitor(MemoryClipboard::with_text("（测试）。"));

        let first = monitor.next_snapshot();
        let published = monitor.process_snapshot(first.as_deref());
        assert_eq!(published.as_deref(), Some(" (测试). "));

        // 写回后的内容成为下一轮等待的起点，不会被当作新内容再次处理
        monitor.clipboard.push_text(Some(" (测试). "));
        monitor.clipboard.push_text(Some(" (测试). "));
        monitor.clipboard.push_text(Some("再见！"));
        let second = monitor.next_snapshot();
        assert_eq!(second.as_deref(), Some("再见！"));

        let published = monitor.process_snapshot(second.as_deref());
        assert_eq!(published.as_deref(), Some("再见! "));
        assert_eq!(
            monitor.clipboard.written,
            vec![" (测试). ".to_string(), "再见! ".to_string()]
        );
    }
}
