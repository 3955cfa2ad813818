//! In-memory port implementations shared by the application tests

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::ports::{
    ClipboardError, ClipboardIo, ConfigStore, Display, NotificationError, NotificationIcon,
    Notifier,
};
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::history::RenderedLine;

#[derive(Default)]
pub struct MockClipboard {
    reads: Mutex<VecDeque<Result<String, ClipboardError>>>,
    written: Mutex<Vec<String>>,
    fail_writes: AtomicBool,
    read_count: AtomicUsize,
}

impl MockClipboard {
    pub fn push_read(&self, result: Result<String, ClipboardError>) {
        self.reads.lock().unwrap().push_back(result);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        self.read_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClipboardIo for MockClipboard {
    async fn read_all(&self) -> Result<String, ClipboardError> {
        self.read_count.fetch_add(1, Ordering::SeqCst);
        self.reads
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ClipboardError::ReadFailed("empty".to_string())))
    }

    async fn write_all(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ClipboardError::WriteFailed("denied".to_string()));
        }
        self.written.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct MockDisplay {
    lines: Mutex<Vec<RenderedLine>>,
    rebuilds: AtomicUsize,
    top_line: AtomicUsize,
    status: Mutex<String>,
}

impl MockDisplay {
    pub fn rebuilds(&self) -> usize {
        self.rebuilds.load(Ordering::SeqCst)
    }

    pub fn labels(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .map(|l| l.label.clone())
            .collect()
    }

    pub fn status(&self) -> String {
        self.status.lock().unwrap().clone()
    }
}

impl Display for MockDisplay {
    fn rebuild_list(&self, lines: &[RenderedLine]) {
        *self.lines.lock().unwrap() = lines.to_vec();
        // a real list widget scrolls back to the top on rebuild
        self.top_line.store(usize::from(!lines.is_empty()), Ordering::SeqCst);
        self.rebuilds.fetch_add(1, Ordering::SeqCst);
    }

    fn top_line(&self) -> usize {
        self.top_line.load(Ordering::SeqCst)
    }

    fn set_top_line(&self, line: usize) {
        self.top_line.store(line, Ordering::SeqCst);
    }

    fn set_status(&self, message: &str) {
        *self.status.lock().unwrap() = message.to_string();
    }
}

#[derive(Default)]
pub struct MockNotifier {
    sent: Mutex<Vec<NotificationIcon>>,
}

impl MockNotifier {
    pub fn count(&self, icon: NotificationIcon) -> usize {
        self.sent.lock().unwrap().iter().filter(|i| **i == icon).count()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(
        &self,
        _title: &str,
        _message: &str,
        icon: NotificationIcon,
    ) -> Result<(), NotificationError> {
        self.sent.lock().unwrap().push(icon);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStore {
    saved: Mutex<Option<AppConfig>>,
}

#[async_trait]
impl ConfigStore for MemoryStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        Ok(self.saved.lock().unwrap().clone().unwrap_or_else(AppConfig::empty))
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        *self.saved.lock().unwrap() = Some(config.clone());
        Ok(())
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("memory")
    }

    fn exists(&self) -> bool {
        self.saved.lock().unwrap().is_some()
    }
}

pub struct FailingStore;

#[async_trait]
impl ConfigStore for FailingStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        Err(ConfigError::ReadError("unreadable".to_string()))
    }

    async fn save(&self, _config: &AppConfig) -> Result<(), ConfigError> {
        Err(ConfigError::WriteError("read-only file system".to_string()))
    }

    fn path(&self) -> PathBuf {
        PathBuf::from("/read-only/config.json")
    }

    fn exists(&self) -> bool {
        false
    }
}
