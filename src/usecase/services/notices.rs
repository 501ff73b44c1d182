use std::collections::VecDeque;

use chrono::Local;

use crate::domain::entities::notice::{Notice, NoticeId, NoticeLevel};

pub const DEFAULT_NOTICE_CAPACITY: usize = 5;

/// Non-blocking notification queue. The core pushes, the shell renders and
/// dismisses. When full, the oldest notice is dropped.
#[derive(Debug, Clone)]
pub struct Notices {
    queue: VecDeque<Notice>,
    next_id: u64,
    capacity: usize,
}

impl Default for Notices {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_NOTICE_CAPACITY)
    }
}

impl Notices {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            next_id: 0,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> NoticeId {
        let id = NoticeId(self.next_id);
        self.next_id += 1;
        if self.queue.len() == self.capacity {
            self.queue.pop_front();
        }
        self.queue.push_back(Notice {
            id,
            level,
            message: message.into(),
            raised_at: Local::now(),
        });
        id
    }

    pub fn info(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Info, message)
    }

    pub fn success(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NoticeId {
        self.push(NoticeLevel::Error, message)
    }

    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.queue.len();
        self.queue.retain(|notice| notice.id != id);
        self.queue.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
