// Short-lived messages shown when the editor turns an action down.
// Timestamps are `performance.now()` milliseconds supplied by the caller.
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    pub expires_ms: f64,
}

#[derive(Clone, Debug)]
pub struct NoticeQueue {
    ttl_ms: f64,
    items: VecDeque<Notice>,
}

impl NoticeQueue {
    /// Most notices kept at once; older ones drop off first.
    pub const CAPACITY: usize = 4;

    pub fn new(ttl_ms: f64) -> Self {
        Self { ttl_ms, items: VecDeque::new() }
    }

    pub fn push(&mut self, text: impl Into<String>, now_ms: f64) {
        if self.items.len() == Self::CAPACITY {
            self.items.pop_front();
        }
        self.items.push_back(Notice { text: text.into(), expires_ms: now_ms + self.ttl_ms });
    }

    pub fn expire(&mut self, now_ms: f64) {
        self.items.retain(|n| n.expires_ms > now_ms);
    }

    pub fn messages(&self) -> Vec<String> {
        self.items.iter().map(|n| n.text.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
