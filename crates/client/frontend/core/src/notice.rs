//! Short-lived notices shown to the player (the toast strip).
use std::collections::VecDeque;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// A titled notice, e.g. "Fighter selected!" / "Ryu is ready for battle."
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            level,
        }
    }

    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::new(title, body, NoticeLevel::Info)
    }
}

/// Bounded queue of notices; the oldest entry is dropped when full.
#[derive(Clone, Debug)]
pub struct NoticeLog {
    entries: VecDeque<Notice>,
    capacity: usize,
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(notice);
    }

    /// Most recent notice, if any.
    pub fn latest(&self) -> Option<&Notice> {
        self.entries.back()
    }

    /// Newest-first iterator over at most `limit` notices.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Notice> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = NoticeLog::new(2);
        log.push(Notice::info("one", ""));
        log.push(Notice::info("two", ""));
        log.push(Notice::info("three", ""));

        let titles: Vec<_> = log.recent(10).map(|n| n.title.as_str()).collect();
        assert_eq!(titles, ["three", "two"]);
        assert_eq!(log.latest().map(|n| n.title.as_str()), Some("three"));
    }

    #[test]
    fn zero_capacity_still_keeps_one() {
        let mut log = NoticeLog::new(0);
        log.push(Notice::info("a", ""));
        log.push(Notice::info("b", ""));
        assert_eq!(log.len(), 1);
        log.clear();
        assert!(log.is_empty());
    }
}
