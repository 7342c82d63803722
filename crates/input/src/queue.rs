//! FIFO command queue.
//!
//! Key presses and gravity ticks land here in arrival order and are drained
//! one at a time, so no command ever starts before the previous one finished.

use std::collections::VecDeque;

use crate::types::Command;

/// Default bound on queued commands.
pub const DEFAULT_MAX_PENDING: usize = 64;

#[derive(Debug, Clone)]
pub struct CommandQueue {
    pending: VecDeque<Command>,
    max_pending: usize,
    dropped: u64,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::with_max_pending(DEFAULT_MAX_PENDING)
    }

    pub fn with_max_pending(max_pending: usize) -> Self {
        let max_pending = max_pending.max(1);
        Self {
            pending: VecDeque::with_capacity(max_pending),
            max_pending,
            dropped: 0,
        }
    }

    /// Enqueue a command. Returns false (and counts a drop) when full.
    pub fn push(&mut self, command: Command) -> bool {
        if self.pending.len() >= self.max_pending {
            self.dropped += 1;
            return false;
        }
        self.pending.push_back(command);
        true
    }

    /// Enqueue `count` gravity ticks.
    pub fn push_ticks(&mut self, count: u32) {
        for _ in 0..count {
            if !self.push(Command::Tick) {
                break;
            }
        }
    }

    pub fn pop(&mut self) -> Option<Command> {
        self.pending.pop_front()
    }

    /// Forget everything queued
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Commands rejected because the queue was full
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for CommandQueue {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        self.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrival_order_is_preserved() {
        let mut queue = CommandQueue::new();
        queue.push(Command::MoveLeft);
        queue.push_ticks(2);
        queue.push(Command::Rotate);

        let drained: Vec<_> = queue.by_ref().collect();
        assert_eq!(
            drained,
            vec![Command::MoveLeft, Command::Tick, Command::Tick, Command::Rotate]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_bounded() {
        let mut queue = CommandQueue::with_max_pending(2);
        assert!(queue.push(Command::MoveLeft));
        assert!(queue.push(Command::MoveRight));
        assert!(!queue.push(Command::Rotate));
        queue.push_ticks(3);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dropped(), 2);
    }
}
