//! LinkedStack: doubly-linked stack with top-end and bottom-end operations.
//!
//! ## Architecture
//!
//! ```text
//!   head (top, newest)                               tail (bottom, oldest)
//!     │                                                 │
//!     ▼                                                 ▼
//!   [Z] ──down──► [Y] ──down──► ... ──down──► [B] ──down──► [A]
//!   [Z] ◄──up──── [Y] ◄──up──── ... ◄──up──── [B] ◄──up──── [A]
//! ```
//!
//! Frames live in a [`FrameArena`] and link by [`FrameId`](crate::arena::FrameId).
//! `head.up` and `tail.down` are always absent.
//!
//! ## Operations
//!
//! | Operation | End | Cost |
//! |-----------|-----|------|
//! | `push` / `pop` | top | O(1) |
//! | `base` / `sweep` | bottom | O(1) |
//! | `sweep_push` | bottom out, top in | O(1) |
//! | `rotate` | bottom frame moved to top | O(1) |
//! | `push_with_policy` | capacity decision + push or sweep_push | O(1) at max |
//! | `base_with_policy` | capacity decision + base | O(1) |
//!
//! ## Concurrency
//!
//! All state sits behind one `RwLock`. Every mutation takes the write guard
//! for its whole duration, so no caller can observe a half-linked frame.
//! `size` and `peek` take the read guard.

use parking_lot::RwLock;
use piladb_core::{EvictionPolicy, PilaError, PilaResult, PushDecision};

use crate::arena::{Frame, FrameArena, FrameId};

/// Result of a policy-gated push.
#[derive(Debug, Clone, PartialEq)]
pub enum PushOutcome<T> {
    /// The element was pushed; size grew by one
    Pushed,
    /// Bottom elements were evicted to make room, oldest first
    Evicted(Vec<T>),
}

#[derive(Debug)]
struct Frames<T> {
    arena: FrameArena<T>,
    head: Option<FrameId>,
    tail: Option<FrameId>,
}

impl<T> Frames<T> {
    fn new() -> Self {
        Self {
            arena: FrameArena::new(),
            head: None,
            tail: None,
        }
    }

    fn len(&self) -> usize {
        self.arena.len()
    }

    fn push(&mut self, value: T) {
        let id = self.arena.insert(Frame {
            value,
            up: None,
            down: self.head,
        });
        if let Some(head) = self.head {
            if let Some(frame) = self.arena.get_mut(head) {
                frame.up = Some(id);
            }
        } else {
            self.tail = Some(id);
        }
        self.head = Some(id);
    }

    fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        let frame = self.arena.remove(head)?;
        self.head = frame.down;
        match self.head {
            Some(new_head) => {
                if let Some(f) = self.arena.get_mut(new_head) {
                    f.up = None;
                }
            }
            None => self.tail = None,
        }
        Some(frame.value)
    }

    fn base(&mut self, value: T) {
        let id = self.arena.insert(Frame {
            value,
            up: self.tail,
            down: None,
        });
        if let Some(tail) = self.tail {
            if let Some(frame) = self.arena.get_mut(tail) {
                frame.down = Some(id);
            }
        } else {
            self.head = Some(id);
        }
        self.tail = Some(id);
    }

    fn sweep(&mut self) -> Option<T> {
        let tail = self.tail?;
        let frame = self.arena.remove(tail)?;
        self.tail = frame.up;
        match self.tail {
            Some(new_tail) => {
                if let Some(f) = self.arena.get_mut(new_tail) {
                    f.down = None;
                }
            }
            None => self.head = None,
        }
        Some(frame.value)
    }

    fn sweep_push(&mut self, value: T) -> Option<T> {
        match self.len() {
            0 => None,
            1 => {
                // head == tail: replace the element in place
                let frame = self.arena.get_mut(self.head?)?;
                Some(std::mem::replace(&mut frame.value, value))
            }
            _ => {
                // size >= 2, so sweeping never empties the stack
                let evicted = self.sweep()?;
                self.push(value);
                Some(evicted)
            }
        }
    }

    fn rotate(&mut self) -> bool {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) => (head, tail),
            _ => return false,
        };
        if head == tail {
            return true;
        }

        let new_tail = match self.arena.get(tail).and_then(|f| f.up) {
            Some(id) => id,
            None => return false,
        };
        if let Some(f) = self.arena.get_mut(new_tail) {
            f.down = None;
        }
        if let Some(f) = self.arena.get_mut(tail) {
            f.up = None;
            f.down = Some(head);
        }
        if let Some(f) = self.arena.get_mut(head) {
            f.up = Some(tail);
        }
        self.tail = Some(new_tail);
        self.head = Some(tail);
        true
    }

    fn flush(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    fn peek(&self) -> Option<&T> {
        self.head
            .and_then(|id| self.arena.get(id))
            .map(|frame| &frame.value)
    }

    fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let mut current = self.head;
        std::iter::from_fn(move || {
            let frame = self.arena.get(current?)?;
            current = frame.down;
            Some(&frame.value)
        })
    }

    fn check_invariants(&self) -> Result<(), String> {
        let len = self.len();
        match (self.head, self.tail) {
            (None, None) if len == 0 => return Ok(()),
            (None, None) => return Err(format!("no head/tail but size is {}", len)),
            (Some(_), None) | (None, Some(_)) => {
                return Err("exactly one of head/tail is absent".to_string())
            }
            (Some(_), Some(_)) if len == 0 => {
                return Err("head/tail present but size is 0".to_string())
            }
            (Some(head), Some(tail)) => {
                if len == 1 && head != tail {
                    return Err("size is 1 but head != tail".to_string());
                }
                let head_frame = self.arena.get(head).ok_or("head slot is free")?;
                if head_frame.up.is_some() {
                    return Err("head.up is set".to_string());
                }
                let tail_frame = self.arena.get(tail).ok_or("tail slot is free")?;
                if tail_frame.down.is_some() {
                    return Err("tail.down is set".to_string());
                }
            }
        }

        // walk down from head, checking every back link
        let mut steps = 0;
        let mut current = self.head;
        let mut previous = None;
        while let Some(id) = current {
            let frame = self.arena.get(id).ok_or("down chain reaches a free slot")?;
            if frame.up != previous {
                return Err(format!("frame {} has a wrong up link", id.index()));
            }
            if frame.down.is_none() && Some(id) != self.tail {
                return Err("down chain ends before tail".to_string());
            }
            previous = Some(id);
            current = frame.down;
            if current.is_some() {
                steps += 1;
            }
            if steps >= len {
                return Err("down chain is longer than size".to_string());
            }
        }
        if steps != len - 1 {
            return Err(format!("down chain has {} steps, size is {}", steps, len));
        }

        // and up from tail
        let mut steps = 0;
        let mut current = self.tail;
        while let Some(id) = current {
            let frame = self.arena.get(id).ok_or("up chain reaches a free slot")?;
            current = frame.up;
            if current.is_some() {
                steps += 1;
            }
            if steps >= len {
                return Err("up chain is longer than size".to_string());
            }
        }
        if steps != len - 1 {
            return Err(format!("up chain has {} steps, size is {}", steps, len));
        }
        Ok(())
    }
}

/// Thread-safe doubly-linked stack.
#[derive(Debug)]
pub struct LinkedStack<T> {
    frames: RwLock<Frames<T>>,
}

impl<T> LinkedStack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            frames: RwLock::new(Frames::new()),
        }
    }

    /// Push an element on top.
    pub fn push(&self, value: T) {
        self.frames.write().push(value);
    }

    /// Remove and return the top element, or `None` if empty.
    pub fn pop(&self) -> Option<T> {
        self.frames.write().pop()
    }

    /// Insert an element at the bottom.
    pub fn base(&self, value: T) {
        self.frames.write().base(value);
    }

    /// Remove and return the bottom element, or `None` if empty.
    pub fn sweep(&self) -> Option<T> {
        self.frames.write().sweep()
    }

    /// Atomically remove the bottom element and push `value` on top.
    ///
    /// Returns the evicted element, or `None` (and leaves `value` unused)
    /// if the stack is empty. Size is unchanged on success.
    pub fn sweep_push(&self, value: T) -> Option<T> {
        self.frames.write().sweep_push(value)
    }

    /// Move the bottom element to the top. Returns `false` if empty.
    pub fn rotate(&self) -> bool {
        self.frames.write().rotate()
    }

    /// Push under a capacity policy.
    ///
    /// The size read, the decision and the resulting push or sweep-push
    /// happen under one write guard. A stack above the maximum is swept
    /// down so that it holds exactly the maximum after the push.
    pub fn push_with_policy(&self, value: T, policy: &EvictionPolicy) -> PilaResult<PushOutcome<T>> {
        let mut frames = self.frames.write();
        match policy.decide(frames.len()) {
            PushDecision::Push => {
                frames.push(value);
                Ok(PushOutcome::Pushed)
            }
            PushDecision::EvictAndPush { evict } => {
                let mut evicted = Vec::with_capacity(evict);
                for _ in 1..evict {
                    evicted.extend(frames.sweep());
                }
                let last = frames.sweep_push(value).ok_or(PilaError::StackEmpty)?;
                evicted.push(last);
                Ok(PushOutcome::Evicted(evicted))
            }
            PushDecision::Reject { max } => Err(PilaError::CapacityExceeded { max }),
        }
    }

    /// Insert at the bottom under a capacity policy.
    ///
    /// A full stack rejects the insertion; nothing is evicted.
    pub fn base_with_policy(&self, value: T, policy: &EvictionPolicy) -> PilaResult<()> {
        let mut frames = self.frames.write();
        match policy.decide_base(frames.len()) {
            PushDecision::Reject { max } => Err(PilaError::CapacityExceeded { max }),
            _ => {
                frames.base(value);
                Ok(())
            }
        }
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.frames.read().len()
    }

    /// Whether the stack holds no element.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Drop every element.
    pub fn flush(&self) {
        self.frames.write().flush();
    }

    /// Validate the link structure.
    ///
    /// Checks that `size == 0` iff head and tail are absent, and that the
    /// `down` chain from head and the `up` chain from tail agree.
    pub fn check_invariants(&self) -> Result<(), String> {
        self.frames.read().check_invariants()
    }
}

impl<T: Clone> LinkedStack<T> {
    /// Clone of the top element, or `None` if empty.
    pub fn peek(&self) -> Option<T> {
        self.frames.read().peek().cloned()
    }

    /// Clone of every element, top first.
    pub fn to_vec(&self) -> Vec<T> {
        self.frames.read().iter().cloned().collect()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
