//! Slot arena holding the frames of a [`LinkedStack`](crate::LinkedStack).
//!
//! Frames link to each other by [`FrameId`] instead of by pointer, so the
//! doubly-linked structure needs no `unsafe` and no reference counting.
//! Freed slots are recycled through a free list.

/// Stable handle to a frame slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(usize);

impl FrameId {
    /// Slot index inside the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the stack: an element plus its two neighbours.
///
/// `down` points toward the bottom (older elements), `up` toward the top.
#[derive(Debug)]
pub struct Frame<T> {
    /// Stored element
    pub value: T,
    /// Neighbour toward the top, absent for the head
    pub up: Option<FrameId>,
    /// Neighbour toward the bottom, absent for the tail
    pub down: Option<FrameId>,
}

/// Vector of optional frames plus a free list.
#[derive(Debug)]
pub struct FrameArena<T> {
    slots: Vec<Option<Frame<T>>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T> FrameArena<T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }

    /// Store a frame and return its id.
    pub fn insert(&mut self, frame: Frame<T>) -> FrameId {
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx] = Some(frame);
            idx
        } else {
            self.slots.push(Some(frame));
            self.slots.len() - 1
        };
        self.len += 1;
        FrameId(idx)
    }

    /// Free a slot, returning its frame.
    pub fn remove(&mut self, id: FrameId) -> Option<Frame<T>> {
        let slot = self.slots.get_mut(id.0)?;
        let frame = slot.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(frame)
    }

    /// Frame at `id`, if live.
    pub fn get(&self, id: FrameId) -> Option<&Frame<T>> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Mutable frame at `id`, if live.
    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut Frame<T>> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Number of live frames.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no frame is live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every frame and release the backing storage.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free_list = Vec::new();
        self.len = 0;
    }
}

impl<T> Default for FrameArena<T> {
    fn default() -> Self {
        Self::new()
    }
}
