//! Capacity and eviction policy for pushes
//!
//! A push is gated by the configured maximum stack size. The policy turns
//! the current size into an explicit [`PushDecision`], which the stack
//! applies in the same critical section that read the size. The decision
//! is never parked in shared state between the check and the insertion.

use serde::{Deserialize, Serialize};

/// Config sentinel meaning "no maximum".
pub const UNBOUNDED_SENTINEL: i64 = -1;

/// Maximum number of elements a stack may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StackCapacity {
    /// No limit
    #[default]
    Unbounded,
    /// At most this many elements
    Bounded(usize),
}

impl StackCapacity {
    /// Interpret a configured integer; any negative value means unbounded.
    pub fn from_config(value: i64) -> Self {
        if value < 0 {
            StackCapacity::Unbounded
        } else {
            StackCapacity::Bounded(value as usize)
        }
    }

    /// Integer form used by the configuration layer.
    pub fn as_config(&self) -> i64 {
        match self {
            StackCapacity::Unbounded => UNBOUNDED_SENTINEL,
            StackCapacity::Bounded(max) => *max as i64,
        }
    }

    /// Whether a stack of `size` elements has reached this capacity.
    pub fn is_reached(&self, size: usize) -> bool {
        match self {
            StackCapacity::Unbounded => false,
            StackCapacity::Bounded(max) => size >= *max,
        }
    }
}

/// Outcome of consulting the policy before a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushDecision {
    /// Room left: plain push
    Push,
    /// Full, eviction enabled: drop `evict` bottom elements and push on top
    ///
    /// `evict` is 1 for a stack exactly at its maximum, and more when the
    /// stack holds more than the maximum (after `MAX_STACK_SIZE` was
    /// lowered), so the push leaves it at the maximum.
    EvictAndPush {
        /// Number of bottom elements to drop
        evict: usize,
    },
    /// Full, eviction disabled (or nothing could ever fit)
    Reject {
        /// Configured maximum size
        max: usize,
    },
}

/// Capacity limit plus the push-when-full switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvictionPolicy {
    /// Maximum stack size
    pub capacity: StackCapacity,
    /// Evict the bottom element instead of rejecting when full
    pub push_when_full: bool,
}

impl EvictionPolicy {
    /// Policy that never rejects nor evicts.
    pub const UNBOUNDED: EvictionPolicy = EvictionPolicy {
        capacity: StackCapacity::Unbounded,
        push_when_full: false,
    };

    /// Create a policy.
    pub fn new(capacity: StackCapacity, push_when_full: bool) -> Self {
        EvictionPolicy {
            capacity,
            push_when_full,
        }
    }

    /// Decide how a push onto a stack currently holding `size` elements
    /// must be carried out.
    ///
    /// A zero capacity rejects every push: with nothing to evict, the
    /// stack can never accept an element.
    pub fn decide(&self, size: usize) -> PushDecision {
        match self.capacity {
            StackCapacity::Unbounded => PushDecision::Push,
            StackCapacity::Bounded(max) if size < max => PushDecision::Push,
            StackCapacity::Bounded(0) => PushDecision::Reject { max: 0 },
            StackCapacity::Bounded(max) if self.push_when_full => PushDecision::EvictAndPush {
                evict: size - max + 1,
            },
            StackCapacity::Bounded(max) => PushDecision::Reject { max },
        }
    }

    /// Decide how an insertion at the bottom must be carried out.
    ///
    /// Eviction never applies to the bottom end: a full stack rejects a
    /// base regardless of `push_when_full`.
    pub fn decide_base(&self, size: usize) -> PushDecision {
        match self.capacity {
            StackCapacity::Bounded(max) if size >= max => PushDecision::Reject { max },
            _ => PushDecision::Push,
        }
    }

    /// Whether a stack of `size` elements is full under this policy.
    pub fn is_full(&self, size: usize) -> bool {
        self.capacity.is_reached(size)
    }
}
