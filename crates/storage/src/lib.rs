//! Storage layer for piladb
//!
//! This crate implements the element container behind every stack:
//! - FrameArena: slot arena holding linked frames
//! - LinkedStack: doubly-linked stack with top and bottom operations,
//!   rotation and policy-gated pushes, guarded by one `RwLock`
//!
//! The stack is generic over its element type. The engine stores
//! [`piladb_core::Value`]s in it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arena;
pub mod linked_stack;

pub use arena::{Frame, FrameArena, FrameId};
pub use linked_stack::{LinkedStack, PushOutcome};
