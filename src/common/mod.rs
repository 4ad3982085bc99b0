// SPDX-License-Identifier: Apache-2.0

//! # Common Shared Components
//!
//! ## Cursor Management
//!
//! The cursor store persists the last successfully flushed block height so
//! a restarted run resumes where the previous one committed, instead of
//! re-extracting from the configured starting block. The cursor is written
//! only after a flush completes, keeping the persisted height consistent
//! with the partitioned files on disk.

pub mod cursor_store;

pub use cursor_store::CursorStore;
