// SPDX-License-Identifier: Apache-2.0

//! # Utility Functions
//!
//! ## Chain Validation (`chain_id`)
//! Verifies the stream is delivering the expected network's history, so a
//! misconfigured endpoint cannot silently fill the tables with another
//! chain's data.
//!
//! ## Resume Point (`starting_block`)
//! Determines where extraction starts: the configured starting block on a
//! fresh run, or one past the persisted cursor when resuming.

/// Chain id validation against the configured network
pub mod chain_id;

/// Starting-block resolution from config and the persisted cursor
pub mod starting_block;
