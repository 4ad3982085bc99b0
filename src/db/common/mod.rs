// SPDX-License-Identifier: Apache-2.0

//! Shared model definitions for all output tables.

pub mod models;
