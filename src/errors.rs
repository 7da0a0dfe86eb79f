// ABOUTME: Error types re-exported from gravity-core for the host application
// ABOUTME: Keeps crate::errors import paths stable for stores, dashboard, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! `AppError`, `ErrorCode` and `AppResult` live in `gravity-core` so the
//! estimator crates share them; this module re-exports them.

pub use gravity_core::errors::*;
