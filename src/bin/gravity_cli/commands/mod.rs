// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for gravity-cli
// ABOUTME: Provides access to user, measurement, trend, and chart commands

pub mod chart;
pub mod measurement;
pub mod trend;
pub mod user;
