// ABOUTME: Helper modules for glycemic-cli
// ABOUTME: Output formatting for text and JSON modes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
