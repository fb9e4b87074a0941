// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/lib.rs
// SPDX-FileType: SOURCE
// SPDX-License-Identifier: Apache-2.0
// -------------------------------------------------------------------------
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
// -------------------------------------------------------------------------
//! Vela Compiler Library
//!
//! This crate takes a parsed, name-resolved Vela module and compiles its
//! `match` expressions down to decision trees, checking exhaustiveness
//! along the way. It never generates machine code itself; [`emitter`]
//! defines the trait a real backend implements so the pattern compiler
//! stays independent of any particular target.

/// Version of the Vela compiler
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod common;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod pattern;
