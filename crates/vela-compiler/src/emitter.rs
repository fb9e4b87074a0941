// -------------------------------------------------------------------------
// SPDX-FileCopyrightText: Copyright © 2025 The Vela Project
// SPDX-FileName: crates/vela-compiler/src/emitter.rs
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
//! The codegen seam the pattern compiler drives.
//!
//! `vela-compiler` never emits machine code or LLVM IR itself; it only
//! decides *which* control flow a match expression needs and asks an
//! `Emitter` to produce it. A real backend (LLVM, a bytecode VM, ...)
//! implements this trait once; the pattern compiler is written entirely
//! against it and stays backend-agnostic.
//!
//! The operation set mirrors what a tagged-union pattern match actually
//! needs at the instruction level: block management, conditional
//! branching, a handful of comparisons, and the struct-like accessors a
//! union's `(tag, payload...)` layout requires.

/// A backend capable of emitting the control flow a pattern match
/// compiles down to.
///
/// `Value`, `BasicBlock`, and `Function` are opaque handles owned by the
/// implementing backend; the pattern compiler only ever passes them back
/// to the emitter, never inspects them.
pub trait Emitter {
    /// A value produced by some emitted instruction.
    type Value: Clone;
    /// A handle to a basic block in the function currently being built.
    type BasicBlock: Copy + Eq;
    /// A handle to the function currently being built.
    type Function: Copy + Eq;

    /// The function basic blocks are currently being allocated into.
    fn current_function(&self) -> Self::Function;

    /// Creates a new, empty basic block in the current function.
    fn new_block(&mut self, name: &str) -> Self::BasicBlock;

    /// Redirects subsequent emission to `block`.
    fn set_insert_point(&mut self, block: Self::BasicBlock);

    /// Emits an unconditional branch to `target`.
    fn br(&mut self, target: Self::BasicBlock);

    /// Emits a conditional branch: `then_block` if `cond` holds, else
    /// `else_block`.
    fn cond_br(&mut self, cond: &Self::Value, then_block: Self::BasicBlock, else_block: Self::BasicBlock);

    /// Integer equality comparison.
    fn icmp_eq(&mut self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

    /// Ordered float equality comparison.
    fn fcmp_oeq(&mut self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

    /// Library string equality.
    fn str_eq(&mut self, lhs: &Self::Value, rhs: &Self::Value) -> Self::Value;

    /// Produces a constant integer value, for tag comparisons and the
    /// like.
    fn const_int(&mut self, value: u64) -> Self::Value;

    /// Produces a constant float value from its bit pattern, for
    /// float-literal pattern comparisons.
    fn const_float(&mut self, bits: u64) -> Self::Value;

    /// Produces a constant string value, for string-literal pattern
    /// comparisons.
    fn const_str(&mut self, value: &str) -> Self::Value;

    /// Extracts element `index` from an aggregate value (a tuple or a
    /// union's `(tag, payload...)` layout already loaded into a value).
    fn extract_field(&mut self, value: &Self::Value, index: u32) -> Self::Value;

    /// Extracts the discriminant tag from a union value already loaded
    /// into a value (field 0 of its `(tag, payload...)` layout).
    fn tag_of(&mut self, value: &Self::Value) -> Self::Value;

    /// Bitcasts `value` (a pointer to the match subject) to the layout
    /// of a union variant carrying `payload_arity` fields after its tag
    /// byte.
    fn bitcast(&mut self, value: &Self::Value, payload_arity: usize) -> Self::Value;

    /// Loads field `index` out of a bitcast union-variant pointer via a
    /// struct GEP.
    fn struct_gep_load(&mut self, value: &Self::Value, index: u32) -> Self::Value;

    /// Takes the address of `value`, for the downcast bitcast above.
    fn addr_of(&mut self, value: &Self::Value) -> Self::Value;

    /// Merges `incoming` (value, predecessor block) pairs at the current
    /// insert point.
    fn phi(&mut self, incoming: &[(Self::Value, Self::BasicBlock)]) -> Self::Value;

    /// An uninitialized value of whatever type the merge above expects.
    /// Used when every match branch returns early and LLVM still needs a
    /// value for blocks it cannot prove are unreachable.
    fn undef(&mut self) -> Self::Value;

    /// The canonical unit value, for wholly-returning matches and
    /// nullary constructors.
    fn get_unit_literal(&mut self) -> Self::Value;
}
