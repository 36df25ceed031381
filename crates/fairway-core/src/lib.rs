// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Fairway Core
//!
//! Interval primitives and the coalescing engine for the Fairway toolkit.
//! An interval here is bounded below and above by a [`Limit`](interval::Limit):
//! a value paired with an open/closed flag, so the same bound value can either
//! include or exclude its endpoint. The engine folds any collection of such
//! intervals into the minimal, sorted, non-overlapping set covering the same
//! values.
//!
//! ## Modules
//!
//! - `interval`: The `Limit`/`Interval` data model with structural validation,
//!   point membership, the pairwise union rule, and canonical bracket-notation
//!   formatting.
//! - `merge`: The coalescing engine: validate, sort by lower bound, and sweep
//!   once left to right, plus the `is_coalesced` output predicate.
//! - `num`: The `IntervalNumeric` capability bound restricting the scalar
//!   parameter to ordered, copyable numeric types.
//! - `parse`: Bracket-notation literals (`"[2,5)"`) as `FromStr` for
//!   `Interval<T>`, with one distinct error per failure mode.
//!
//! ## Purpose
//!
//! Range-based reasoning (scheduling windows, numeric filters, version
//! ranges) keeps tripping over the same edge: two intervals that touch at a
//! value are one contiguous range or two disjoint ones depending purely on
//! which sides include that value. Centralizing the boundary semantics in one
//! crate keeps validation, parsing, and merging in exact agreement.
//!
//! Refer to each module for detailed APIs and examples.

pub mod interval;
pub mod merge;
pub mod num;
pub mod parse;
