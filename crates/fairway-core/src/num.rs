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

//! # Interval Numeric Trait
//!
//! Unified numeric bounds for interval bound values. `IntervalNumeric`
//! collects the capabilities the interval model and its parser need into a
//! single alias: numeric semantics (`num_traits::Num`), a partial order,
//! by-value copying, and textual conversion in both directions.
//!
//! ## Motivation
//!
//! The interval algorithms are identical for every fixed-width integer and
//! floating-point type; only the bound capability differs. A single named
//! alias keeps generic signatures short and guarantees that every
//! instantiation supports exactly the operations the boundary semantics rely
//! on. `Num` restricts the alias to numeric scalars, so ordered `Copy` types
//! such as `bool` or `char` do not qualify.

use num_traits::Num;
use std::fmt::{Debug, Display};
use std::str::FromStr;

/// A trait alias for scalar types that can serve as interval bound values.
///
/// Implemented automatically for every type with numeric semantics, a partial
/// order, by-value copying, and `Display`/`FromStr` conversions, which in
/// practice means the fixed-width integers and the floating-point types.
///
/// `PartialOrd` rather than `Ord` keeps floating-point instantiations on the
/// table; the validator rejects bound values that admit no ordering (NaN)
/// before any algorithm relies on comparisons.
///
/// # Examples
///
/// ```rust
/// # use fairway_core::num::IntervalNumeric;
///
/// fn span<T: IntervalNumeric>(min: T, max: T) -> T {
///     max - min
/// }
///
/// assert_eq!(span(3i64, 10i64), 7);
/// assert_eq!(span(0.5f64, 2.0f64), 1.5);
/// ```
pub trait IntervalNumeric: Num + PartialOrd + Copy + Debug + Display + FromStr {}

impl<T> IntervalNumeric for T where T: Num + PartialOrd + Copy + Debug + Display + FromStr {}
