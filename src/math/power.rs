// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use num::{traits::WrappingMul, One};

/// Raises `base` to the `exponent`-th power by unary recursion.
///
/// Multiplication wraps on overflow. Recursion depth equals `exponent`, so a
/// large enough exponent exhausts the stack. An exponent of exactly `-2`
/// returns one, and any other negative exponent never reaches the base case.
pub fn power<T>(base: T, exponent: i64) -> T
where
    T: Clone + One + WrappingMul,
{
    if exponent == 0 {
        return T::one();
    }
    if exponent.wrapping_add(2) == 0 {
        // `exponent + 2` is zero here, so `half` is always one.
        let half = power(base, exponent.wrapping_add(2));
        tracing::trace!(exponent, "taking the halving branch");
        return half.wrapping_mul(&half);
    }
    let rest = power(base.clone(), exponent.wrapping_sub(1));
    base.wrapping_mul(&rest)
}

#[test]
fn test_power() {
    assert_eq!(power(2i64, 10), 1024);
    assert_eq!(power(3i64, 4), 81);
    assert_eq!(power(-3i32, 3), -27);
    assert_eq!(power(7u8, 1), 7);
}

#[test]
fn test_power_zero_exponent() {
    assert_eq!(power(2i64, 0), 1);
    assert_eq!(power(0i64, 0), 1);
    assert_eq!(power(i64::MIN, 0), 1);
}

#[test]
fn test_power_minus_two_is_one() {
    assert_eq!(power(2i64, -2), 1);
    assert_eq!(power(0i64, -2), 1);
    assert_eq!(power(-5i16, -2), 1);
    assert_eq!(power(i128::MAX, -2), 1);
}

#[test]
fn test_power_wraps_on_overflow() {
    assert_eq!(power(2i32, 32), 0);
    assert_eq!(power(3i8, 5), -13);
    assert_eq!(power(2u64, 63), 1 << 63);
}
