// Copyright 2026 the Solvara Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen-percentage to readout coordinate conversion.
//!
//! The sprite is positioned in screen percentages with the origin at the
//! bottom-left corner. The coordinate readout shows a grid centered on the
//! screen where each percentage point counts as two units.

use libm::floor;

/// Converts a horizontal screen percentage to the readout `X` value.
///
/// `floor((p - 50) * 2)`: 0 % maps to -100, 50 % to 0, 100 % to 100.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "inputs are percentages; the floored result is within ±200"
)]
pub fn screen_to_game_x(screen_percent_x: f64) -> i32 {
    floor((screen_percent_x - 50.0) * 2.0) as i32
}

/// Converts a vertical screen percentage to the readout `Y` value.
///
/// `floor((50 - p) * 2)`: 0 % maps to 100, 50 % to 0, 100 % to -100.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "inputs are percentages; the floored result is within ±200"
)]
pub fn screen_to_game_y(screen_percent_y: f64) -> i32 {
    floor((50.0 - screen_percent_y) * 2.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_origin() {
        assert_eq!(screen_to_game_x(50.0), 0);
        assert_eq!(screen_to_game_y(50.0), 0);
    }

    #[test]
    fn edges() {
        assert_eq!(screen_to_game_x(0.0), -100);
        assert_eq!(screen_to_game_x(100.0), 100);
        assert_eq!(screen_to_game_y(0.0), 100);
        assert_eq!(screen_to_game_y(100.0), -100);
    }

    #[test]
    fn fractional_values_floor_toward_negative_infinity() {
        // (51.3 - 50) * 2 = 2.6 -> 2
        assert_eq!(screen_to_game_x(51.3), 2);
        // (48.7 - 50) * 2 = -2.6 -> -3
        assert_eq!(screen_to_game_x(48.7), -3);
        // (50 - 85.5) * 2 = -71
        assert_eq!(screen_to_game_y(85.5), -71);
        // (50 - 86.75) * 2 = -73.5 -> -74
        assert_eq!(screen_to_game_y(86.75), -74);
    }
}
