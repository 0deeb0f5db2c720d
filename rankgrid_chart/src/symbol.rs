// Copyright 2026 the RankGrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker shapes for the overlay points.

use kurbo::{BezPath, Circle, Shape};

/// The shape drawn at each resolved overlay point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A circle.
    #[default]
    Circle,
    /// An axis-aligned square.
    Square,
    /// A square rotated 45 degrees.
    Diamond,
}

impl Symbol {
    /// Returns a closed path for this symbol centered at `(cx, cy)`, with
    /// `size` as the diameter or side length.
    pub fn path(self, cx: f64, cy: f64, size: f64) -> BezPath {
        let half = size * 0.5;
        match self {
            Self::Circle => {
                // Flattening tolerance chosen for on-screen sizes.
                Circle::new((cx, cy), half).path_elements(0.1).collect()
            }
            Self::Square => {
                let mut p = BezPath::new();
                p.move_to((cx - half, cy - half));
                p.line_to((cx + half, cy - half));
                p.line_to((cx + half, cy + half));
                p.line_to((cx - half, cy + half));
                p.close_path();
                p
            }
            Self::Diamond => {
                let mut p = BezPath::new();
                p.move_to((cx, cy - half));
                p.line_to((cx + half, cy));
                p.line_to((cx, cy + half));
                p.line_to((cx - half, cy));
                p.close_path();
                p
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Shape;

    use super::*;

    #[test]
    fn symbol_paths_are_centered_on_the_point() {
        for symbol in [Symbol::Circle, Symbol::Square, Symbol::Diamond] {
            let bbox = symbol.path(10.0, 20.0, 12.0).bounding_box();
            assert!((bbox.center().x - 10.0).abs() < 1e-6, "{symbol:?}");
            assert!((bbox.center().y - 20.0).abs() < 1e-6, "{symbol:?}");
            assert!((bbox.width() - 12.0).abs() < 0.1, "{symbol:?}");
        }
    }
}
