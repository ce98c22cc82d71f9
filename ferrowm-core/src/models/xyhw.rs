//! Window geometry.
#![allow(clippy::module_name_repetitions)]
use serde::{Deserialize, Serialize};
use std::cmp;

/// Window placement and size. x,y from top left of the root window.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Copy)]
pub struct Xyhw {
    x: i32,
    y: i32,
    h: i32,
    w: i32,
}

impl Xyhw {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, h, w }
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn w(&self) -> i32 {
        self.w
    }

    #[must_use]
    pub const fn h(&self) -> i32 {
        self.h
    }

    /// Same size, translated by the given offset.
    #[must_use]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same position, grown by the given offset. Width and height never drop below 1.
    #[must_use]
    pub fn grown(&self, dw: i32, dh: i32) -> Self {
        Self {
            w: cmp::max(1, self.w + dw),
            h: cmp::max(1, self.h + dh),
            ..*self
        }
    }

    /// Same size, placed in the middle of `area`.
    #[must_use]
    pub const fn centered_in(&self, area: &Self) -> Self {
        Self {
            x: area.x + area.w / 2 - self.w / 2,
            y: area.y + area.h / 2 - self.h / 2,
            ..*self
        }
    }

    #[must_use]
    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn growing_should_never_produce_degenerate_sizes() {
        let xyhw = Xyhw::new(10, 10, 100, 50);
        let grown = xyhw.grown(-500, -500);
        assert_eq!(grown.w(), 1);
        assert_eq!(grown.h(), 1);
        assert_eq!((grown.x(), grown.y()), (10, 10));
    }

    #[test]
    fn translating_should_keep_the_size() {
        let xyhw = Xyhw::new(10, 20, 100, 50);
        assert_eq!(xyhw.translated(-15, 5), Xyhw::new(-5, 25, 100, 50));
    }

    #[test]
    fn centering_uses_the_area_origin() {
        let area = Xyhw::new(100, 0, 1000, 800);
        let xyhw = Xyhw::new(0, 0, 200, 100);
        let centered = xyhw.centered_in(&area);
        assert_eq!(centered, Xyhw::new(500, 350, 200, 100));
        assert_eq!(centered.center(), area.center());
    }
}
