// File: crates/burndown-core/src/geometry.rs
// Summary: Pixel rectangle for the plot area.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Plot area inside a `width` x `height` surface. Collapses to a
    /// one-pixel rect rather than inverting when the insets do not fit.
    pub fn plot_area(width: i32, height: i32, insets: &Insets) -> Self {
        let left = insets.left as i32;
        let top = insets.top as i32;
        let right = (width - insets.right as i32).max(left + 1);
        let bottom = (height - insets.bottom as i32).max(top + 1);
        Self::from_ltrb(left, top, right, bottom)
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_respects_insets() {
        let r = RectI32::plot_area(1000, 600, &Insets::new(80, 20, 50, 100));
        assert_eq!(r, RectI32::from_ltrb(80, 50, 980, 500));
        assert_eq!(r.width(), 900);
        assert_eq!(r.height(), 450);
    }

    #[test]
    fn plot_area_never_inverts() {
        let r = RectI32::plot_area(50, 50, &Insets::new(40, 40, 40, 40));
        assert!(r.width() >= 1);
        assert!(r.height() >= 1);
    }
}
