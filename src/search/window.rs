//! Sequential window cursor over the scan image.
//!
//! A cursor walks left to right in steps of the window width. When the next
//! window would overrun the right edge it returns to `x = 0` and moves down by
//! a single row, not by the window height, so consecutive rows of windows
//! overlap. Once a window would overrun the bottom edge the cursor is
//! exhausted for good.

use std::iter::FusedIterator;

/// Top-left corner of a window in scan coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WindowOrigin {
    /// Column of the left edge.
    pub x: usize,
    /// Row of the top edge.
    pub y: usize,
}

/// Stateful cursor yielding window origins for one window size.
#[derive(Clone, Debug)]
pub struct WindowCursor {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    scan_width: usize,
    scan_height: usize,
    exhausted: bool,
}

impl WindowCursor {
    /// Creates a cursor at `(0, 0)` for `width x height` windows.
    ///
    /// A window that cannot fit the scan at all yields no origins.
    pub fn new(width: usize, height: usize, scan_width: usize, scan_height: usize) -> Self {
        let exhausted = width == 0 || height == 0 || width > scan_width || height > scan_height;
        Self {
            x: 0,
            y: 0,
            width,
            height,
            scan_width,
            scan_height,
            exhausted,
        }
    }

    /// Window width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Window height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true once the cursor has run off the bottom of the scan.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn advance(&mut self) -> Option<WindowOrigin> {
        if self.exhausted {
            return None;
        }
        let mut max_x = self.x + self.width;
        let mut max_y = self.y + self.height;
        if max_x > self.scan_width {
            if max_y > self.scan_height {
                self.exhausted = true;
                return None;
            }
            self.x = 0;
            max_x = self.width;
            self.y += 1;
            max_y += 1;
        }
        if max_y > self.scan_height {
            self.exhausted = true;
            return None;
        }
        let origin = WindowOrigin {
            x: self.x,
            y: self.y,
        };
        self.x = max_x;
        Some(origin)
    }
}

impl Iterator for WindowCursor {
    type Item = WindowOrigin;

    fn next(&mut self) -> Option<WindowOrigin> {
        self.advance()
    }
}

impl FusedIterator for WindowCursor {}
