// board.rs
// Character grid rebuilt from particle positions every frame. Written by the engine, read by rendering.

use crate::error::{Error, Result};
use crate::vector::Vec2i;
use std::fmt;

/// A `width x height` grid of display characters, stored row-major.
///
/// Cells are addressed as `(row = v.y, column = v.x)`, so a position's `x` is checked
/// against the width and its `y` against the height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    fill: char,
    cells: Vec<char>,
}

impl Board {
    pub fn new(width: i32, height: i32, fill: char) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidArgument(format!(
                "board dimensions must be positive, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            fill,
            cells: vec![fill; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The character the board was created with.
    pub fn fill(&self) -> char {
        self.fill
    }

    pub fn contains(&self, v: Vec2i) -> bool {
        v.within(self.width, self.height)
    }

    fn index(&self, v: Vec2i) -> Result<usize> {
        if !self.contains(v) {
            return Err(Error::IndexOutOfRange {
                x: v.x,
                y: v.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(v.y as usize * self.width as usize + v.x as usize)
    }

    pub fn get_tile(&self, v: Vec2i) -> Result<char> {
        let i = self.index(v)?;
        Ok(self.cells[i])
    }

    pub fn set_tile(&mut self, v: Vec2i, c: char) -> Result<()> {
        let i = self.index(v)?;
        self.cells[i] = c;
        Ok(())
    }

    /// Overwrite every cell with `c`.
    pub fn clear(&mut self, c: char) {
        self.cells.fill(c);
    }

    /// Rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width as usize)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for c in row {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
