//! Rectangular boolean masks over map positions
//!
//! Used for blast areas and obstacle maps. Positions outside the rectangle
//! read as unset.

use std::collections::VecDeque;

/// A boolean mask over a rectangle of map positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    pub start_x: i32,
    pub start_y: i32,
    pub size_x: i32,
    pub size_y: i32,
    cells: Vec<bool>,
}

impl Area {
    pub fn new(start_x: i32, start_y: i32, size_x: i32, size_y: i32) -> Self {
        let size_x = size_x.max(0);
        let size_y = size_y.max(0);
        Self {
            start_x,
            start_y,
            size_x,
            size_y,
            cells: vec![false; (size_x * size_y) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let lx = x - self.start_x;
        let ly = y - self.start_y;
        if lx < 0 || ly < 0 || lx >= self.size_x || ly >= self.size_y {
            None
        } else {
            Some((ly * self.size_x + lx) as usize)
        }
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i])
    }

    pub fn set(&mut self, x: i32, y: i32, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    /// All set positions, row by row
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (self.start_y..self.start_y + self.size_y).flat_map(move |y| {
            (self.start_x..self.start_x + self.size_x)
                .filter(move |&x| self.get(x, y))
                .map(move |x| (x, y))
        })
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|c| **c).count()
    }

    /// A filled circle around a center
    pub fn circle(cx: i32, cy: i32, radius: i32) -> Self {
        let mut area = Self::new(cx - radius, cy - radius, 2 * radius + 1, 2 * radius + 1);
        // radius^2 + radius rounds the rim like a drawn circle
        let limit = radius * radius + radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= limit {
                    area.set(cx + dx, cy + dy, true);
                }
            }
        }
        area
    }

    /// The part of a circle reachable from its center without crossing an
    /// obstacle
    pub fn circle_flooded(cx: i32, cy: i32, radius: i32, obstacles: &Area) -> Self {
        let circle = Self::circle(cx, cy, radius);
        let mut flooded = Self::new(circle.start_x, circle.start_y, circle.size_x, circle.size_y);

        let mut queue = VecDeque::new();
        flooded.set(cx, cy, true);
        queue.push_back((cx, cy));

        while let Some((x, y)) = queue.pop_front() {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if (dx, dy) == (0, 0) || !circle.get(nx, ny) || flooded.get(nx, ny) {
                        continue;
                    }
                    if obstacles.get(nx, ny) {
                        continue;
                    }
                    flooded.set(nx, ny, true);
                    queue.push_back((nx, ny));
                }
            }
        }

        flooded
    }
}
