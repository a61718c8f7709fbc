//! ASCII stage for drawing bodies in test snapshots
//!
//! Each cell is three characters wide. Cell `(i, j)` samples the world point
//! `(i - size / 2, j - size / 2)`, so rows grow downward with `y`.

#![allow(dead_code)]

use tumble_math::Vec2;
use tumble_physics::{intersects, Body};

pub struct Stage {
    size: usize,
    cells: Vec<Vec<String>>,
}

impl Stage {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec!["   ".to_string(); size]; size],
        }
    }

    fn offset(&self) -> f32 {
        self.size as f32 / 2.0
    }

    /// Fill every cell whose sample point intersects `body`
    pub fn draw_body(&mut self, character: &str, body: &Body) {
        let offset = self.offset();
        for j in 0..self.size {
            for i in 0..self.size {
                let cell = Body::new_point(Vec2::new(i as f32 - offset, j as f32 - offset));
                if intersects(body, &cell) {
                    self.cells[j][i] = format!(" {} ", character);
                }
            }
        }
    }

    /// Mark the cell nearest to `position`
    pub fn draw_point(&mut self, character: &str, position: Vec2) {
        let offset = self.offset();
        let i = (position.x + offset).round();
        let j = (position.y + offset).round();
        let max = self.size as f32;
        assert!(
            i >= 0.0 && i < max && j >= 0.0 && j < max,
            "{:?} is outside of the stage",
            position
        );
        self.cells[j as usize][i as usize] = format!(" {} ", character);
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = "   ".to_string();
            }
        }
    }

    pub fn output(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.concat()).collect()
    }
}

/// Arrow pointing along `v` in stage coordinates (y down)
pub fn arrow(v: Vec2) -> &'static str {
    let tau = std::f32::consts::TAU;
    let theta = (tau + v.y.atan2(v.x)) % tau;
    match ((theta / tau) * 8.0).round() as u32 % 8 {
        0 => "→",
        1 => "↘",
        2 => "↓",
        3 => "↙",
        4 => "←",
        5 => "↖",
        6 => "↑",
        _ => "↗",
    }
}
