//! TerrainField: per-column height map with elevation queries.

use barrage_core::constants::FIELD_BOTTOM;

use crate::generate;

/// The battlefield silhouette: one height per horizontal pixel column.
///
/// A column of height `h` is solid from `FIELD_BOTTOM - h` down to
/// `FIELD_BOTTOM`. Heights never go negative; craters only lower columns
/// and collapse refills them at most back to their pre-blast height.
#[derive(Debug, Clone)]
pub struct TerrainField {
    pub heights: Vec<i32>,
    pub min_height: i32,
    pub max_height: i32,
}

impl TerrainField {
    /// Generate a fresh field from a seed. Same arguments, same field.
    pub fn generate(seed: u64, width: usize, min_height: i32, max_height: i32) -> Self {
        Self {
            heights: generate::generate_heights(seed, width, min_height, max_height),
            min_height,
            max_height,
        }
    }

    /// Build a field from explicit heights (tests, scripted scenarios).
    pub fn from_heights(heights: Vec<i32>, min_height: i32, max_height: i32) -> Self {
        Self {
            heights,
            min_height,
            max_height,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.heights.len()
    }

    /// Height at a column. Columns outside the field read as zero.
    pub fn height_at(&self, x: i32) -> i32 {
        if x < 0 {
            return 0;
        }
        self.heights.get(x as usize).copied().unwrap_or(0)
    }

    /// Screen-space y of the terrain surface at a column.
    pub fn surface_y(&self, x: i32) -> f32 {
        FIELD_BOTTOM - self.height_at(x) as f32
    }

    /// Tallest column under the footprint `[x0, x1)` — what a hull
    /// resting across those columns stands on.
    pub fn ground_height_under(&self, x0: f32, x1: f32) -> i32 {
        let first = x0.floor() as i32;
        let last = (x1.ceil() as i32 - 1).max(first);
        (first..=last).map(|x| self.height_at(x)).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_queries() {
        let field = TerrainField::from_heights(vec![10, 50, 100, 50, 10], 10, 100);
        assert_eq!(field.width(), 5);
        assert_eq!(field.height_at(2), 100);
        assert_eq!(field.height_at(-1), 0, "left of the field reads as zero");
        assert_eq!(field.height_at(5), 0, "right of the field reads as zero");
        assert!((field.surface_y(2) - (FIELD_BOTTOM - 100.0)).abs() < 1e-6);
    }

    #[test]
    fn test_ground_height_under_footprint() {
        let field = TerrainField::from_heights(vec![10, 50, 100, 50, 10], 10, 100);
        // Footprint spanning columns 0..3 rests on the 100 column.
        assert_eq!(field.ground_height_under(0.0, 3.0), 100);
        // Footprint on the flat ends sees only those columns.
        assert_eq!(field.ground_height_under(3.0, 5.0), 50);
        // Fractional edges still cover the columns they overlap.
        assert_eq!(field.ground_height_under(1.5, 2.5), 100);
    }
}
