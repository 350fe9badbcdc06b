//! Crater carving with gravity-consistent collapse.
//!
//! Carving is per-column: each column inside the blast circle is lowered
//! to the circle's bottom edge, then any material that hung above the
//! cleared arc falls back in. The silhouette can never hold a cave, so
//! this keeps the field O(width) and carving O(radius).

use barrage_core::constants::FIELD_BOTTOM;

use crate::field::TerrainField;

/// Blow the circle `(x_center, y_center, radius)` out of the terrain.
///
/// Columns outside the field are skipped silently. A column is never
/// raised above its pre-blast height: step one only lowers, and the
/// collapse refill is bounded by the material that was actually there.
pub fn carve_crater(field: &mut TerrainField, x_center: f32, y_center: f32, radius: f32) {
    let original = field.heights.clone();

    let span = radius as i32;
    let xc = x_center as i32;
    for dx in -span..=span {
        let x = xc + dx;
        if x < 0 || x as usize >= field.heights.len() {
            continue;
        }
        let radicand = radius * radius - (dx * dx) as f32;
        if radicand < 0.0 {
            continue;
        }
        // Vertical half-chord of the blast circle at this column.
        let dy = radicand.sqrt();

        // Lowest point the circle reaches here, as a terrain height.
        let crater_y = y_center + dy;
        let crater_height = FIELD_BOTTOM - crater_y;

        let xi = x as usize;
        let lowered = (field.heights[xi] as f32).min(crater_height);
        field.heights[xi] = (lowered as i32).max(0);

        // Anything that sat above the cleared arc falls back in.
        let height_diff = original[xi] as f32 - (field.heights[xi] as f32 + dy);
        if height_diff > 0.0 {
            field.heights[xi] = (field.heights[xi] + height_diff as i32).min(FIELD_BOTTOM as i32);
        }
    }
}
