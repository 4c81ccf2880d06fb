//! Co-occurrence matrix construction and background-level reduction
//!
//! A gray-level co-occurrence matrix counts how often pairs of quantized
//! intensities appear at a fixed pixel offset. The matrix axes are
//! (level, level, distance, angle); counting is symmetric, so both
//! orientations of every pair are accumulated.

use ndarray::{Array2, Array4};

/// Co-occurrence sampling angle
///
/// The angle set is fixed; offsets are discretized to whole pixels, so at
/// distance 1 the 0 and pi/8 angles share the offset (0, 1). The duplicate
/// is kept: the feature layout counts four angle slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Angle {
    /// 0 radians
    Deg0,
    /// pi/8 radians (22.5 degrees)
    Deg22,
    /// pi/4 radians (45 degrees)
    Deg45,
    /// 3*pi/8 radians (67.5 degrees)
    Deg67,
}

impl Angle {
    /// All sampling angles in feature-vector order
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg22, Self::Deg45, Self::Deg67];

    /// The angle in radians
    pub const fn radians(self) -> f64 {
        match self {
            Self::Deg0 => 0.0,
            Self::Deg22 => std::f64::consts::FRAC_PI_8,
            Self::Deg45 => std::f64::consts::FRAC_PI_4,
            Self::Deg67 => 3.0 * std::f64::consts::FRAC_PI_8,
        }
    }

    /// Whole-pixel (row, col) offset at a sampling distance
    pub fn offset(self, distance: usize) -> (isize, isize) {
        let d = distance as f64;
        let rows = (self.radians().sin() * d).round() as isize;
        let cols = (self.radians().cos() * d).round() as isize;
        (rows, cols)
    }
}

/// Build a symmetric co-occurrence matrix over all sampling angles
///
/// Output axes are (level, level, distance, angle). Every in-bounds pixel
/// pair at each angle's offset increments both `(a, b)` and `(b, a)`, so
/// plane totals count each pair twice. Levels at or above the `levels`
/// bound are skipped.
pub fn cooccurrence_matrix(gray: &Array2<u8>, distances: &[usize], levels: usize) -> Array4<u64> {
    let (rows, cols) = gray.dim();
    let mut glcm = Array4::zeros((levels, levels, distances.len(), Angle::ALL.len()));

    for (d_index, &distance) in distances.iter().enumerate() {
        for (a_index, angle) in Angle::ALL.iter().enumerate() {
            let (row_offset, col_offset) = angle.offset(distance);
            for ((i, j), &level) in gray.indexed_iter() {
                let ni = i as isize + row_offset;
                let nj = j as isize + col_offset;
                if ni < 0 || nj < 0 || ni >= rows as isize || nj >= cols as isize {
                    continue;
                }
                let neighbor = gray.get((ni as usize, nj as usize)).copied().unwrap_or(0);
                let (a, b) = (usize::from(level), usize::from(neighbor));
                if let Some(count) = glcm.get_mut((a, b, d_index, a_index)) {
                    *count += 1;
                }
                if let Some(count) = glcm.get_mut((b, a, d_index, a_index)) {
                    *count += 1;
                }
            }
        }
    }
    glcm
}

/// Drop gray level 0 from both level axes
///
/// Background pixels collapse to level 0 and would otherwise dominate every
/// plane; removing the level before computing statistics keeps the texture
/// signal of the specimen itself.
pub fn strip_background_level(glcm: &Array4<u64>) -> Array4<u64> {
    let (level_rows, level_cols, n_distances, n_angles) = glcm.dim();
    let mut reduced = Array4::zeros((
        level_rows.saturating_sub(1),
        level_cols.saturating_sub(1),
        n_distances,
        n_angles,
    ));
    for ((i, j, d, a), count) in reduced.indexed_iter_mut() {
        *count = glcm.get((i + 1, j + 1, d, a)).copied().unwrap_or(0);
    }
    reduced
}
