//! Drop geometry: pointer position to insert index

/// Fixed height of one rendered row, in pixels
pub const DEFAULT_ROW_HEIGHT: f64 = 50.0;

/// Map a drop pointer position to an insert index within a group
///
/// `clamp(floor((pointer_y - container_top) / row_height), 0, group_size)`.
/// A non-finite offset or a row height that is not a positive finite number
/// maps to 0.
pub fn drop_index(pointer_y: f64, container_top: f64, row_height: f64, group_size: usize) -> usize {
    if !row_height.is_finite() || row_height <= 0.0 {
        return 0;
    }
    let row = ((pointer_y - container_top) / row_height).floor();
    if !row.is_finite() || row <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates
    (row as usize).min(group_size)
}
