//! Pointer-driven 3D tilt for hero cards.

/// Element rectangle in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

const MAX_ROTATE_X_DEG: f64 = 8.0;
const MAX_ROTATE_Y_DEG: f64 = 10.0;

/// CSS transform for a pointer at `(x, y)` over `bounds`.
///
/// The pointer is normalised to `-0.5..=0.5` around the centre. `None` when
/// the element has no area (not laid out yet).
pub fn tilt_transform(x: f64, y: f64, bounds: Bounds) -> Option<String> {
    if !(bounds.width > 0.0 && bounds.height > 0.0) {
        return None;
    }
    let nx = (x - bounds.left) / bounds.width - 0.5;
    let ny = (y - bounds.top) / bounds.height - 0.5;
    let rotate_x = -ny * MAX_ROTATE_X_DEG;
    let rotate_y = nx * MAX_ROTATE_Y_DEG;
    Some(format!(
        "perspective(900px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg) scale(1.02)"
    ))
}
