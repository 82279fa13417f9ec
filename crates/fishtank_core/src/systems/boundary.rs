use fishtank_data::{Position, Viewport};

/// Constrains a position to `[0, width] x [0, height]`.
///
/// A degenerate viewport (zero or negative extent) pins the axis to 0.
#[must_use]
pub fn clamp_to_viewport(position: Position, viewport: Viewport) -> Position {
    Position {
        x: position.x.min(viewport.width).max(0.0),
        y: position.y.min(viewport.height).max(0.0),
    }
}
