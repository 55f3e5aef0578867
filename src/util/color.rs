//! RGB color arithmetic shared by the renderer strategies and surfaces.

/// Linear RGB color with components in `[0, 1]`.
pub type Rgb = [f32; 3];

/// Pure white; the fallback for atoms whose color cannot be resolved.
pub const WHITE: Rgb = [1.0, 1.0, 1.0];

/// Pure black.
pub const BLACK: Rgb = [0.0, 0.0, 0.0];

/// Multiply every channel by `factor`, clamping to `[0, 1]`.
#[must_use]
pub fn scale(color: Rgb, factor: f32) -> Rgb {
    [
        (color[0] * factor).clamp(0.0, 1.0),
        (color[1] * factor).clamp(0.0, 1.0),
        (color[2] * factor).clamp(0.0, 1.0),
    ]
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
#[must_use]
pub fn mix(a: Rgb, b: Rgb, t: f32) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    [
        a[0] + (b[0] - a[0]) * t,
        a[1] + (b[1] - a[1]) * t,
        a[2] + (b[2] - a[2]) * t,
    ]
}

/// Format as a `#rrggbb` hex string.
#[must_use]
pub fn to_hex(color: Rgb) -> String {
    let [r, g, b] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}
