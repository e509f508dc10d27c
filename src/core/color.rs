use crate::domain::model::ResolvedColor;

/// Resolve a 6-digit hex color specification, with or without a leading '#'.
/// Anything that is not exactly six hex digits resolves to black; a bad
/// color is never an error.
pub fn resolve(spec: &str) -> ResolvedColor {
    let hex = spec.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return ResolvedColor::BLACK;
    }

    let channel = |group: &str| match u8::from_str_radix(group, 16) {
        Ok(v) => f32::from(v) / 255.0,
        Err(_) => 0.0,
    };

    ResolvedColor {
        r: channel(&hex[0..2]),
        g: channel(&hex[2..4]),
        b: channel(&hex[4..6]),
    }
}
