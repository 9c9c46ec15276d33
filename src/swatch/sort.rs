//! Perceptual ordering of palette colors
//!
//! Colors are ordered for presentation: ascending hue, ties broken by
//! descending saturation, remaining ties by ascending lightness. The sort
//! is stable, so re-sorting a sorted list never reorders it.

use crate::color::conversion::rgb_to_hsl;

/// Sort key: HSL with degenerate (NaN) components coerced to zero
fn sort_key(rgb: [u8; 3]) -> (f32, f32, f32) {
    let (h, s, l) = rgb_to_hsl(rgb);
    (
        if h.is_nan() { 0.0 } else { h },
        if s.is_nan() { 0.0 } else { s },
        if l.is_nan() { 0.0 } else { l },
    )
}

/// Order colors by hue, then saturation (descending), then lightness
///
/// Returns the colors still in RGB form, reordered.
pub fn sort_colors(colors: Vec<[u8; 3]>) -> Vec<[u8; 3]> {
    let mut keyed: Vec<((f32, f32, f32), [u8; 3])> = colors
        .into_iter()
        .map(|rgb| (sort_key(rgb), rgb))
        .collect();

    keyed.sort_by(|((ha, sa, la), _), ((hb, sb, lb), _)| {
        ha.total_cmp(hb)
            .then_with(|| sb.total_cmp(sa))
            .then_with(|| la.total_cmp(lb))
    });

    keyed.into_iter().map(|(_, rgb)| rgb).collect()
}
