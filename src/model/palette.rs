use egui::Color32;

/// Hand-picked base hues, used in order for the first ten stages.
pub const BASE_COLORS: [Color32; 10] = [
    Color32::from_rgb(0x1f, 0x77, 0xb4), // blue
    Color32::from_rgb(0xff, 0x7f, 0x0e), // orange
    Color32::from_rgb(0x2c, 0xa0, 0x2c), // green
    Color32::from_rgb(0xd6, 0x27, 0x28), // red
    Color32::from_rgb(0x94, 0x67, 0xbd), // purple
    Color32::from_rgb(0x8c, 0x56, 0x4b), // brown
    Color32::from_rgb(0xe3, 0x77, 0xc2), // pink
    Color32::from_rgb(0x7f, 0x7f, 0x7f), // gray
    Color32::from_rgb(0xbc, 0xbd, 0x22), // olive
    Color32::from_rgb(0x17, 0xbe, 0xcf), // cyan
];

const EXTRA_LIGHTNESS: f64 = 0.5;
const EXTRA_SATURATION: f64 = 0.8;

/// `n` distinct colors, one per stage index.
///
/// Beyond the base set, index `i` gets hue `i / n`, so the result depends
/// only on `n` and `i`.
pub fn palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| match BASE_COLORS.get(i) {
            Some(c) => *c,
            None => hls_to_rgb(i as f64 / n as f64, EXTRA_LIGHTNESS, EXTRA_SATURATION),
        })
        .collect()
}

/// `#rrggbb`, for HTML/CSS output.
pub fn css_color(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// HLS → 8-bit RGB. Channels are truncated, not rounded.
fn hls_to_rgb(h: f64, l: f64, s: f64) -> Color32 {
    let channel = |v: f64| (v * 255.0) as u8;
    if s == 0.0 {
        let v = channel(l);
        return Color32::from_rgb(v, v, v);
    }
    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;
    Color32::from_rgb(
        channel(hue_to_channel(m1, m2, h + 1.0 / 3.0)),
        channel(hue_to_channel(m1, m2, h)),
        channel(hue_to_channel(m1, m2, h - 1.0 / 3.0)),
    )
}

fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - hue) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_small_palette_uses_base_in_order() {
        let p = palette(3);
        assert_eq!(p, BASE_COLORS[..3].to_vec());
    }

    #[test]
    fn test_large_palette_extends_base() {
        let ten = palette(10);
        let twelve = palette(12);
        assert_eq!(twelve.len(), 12);
        assert_eq!(&twelve[..10], &ten[..]);
        let distinct: HashSet<_> = twelve.iter().collect();
        assert_eq!(distinct.len(), 12);
    }

    #[test]
    fn test_palette_is_deterministic() {
        assert_eq!(palette(25), palette(25));
        assert!(palette(0).is_empty());
    }

    #[test]
    fn test_hls_primaries() {
        // pure red at l=0.5, s=1.0
        assert_eq!(hls_to_rgb(0.0, 0.5, 1.0), Color32::from_rgb(255, 0, 0));
        // m1 = 0.1, m2 = 0.9 at the fixed lightness/saturation
        assert_eq!(
            hls_to_rgb(0.0, EXTRA_LIGHTNESS, EXTRA_SATURATION),
            Color32::from_rgb(229, 25, 25)
        );
    }

    #[test]
    fn test_css_color() {
        assert_eq!(css_color(BASE_COLORS[0]), "#1f77b4");
    }
}
