// Pure sizing helpers for fitting the logical canvas into the viewport.
// Kept free of web_sys so host tests can include this file directly.

/// CSS placement of the canvas inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasFit {
    pub css_width: f64,
    pub css_height: f64,
    pub left: f64,
    pub top: f64,
    /// CSS pixels per logical canvas unit.
    pub scale: f64,
}

/// "Contain" policy: the largest uniform scale that fits the whole logical
/// canvas inside the viewport, centred on both axes.
pub fn contain_fit(logical_w: f64, logical_h: f64, viewport_w: f64, viewport_h: f64) -> CanvasFit {
    if logical_w <= 0.0 || logical_h <= 0.0 || viewport_w <= 0.0 || viewport_h <= 0.0 {
        return CanvasFit {
            css_width: logical_w.max(0.0),
            css_height: logical_h.max(0.0),
            left: 0.0,
            top: 0.0,
            scale: 1.0,
        };
    }
    let sx = viewport_w / logical_w;
    let sy = viewport_h / logical_h;
    // The limiting axis takes the viewport size exactly
    let (scale, css_width, css_height) = if sx <= sy {
        (sx, viewport_w, logical_h * sx)
    } else {
        (sy, logical_w * sy, viewport_h)
    };
    CanvasFit {
        css_width,
        css_height,
        left: (viewport_w - css_width) / 2.0,
        top: (viewport_h - css_height) / 2.0,
        scale,
    }
}

/// Backing store size for a logical canvas at the given device pixel ratio.
#[inline]
pub fn backing_size(logical_w: f64, logical_h: f64, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    (
        ((logical_w * dpr).round() as u32).max(1),
        ((logical_h * dpr).round() as u32).max(1),
    )
}

/// Map a point in CSS client space (relative to the canvas' top-left corner)
/// into logical canvas units.
#[inline]
pub fn client_to_logical(
    x_css: f64,
    y_css: f64,
    css_width: f64,
    css_height: f64,
    logical_w: f64,
    logical_h: f64,
) -> (f32, f32) {
    if css_width > 0.0 && css_height > 0.0 {
        (
            (x_css / css_width * logical_w) as f32,
            (y_css / css_height * logical_h) as f32,
        )
    } else {
        (0.0, 0.0)
    }
}
