//! Mathematics and style text for the decorative effects.
//!
//! Extracted from the DOM-facing effect installers for testability: these
//! functions are pure, target-independent, and carry the exact values the
//! stylesheet and animations depend on.

/// Position of one cursor-trail dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDot {
    pub x: f64,
    pub y: f64,
}

impl TrailDot {
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Advance the trail by one animation frame.
///
/// The leading dot snaps to the pointer target; every following dot moves
/// toward its predecessor by `easing` of the remaining distance.
pub fn step_trail(dots: &mut [TrailDot], target_x: f64, target_y: f64, easing: f64) {
    if let Some(first) = dots.first_mut() {
        first.x = target_x;
        first.y = target_y;
    }
    for i in 1..dots.len() {
        let prev = dots[i - 1];
        dots[i].x += (prev.x - dots[i].x) * easing;
        dots[i].y += (prev.y - dots[i].y) * easing;
    }
}

/// Diameter of trail dot `index`, shrinking along the trail.
pub fn trail_dot_size(index: usize) -> f64 {
    8.0 - index as f64 * 0.5
}

/// Opacity of trail dot `index`, fading along the trail.
pub fn trail_dot_opacity(index: usize) -> f64 {
    1.0 - index as f64 * 0.08
}

/// Inline style for trail dot `index`.
pub fn trail_dot_style(index: usize) -> String {
    format!(
        "position: fixed; width: {size}px; height: {size}px; \
         background: linear-gradient(135deg, var(--clr-primary), var(--clr-secondary)); \
         border-radius: 50%; pointer-events: none; opacity: {opacity}; \
         z-index: 9999; transition: transform 0.1s ease; mix-blend-mode: screen;",
        size = trail_dot_size(index),
        opacity = trail_dot_opacity(index),
    )
}

/// Vertical parallax offset for element `index` at the given scroll
/// position. Elements further down the page move faster.
pub fn parallax_offset(scrolled: f64, index: usize) -> f64 {
    let speed = 0.5 + index as f64 * 0.1;
    -((scrolled * speed) / 10.0)
}

/// Pointer position as a percentage of the viewport axis, for the
/// `--mouse-x`/`--mouse-y` custom properties.
pub fn pointer_percent(client: f64, viewport: f64) -> f64 {
    if viewport <= 0.0 {
        return 0.0;
    }
    (client / viewport) * 100.0
}

/// Translation for the magnetic hover effect: a fraction of the pointer's
/// offset from the element center.
pub fn magnetic_translation(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> (f64, f64) {
    let dx = client_x - rect_left - rect_width / 2.0;
    let dy = client_y - rect_top - rect_height / 2.0;
    (dx * 0.2, dy * 0.2)
}

/// Inline style for one floating particle.
///
/// All inputs are pre-rolled random values so the formatting stays pure:
/// position and size in their final units, delay/duration in seconds,
/// `primary` picking between the two palette colors.
pub fn particle_style(
    x_pct: f64,
    y_pct: f64,
    size_px: f64,
    delay_s: f64,
    duration_s: f64,
    primary: bool,
    blur_px: f64,
) -> String {
    let color = if primary {
        "var(--clr-primary)"
    } else {
        "var(--clr-secondary)"
    };
    format!(
        "position: absolute; left: {x_pct:.2}%; top: {y_pct:.2}%; \
         width: {size_px:.2}px; height: {size_px:.2}px; \
         background: radial-gradient(circle, {color}, transparent); \
         border-radius: 50%; opacity: 0; \
         animation: particleFloat {duration_s:.2}s ease-in-out infinite; \
         animation-delay: {delay_s:.2}s; filter: blur({blur_px:.2}px);"
    )
}

/// Keyframes for the particle float animation, injected once per page.
pub const PARTICLE_KEYFRAMES: &str = "\
@keyframes particleFloat {
    0%, 100% { transform: translate(0, 0) rotate(0deg) scale(1); opacity: 0; }
    10% { opacity: 0.4; }
    25% { transform: translate(30px, -80px) rotate(90deg) scale(1.2); opacity: 0.7; }
    50% { transform: translate(-40px, -150px) rotate(180deg) scale(0.9); opacity: 0.8; }
    75% { transform: translate(60px, -100px) rotate(270deg) scale(1.1); opacity: 0.5; }
    90% { opacity: 0.3; }
}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_dot_snaps_to_target() {
        let mut dots = vec![TrailDot::origin(); 3];
        step_trail(&mut dots, 100.0, 50.0, 0.3);
        assert_eq!(dots[0], TrailDot { x: 100.0, y: 50.0 });
    }

    #[test]
    fn followers_ease_toward_predecessor() {
        let mut dots = vec![TrailDot::origin(); 2];
        step_trail(&mut dots, 100.0, 0.0, 0.3);
        assert!((dots[1].x - 30.0).abs() < 1e-9);
        assert_eq!(dots[1].y, 0.0);

        // A second frame closes 30% of the remaining distance.
        step_trail(&mut dots, 100.0, 0.0, 0.3);
        assert!((dots[1].x - 51.0).abs() < 1e-9);
    }

    #[test]
    fn trail_converges_on_stationary_target() {
        let mut dots = vec![TrailDot::origin(); 12];
        for _ in 0..200 {
            step_trail(&mut dots, 640.0, 360.0, 0.3);
        }
        let last = dots.last().unwrap();
        assert!((last.x - 640.0).abs() < 0.5);
        assert!((last.y - 360.0).abs() < 0.5);
    }

    #[test]
    fn empty_trail_is_a_no_op() {
        step_trail(&mut [], 10.0, 10.0, 0.3);
    }

    #[test]
    fn dot_sizes_and_opacities_shrink_along_trail() {
        assert_eq!(trail_dot_size(0), 8.0);
        assert_eq!(trail_dot_opacity(0), 1.0);
        for i in 1..12 {
            assert!(trail_dot_size(i) < trail_dot_size(i - 1));
            assert!(trail_dot_opacity(i) < trail_dot_opacity(i - 1));
        }
    }

    #[test]
    fn parallax_moves_up_and_scales_with_index() {
        assert_eq!(parallax_offset(0.0, 0), 0.0);
        assert_eq!(parallax_offset(100.0, 0), -5.0);
        assert_eq!(parallax_offset(100.0, 5), -10.0);
        assert!(parallax_offset(100.0, 3) < parallax_offset(100.0, 1));
    }

    #[test]
    fn pointer_percent_spans_viewport() {
        assert_eq!(pointer_percent(0.0, 1920.0), 0.0);
        assert_eq!(pointer_percent(960.0, 1920.0), 50.0);
        assert_eq!(pointer_percent(1920.0, 1920.0), 100.0);
        // Degenerate viewport must not divide by zero.
        assert_eq!(pointer_percent(10.0, 0.0), 0.0);
    }

    #[test]
    fn magnetic_translation_is_zero_at_center() {
        let (tx, ty) = magnetic_translation(50.0, 50.0, 25.0, 25.0, 50.0, 50.0);
        assert_eq!((tx, ty), (0.0, 0.0));
    }

    #[test]
    fn magnetic_translation_is_a_fifth_of_the_offset() {
        let (tx, ty) = magnetic_translation(60.0, 40.0, 25.0, 25.0, 50.0, 50.0);
        assert!((tx - 2.0).abs() < 1e-9);
        assert!((ty - (-2.0)).abs() < 1e-9);
    }

    #[test]
    fn particle_style_carries_its_inputs() {
        let css = particle_style(12.5, 80.0, 4.25, 3.0, 22.5, true, 1.5);
        assert!(css.contains("left: 12.50%"));
        assert!(css.contains("top: 80.00%"));
        assert!(css.contains("width: 4.25px"));
        assert!(css.contains("animation-delay: 3.00s"));
        assert!(css.contains("particleFloat 22.50s"));
        assert!(css.contains("var(--clr-primary)"));
        assert!(css.contains("blur(1.50px)"));

        let css = particle_style(0.0, 0.0, 2.0, 0.0, 20.0, false, 0.0);
        assert!(css.contains("var(--clr-secondary)"));
    }
}
