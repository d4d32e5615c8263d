//! Pure animation math shared by every section: clamped piecewise-linear
//! mappings, scroll-progress geometry, the navbar hide/show tracker, and the
//! pointer-driven micro-interactions. No DOM types here, so the whole module
//! is unit-testable on the host target.

pub const NAV_HIDE_THRESHOLD: f64 = 150.0;
pub const TILT_MAX_DEGREES: f64 = 3.0;
pub const TILT_SCALE: f64 = 1.02;
pub const GLIDE_SMOOTHING: f64 = 0.12;
pub const DOT_PULSE_BASE: f64 = 0.35;
pub const DOT_PULSE_AMPLITUDE: f64 = 0.3;
pub const DOT_PULSE_SPEED: f64 = 0.0012;

/// How an element's scroll range is anchored to the viewport, mirroring the
/// two offset conventions the sections use.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollRange {
    /// Progress runs while the element leaves through the top: 0 when its
    /// top sits at the viewport top, 1 when its bottom reaches the top.
    /// Used by the hero, which starts pinned at the top of the page.
    ExitTop,
    /// Progress runs across the full traversal: 0 when the element's top
    /// enters at the viewport bottom, 1 when its bottom exits at the top.
    Traverse,
}

/// Normalized [0, 1] progress of an element through its scroll range, from
/// its viewport-relative top edge and height.
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64, range: ScrollRange) -> f64 {
    let raw = match range {
        ScrollRange::ExitTop => {
            if height <= 0.0 {
                return 0.0;
            }
            -top / height
        }
        ScrollRange::Traverse => {
            let span = viewport_height + height;
            if span <= 0.0 {
                return 0.0;
            }
            (viewport_height - top) / span
        }
    };

    raw.clamp(0.0, 1.0)
}

/// Clamped piecewise-linear map between matching control-point lists.
/// Inputs must be strictly increasing; values outside the input range pin to
/// the first/last output.
pub fn piecewise(input: &[f64], output: &[f64], t: f64) -> f64 {
    debug_assert_eq!(input.len(), output.len());
    debug_assert!(input.windows(2).all(|pair| pair[0] < pair[1]));

    let Some((&first_in, &first_out)) = input.first().zip(output.first()) else {
        return 0.0;
    };
    if t <= first_in {
        return first_out;
    }

    for index in 1..input.len() {
        if t <= input[index] {
            let span = input[index] - input[index - 1];
            let local = (t - input[index - 1]) / span;
            return lerp(output[index - 1], output[index], local);
        }
    }

    output[output.len() - 1]
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavState {
    Visible,
    Hidden,
}

/// Scroll-direction tracker behind the auto-hiding navbar. Hidden exactly
/// when the latest update moved downward while past the threshold; any
/// upward movement or sub-threshold offset shows the bar again.
pub struct NavTracker {
    last_offset: f64,
    state: NavState,
}

impl NavTracker {
    pub fn new(initial_offset: f64) -> Self {
        Self {
            last_offset: initial_offset,
            state: NavState::Visible,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn observe(&mut self, offset: f64) -> NavState {
        self.state = if offset > self.last_offset && offset > NAV_HIDE_THRESHOLD {
            NavState::Hidden
        } else {
            NavState::Visible
        };
        self.last_offset = offset;
        self.state
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

/// Pointer-relative tilt for a hovered card: up to ±3° around each axis,
/// zero at the center of the box. Coordinates are clamped into the box so a
/// fast pointer exit cannot produce an out-of-range angle.
pub fn tilt_for_pointer(x: f64, y: f64, width: f64, height: f64) -> Tilt {
    if width <= 0.0 || height <= 0.0 {
        return Tilt::default();
    }

    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let dx = (x.clamp(0.0, width) - center_x) / center_x;
    let dy = (y.clamp(0.0, height) - center_y) / center_y;

    Tilt {
        rotate_x: -dy * TILT_MAX_DEGREES,
        rotate_y: dx * TILT_MAX_DEGREES,
    }
}

pub fn tilt_style(tilt: Tilt) -> String {
    format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({TILT_SCALE}, {TILT_SCALE}, {TILT_SCALE});",
        tilt.rotate_x, tilt.rotate_y
    )
}

/// Damped follower for the hero glow: each step moves a fixed fraction of
/// the remaining distance toward the pointer, so it converges without
/// overshooting.
pub struct Glide {
    pub x: f64,
    pub y: f64,
}

impl Glide {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn step(&mut self, target_x: f64, target_y: f64) {
        self.x += (target_x - self.x) * GLIDE_SMOOTHING;
        self.y += (target_y - self.y) * GLIDE_SMOOTHING;
    }
}

/// Alpha of one pulsing dot at `time_ms`, offset by the dot's own phase.
/// Always inside [0, 1].
pub fn pulse_alpha(phase: f64, time_ms: f64) -> f64 {
    (DOT_PULSE_BASE + DOT_PULSE_AMPLITUDE * (time_ms * DOT_PULSE_SPEED + phase).sin())
        .clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO_OPACITY_IN: [f64; 2] = [0.0, 0.5];
    const HERO_OPACITY_OUT: [f64; 2] = [1.0, 0.0];
    const HERO_Y_IN: [f64; 2] = [0.0, 1.0];
    const HERO_Y_OUT: [f64; 2] = [0.0, 150.0];

    #[test]
    fn hero_mapping_matches_control_points_end_to_end() {
        assert_eq!(piecewise(&HERO_OPACITY_IN, &HERO_OPACITY_OUT, 0.0), 1.0);
        assert_eq!(piecewise(&HERO_Y_IN, &HERO_Y_OUT, 0.0), 0.0);

        assert_eq!(piecewise(&HERO_OPACITY_IN, &HERO_OPACITY_OUT, 0.5), 0.0);
        assert_eq!(piecewise(&HERO_Y_IN, &HERO_Y_OUT, 0.5), 75.0);

        assert_eq!(piecewise(&HERO_OPACITY_IN, &HERO_OPACITY_OUT, 1.0), 0.0);
        assert_eq!(piecewise(&HERO_Y_IN, &HERO_Y_OUT, 1.0), 150.0);
    }

    #[test]
    fn piecewise_clamps_outside_declared_range() {
        assert_eq!(piecewise(&HERO_Y_IN, &HERO_Y_OUT, -0.4), 0.0);
        assert_eq!(piecewise(&HERO_Y_IN, &HERO_Y_OUT, 1.7), 150.0);
    }

    #[test]
    fn piecewise_is_monotonic_over_sampled_progress() {
        let about_in = [0.0, 1.0];
        let about_out = [120.0, -50.0];

        let mut previous = f64::INFINITY;
        for step in 0..=100 {
            let t = f64::from(step) / 100.0;
            let value = piecewise(&about_in, &about_out, t);
            assert!(value <= previous, "descending map rose at t={t}");
            previous = value;
        }
    }

    #[test]
    fn piecewise_handles_three_control_points() {
        let input = [0.0, 0.5, 1.0];
        let output = [0.0, 1.0, 0.0];

        assert_eq!(piecewise(&input, &output, 0.25), 0.5);
        assert_eq!(piecewise(&input, &output, 0.5), 1.0);
        assert_eq!(piecewise(&input, &output, 0.75), 0.5);
    }

    #[test]
    fn navbar_hides_going_down_past_threshold_then_shows_on_any_upward_move() {
        let mut tracker = NavTracker::new(0.0);
        assert_eq!(tracker.state(), NavState::Visible);

        assert_eq!(tracker.observe(200.0), NavState::Hidden);
        // Still above the threshold, but moving upward relative to 200.
        assert_eq!(tracker.observe(180.0), NavState::Visible);
    }

    #[test]
    fn navbar_stays_visible_below_threshold_even_when_scrolling_down() {
        let mut tracker = NavTracker::new(0.0);

        assert_eq!(tracker.observe(80.0), NavState::Visible);
        assert_eq!(tracker.observe(149.0), NavState::Visible);
        assert_eq!(tracker.observe(151.0), NavState::Hidden);
    }

    #[test]
    fn navbar_rule_holds_over_arbitrary_sequence() {
        let offsets = [0.0, 40.0, 400.0, 390.0, 410.0, 120.0, 500.0, 500.0];
        let mut tracker = NavTracker::new(0.0);
        let mut previous = 0.0;

        for offset in offsets {
            let state = tracker.observe(offset);
            let expect_hidden = offset > previous && offset > NAV_HIDE_THRESHOLD;
            assert_eq!(
                state == NavState::Hidden,
                expect_hidden,
                "offset {offset} after {previous}"
            );
            previous = offset;
        }
    }

    #[test]
    fn exit_top_progress_runs_from_pinned_to_fully_scrolled_out() {
        let height = 800.0;
        assert_eq!(scroll_progress(0.0, height, 800.0, ScrollRange::ExitTop), 0.0);
        assert_eq!(
            scroll_progress(-400.0, height, 800.0, ScrollRange::ExitTop),
            0.5
        );
        assert_eq!(
            scroll_progress(-800.0, height, 800.0, ScrollRange::ExitTop),
            1.0
        );
        // Below the fold the hero has not started leaving yet.
        assert_eq!(scroll_progress(300.0, height, 800.0, ScrollRange::ExitTop), 0.0);
        // Past its own height it stays pinned at 1.
        assert_eq!(
            scroll_progress(-2000.0, height, 800.0, ScrollRange::ExitTop),
            1.0
        );
    }

    #[test]
    fn traverse_progress_spans_viewport_entry_to_exit() {
        let viewport = 800.0;
        let height = 400.0;

        assert_eq!(
            scroll_progress(viewport, height, viewport, ScrollRange::Traverse),
            0.0
        );
        assert_eq!(
            scroll_progress(-height, height, viewport, ScrollRange::Traverse),
            1.0
        );
        assert_eq!(
            scroll_progress(200.0, height, viewport, ScrollRange::Traverse),
            0.5
        );
        assert_eq!(
            scroll_progress(2000.0, height, viewport, ScrollRange::Traverse),
            0.0
        );
    }

    #[test]
    fn degenerate_geometry_yields_zero_progress() {
        assert_eq!(scroll_progress(100.0, 0.0, 800.0, ScrollRange::ExitTop), 0.0);
        assert_eq!(scroll_progress(100.0, -5.0, 5.0, ScrollRange::Traverse), 0.0);
    }

    #[test]
    fn tilt_is_zero_at_center_and_capped_at_corners() {
        let centered = tilt_for_pointer(200.0, 150.0, 400.0, 300.0);
        assert_eq!(centered, Tilt::default());

        let corner = tilt_for_pointer(400.0, 300.0, 400.0, 300.0);
        assert_eq!(corner.rotate_x, -TILT_MAX_DEGREES);
        assert_eq!(corner.rotate_y, TILT_MAX_DEGREES);

        let outside = tilt_for_pointer(-50.0, 900.0, 400.0, 300.0);
        assert!(outside.rotate_x.abs() <= TILT_MAX_DEGREES);
        assert!(outside.rotate_y.abs() <= TILT_MAX_DEGREES);
    }

    #[test]
    fn tilt_style_renders_both_axes() {
        let style = tilt_style(Tilt {
            rotate_x: -1.5,
            rotate_y: 2.25,
        });
        assert!(style.contains("rotateX(-1.50deg)"));
        assert!(style.contains("rotateY(2.25deg)"));
        assert!(style.contains("perspective(1000px)"));
    }

    #[test]
    fn glide_converges_without_overshooting() {
        let mut glide = Glide::new(0.0, 0.0);
        let mut last_distance = f64::INFINITY;

        for _ in 0..200 {
            glide.step(100.0, -60.0);
            let distance = ((100.0 - glide.x).powi(2) + (-60.0 - glide.y).powi(2)).sqrt();
            assert!(distance < last_distance);
            assert!(glide.x <= 100.0 && glide.y >= -60.0);
            last_distance = distance;
        }

        assert!(last_distance < 1.0);
    }

    #[test]
    fn pulse_alpha_stays_in_unit_range() {
        for step in 0..500 {
            let alpha = pulse_alpha(f64::from(step) * 0.7, f64::from(step) * 16.0);
            assert!((0.0..=1.0).contains(&alpha));
        }
    }
}
