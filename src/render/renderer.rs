//! Spiral renderer and logical-to-device coordinate mapping.

use super::DrawingSurface;
use crate::colors;
use crate::geometry::{GeometryEngine, Triangle};
use crate::math::vec2::Vec2;

/// Maps logical coordinates (y up) to device pixels (y down) for one pass.
///
/// Captured from the surface size at the start of each render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    max_x: i32,
    max_y: i32,
}

impl Viewport {
    /// Builds the viewport for a surface of `width` x `height` pixels.
    ///
    /// Returns `None` for an empty surface, which has no valid coordinate.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self {
            max_x: i32::try_from(width - 1).unwrap_or(i32::MAX),
            max_y: i32::try_from(height - 1).unwrap_or(i32::MAX),
        })
    }

    /// Largest valid device x coordinate.
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    /// Largest valid device y coordinate.
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    #[inline]
    pub fn device_x(&self, x: f64) -> i32 {
        round_half_up(x)
    }

    #[inline]
    pub fn device_y(&self, y: f64) -> i32 {
        self.max_y - round_half_up(y)
    }

    #[inline]
    pub fn to_device(&self, point: Vec2) -> (i32, i32) {
        (self.device_x(point.x), self.device_y(point.y))
    }
}

/// Rounds to the nearest integer, ties towards positive infinity.
///
/// `f64::round` breaks ties away from zero, which differs for negative
/// halves (-2.5 → -3 instead of -2). `(value + 0.5).floor()` can round up
/// in the addition (0.49999999999999994 → 1), so the fractional part is
/// compared instead.
#[inline]
fn round_half_up(value: f64) -> i32 {
    let floor = value.floor();
    let rounded = if value - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i32
}

/// Draws a spiral of triangles onto any [`DrawingSurface`].
///
/// Holds no per-pass state: each call to [`Renderer::render`] rebuilds the
/// spiral from the surface's current size.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    engine: GeometryEngine,
    color: u32,
}

impl Renderer {
    pub fn new(engine: GeometryEngine) -> Self {
        Self {
            engine,
            color: colors::LINE,
        }
    }

    /// Sets the ARGB line color.
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn engine(&self) -> &GeometryEngine {
        &self.engine
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    /// Draws the full spiral, biggest triangle first.
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let (width, height) = (surface.width(), surface.height());
        let Some(viewport) = Viewport::new(width, height) else {
            log::trace!("skipping render pass on empty {}x{} surface", width, height);
            return;
        };

        log::debug!(
            "rendering {} triangles on {}x{} surface (q = {})",
            self.engine.config().count(),
            width,
            height,
            self.engine.config().q()
        );

        for triangle in self.engine.spiral(viewport.max_x(), viewport.max_y()) {
            self.draw_triangle(surface, &viewport, &triangle);
        }
    }

    /// Draws the edges A→B, B→C and C→A.
    pub fn draw_triangle<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        viewport: &Viewport,
        triangle: &Triangle,
    ) {
        for (start, end) in triangle.edges() {
            let (x0, y0) = viewport.to_device(start);
            let (x1, y1) = viewport.to_device(end);
            surface.draw_line(x0, y0, x1, y1, self.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpiralError;
    use crate::geometry::{SpiralConfig, DEFAULT_TRIANGLE_COUNT};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Line {
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        color: u32,
    }

    /// Surface double that records every draw call.
    struct RecordingSurface {
        width: u32,
        height: u32,
        lines: Vec<Line>,
    }

    impl RecordingSurface {
        fn new(width: u32, height: u32) -> Self {
            Self {
                width,
                height,
                lines: Vec::new(),
            }
        }
    }

    impl DrawingSurface for RecordingSurface {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
            self.lines.push(Line {
                x0,
                y0,
                x1,
                y1,
                color,
            });
        }
    }

    fn renderer() -> Renderer {
        Renderer::new(GeometryEngine::default())
    }

    #[test]
    fn test_viewport_flips_y() {
        let viewport = Viewport::new(600, 400).unwrap();
        assert_eq!(viewport.max_x(), 599);
        assert_eq!(viewport.max_y(), 399);
        assert_eq!(viewport.to_device(Vec2::new(0.0, 0.0)), (0, 399));
        assert_eq!(viewport.to_device(Vec2::new(599.0, 399.0)), (599, 0));
        assert_eq!(viewport.to_device(Vec2::new(10.4, 20.6)), (10, 378));
    }

    #[test]
    fn test_viewport_rounds_half_up() {
        let viewport = Viewport::new(10, 10).unwrap();
        assert_eq!(viewport.device_x(2.5), 3);
        assert_eq!(viewport.device_x(-2.5), -2);
        assert_eq!(viewport.device_x(-2.6), -3);
        assert_eq!(viewport.device_y(0.5), 8);
    }

    #[test]
    fn test_viewport_rounding_has_no_addition_error() {
        let viewport = Viewport::new(10, 10).unwrap();
        // Largest value below one half, in both float widths.
        assert_eq!(viewport.device_x(0.49999997_f32 as f64), 0);
        assert_eq!(viewport.device_x(0.49999999999999994), 0);
        assert_eq!(viewport.device_x(-0.49999999999999994), 0);
        // Integers beyond the f32 mantissa stay put.
        assert_eq!(viewport.device_x(8_388_609.0), 8_388_609);
        assert_eq!(viewport.device_x(8_388_609.5), 8_388_610);
    }

    #[test]
    fn test_viewport_rejects_empty_surface() {
        assert_eq!(Viewport::new(0, 400), None);
        assert_eq!(Viewport::new(600, 0), None);
        assert_eq!(Viewport::new(1, 1).map(|v| (v.max_x(), v.max_y())), Some((0, 0)));
    }

    #[test]
    fn test_render_issues_three_lines_per_triangle() {
        let mut surface = RecordingSurface::new(600, 400);
        renderer().render(&mut surface);
        assert_eq!(surface.lines.len(), 3 * DEFAULT_TRIANGLE_COUNT);
        assert_eq!(surface.lines.len(), 150);
        assert!(surface.lines.iter().all(|line| line.color == colors::LINE));
    }

    #[test]
    fn test_render_draws_before_advancing() {
        let renderer = renderer();
        let mut surface = RecordingSurface::new(600, 400);
        renderer.render(&mut surface);

        let viewport = Viewport::new(600, 400).unwrap();
        let engine = renderer.engine();
        let mut spiral = engine.spiral(599, 399);
        assert_eq!(spiral.clone().next(), Some(engine.initialize(599, 399)));
        for chunk in surface.lines.chunks(3) {
            let triangle = spiral.next().unwrap();
            let expected: Vec<Line> = triangle
                .edges()
                .iter()
                .map(|(start, end)| {
                    let (x0, y0) = viewport.to_device(*start);
                    let (x1, y1) = viewport.to_device(*end);
                    Line {
                        x0,
                        y0,
                        x1,
                        y1,
                        color: colors::LINE,
                    }
                })
                .collect();
            assert_eq!(chunk, expected.as_slice());
        }
        assert_eq!(spiral.next(), None);
    }

    #[test]
    fn test_first_triangle_is_full_size() {
        let mut surface = RecordingSurface::new(600, 400);
        renderer().render(&mut surface);

        // A->B is the horizontal base of the biggest triangle.
        let base = surface.lines[0];
        assert_eq!(base.y0, base.y1);
        assert!((base.x1 - base.x0 - 379).abs() <= 1);
        // Each closing edge ends where the triangle's first edge started.
        for chunk in surface.lines.chunks(3) {
            assert_eq!((chunk[2].x1, chunk[2].y1), (chunk[0].x0, chunk[0].y0));
        }
    }

    #[test]
    fn test_render_reads_bounds_every_pass() {
        let renderer = renderer();
        let mut surface = RecordingSurface::new(600, 400);
        renderer.render(&mut surface);
        let big = surface.lines[0];

        surface.width = 300;
        surface.height = 200;
        surface.lines.clear();
        renderer.render(&mut surface);
        let small = surface.lines[0];

        assert_eq!(surface.lines.len(), 150);
        assert_ne!(big, small);
        assert!(small.x1 - small.x0 < big.x1 - big.x0);
        assert!(surface.lines.iter().all(|l| l.y0 <= 199 && l.y1 <= 199));
    }

    #[test]
    fn test_render_is_repeatable() {
        let renderer = renderer();
        let mut first = RecordingSurface::new(640, 480);
        let mut second = RecordingSurface::new(640, 480);
        renderer.render(&mut first);
        renderer.render(&mut second);
        assert_eq!(first.lines, second.lines);
    }

    #[test]
    fn test_render_skips_empty_surface() {
        let mut surface = RecordingSurface::new(0, 0);
        renderer().render(&mut surface);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn test_custom_count_and_color() {
        let engine = GeometryEngine::new(SpiralConfig::new(0.2).unwrap().with_count(4));
        let renderer = Renderer::new(engine).with_color(0xFF00FF00);
        let mut surface = RecordingSurface::new(100, 100);
        renderer.render(&mut surface);
        assert_eq!(surface.lines.len(), 12);
        assert!(surface.lines.iter().all(|line| line.color == 0xFF00FF00));
    }

    #[test]
    fn test_degenerate_q_never_draws() {
        for q in [0.0, 1.0] {
            let mut surface = RecordingSurface::new(600, 400);
            let result = GeometryEngine::with_q(q).map(Renderer::new);
            if let Ok(renderer) = &result {
                renderer.render(&mut surface);
            }
            assert_eq!(result.err(), Some(SpiralError::InvalidConfiguration(q)));
            assert!(surface.lines.is_empty());
        }
    }
}
