//! Mapping from window samples to screen-space line segments.

use crate::window::SampleWindow;

/// One line segment in viewport pixels, from `(x0, y0)` to `(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Segment {
    #[inline]
    pub fn start(&self) -> [f32; 2] {
        [self.x0, self.y0]
    }

    #[inline]
    pub fn end(&self) -> [f32; 2] {
        [self.x1, self.y1]
    }
}

/// Turn `samples` into a connected polyline spanning the viewport.
///
/// Sample `i` sits at `x = i * width / len` and `y = height / range * sample + height / 2`.
/// The first segment starts off-screen at `(-width / len, 0)`, so exactly one
/// segment is produced per sample, left to right, each starting where the
/// previous one ended.
///
/// A zero-sized viewport yields collapsed segments rather than an error. `range`
/// is expected to be positive; [`SampleWindow`] guarantees that.
pub fn render(samples: &[f32], range: f32, viewport_width: f32, viewport_height: f32) -> Vec<Segment> {
    if samples.is_empty() {
        return Vec::new();
    }

    let unit_height = viewport_height / range;
    let mid_height = viewport_height / 2.0;
    let unit_width = viewport_width / samples.len() as f32;

    let mut last_x = -unit_width;
    let mut last_y = 0.0;
    samples
        .iter()
        .enumerate()
        .map(|(i, &sample)| {
            let x = i as f32 * unit_width;
            let y = unit_height * sample + mid_height;
            let seg = Segment {
                x0: last_x,
                y0: last_y,
                x1: x,
                y1: y,
            };
            last_x = x;
            last_y = y;
            seg
        })
        .collect()
}

/// Render a consistent snapshot of `window` into a viewport of the given size.
pub fn render_window(window: &SampleWindow, viewport_width: f32, viewport_height: f32) -> Vec<Segment> {
    render(&window.snapshot(), window.range(), viewport_width, viewport_height)
}

/// The vertices of a chained segment list: the first start point followed by
/// every end point. Drawing these as one path joins the segments.
pub fn polyline(segments: &[Segment]) -> Vec<[f32; 2]> {
    let Some(first) = segments.first() else {
        return Vec::new();
    };
    std::iter::once(first.start())
        .chain(segments.iter().map(Segment::end))
        .collect()
}
