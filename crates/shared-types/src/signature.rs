use base64::Engine;
use serde::{Deserialize, Serialize};

/// Default drawing surface size, in CSS pixels.
pub const PAD_WIDTH: f64 = 480.0;
pub const PAD_HEIGHT: f64 = 160.0;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One continuous pen-down..pen-up gesture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    /// SVG path data (`M x y L x y ...`) for this stroke.
    pub fn path_data(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{cmd}{:.1} {:.1}", p.x, p.y));
        }
        // A single tap still has to leave a visible dot.
        if self.points.len() == 1 {
            let p = self.points[0];
            out.push_str(&format!(" L{:.1} {:.1}", p.x + 0.1, p.y));
        }
        out
    }
}

/// Free-hand drawing surface that accumulates strokes.
#[derive(Debug, Clone, PartialEq)]
pub struct SignaturePad {
    width: f64,
    height: f64,
    strokes: Vec<Stroke>,
    drawing: bool,
}

impl Default for SignaturePad {
    fn default() -> Self {
        Self::new(PAD_WIDTH, PAD_HEIGHT)
    }
}

impl SignaturePad {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            drawing: false,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// True when nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(|s| s.points.is_empty())
    }

    fn clamp(&self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0.0, self.width),
            y: p.y.clamp(0.0, self.height),
        }
    }

    /// Pen down: start a new stroke at `p`.
    pub fn begin_stroke(&mut self, p: Point) {
        let p = self.clamp(p);
        self.strokes.push(Stroke { points: vec![p] });
        self.drawing = true;
    }

    /// Pen move: extend the current stroke. Ignored while the pen is up.
    pub fn extend_stroke(&mut self, p: Point) {
        if !self.drawing {
            return;
        }
        let p = self.clamp(p);
        if let Some(stroke) = self.strokes.last_mut() {
            if stroke.points.last() != Some(&p) {
                stroke.points.push(p);
            }
        }
    }

    /// Pen up.
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Erase the surface.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    /// Render the strokes as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="100%" height="100%" fill="white"/>"#,
            w = self.width,
            h = self.height,
        );
        for stroke in self.strokes.iter().filter(|s| !s.points.is_empty()) {
            svg.push_str(&format!(
                r#"<path d="{}" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
                stroke.path_data()
            ));
        }
        svg.push_str("</svg>");
        svg
    }

    /// Render to a `data:image/svg+xml;base64,...` URL.
    pub fn to_data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(self.to_svg());
        format!("data:image/svg+xml;base64,{encoded}")
    }
}
