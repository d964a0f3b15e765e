// SPDX-License-Identifier: MPL-2.0
//! Freehand mask layer used to mark regions for object removal.
//!
//! Strokes are rasterised with `tiny-skia` into a transparent surface the
//! size of the image. A stroke in progress is only a list of points: the
//! canvas draws it as vector geometry, and it is baked into the surface
//! exactly once when it ends, so overlapping segments of one stroke never
//! stack their alpha.

use crate::domain::editing::BrushSize;
use crate::error::{Error, Result};
use iced::{Point, Rectangle, Size};
use image_rs::RgbaImage;
use tiny_skia::{Color, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Stroke colour: red at 60 % opacity.
pub const MASK_COLOR: [u8; 4] = [255, 0, 0, 153];

/// Maps a screen-space pointer position into mask bitmap space, given the
/// rectangle the image is displayed in.
#[must_use]
pub fn map_point(position: Point, displayed: Rectangle, mask: Size) -> Point {
    if displayed.width <= 0.0 || displayed.height <= 0.0 {
        return Point::ORIGIN;
    }
    Point::new(
        (position.x - displayed.x) * (mask.width / displayed.width),
        (position.y - displayed.y) * (mask.height / displayed.height),
    )
}

/// Inverse of [`map_point`]: bitmap space back to screen space.
#[must_use]
pub fn unmap_point(point: Point, displayed: Rectangle, mask: Size) -> Point {
    if mask.width <= 0.0 || mask.height <= 0.0 {
        return displayed.position();
    }
    Point::new(
        displayed.x + point.x * (displayed.width / mask.width),
        displayed.y + point.y * (displayed.height / mask.height),
    )
}

#[derive(Debug, Clone)]
struct ActiveStroke {
    points: Vec<Point>,
    width: f32,
}

impl ActiveStroke {
    fn path(&self) -> Option<tiny_skia::Path> {
        let (first, rest) = self.points.split_first()?;
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        builder.finish()
    }
}

/// Transparent overlay accumulating user strokes.
#[derive(Debug, Clone)]
pub struct MaskLayer {
    surface: Pixmap,
    active: Option<ActiveStroke>,
}

impl MaskLayer {
    /// Creates a fully transparent layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mask`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let surface = Pixmap::new(width, height)
            .ok_or_else(|| Error::Mask(format!("cannot allocate {width}x{height} mask")))?;
        Ok(Self {
            surface,
            active: None,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    /// Starts a stroke at `point` (bitmap space). Any unfinished stroke is committed first.
    pub fn begin_stroke(&mut self, point: Point, brush: BrushSize) {
        self.end_stroke();
        self.active = Some(ActiveStroke {
            points: vec![point],
            width: brush.as_width(),
        });
    }

    /// Extends the current stroke. Returns false when no stroke is in progress.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        match &mut self.active {
            Some(stroke) => {
                stroke.points.push(point);
                true
            }
            None => false,
        }
    }

    /// Ends the current stroke and bakes it into the surface.
    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.active.take() {
            stroke_onto(&mut self.surface, &stroke);
        }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Points (bitmap space) and width of the stroke in progress.
    #[must_use]
    pub fn active_stroke(&self) -> Option<(&[Point], f32)> {
        self.active
            .as_ref()
            .map(|stroke| (stroke.points.as_slice(), stroke.width))
    }

    /// Makes every pixel transparent and drops any stroke in progress.
    pub fn clear(&mut self) {
        self.active = None;
        self.surface.fill(Color::TRANSPARENT);
    }

    /// Returns true when nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let stroke_visible = self
            .active
            .as_ref()
            .is_some_and(|stroke| stroke.path().is_some());
        !stroke_visible && self.surface.pixels().iter().all(|px| px.alpha() == 0)
    }

    /// Straight-alpha RGBA copy of the layer, including a stroke in progress.
    #[must_use]
    pub fn to_rgba(&self) -> RgbaImage {
        let surface = match &self.active {
            Some(stroke) => {
                let mut preview = self.surface.clone();
                stroke_onto(&mut preview, stroke);
                preview
            }
            None => self.surface.clone(),
        };

        let bytes: Vec<u8> = surface
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(surface.width(), surface.height(), bytes)
            .unwrap_or_else(|| RgbaImage::new(surface.width(), surface.height()))
    }
}

fn stroke_onto(surface: &mut Pixmap, stroke: &ActiveStroke) {
    // A single point has no segment to stroke.
    let Some(path) = stroke.path() else {
        return;
    };

    let mut paint = Paint::default();
    let [r, g, b, a] = MASK_COLOR;
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let style = Stroke {
        width: stroke.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    surface.stroke_path(&path, &paint, &style, Transform::identity(), None);
}
