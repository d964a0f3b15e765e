// SPDX-License-Identifier: MPL-2.0
//! Canvas workspace: the loaded bitmap, its mask layer and the view transform.
//!
//! The workspace owns pixels and pointer interpretation. It derives the
//! images sent out of the editor (filtered composite, masked composite) on
//! demand and never stores them. Large images also keep a reduced copy that
//! the on-screen preview is rendered from.

pub mod mask;
pub mod viewport;

pub use mask::{map_point, unmap_point, MaskLayer};
pub use viewport::{Viewport, FIT_MARGIN};

use crate::domain::editing::{BrushSize, FilterKind, FilterSettings};
use crate::error::{Error, Result};
use crate::media::{filter, image};
use iced::{Point, Rectangle, Size};
use image_rs::RgbaImage;

/// Container size used until the UI reports a real one.
pub const DEFAULT_CONTAINER: Size = Size::new(1024.0, 768.0);

/// Longest side of the reduced copy used for the on-screen preview.
pub const PREVIEW_MAX_EDGE: u32 = 1600;

/// Stroke in progress in container coordinates, drawn as geometry until it
/// is baked into the mask on release.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePreview {
    pub points: Vec<Point>,
    /// Line width in screen pixels.
    pub width: f32,
}

/// What a pointer press is going to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTool {
    /// Drag to pan the view.
    Pan,
    /// Draw on the mask with the given brush.
    Brush(BrushSize),
}

/// Loaded image, mask layer and view transform.
#[derive(Debug, Clone)]
pub struct Workspace {
    image: Option<RgbaImage>,
    /// Reduced copy of `image`, absent when the image is small enough.
    preview: Option<RgbaImage>,
    mask: Option<MaskLayer>,
    viewport: Viewport,
    container: Size,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            image: None,
            preview: None,
            mask: None,
            viewport: Viewport::default(),
            container: DEFAULT_CONTAINER,
        }
    }
}

impl Workspace {
    #[must_use]
    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(RgbaImage::dimensions)
    }

    #[must_use]
    pub fn mask(&self) -> Option<&MaskLayer> {
        self.mask.as_ref()
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Replaces the bitmap wholesale, allocates a fresh transparent mask of
    /// the same size and refits the view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mask`] if the image has a zero dimension. The
    /// workspace is left unchanged in that case.
    pub fn set_image(&mut self, image: RgbaImage) -> Result<()> {
        let mask = MaskLayer::new(image.width(), image.height())?;
        self.preview = image::downscale_to_fit(&image, PREVIEW_MAX_EDGE);
        self.image = Some(image);
        self.mask = Some(mask);
        self.fit();
        Ok(())
    }

    /// Removes the image and its mask.
    pub fn clear(&mut self) {
        self.image = None;
        self.preview = None;
        self.mask = None;
        self.viewport = Viewport::default();
    }

    /// Makes every mask pixel transparent.
    pub fn clear_mask(&mut self) {
        if let Some(mask) = &mut self.mask {
            mask.clear();
        }
    }

    /// Records the size of the area the image is displayed in.
    ///
    /// The view is refitted only if it has never been measured before.
    pub fn set_container(&mut self, size: Size) {
        if size.width <= 0.0 || size.height <= 0.0 || size == self.container {
            return;
        }
        let first_measure = self.container == DEFAULT_CONTAINER;
        self.container = size;
        if first_measure {
            self.fit();
        }
    }

    /// Auto-fits the image into the container and resets the offset.
    pub fn fit(&mut self) {
        let image = self.image_size();
        self.viewport.fit(image, self.container);
    }

    /// Screen rectangle of the image inside the container.
    #[must_use]
    pub fn image_rect(&self) -> Option<Rectangle> {
        self.image
            .as_ref()
            .map(|_| self.viewport.image_rect(self.image_size(), self.container))
    }

    /// Filtered composite of the current image.
    #[must_use]
    pub fn composite(&self, filters: &FilterSettings) -> Option<RgbaImage> {
        self.image.as_ref().map(|img| filter::render(img, filters))
    }

    /// Filtered composite for display. Large images are rendered from the
    /// reduced copy with the blur radius scaled to match.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn preview_composite(&self, filters: &FilterSettings) -> Option<RgbaImage> {
        let image = self.image.as_ref()?;
        let Some(preview) = &self.preview else {
            return Some(filter::render(image, filters));
        };
        let scale = preview.width() as f32 / image.width() as f32;
        Some(filter::render(preview, &preview_filters(*filters, scale)))
    }

    /// Bakes the mask overlay into a rendered composite, giving the masked
    /// composite sent for object removal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Mask`] if the mask is missing or its size differs.
    pub fn mask_over(&self, composite: &RgbaImage) -> Result<RgbaImage> {
        let mask = self
            .mask
            .as_ref()
            .ok_or_else(|| Error::Mask("mask layer missing".into()))?;
        if (mask.width(), mask.height()) != composite.dimensions() {
            return Err(Error::Mask("mask size does not match image".into()));
        }
        Ok(image::overlay(composite, &mask.to_rgba()))
    }

    /// Pointer press in container coordinates.
    pub fn pointer_down(&mut self, position: Point, tool: PointerTool) {
        match tool {
            PointerTool::Pan => {
                if self.image.is_some() {
                    self.viewport.begin_drag(position);
                }
            }
            PointerTool::Brush(brush) => {
                if let Some(point) = self.to_bitmap(position) {
                    if let Some(mask) = &mut self.mask {
                        mask.begin_stroke(point, brush);
                    }
                }
            }
        }
    }

    /// Pointer movement. Returns whether the workspace changed.
    pub fn pointer_moved(&mut self, position: Point) -> bool {
        if self.viewport.is_dragging() {
            return self.viewport.drag_to(position);
        }
        let point = self.to_bitmap(position);
        match (point, &mut self.mask) {
            (Some(point), Some(mask)) if mask.is_drawing() => mask.extend_stroke(point),
            _ => false,
        }
    }

    /// Pointer release or the pointer leaving the canvas.
    pub fn pointer_up(&mut self) {
        self.viewport.end_drag();
        if let Some(mask) = &mut self.mask {
            mask.end_stroke();
        }
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.mask.as_ref().is_some_and(MaskLayer::is_drawing)
    }

    /// The stroke in progress mapped onto the screen.
    #[must_use]
    pub fn stroke_preview(&self) -> Option<StrokePreview> {
        let rect = self.image_rect()?;
        let mask = self.mask.as_ref()?;
        let (points, width) = mask.active_stroke()?;
        let size = mask.size();
        Some(StrokePreview {
            points: points
                .iter()
                .map(|point| unmap_point(*point, rect, size))
                .collect(),
            width: width * rect.width / size.width,
        })
    }

    /// Wheel zoom with `delta_y` in wheel pixels. Ignored while a
    /// stroke is in progress or without an image.
    pub fn wheel(&mut self, delta_y: f32) -> bool {
        if self.image.is_none() || self.is_drawing() {
            return false;
        }
        self.viewport.wheel(delta_y);
        true
    }

    fn to_bitmap(&self, position: Point) -> Option<Point> {
        let rect = self.image_rect()?;
        let mask = self.mask.as_ref()?;
        Some(map_point(position, rect, mask.size()))
    }

    #[allow(clippy::cast_precision_loss)]
    fn image_size(&self) -> Size {
        self.image
            .as_ref()
            .map_or(Size::ZERO, |img| Size::new(img.width() as f32, img.height() as f32))
    }
}

/// Blur is a radius in pixels, so it shrinks with the preview.
fn preview_filters(filters: FilterSettings, scale: f32) -> FilterSettings {
    let blur = filters.get(FilterKind::Blur);
    filters.with(FilterKind::Blur, blur * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, solid_image, PIXEL_EPSILON};
    use image_rs::Rgba;

    fn loaded(width: u32, height: u32) -> Workspace {
        let mut workspace = Workspace::default();
        workspace.set_container(Size::new(1040.0, 840.0));
        workspace
            .set_image(solid_image(width, height, [0, 0, 255, 255]))
            .expect("image");
        workspace
    }

    fn draw_line(workspace: &mut Workspace) {
        let rect = workspace.image_rect().expect("rect");
        let start = Point::new(rect.x + 5.0, rect.center_y());
        let end = Point::new(rect.x + rect.width - 5.0, rect.center_y());
        workspace.pointer_down(start, PointerTool::Brush(BrushSize::new(20)));
        workspace.pointer_moved(end);
        workspace.pointer_up();
    }

    #[test]
    fn set_image_fits_view() {
        let workspace = loaded(2000, 1000);
        assert!((workspace.viewport().scale().value() - 0.5).abs() < 1e-6);
        let mask = workspace.mask().expect("mask");
        assert_eq!((mask.width(), mask.height()), (2000, 1000));
    }

    #[test]
    fn empty_image_is_rejected_and_state_kept() {
        let mut workspace = loaded(10, 10);
        assert!(workspace.set_image(RgbaImage::new(0, 5)).is_err());
        assert_eq!(workspace.dimensions(), Some((10, 10)));
    }

    #[test]
    fn brush_strokes_land_on_mask() {
        let mut workspace = loaded(200, 100);
        draw_line(&mut workspace);
        assert!(!workspace.mask().expect("mask").is_empty());
    }

    #[test]
    fn mask_over_contains_red_overlay() {
        let mut workspace = loaded(200, 100);
        draw_line(&mut workspace);

        let plain = workspace.composite(&FilterSettings::default()).expect("composite");
        let masked = workspace.mask_over(&plain).expect("masked");
        let centre = masked.get_pixel(100, 50);
        assert!(centre[0] > 100);
        assert_eq!(plain.get_pixel(100, 50), &Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn mask_over_rejects_mismatched_composite() {
        let workspace = loaded(200, 100);
        assert!(matches!(
            workspace.mask_over(&RgbaImage::new(10, 10)),
            Err(Error::Mask(_))
        ));
        assert!(matches!(
            Workspace::default().mask_over(&RgbaImage::new(10, 10)),
            Err(Error::Mask(_))
        ));
    }

    #[test]
    fn pan_moves_offset() {
        let mut workspace = loaded(100, 100);
        workspace.pointer_down(Point::new(10.0, 10.0), PointerTool::Pan);
        assert!(workspace.pointer_moved(Point::new(25.0, 40.0)));
        workspace.pointer_up();
        assert_eq!(workspace.viewport().offset(), iced::Vector::new(15.0, 30.0));
    }

    #[test]
    fn wheel_ignored_while_drawing() {
        let mut workspace = loaded(100, 100);
        let rect = workspace.image_rect().expect("rect");
        workspace.pointer_down(rect.center(), PointerTool::Brush(BrushSize::default()));
        assert!(!workspace.wheel(100.0));
        workspace.pointer_up();
        assert!(workspace.wheel(100.0));
    }

    #[test]
    fn large_images_preview_from_a_reduced_copy() {
        let workspace = loaded(3200, 400);
        let filters = FilterSettings::default().with(FilterKind::Brightness, 50.0);

        let preview = workspace.preview_composite(&filters).expect("preview");
        assert_eq!(preview.dimensions(), (PREVIEW_MAX_EDGE, 200));
        assert_eq!(preview.get_pixel(10, 10), &Rgba([0, 0, 128, 255]));
        assert_eq!(
            workspace.composite(&filters).map(|img| img.dimensions()),
            Some((3200, 400))
        );
    }

    #[test]
    fn small_images_preview_at_full_size() {
        let workspace = loaded(200, 100);
        let preview = workspace
            .preview_composite(&FilterSettings::default())
            .expect("preview");
        assert_eq!(preview.dimensions(), (200, 100));
    }

    #[test]
    fn preview_blur_scales_with_the_copy() {
        let filters = FilterSettings::default()
            .with(FilterKind::Blur, 10.0)
            .with(FilterKind::Sepia, 30.0);
        let scaled = preview_filters(filters, 0.5);
        assert_eq!(scaled.get(FilterKind::Blur), 5.0);
        assert_eq!(scaled.get(FilterKind::Sepia), 30.0);
    }

    #[test]
    fn stroke_preview_tracks_the_pointer_until_release() {
        let mut workspace = loaded(200, 100);
        let rect = workspace.image_rect().expect("rect");
        let start = Point::new(rect.x + 10.0, rect.center_y());
        let end = Point::new(rect.x + 60.0, rect.center_y());
        workspace.pointer_down(start, PointerTool::Brush(BrushSize::new(20)));
        workspace.pointer_moved(end);

        let preview = workspace.stroke_preview().expect("stroke");
        assert_eq!(preview.points.len(), 2);
        assert_abs_diff_eq!(preview.points[1].x, end.x, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(preview.points[1].y, end.y, epsilon = PIXEL_EPSILON);
        let scale = workspace.viewport().scale().value();
        assert_abs_diff_eq!(preview.width, 20.0 * scale, epsilon = PIXEL_EPSILON);

        workspace.pointer_up();
        assert!(workspace.stroke_preview().is_none());
    }

    #[test]
    fn clear_mask_empties_layer() {
        let mut workspace = loaded(200, 100);
        draw_line(&mut workspace);
        workspace.clear_mask();
        assert!(workspace.mask().expect("mask").is_empty());
    }
}
