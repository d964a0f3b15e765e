// SPDX-License-Identifier: MPL-2.0
//! Pan and zoom state for the on-screen presentation of the image.
//!
//! The view transform never touches pixels. It is a scale factor plus a
//! translation applied to an image centred in its container.

use crate::domain::editing::ZoomScale;
use iced::mouse::ScrollDelta;
use iced::{Point, Rectangle, Size, Vector};

/// Margin kept free around the image when fitting, in logical pixels.
pub const FIT_MARGIN: f32 = 40.0;

/// Scale change per wheel pixel.
pub const WHEEL_SENSITIVITY: f32 = 0.001;

/// Pixels per wheel "line" when the platform reports line deltas.
pub const PIXELS_PER_LINE: f32 = 100.0;

/// Converts an iced scroll delta to wheel pixels where positive means
/// scrolling down, which zooms out.
#[must_use]
pub fn wheel_delta_pixels(delta: ScrollDelta) -> f32 {
    match delta {
        ScrollDelta::Lines { y, .. } => -y * PIXELS_PER_LINE,
        ScrollDelta::Pixels { y, .. } => -y,
    }
}

/// Drag-to-pan state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    /// Pointer position minus the view offset at press time.
    anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag operation.
    pub fn start(&mut self, position: Point, offset: Vector) {
        self.anchor = Some(position - offset);
    }

    /// Stops the drag operation.
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// Offset that keeps the grabbed point under the pointer.
    #[must_use]
    pub fn offset_for(&self, position: Point) -> Option<Vector> {
        self.anchor.map(|anchor| position - anchor)
    }
}

/// View transform: scale plus offset, with drag state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Viewport {
    scale: ZoomScale,
    offset: Vector,
    drag: DragState,
}

impl Viewport {
    #[must_use]
    pub fn scale(&self) -> ZoomScale {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Zoom as a rounded percentage label, e.g. `"75%"`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{}%", self.scale.percent())
    }

    /// Largest scale `<= 1` that fits `image` inside `container` minus the
    /// margin. Resets the offset and any drag in progress.
    pub fn fit(&mut self, image: Size, container: Size) {
        self.offset = Vector::ZERO;
        self.drag.stop();
        if image.width <= 0.0 || image.height <= 0.0 {
            self.scale = ZoomScale::default();
            return;
        }
        let scale_x = (container.width - FIT_MARGIN) / image.width;
        let scale_y = (container.height - FIT_MARGIN) / image.height;
        self.scale = ZoomScale::new(scale_x.min(scale_y).min(1.0));
    }

    /// Applies a wheel step. `delta_y` is in wheel pixels, positive zooms out.
    pub fn wheel(&mut self, delta_y: f32) {
        self.scale = ZoomScale::new(self.scale.value() - delta_y * WHEEL_SENSITIVITY);
    }

    pub fn begin_drag(&mut self, position: Point) {
        self.drag.start(position, self.offset);
    }

    /// Moves the view with the pointer. Returns whether a drag was active.
    pub fn drag_to(&mut self, position: Point) -> bool {
        match self.drag.offset_for(position) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Screen rectangle of the image: centred in `container`, translated by
    /// the offset and scaled about its centre.
    #[must_use]
    pub fn image_rect(&self, image: Size, container: Size) -> Rectangle {
        let scale = self.scale.value();
        let size = Size::new(image.width * scale, image.height * scale);
        let center = Point::new(
            container.width / 2.0 + self.offset.x,
            container.height / 2.0 + self.offset.y,
        );
        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}
