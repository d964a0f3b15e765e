// SPDX-License-Identifier: MPL-2.0
//! Image canvas: draws the filtered image and mask, and turns mouse, touch
//! and wheel input into [`CanvasMessage`]s in canvas-local coordinates.

use crate::application::editor::EditorSession;
use crate::domain::editing::EditorMode;
use crate::ui::design_tokens::sizing;
use crate::ui::messages::{CanvasMessage, Message};
use crate::ui::theme;
use crate::workspace::viewport::wheel_delta_pixels;
use crate::workspace::StrokePreview;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Stroke};
use iced::widget::{image, Action, Canvas};
use iced::{mouse, touch, Element, Event, Length, Point, Rectangle, Renderer, Size, Theme};

/// Everything the canvas needs to draw one frame.
pub struct CanvasModel<'a> {
    pub image: Option<&'a image::Handle>,
    pub mask: Option<&'a image::Handle>,
    pub image_rect: Option<Rectangle>,
    pub container: Size,
    pub mode: EditorMode,
    /// Brush radius in screen pixels.
    pub brush_radius: f32,
    /// A drag or stroke is in progress.
    pub pointer_active: bool,
    /// Mask stroke not yet baked into the mask image.
    pub stroke: Option<StrokePreview>,
    pub processing: bool,
}

impl<'a> CanvasModel<'a> {
    pub fn new(
        session: &EditorSession,
        image: Option<&'a image::Handle>,
        mask: Option<&'a image::Handle>,
    ) -> Self {
        let workspace = session.workspace();
        let viewport = workspace.viewport();
        let scale = viewport.scale().value();
        Self {
            image,
            mask,
            image_rect: workspace.image_rect(),
            container: workspace.container(),
            mode: session.mode(),
            brush_radius: session.brush().as_width() * scale / 2.0,
            pointer_active: viewport.is_dragging() || workspace.is_drawing(),
            stroke: workspace.stroke_preview(),
            processing: session.is_processing(),
        }
    }
}

pub fn view<'a>(model: CanvasModel<'a>) -> Element<'a, Message> {
    Canvas::new(model)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Maps a raw event to a canvas message.
///
/// Moves are only reported while a drag or stroke is active; leaving the
/// canvas ends it.
pub fn translate_event(
    event: &Event,
    bounds: Rectangle,
    cursor: mouse::Cursor,
    pointer_active: bool,
) -> Option<CanvasMessage> {
    let local = |position: Point| Point::new(position.x - bounds.x, position.y - bounds.y);

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
            .position_in(bounds)
            .map(CanvasMessage::PointerPressed),
        Event::Mouse(mouse::Event::CursorMoved { .. }) if pointer_active => {
            match cursor.position_in(bounds) {
                Some(position) => Some(CanvasMessage::PointerMoved(position)),
                None => Some(CanvasMessage::PointerReleased),
            }
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
        | Event::Mouse(mouse::Event::CursorLeft)
            if pointer_active =>
        {
            Some(CanvasMessage::PointerReleased)
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => cursor
            .position_in(bounds)
            .map(|_| CanvasMessage::Wheel(wheel_delta_pixels(*delta))),
        Event::Touch(touch::Event::FingerPressed { position, .. })
            if bounds.contains(*position) =>
        {
            Some(CanvasMessage::PointerPressed(local(*position)))
        }
        Event::Touch(touch::Event::FingerMoved { position, .. }) if pointer_active => {
            Some(CanvasMessage::PointerMoved(local(*position)))
        }
        Event::Touch(touch::Event::FingerLifted { .. } | touch::Event::FingerLost { .. })
            if pointer_active =>
        {
            Some(CanvasMessage::PointerReleased)
        }
        _ => None,
    }
}

impl CanvasModel<'_> {
    /// Message for one event. A size change is always reported and carries
    /// the input of the same event along.
    pub fn message_for(
        &self,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<CanvasMessage> {
        let input = translate_event(event, bounds, cursor, self.pointer_active);
        if bounds.size() != self.container {
            return Some(CanvasMessage::Resized {
                size: bounds.size(),
                then: input.map(Box::new),
            });
        }
        input
    }
}

fn stroke_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    Some(Path::new(|builder| {
        builder.move_to(*first);
        for point in rest {
            builder.line_to(*point);
        }
    }))
}

impl canvas::Program<Message> for CanvasModel<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let Some(message) = self.message_for(event, bounds, cursor) {
            let resize_only = matches!(message, CanvasMessage::Resized { then: None, .. });
            let action = Action::publish(Message::Canvas(message));
            return Some(if resize_only { action } else { action.and_capture() });
        }

        // Keep the brush ring under the pointer.
        if self.mode.draws_mask()
            && matches!(event, Event::Mouse(mouse::Event::CursorMoved { .. }))
        {
            return Some(Action::request_redraw());
        }
        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::canvas_surface_color());

        if let (Some(handle), Some(rect)) = (self.image, self.image_rect) {
            frame.draw_image(rect, canvas::Image::new(handle.clone()));
            if let Some(mask) = self.mask {
                frame.draw_image(rect, canvas::Image::new(mask.clone()));
            }
        }

        if let Some(preview) = &self.stroke {
            if let Some(path) = stroke_path(&preview.points) {
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_color(theme::mask_stroke_color())
                        .with_width(preview.width)
                        .with_line_cap(LineCap::Round)
                        .with_line_join(LineJoin::Round),
                );
            }
        }

        if self.processing {
            frame.fill_rectangle(Point::ORIGIN, bounds.size(), theme::processing_veil_color());
        } else if self.mode.draws_mask() {
            if let Some(position) = cursor.position_in(bounds) {
                let ring = Path::circle(position, self.brush_radius.max(1.0));
                frame.stroke(
                    &ring,
                    Stroke::default()
                        .with_color(theme::brush_ring_shadow_color())
                        .with_width(sizing::BRUSH_RING_WIDTH * 2.0),
                );
                frame.stroke(
                    &ring,
                    Stroke::default()
                        .with_color(theme::brush_ring_color())
                        .with_width(sizing::BRUSH_RING_WIDTH),
                );
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.processing {
            return mouse::Interaction::Wait;
        }
        if cursor.position_in(bounds).is_none() || self.image.is_none() {
            return mouse::Interaction::default();
        }
        match self.mode {
            EditorMode::Erase => mouse::Interaction::Crosshair,
            _ if self.pointer_active => mouse::Interaction::Grabbing,
            _ => mouse::Interaction::Grab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(300.0, 50.0), Size::new(800.0, 600.0))
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn model(container: Size) -> CanvasModel<'static> {
        CanvasModel {
            image: None,
            mask: None,
            image_rect: None,
            container,
            mode: EditorMode::Adjust,
            brush_radius: 10.0,
            pointer_active: false,
            stroke: None,
            processing: false,
        }
    }

    #[test]
    fn press_during_resize_is_carried_along() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        let message = model(Size::new(1024.0, 768.0)).message_for(&event, bounds(), at(310.0, 70.0));
        match message {
            Some(CanvasMessage::Resized { size, then: Some(input) }) => {
                assert_eq!(size, Size::new(800.0, 600.0));
                assert!(matches!(*input, CanvasMessage::PointerPressed(p) if p == Point::new(10.0, 20.0)));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn resize_without_input_is_still_reported() {
        let event = Event::Mouse(mouse::Event::CursorEntered);
        assert!(matches!(
            model(Size::new(1024.0, 768.0)).message_for(&event, bounds(), at(310.0, 70.0)),
            Some(CanvasMessage::Resized { then: None, .. })
        ));
        assert!(model(Size::new(800.0, 600.0))
            .message_for(&event, bounds(), at(310.0, 70.0))
            .is_none());
    }

    #[test]
    fn single_point_stroke_has_no_path() {
        assert!(stroke_path(&[Point::ORIGIN]).is_none());
        assert!(stroke_path(&[Point::ORIGIN, Point::new(4.0, 4.0)]).is_some());
    }

    #[test]
    fn press_inside_reports_local_position() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        match translate_event(&event, bounds(), at(310.0, 70.0), false) {
            Some(CanvasMessage::PointerPressed(p)) => assert_eq!(p, Point::new(10.0, 20.0)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn press_outside_is_ignored() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert!(translate_event(&event, bounds(), at(10.0, 10.0), false).is_none());
    }

    #[test]
    fn moves_only_reported_while_active() {
        let event = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(400.0, 100.0),
        });
        assert!(translate_event(&event, bounds(), at(400.0, 100.0), false).is_none());
        assert!(matches!(
            translate_event(&event, bounds(), at(400.0, 100.0), true),
            Some(CanvasMessage::PointerMoved(_))
        ));
    }

    #[test]
    fn leaving_the_canvas_ends_the_gesture() {
        let event = Event::Mouse(mouse::Event::CursorLeft);
        assert!(matches!(
            translate_event(&event, bounds(), mouse::Cursor::Unavailable, true),
            Some(CanvasMessage::PointerReleased)
        ));
        let moved_out = Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(5.0, 5.0),
        });
        assert!(matches!(
            translate_event(&moved_out, bounds(), at(5.0, 5.0), true),
            Some(CanvasMessage::PointerReleased)
        ));
    }

    #[test]
    fn wheel_lines_become_pixels() {
        let event = Event::Mouse(mouse::Event::WheelScrolled {
            delta: mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 },
        });
        match translate_event(&event, bounds(), at(500.0, 300.0), false) {
            Some(CanvasMessage::Wheel(dy)) => assert_eq!(dy, -100.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn touch_positions_are_made_local() {
        let event = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(0),
            position: Point::new(350.0, 60.0),
        });
        match translate_event(&event, bounds(), mouse::Cursor::Unavailable, false) {
            Some(CanvasMessage::PointerPressed(p)) => assert_eq!(p, Point::new(50.0, 10.0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
