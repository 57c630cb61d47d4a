// SPDX-License-Identifier: MPL-2.0
//! Drawing surface: paints through the engine and forwards pointer input.

use crate::engine::{PointerEvent, RenderEngine};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{mouse, Event, Point, Rectangle, Renderer, Theme};

/// Pointer input as forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pointer {
    Down(PointerEvent),
    Move(PointerEvent),
    /// Button released; `click` is set when the release lands on the surface.
    Up { event: PointerEvent, click: bool },
}

/// Per-widget interaction state.
#[derive(Debug, Default)]
pub struct Interaction {
    pressed: bool,
    /// Last pointer position relative to the surface.
    last_position: Option<Point>,
}

pub struct DrawingSurface<'a> {
    engine: &'a dyn RenderEngine,
}

impl<'a> DrawingSurface<'a> {
    #[must_use]
    pub fn new(engine: &'a dyn RenderEngine) -> Self {
        Self { engine }
    }
}

impl canvas::Program<Pointer> for DrawingSurface<'_> {
    type State = Interaction;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Pointer>> {
        let size = bounds.size();
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.pressed = true;
                state.last_position = Some(position);
                Some(Action::publish(Pointer::Down(PointerEvent::new(position, size))).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if state.pressed {
                    if let Some(position) = cursor.position_from(bounds.position()) {
                        state.last_position = Some(position);
                    }
                }
                let position = cursor.position_in(bounds)?;
                Some(Action::publish(Pointer::Move(PointerEvent::new(position, size))))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                // Releases outside the surface still end a press that began on it.
                if !std::mem::take(&mut state.pressed) {
                    return None;
                }
                let position = cursor
                    .position_from(bounds.position())
                    .or(state.last_position)
                    .unwrap_or(Point::ORIGIN);
                let click = cursor.is_over(bounds);
                Some(
                    Action::publish(Pointer::Up {
                        event: PointerEvent::new(position, size),
                        click,
                    })
                    .and_capture(),
                )
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.engine.draw(&mut frame);
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeEngine;
    use iced::widget::canvas::Program as _;
    use iced::Size;

    const BOUNDS: Rectangle = Rectangle {
        x: 0.0,
        y: 0.0,
        width: 100.0,
        height: 100.0,
    };

    fn feed(
        surface: &DrawingSurface<'_>,
        state: &mut Interaction,
        event: mouse::Event,
        cursor: mouse::Cursor,
    ) -> Option<Pointer> {
        surface
            .update(state, &Event::Mouse(event), BOUNDS, cursor)
            .and_then(|action| action.into_inner().0)
    }

    fn at(x: f32, y: f32) -> mouse::Cursor {
        mouse::Cursor::Available(Point::new(x, y))
    }

    fn event(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(Point::new(x, y), Size::new(100.0, 100.0))
    }

    #[test]
    fn dragged_release_over_surface_is_a_click() {
        let engine = FakeEngine::new(1);
        let surface = DrawingSurface::new(&engine);
        let mut state = Interaction::default();

        let press = mouse::Event::ButtonPressed(mouse::Button::Left);
        let release = mouse::Event::ButtonReleased(mouse::Button::Left);
        assert_eq!(
            feed(&surface, &mut state, press, at(10.0, 10.0)),
            Some(Pointer::Down(event(10.0, 10.0)))
        );
        assert_eq!(
            feed(&surface, &mut state, release, at(30.0, 10.0)),
            Some(Pointer::Up {
                event: event(30.0, 10.0),
                click: true,
            })
        );
    }

    #[test]
    fn release_outside_surface_ends_press_without_click() {
        let engine = FakeEngine::new(1);
        let surface = DrawingSurface::new(&engine);
        let mut state = Interaction::default();

        feed(&surface, &mut state, mouse::Event::ButtonPressed(mouse::Button::Left), at(10.0, 10.0));
        let up = feed(
            &surface,
            &mut state,
            mouse::Event::ButtonReleased(mouse::Button::Left),
            at(150.0, 10.0),
        );
        assert_eq!(
            up,
            Some(Pointer::Up {
                event: event(150.0, 10.0),
                click: false,
            })
        );
    }

    #[test]
    fn release_without_cursor_uses_last_position() {
        let engine = FakeEngine::new(1);
        let surface = DrawingSurface::new(&engine);
        let mut state = Interaction::default();

        feed(&surface, &mut state, mouse::Event::ButtonPressed(mouse::Button::Left), at(10.0, 10.0));
        feed(
            &surface,
            &mut state,
            mouse::Event::CursorMoved {
                position: Point::new(40.0, 20.0),
            },
            at(40.0, 20.0),
        );
        let up = feed(
            &surface,
            &mut state,
            mouse::Event::ButtonReleased(mouse::Button::Left),
            mouse::Cursor::Unavailable,
        );
        assert_eq!(
            up,
            Some(Pointer::Up {
                event: event(40.0, 20.0),
                click: false,
            })
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let engine = FakeEngine::new(1);
        let surface = DrawingSurface::new(&engine);
        let mut state = Interaction::default();

        let up = feed(
            &surface,
            &mut state,
            mouse::Event::ButtonReleased(mouse::Button::Left),
            at(10.0, 10.0),
        );
        assert_eq!(up, None);
    }
}
