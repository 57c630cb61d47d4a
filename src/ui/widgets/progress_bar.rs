// SPDX-License-Identifier: MPL-2.0
//! Indeterminate progress bar drawn on a canvas.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};

/// Width of the moving segment relative to the track.
const SEGMENT_RATIO: f32 = 0.3;

/// A track with a segment sweeping from left to right.
pub struct ProgressBar {
    phase: f32,
    color: Color,
}

impl ProgressBar {
    /// `phase` is the segment position in `0.0..1.0`.
    #[must_use]
    pub fn new(phase: f32) -> Self {
        Self {
            phase,
            color: palette::PRIMARY_400,
        }
    }

    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_TRACK))
            .into()
    }

    /// Horizontal extent `(start, end)` of the segment on a track of `width`.
    /// The segment enters from the left edge and leaves past the right edge.
    fn segment(&self, width: f32) -> (f32, f32) {
        let travel = width * (1.0 + SEGMENT_RATIO);
        let end = travel * self.phase.clamp(0.0, 1.0);
        let start = end - width * SEGMENT_RATIO;
        (start.max(0.0), end.min(width))
    }
}

impl<Message> canvas::Program<Message> for ProgressBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let height = bounds.height;

        let track = Path::rectangle(Point::ORIGIN, bounds.size());
        frame.fill(
            &track,
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..self.color
            },
        );

        let (start, end) = self.segment(bounds.width);
        if end > start {
            let bar = Path::rectangle(Point::new(start, 0.0), Size::new(end - start, height));
            frame.fill(&bar, self.color);
        }

        vec![frame.into_geometry()]
    }
}
