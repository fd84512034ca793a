//! Visible-window adapter.
//!
//! [`Viewport`] wraps a panel-sized [`DrawTarget`] and presents only the
//! physically visible window, with its own origin at the window's top-left
//! corner. Drawing code can then use "what you see" coordinates and never
//! has to add the offset constants by hand.

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{Dimensions, DrawTarget, Point, Size},
    primitives::Rectangle,
    Pixel,
};

use crate::config::ViewportConfig;

/// Offset-and-clip view onto a larger draw target.
pub struct Viewport<'a, D> {
    target: &'a mut D,
    offset: Point,
    size: Size,
}

impl<'a, D> Viewport<'a, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    /// Wrap `target`, exposing the window described by `config`.
    pub fn new(target: &'a mut D, config: &ViewportConfig) -> Self {
        Self {
            target,
            offset: Point::new(config.offset_x, config.offset_y),
            size: Size::new(config.width, config.height),
        }
    }

    /// Map a viewport point to panel coordinates.
    ///
    /// Returns `None` for points outside the visible window.
    pub fn to_panel(&self, point: Point) -> Option<Point> {
        if self.bounding_box().contains(point) {
            Some(point + self.offset)
        } else {
            None
        }
    }
}

impl<D> Dimensions for Viewport<'_, D> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }
}

impl<D> DrawTarget for Viewport<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let area = Rectangle::new(Point::zero(), self.size);
        let offset = self.offset;
        self.target.draw_iter(
            pixels
                .into_iter()
                .filter(move |Pixel(point, _)| area.contains(*point))
                .map(move |Pixel(point, color)| Pixel(point + offset, color)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::PageBuffer;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn origin_maps_to_offset() {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            Pixel(Point::new(0, 0), BinaryColor::On).draw(&mut vp).unwrap();
        }
        assert_eq!(fb.pixel(28, 24), Some(true));
        assert_eq!(fb.lit_pixels(), 1);
    }

    #[test]
    fn to_panel_mapping() {
        let mut fb = PageBuffer::new();
        let vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
        assert_eq!(vp.to_panel(Point::new(71, 39)), Some(Point::new(99, 63)));
        assert_eq!(vp.to_panel(Point::new(72, 0)), None);
        assert_eq!(vp.to_panel(Point::new(0, -1)), None);
    }

    #[test]
    fn bounding_box_is_window_size() {
        let mut fb = PageBuffer::new();
        let vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
        assert_eq!(
            vp.bounding_box(),
            Rectangle::new(Point::zero(), Size::new(72, 40))
        );
    }

    #[test]
    fn pixels_outside_window_are_clipped() {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            // Fill far more than the window; only the 72×40 window may light.
            Rectangle::new(Point::new(-10, -10), Size::new(128, 64))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(&mut vp)
                .unwrap();
        }
        assert_eq!(fb.lit_pixels(), 72 * 40);
        assert_eq!(fb.pixel(27, 24), Some(false));
        assert_eq!(fb.pixel(28, 23), Some(false));
        assert_eq!(fb.pixel(100, 40), Some(false));
        assert_eq!(fb.pixel(99, 63), Some(true));
    }

    #[test]
    fn clear_only_touches_window() {
        let mut fb = PageBuffer::new();
        {
            let mut vp = Viewport::new(&mut fb, &ViewportConfig::PANEL_0_42);
            vp.clear(BinaryColor::On).unwrap();
        }
        assert_eq!(fb.lit_pixels(), 72 * 40);
    }
}
