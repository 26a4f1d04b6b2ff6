use std::convert::Infallible;

use bullets_shared::display_interface::ClockDisplayInterface;
use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
};

/// In-memory draw target that also counts every pixel it was asked to draw.
pub struct CountingTarget {
    size: Size,
    pixels: Vec<Rgb565>,
    pub pixels_drawn: usize,
}

impl CountingTarget {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![Rgb565::BLACK; (size.width * size.height) as usize],
            pixels_drawn: 0,
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if self.bounding_box().contains(point) {
            Some(point.y as usize * self.size.width as usize + point.x as usize)
        } else {
            None
        }
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).map(|index| self.pixels[index])
    }

    pub fn count_color_in(&self, area: Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|point| self.pixel(*point) == Some(color))
            .count()
    }

    pub fn count_color(&self, color: Rgb565) -> usize {
        self.count_color_in(self.bounding_box(), color)
    }
}

impl OriginDimensions for CountingTarget {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for CountingTarget {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.pixels_drawn += 1;

            if let Some(index) = self.index(point) {
                self.pixels[index] = color;
            }
        }

        Ok(())
    }
}

/// Display without a window.
pub struct HeadlessDisplay<const W: u32, const H: u32> {
    pub frame: CountingTarget,
    pub renders: usize,
    pub commits: usize,
}

pub type PebbleDisplay = HeadlessDisplay<144, 168>;

/// Too small to hold the bullets.
pub type TinyDisplay = HeadlessDisplay<10, 10>;

impl<const W: u32, const H: u32> ClockDisplayInterface for HeadlessDisplay<W, H> {
    type Error = Infallible;

    type ColorModel = Rgb565;

    type FrameBuffer = CountingTarget;

    fn create() -> Self {
        Self {
            frame: CountingTarget::new(Size::new(W, H)),
            renders: 0,
            commits: 0,
        }
    }

    fn size(&self) -> Size {
        self.frame.size()
    }

    fn render(
        &mut self,
        func: impl FnOnce(&mut Self::FrameBuffer) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error> {
        self.renders += 1;

        func(&mut self.frame)
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}
