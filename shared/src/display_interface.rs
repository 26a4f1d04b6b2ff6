use embedded_graphics::{
    draw_target::DrawTarget,
    pixelcolor::{Rgb888, RgbColor},
    prelude::Size,
};
use std::fmt::Debug;

pub trait ClockDisplayInterface {
    type Error: Debug;
    type ColorModel: RgbColor + From<Rgb888>;
    type FrameBuffer: DrawTarget<Error = Self::Error, Color = Self::ColorModel>;

    fn create() -> Self;

    fn size(&self) -> Size;

    fn render(
        &mut self,
        func: impl FnOnce(&mut Self::FrameBuffer) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error>;

    fn commit(&mut self);
}
