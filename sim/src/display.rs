use std::convert::Infallible;

use bullets_shared::display_interface::ClockDisplayInterface;
use embedded_graphics::{
    geometry::{OriginDimensions, Size},
    pixelcolor::Rgb565,
};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use log::debug;

/// Pebble-sized screen.
const SCREEN_WIDTH: u32 = 144;
const SCREEN_HEIGHT: u32 = 168;

pub struct SimDisplay {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    frames: u32,
}

impl ClockDisplayInterface for SimDisplay {
    type Error = Infallible;

    type ColorModel = Rgb565;

    type FrameBuffer = SimulatorDisplay<Rgb565>;

    fn create() -> Self {
        let display = SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

        let output_settings = OutputSettingsBuilder::new()
            .scale(3)
            .pixel_spacing(1)
            .max_fps(5)
            .build();

        let window = Window::new("Bullets watchface sim", &output_settings);

        SimDisplay {
            display,
            window,
            frames: 0,
        }
    }

    fn size(&self) -> Size {
        self.display.size()
    }

    fn render(
        &mut self,
        func: impl FnOnce(&mut Self::FrameBuffer) -> Result<(), Self::Error>,
    ) -> Result<(), Self::Error> {
        func(&mut self.display)
    }

    fn commit(&mut self) {
        self.frames += 1;

        debug!("commit frame {}", self.frames);

        self.window.update(&self.display);
    }
}
