use embedded_graphics::mono_font::{ascii::FONT_7X13_BOLD, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;
use std::marker::PhantomData;
use u8g2_fonts::{fonts, U8g2TextStyle};

use crate::settings::Settings;

use super::graphics::Graphics;
use super::palette::bullet_color;

pub const MAX_BATTERY_VALUE: u8 = 100;
pub const BATTERY_DOT_VALUE: u8 = 10;
pub const BATTERY_DOT_RADIUS: u32 = 4;

pub fn battery_dots(percent: u8) -> u8 {
    percent.min(MAX_BATTERY_VALUE) / BATTERY_DOT_VALUE
}

/// Centers of the dots to draw: one slot per dot value, the pixels lost to
/// integer division are split evenly between both ends of the strip.
pub fn battery_dot_centers(strip: Rectangle, percent: u8) -> impl Iterator<Item = Point> {
    let slots = (MAX_BATTERY_VALUE / BATTERY_DOT_VALUE) as u32;
    let slot_width = strip.size.width / slots;
    let left_margin = (strip.size.width - slot_width * slots) / 2;

    let first = Point::new(
        strip.top_left.x + (left_margin + slot_width / 2) as i32,
        strip.top_left.y + (strip.size.height / 2) as i32,
    );

    (0..battery_dots(percent) as i32).map(move |slot| first + Point::new(slot * slot_width as i32, 0))
}

pub struct Renderer<TTarget> {
    _inner: PhantomData<TTarget>,
}

impl<TTarget> Renderer<TTarget>
where
    TTarget: DrawTarget,
    TTarget::Color: RgbColor + From<Rgb888>,
{
    pub fn render_bullet(frame: &mut TTarget, cell: Rectangle, digit: char) -> Result<(), TTarget::Error> {
        let diameter = cell.size.width.min(cell.size.height);
        let center = cell.center();

        Graphics::<TTarget>::filled_circle(frame, center, diameter, bullet_color(digit).into())?;

        let mut buf = [0u8; 4];
        let text = digit.encode_utf8(&mut buf);

        let digit_style = U8g2TextStyle::new(fonts::u8g2_font_logisoso42_tn, TTarget::Color::WHITE);

        Graphics::<TTarget>::text_centered(frame, text, center, digit_style)?;

        Ok(())
    }

    pub fn render_battery(
        frame: &mut TTarget,
        strip: Rectangle,
        percent: u8,
        settings: &Settings,
    ) -> Result<(), TTarget::Error> {
        if settings.hide_battery {
            return Ok(());
        }

        debug!("battery {}% -> {} dots", percent, battery_dots(percent));

        for center in battery_dot_centers(strip, percent) {
            Graphics::<TTarget>::filled_circle(
                frame,
                center,
                BATTERY_DOT_RADIUS * 2 + 1,
                TTarget::Color::WHITE,
            )?;
        }

        Ok(())
    }

    pub fn render_date(
        frame: &mut TTarget,
        strip: Rectangle,
        label: &str,
        settings: &Settings,
    ) -> Result<(), TTarget::Error> {
        if settings.hide_date {
            return Ok(());
        }

        let style = MonoTextStyle::new(&FONT_7X13_BOLD, TTarget::Color::WHITE);

        Graphics::<TTarget>::text_box(frame, label, strip, style)
    }
}
