use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use embedded_graphics::{prelude::*, primitives};
use embedded_text::alignment::{HorizontalAlignment, VerticalAlignment};
use embedded_text::style::TextBoxStyleBuilder;
use embedded_text::TextBox;
use std::marker::PhantomData;

pub struct Graphics<TTarget> {
    _inner: PhantomData<TTarget>,
}

impl<TTarget> Graphics<TTarget>
where
    TTarget: DrawTarget,
{
    pub fn filled_circle(
        frame: &mut TTarget,
        center: Point,
        diameter: u32,
        color: TTarget::Color,
    ) -> Result<(), TTarget::Error> {
        primitives::Circle::with_center(center, diameter)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(frame)
    }

    /// Centers the text on `center` in both axes using the font metrics.
    pub fn text_centered(
        frame: &mut TTarget,
        text: &str,
        center: Point,
        style: impl TextRenderer<Color = TTarget::Color>,
    ) -> Result<Rectangle, TTarget::Error> {
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();

        let text = Text::with_text_style(text, center, style, text_style);
        let bounding_box = text.bounding_box();

        let mut clipped = frame.clipped(&bounding_box);

        text.draw(&mut clipped)?;

        Ok(bounding_box)
    }

    pub fn text_box(
        frame: &mut TTarget,
        text: &str,
        bounds: Rectangle,
        style: MonoTextStyle<'_, TTarget::Color>,
    ) -> Result<(), TTarget::Error>
    where
        TTarget::Color: From<Rgb888>,
    {
        let textbox_style = TextBoxStyleBuilder::new()
            .alignment(HorizontalAlignment::Center)
            .vertical_alignment(VerticalAlignment::Middle)
            .build();

        TextBox::with_textbox_style(text, bounds, style, textbox_style).draw(frame)?;

        Ok(())
    }
}
