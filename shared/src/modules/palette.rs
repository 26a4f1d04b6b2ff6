use embedded_graphics::pixelcolor::Rgb888;

pub const ISLAMIC_GREEN: Rgb888 = Rgb888::new(0x00, 0xAA, 0x00);
pub const CHROME_YELLOW: Rgb888 = Rgb888::new(0xFF, 0xAA, 0x00);
pub const BULGARIAN_ROSE: Rgb888 = Rgb888::new(0x55, 0x00, 0x00);
pub const INDIGO: Rgb888 = Rgb888::new(0x55, 0x00, 0xAA);
pub const CYAN: Rgb888 = Rgb888::new(0x00, 0xFF, 0xFF);
pub const BRASS: Rgb888 = Rgb888::new(0xAA, 0xAA, 0x55);
pub const RED: Rgb888 = Rgb888::new(0xFF, 0x00, 0x00);
pub const MAGENTA: Rgb888 = Rgb888::new(0xFF, 0x00, 0xFF);
pub const BLUE: Rgb888 = Rgb888::new(0x00, 0x00, 0xFF);
pub const DARK_GRAY: Rgb888 = Rgb888::new(0x55, 0x55, 0x55);

pub fn bullet_color(digit: char) -> Rgb888 {
    match digit {
        '1' => ISLAMIC_GREEN,
        '2' => CHROME_YELLOW,
        '3' => BULGARIAN_ROSE,
        '4' => INDIGO,
        '5' => CYAN,
        '6' => BRASS,
        '7' => RED,
        '8' => MAGENTA,
        '9' => BLUE,
        _ => DARK_GRAY,
    }
}
