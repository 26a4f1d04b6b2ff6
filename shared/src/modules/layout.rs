use std::fmt::{Display, Formatter};

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use super::dirty::Region;

pub struct LayoutConfig {
    pub strip_margin: i32,
    pub strip_height: i32,
    /// Half of the gap between neighbouring bullets.
    pub bullet_margin: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            strip_margin: 2,
            strip_height: 14,
            bullet_margin: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    ScreenTooSmall { width: u32, height: u32 },
    DegenerateBullet { size: i32 },
}

impl Display for LayoutError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::ScreenTooSmall { width, height } => {
                write!(f, "screen {}x{} cannot hold the battery and date strips", width, height)
            }
            LayoutError::DegenerateBullet { size } => {
                write!(f, "bullet cell size {} is not positive, screen too small", size)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub battery: Rectangle,
    /// Upper-left, upper-right, lower-left, lower-right.
    pub bullets: [Rectangle; 4],
    pub date: Rectangle,
}

impl Layout {
    pub fn compute(screen: Size, config: &LayoutConfig) -> Result<Layout, LayoutError> {
        let width = screen.width as i32;
        let height = screen.height as i32;

        let strip_size = Size::new(screen.width, config.strip_height.max(0) as u32);

        let battery = Rectangle::new(Point::new(0, config.strip_margin), strip_size);
        let date = Rectangle::new(
            Point::new(0, height - config.strip_height - config.strip_margin),
            strip_size,
        );

        let available_height = height - 2 * config.strip_height - 2 * config.strip_margin;
        let available_width = width;

        if available_height <= 0 {
            return Err(LayoutError::ScreenTooSmall {
                width: screen.width,
                height: screen.height,
            });
        }

        let size = available_height.min(available_width) / 2 - config.bullet_margin;

        if size <= 0 {
            return Err(LayoutError::DegenerateBullet { size });
        }

        let mid = Point::new(width / 2, height / 2);
        let margin = config.bullet_margin;
        let cell = Size::new(size as u32, size as u32);

        let near = |axis: i32| axis - size - margin;
        // odd lengths widen the gap by a pixel to keep both halves mirrored
        let far = |axis: i32, length: i32| axis + margin + length % 2;

        let bullets = [
            Rectangle::new(Point::new(near(mid.x), near(mid.y)), cell),
            Rectangle::new(Point::new(far(mid.x, width), near(mid.y)), cell),
            Rectangle::new(Point::new(near(mid.x), far(mid.y, height)), cell),
            Rectangle::new(Point::new(far(mid.x, width), far(mid.y, height)), cell),
        ];

        Ok(Layout {
            battery,
            bullets,
            date,
        })
    }

    pub fn bounds_of(&self, region: Region) -> Rectangle {
        match region {
            Region::Battery => self.battery,
            Region::HourTens => self.bullets[0],
            Region::HourOnes => self.bullets[1],
            Region::MinuteTens => self.bullets[2],
            Region::MinuteOnes => self.bullets[3],
            Region::Date => self.date,
        }
    }
}
