use enumflags2::BitFlags;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::error::Error;

use super::dirty::{Region, BULLET_REGIONS};

/// Longest label is "Wed 31 Dec".
pub const DATE_LABEL_CAPACITY: usize = 24;

pub type DateLabel = heapless::String<DATE_LABEL_CAPACITY>;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    digits: [char; 4],
    battery_percent: u8,
    date_label: DateLabel,
    last_tick: Option<OffsetDateTime>,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            digits: ['0'; 4],
            battery_percent: 0,
            date_label: DateLabel::new(),
            last_tick: None,
        }
    }
}

impl DisplayState {
    pub fn digit(&self, region: Region) -> Option<char> {
        region.bullet_index().map(|index| self.digits[index])
    }

    pub fn digits(&self) -> [char; 4] {
        self.digits
    }

    pub fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    pub fn date_label(&self) -> &str {
        self.date_label.as_str()
    }

    pub fn last_tick(&self) -> Option<OffsetDateTime> {
        self.last_tick
    }

    /// Returns the regions whose content changed; everything on the first call.
    pub fn update_time(
        &mut self,
        now: OffsetDateTime,
        use_12h_time: bool,
    ) -> Result<BitFlags<Region>, Error> {
        let hour = display_hour(now.hour(), use_12h_time);
        let [hour_tens, hour_ones] = split_digits(hour);
        let [minute_tens, minute_ones] = split_digits(now.minute());

        let digits = [hour_tens, hour_ones, minute_tens, minute_ones];
        let date_label = format_date_label(now)?;

        let mut changed = match self.last_tick {
            None => Region::time_regions(),
            Some(_) => BitFlags::empty(),
        };

        for (index, region) in BULLET_REGIONS.iter().enumerate() {
            if self.digits[index] != digits[index] {
                changed |= *region;
            }
        }

        if self.date_label != date_label {
            changed |= Region::Date;
        }

        self.digits = digits;
        self.date_label = date_label;
        self.last_tick = Some(now);

        Ok(changed)
    }

    pub fn update_battery(&mut self, percent: u8) -> bool {
        let percent = percent.min(100);
        let changed = self.battery_percent != percent;

        self.battery_percent = percent;

        changed
    }
}

/// 12-hour mode maps 0 to 12 and 13..=23 to 1..=11; 12 stays 12.
pub fn display_hour(hour: u8, use_12h_time: bool) -> u8 {
    if !use_12h_time {
        return hour;
    }

    if hour > 12 {
        hour - 12
    } else if hour == 0 {
        12
    } else {
        hour
    }
}

pub fn split_digits(value: u8) -> [char; 2] {
    debug_assert!(value < 100);

    [
        char::from(b'0' + value / 10 % 10),
        char::from(b'0' + value % 10),
    ]
}

pub fn format_date_label(now: OffsetDateTime) -> Result<DateLabel, Error> {
    let date_template =
        format_description!("[weekday repr:short] [day padding:none] [month repr:short]");

    let text = now.format(&date_template)?;

    DateLabel::try_from(text.as_str())
        .map_err(|_| Error(format!("date label '{}' exceeds {} bytes", text, DATE_LABEL_CAPACITY)))
}
