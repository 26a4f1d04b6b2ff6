use num_enum::TryFromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum_macros::AsRefStr;

pub const STR_TRUE: &str = "true";
pub const STR_FALSE: &str = "false";

#[derive(
    Debug, Serialize_repr, Deserialize_repr, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, TryFromPrimitive,
)]
#[repr(u32)]
pub enum SettingKey {
    #[strum(serialize = "use_12h_time")]
    Use12hTime = 0,
    #[strum(serialize = "hide_battery")]
    HideBattery = 1,
    #[strum(serialize = "hide_date")]
    HideDate = 2,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::Use12hTime,
        SettingKey::HideBattery,
        SettingKey::HideDate,
    ];

    pub fn from_name(name: &str) -> Option<SettingKey> {
        SettingKey::ALL.into_iter().find(|key| key.as_ref() == name)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub use_12h_time: bool,
    pub hide_battery: bool,
    pub hide_date: bool,
}

impl Settings {
    /// Returns true when the stored value actually changed.
    pub fn set(&mut self, key: SettingKey, value: bool) -> bool {
        let slot = match key {
            SettingKey::Use12hTime => &mut self.use_12h_time,
            SettingKey::HideBattery => &mut self.hide_battery,
            SettingKey::HideDate => &mut self.hide_date,
        };

        let changed = *slot != value;
        *slot = value;

        changed
    }
}

pub fn parse_flag(value: &str) -> Option<bool> {
    match value {
        STR_TRUE => Some(true),
        STR_FALSE => Some(false),
        _ => None,
    }
}
