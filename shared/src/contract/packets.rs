use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const SETTINGS_PACKET_VERSION: i32 = 1;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SettingEntry {
    pub key: u32,
    pub value: String,
}

impl SettingEntry {
    pub fn new(key: u32, value: &str) -> Self {
        Self {
            key,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct SettingsPacket {
    pub version: i32,
    pub entries: Vec<SettingEntry>,
}

impl SettingsPacket {
    pub fn new(entries: Vec<SettingEntry>) -> Self {
        Self {
            version: SETTINGS_PACKET_VERSION,
            entries,
        }
    }

    pub fn serialize(&self) -> Result<Vec<u8>, Error> {
        Ok(rmp_serde::to_vec(self)?)
    }

    pub fn deserialize(buf: &[u8]) -> Result<Self, Error> {
        Ok(rmp_serde::from_slice(buf)?)
    }
}
