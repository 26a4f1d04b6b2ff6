use std::future::Future;

use time::OffsetDateTime;

use crate::error::Error;

/// Delivers the local time once per elapsed minute. `None` ends the stream.
pub trait TickSource {
    fn next_tick(&mut self) -> impl Future<Output = Option<OffsetDateTime>> + Send;
}

pub trait BatterySource {
    fn next_level(&mut self) -> impl Future<Output = Option<u8>> + Send;
}

pub trait ConfigChannel {
    fn next_packet(&mut self) -> impl Future<Output = Option<Vec<u8>>> + Send;
}

pub trait SettingsStorage: Send {
    fn read_bytes(&self, name: &str) -> Result<Vec<u8>, Error>;

    fn write_bytes(&mut self, name: &str, data: &[u8]) -> Result<(), Error>;
}
