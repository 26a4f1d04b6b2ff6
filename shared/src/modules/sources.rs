use std::sync::Arc;

use log::{info, warn};
use time::{OffsetDateTime, UtcOffset};
use tokio::select;
use tokio::time::{sleep, Duration};

use crate::capabilities::{BatterySource, ConfigChannel, TickSource};
use crate::events::Events;
use crate::message_bus::MessageBus;

const TICK_SLACK: Duration = Duration::from_millis(50);

pub struct TickModule {}

pub struct BatteryModule {}

pub struct ConfigModule {}

/// Wall clock ticking right after every minute boundary. The UTC offset is
/// queried on every reading; when the query fails the last known offset stays.
pub struct SystemClock<TOffset> {
    offset: UtcOffset,
    local_offset: TOffset,
    started: bool,
}

impl<TOffset> SystemClock<TOffset>
where
    TOffset: FnMut() -> Option<UtcOffset>,
{
    pub fn new(offset: UtcOffset, local_offset: TOffset) -> Self {
        Self {
            offset,
            local_offset,
            started: false,
        }
    }

    pub fn now(&mut self) -> OffsetDateTime {
        if let Some(offset) = (self.local_offset)() {
            if offset != self.offset {
                info!("utc offset {} -> {}", self.offset, offset);
                self.offset = offset;
            }
        }

        OffsetDateTime::now_utc().to_offset(self.offset)
    }
}

impl<TOffset> TickSource for SystemClock<TOffset>
where
    TOffset: FnMut() -> Option<UtcOffset> + Send,
{
    async fn next_tick(&mut self) -> Option<OffsetDateTime> {
        if self.started {
            let utc = OffsetDateTime::now_utc();
            let into_minute = Duration::from_secs(utc.second() as u64)
                + Duration::from_nanos(utc.nanosecond() as u64);

            sleep(Duration::from_secs(60) - into_minute + TICK_SLACK).await;
        }

        self.started = true;

        Some(self.now())
    }
}

impl TickModule {
    pub async fn start<TSource: TickSource>(mut source: TSource, bus: MessageBus) {
        info!("starting...");

        let (sender, mut commands) = bus.split();

        loop {
            select! {
                tick = source.next_tick() => match tick {
                    Some(now) => sender.send_event(Events::TimeNow(now)),
                    None => {
                        warn!("tick source exhausted");
                        break;
                    }
                },
                _ = MessageBus::wait_for_shutdown(&mut commands) => break,
            }
        }

        info!("done.");
    }
}

impl BatteryModule {
    pub async fn start<TSource: BatterySource>(mut source: TSource, bus: MessageBus) {
        info!("starting...");

        let (sender, mut commands) = bus.split();

        loop {
            select! {
                level = source.next_level() => match level {
                    Some(level) => sender.send_event(Events::BatteryLevel(level)),
                    None => {
                        warn!("battery source exhausted");
                        break;
                    }
                },
                _ = MessageBus::wait_for_shutdown(&mut commands) => break,
            }
        }

        info!("done.");
    }
}

impl ConfigModule {
    pub async fn start<TChannel: ConfigChannel>(mut channel: TChannel, bus: MessageBus) {
        info!("starting...");

        let (sender, mut commands) = bus.split();

        loop {
            select! {
                packet = channel.next_packet() => match packet {
                    Some(packet) => sender.send_event(Events::IncomingSettings(Arc::new(packet))),
                    None => {
                        info!("config channel closed");
                        break;
                    }
                },
                _ = MessageBus::wait_for_shutdown(&mut commands) => break,
            }
        }

        info!("done.");
    }
}
