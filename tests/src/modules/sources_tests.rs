use std::collections::VecDeque;

use bullets_shared::{
    capabilities::{ConfigChannel, TickSource},
    contract::packets::{SettingEntry, SettingsPacket},
    events::Events,
    message_bus::MessageBus,
    modules::sources::{ConfigModule, SystemClock, TickModule},
};
use time::{
    macros::{datetime, offset},
    OffsetDateTime, UtcOffset,
};
use tokio::{
    join,
    time::{timeout, Duration},
};

use crate::spy_module::SpyModule;

struct ScriptedClock {
    ticks: VecDeque<OffsetDateTime>,
}

impl TickSource for ScriptedClock {
    async fn next_tick(&mut self) -> Option<OffsetDateTime> {
        self.ticks.pop_front()
    }
}

struct ScriptedConfig {
    packets: VecDeque<Vec<u8>>,
}

impl ConfigChannel for ScriptedConfig {
    async fn next_packet(&mut self) -> Option<Vec<u8>> {
        self.packets.pop_front()
    }
}

#[tokio::test]
async fn should_publish_every_tick() {
    let ticks = vec![
        datetime!(2024-12-31 23:59 UTC),
        datetime!(2025-01-01 00:00 UTC),
    ];

    let message_bus = MessageBus::new();
    let spy_bus = message_bus.clone();

    let clock = ScriptedClock {
        ticks: ticks.clone().into(),
    };

    let tick_task = TickModule::start(clock, message_bus);

    let mut spy = SpyModule::new();

    let spy_task = spy.start(spy_bus, Events::TimeNow(OffsetDateTime::UNIX_EPOCH), 2);

    join!(tick_task, spy_task);

    let published: Vec<OffsetDateTime> = spy
        .get_events()
        .filter_map(|event| match event {
            Events::TimeNow(now) => Some(*now),
            _ => None,
        })
        .collect();

    assert_eq!(published, ticks);
}

#[tokio::test]
async fn should_publish_config_packets_verbatim() {
    let packet = SettingsPacket::new(vec![SettingEntry::new(1, "true")])
        .serialize()
        .unwrap();

    let message_bus = MessageBus::new();
    let spy_bus = message_bus.clone();

    let channel = ScriptedConfig {
        packets: vec![packet.clone()].into(),
    };

    let config_task = ConfigModule::start(channel, message_bus);

    let mut spy = SpyModule::new();

    let spy_task = spy.start(spy_bus, Events::IncomingSettings(Default::default()), 1);

    join!(config_task, spy_task);

    let Some(Events::IncomingSettings(data)) = spy.get_events().next() else {
        panic!("no settings published");
    };

    assert_eq!(data.as_slice(), packet.as_slice());
}

#[test]
fn should_follow_local_offset_changes() {
    let mut readings = vec![Some(offset!(+1)), None, Some(offset!(+2))].into_iter();

    let mut clock = SystemClock::new(UtcOffset::UTC, move || readings.next().flatten());

    assert_eq!(clock.now().offset(), offset!(+1));
    assert_eq!(clock.now().offset(), offset!(+1));
    assert_eq!(clock.now().offset(), offset!(+2));
    assert_eq!(clock.now().offset(), offset!(+2));
}

#[test]
fn should_keep_startup_offset_when_local_offset_is_unknown() {
    let mut clock = SystemClock::new(offset!(-5), || None);

    assert_eq!(clock.now().offset(), offset!(-5));
}

#[tokio::test]
async fn should_tick_immediately_in_local_time() {
    let mut clock = SystemClock::new(UtcOffset::UTC, || Some(offset!(+3)));

    let tick = timeout(Duration::from_secs(1), clock.next_tick())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(tick.offset(), offset!(+3));
}
