use std::marker::PhantomData;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

use log::{debug, error, info, warn};

use crate::commands::Commands;
use crate::contract::packets::SettingsPacket;
use crate::display_interface::ClockDisplayInterface;
use crate::error::Error;
use crate::events::Events;
use crate::message_bus::{BusHandler, BusSender, MessageBus};
use crate::persistence::PersistenceUnit;
use crate::settings::{SettingKey, Settings};

use super::layout::LayoutConfig;
use super::watchface::Watchface;

/// The watchface state and the display live on the render loop thread.
pub struct WatchfaceModule<TDisplay> {
    _inner: PhantomData<TDisplay>,
}

pub struct Context {
    tx: Sender<Events>,
}

impl Context {
    fn forward(&self, event: Events) {
        if let Err(err) = self.tx.send(event) {
            warn!("render loop is gone, dropping {}", err.0.as_ref());
        }
    }
}

impl<TDisplay> BusHandler<Context> for WatchfaceModule<TDisplay>
where
    TDisplay: ClockDisplayInterface,
{
    async fn event_handler(_bus: &BusSender, context: &mut Context, event: Events) {
        match event {
            Events::TimeNow(_)
            | Events::BatteryLevel(_)
            | Events::IncomingSettings(_)
            | Events::Restored(_) => context.forward(event),
            _ => {}
        }
    }

    async fn command_handler(_bus: &BusSender, context: &mut Context, command: Commands) {
        if matches!(command, Commands::Shutdown) {
            context.forward(Events::Term);
        }
    }
}

impl<TDisplay> WatchfaceModule<TDisplay>
where
    TDisplay: ClockDisplayInterface + 'static,
{
    pub async fn start(bus: MessageBus) {
        info!("starting...");

        let (tx, rx) = channel::<Events>();

        let sender = bus.sender();
        let render_loop_task = tokio::task::spawn_blocking(move || {
            Self::render_loop(sender, rx);
        });

        for key in SettingKey::ALL {
            bus.send_cmd(Commands::Restore(key));
        }

        MessageBus::handle::<Context, Self>(bus, Context { tx }).await;

        if let Err(err) = render_loop_task.await {
            error!("render loop failed: {}", err);
        }

        info!("done.");
    }

    fn render_loop(bus: BusSender, rx: Receiver<Events>) {
        let mut display = TDisplay::create();

        let size = display.size();

        let mut watchface = match Watchface::new(size, &LayoutConfig::default(), Settings::default()) {
            Ok(watchface) => watchface,
            Err(err) => {
                error!("cannot lay out a {}x{} screen: {}", size.width, size.height, err);
                bus.send_cmd(Commands::Shutdown);
                return;
            }
        };

        info!("layout {:?}", watchface.layout());

        while let Ok(event) = rx.recv() {
            if matches!(event, Events::Term) {
                info!("received term");
                break;
            }

            if let Err(err) = Self::handle_event(&bus, &mut watchface, event) {
                error!("{}", err);
                bus.send_cmd(Commands::Shutdown);
                break;
            }

            let now = Instant::now();

            match watchface.paint(&mut display) {
                Ok(regions) if !regions.is_empty() => {
                    debug!("render timing: {:?} in {}ms", regions, now.elapsed().as_millis());
                    bus.send_event(Events::FramePainted(regions));
                }
                Ok(_) => {}
                Err(err) => error!("paint failed: {:?}", err),
            }
        }

        info!("render loop done.");
    }

    fn handle_event(bus: &BusSender, watchface: &mut Watchface, event: Events) -> Result<(), Error> {
        match event {
            Events::TimeNow(now) => watchface.recompute_time(now)?,
            Events::BatteryLevel(level) => watchface.recompute_battery(level),
            Events::IncomingSettings(data) => {
                let packet = match SettingsPacket::deserialize(&data) {
                    Ok(packet) => packet,
                    Err(err) => {
                        warn!("dropping settings packet: {}", err);
                        return Ok(());
                    }
                };

                for (key, value) in watchface.apply_settings(&packet.entries)? {
                    bus.send_cmd(Commands::Persist(PersistenceUnit::new(key, &value)?));
                }
            }
            Events::Restored(unit) => {
                let value = match unit.deserialize::<bool>() {
                    Ok(value) => value,
                    Err(err) => {
                        debug!("{} not restored ({}), using default", unit.key.as_ref(), err);
                        false
                    }
                };

                watchface.restore_setting(unit.key, value)?;
            }
            _ => {}
        }

        Ok(())
    }
}
