use log::{debug, error, info};

use crate::commands::Commands;
use crate::events::Events;
use crate::message_bus::{BusHandler, BusSender, MessageBus};

pub struct LoggingModule {}

impl BusHandler<()> for LoggingModule {
    async fn event_handler(_bus: &BusSender, _context: &mut (), event: Events) {
        match event {
            Events::Restored(unit) => match unit.data {
                Ok(buf) => {
                    info!("Restored {} of {} bytes", unit.key.as_ref(), buf.len());
                }
                Err(err) => {
                    info!("Nothing restored for {}: {}", unit.key.as_ref(), err);
                }
            },
            Events::IncomingSettings(data) => {
                info!("IncomingSettings {} bytes", data.len());
            }
            Events::FramePainted(regions) => {
                debug!("FramePainted {:?}", regions);
            }
            _ => {
                info!("{:?}", event);
            }
        }
    }

    async fn command_handler(_bus: &BusSender, _context: &mut (), command: Commands) {
        match command {
            Commands::Persist(unit) => match unit.data {
                Ok(buf) => info!("Persist {} of {} bytes", unit.key.as_ref(), buf.len()),
                Err(err) => error!("Persist {} without data: {}", unit.key.as_ref(), err),
            },
            _ => info!("{:?}", command),
        }
    }
}

impl LoggingModule {
    pub async fn start(bus: MessageBus) {
        MessageBus::handle::<(), Self>(bus, ()).await;
    }
}
