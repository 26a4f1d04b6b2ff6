use std::sync::Arc;

use log::{error, info};

use crate::capabilities::SettingsStorage;
use crate::commands::Commands;
use crate::events::Events;
use crate::message_bus::{BusHandler, BusSender, MessageBus};
use crate::persistence::{PersistenceUnit, PersistenceUnitDto};

pub struct PersisterModule {}

pub struct Context<TStorage> {
    storage: TStorage,
}

impl<TStorage> BusHandler<Context<TStorage>> for PersisterModule
where
    TStorage: SettingsStorage,
{
    async fn event_handler(_bus: &BusSender, _context: &mut Context<TStorage>, _event: Events) {}

    async fn command_handler(bus: &BusSender, context: &mut Context<TStorage>, command: Commands) {
        match command {
            Commands::Persist(persistence_unit) => {
                let dto = match PersistenceUnitDto::try_from(persistence_unit) {
                    Ok(dto) => dto,
                    Err(error) => {
                        error!("{}", error);
                        return;
                    }
                };

                let name = dto.key.as_ref();
                info!("persisting {}", name);

                if let Ok(existing) = context.storage.read_bytes(name) {
                    if existing == dto.data {
                        info!("persisting of {} skipped, same value", name);
                        return;
                    }
                }

                if let Err(error) = context.storage.write_bytes(name, &dto.data) {
                    error!("{}", error);
                }
            }
            Commands::Restore(key) => {
                info!("restoring {}", key.as_ref());

                let persistence_unit = PersistenceUnit {
                    key,
                    data: context.storage.read_bytes(key.as_ref()).map(Arc::new),
                };

                bus.send_event(Events::Restored(persistence_unit));
            }
            _ => {}
        }
    }
}

impl PersisterModule {
    pub async fn start<TStorage>(bus: MessageBus, storage: TStorage) -> TStorage
    where
        TStorage: SettingsStorage,
    {
        info!("starting...");

        let context = Context { storage };

        let context = MessageBus::handle::<Context<TStorage>, Self>(bus, context).await;

        info!("done.");

        context.storage
    }
}
