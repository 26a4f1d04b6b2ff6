use bullets_shared::error::Error;
use bullets_shared::message_bus::MessageBus;
use bullets_shared::modules::logging_module::LoggingModule;
use bullets_shared::modules::persister_module::PersisterModule;
use bullets_shared::modules::sources::{BatteryModule, ConfigModule, SystemClock, TickModule};
use bullets_shared::modules::watchface_module::WatchfaceModule;
use display::SimDisplay;
use log::{info, warn};
use sources::{SimulatedBattery, StdinConfig};
use storage::FileStorage;
use time::UtcOffset;
use tokio::join;
use tokio::time::Duration;

mod display;
mod sources;
mod storage;

const BATTERY_START_LEVEL: u8 = 80;
const BATTERY_DRAIN_PERIOD: Duration = Duration::from_secs(20);
const SETTINGS_DIR: &str = "bullets-watchface";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // must be queried before the runtime spawns its threads
    let offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
        warn!("local offset unavailable ({}), using UTC", err);
        UtcOffset::UTC
    });

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .worker_threads(2)
        .build()?;

    rt.block_on(main_async(offset))?;

    Ok(())
}

async fn main_async(offset: UtcOffset) -> Result<(), Error> {
    info!("main_async...");

    let storage = FileStorage::create(std::env::temp_dir().join(SETTINGS_DIR))?;

    let message_bus = MessageBus::new();

    let logging_task = LoggingModule::start(message_bus.clone());

    let persister_task = PersisterModule::start(message_bus.clone(), storage);

    let watchface_task = WatchfaceModule::<SimDisplay>::start(message_bus.clone());

    // unix refuses the query once the runtime threads exist, the startup offset is kept there
    let clock = SystemClock::new(offset, || UtcOffset::current_local_offset().ok());
    let tick_task = TickModule::start(clock, message_bus.clone());

    let battery = SimulatedBattery::new(BATTERY_START_LEVEL, BATTERY_DRAIN_PERIOD);
    let battery_task = BatteryModule::start(battery, message_bus.clone());

    let config = StdinConfig::spawn(message_bus.sender());
    let config_task = ConfigModule::start(config, message_bus.clone());

    info!("type settings as key=value pairs (e.g. use_12h_time=true hide_date=false), q to quit");

    join!(
        logging_task,
        persister_task,
        watchface_task,
        tick_task,
        battery_task,
        config_task,
    );

    info!("done.");

    Ok(())
}
