use crate::persistence::PersistenceUnit;
use crate::settings::SettingKey;

#[derive(Clone, Debug)]
pub enum Commands {
    Persist(PersistenceUnit),
    Restore(SettingKey),
    Shutdown,
}
