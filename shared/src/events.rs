use std::sync::Arc;

use enumflags2::BitFlags;
use strum_macros::AsRefStr;
use time::OffsetDateTime;

use crate::modules::dirty::Region;
use crate::persistence::PersistenceUnit;

#[derive(Clone, Debug, AsRefStr)]
pub enum Events {
    /// Minute tick carrying the local wall-clock time.
    TimeNow(OffsetDateTime),
    BatteryLevel(u8),
    IncomingSettings(Arc<Vec<u8>>),
    Restored(PersistenceUnit),
    FramePainted(BitFlags<Region>),
    Term,
}
