use std::sync::Arc;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::Error;
use crate::settings::SettingKey;

#[derive(Debug, Clone)]
pub struct PersistenceUnit {
    pub key: SettingKey,
    pub data: Result<Arc<Vec<u8>>, Error>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PersistenceUnitDto {
    pub key: SettingKey,
    pub data: Vec<u8>,
}

impl PersistenceUnit {
    pub fn new<TObj>(key: SettingKey, obj: &TObj) -> Result<PersistenceUnit, Error>
    where
        TObj: Serialize,
    {
        let buf = rmp_serde::to_vec(obj)?;

        Ok(PersistenceUnit {
            key,
            data: Ok(Arc::new(buf)),
        })
    }

    pub fn deserialize<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        match &self.data {
            Ok(data) => Ok(rmp_serde::from_slice::<T>(data.as_slice())?),
            Err(err) => Err(err.clone()),
        }
    }
}

impl TryFrom<PersistenceUnit> for PersistenceUnitDto {
    type Error = Error;

    fn try_from(unit: PersistenceUnit) -> Result<Self, Self::Error> {
        let data = unit.data?;

        Ok(PersistenceUnitDto {
            key: unit.key,
            data: data.to_vec(),
        })
    }
}
