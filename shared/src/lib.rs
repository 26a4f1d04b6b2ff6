pub mod capabilities;
pub mod commands;
pub mod contract;
pub mod display_interface;
pub mod error;
pub mod events;
pub mod message_bus;
pub mod modules;
pub mod persistence;
pub mod settings;
pub mod storage;
