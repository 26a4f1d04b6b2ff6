pub mod dirty;
pub mod display_state;
pub mod graphics;
pub mod layout;
pub mod logging_module;
pub mod palette;
pub mod persister_module;
pub mod renderer;
pub mod sources;
pub mod watchface;
pub mod watchface_module;
