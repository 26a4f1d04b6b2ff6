use embedded_graphics::prelude::*;
use enumflags2::BitFlags;
use log::{debug, info, warn};
use time::OffsetDateTime;

use crate::contract::packets::SettingEntry;
use crate::display_interface::ClockDisplayInterface;
use crate::error::Error;
use crate::settings::{parse_flag, SettingKey, Settings};

use super::dirty::{DirtyRegions, Region};
use super::display_state::DisplayState;
use super::layout::{Layout, LayoutConfig, LayoutError};
use super::renderer::Renderer;

pub struct Watchface {
    layout: Layout,
    settings: Settings,
    state: DisplayState,
    dirty: DirtyRegions,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PendingRedraw {
    time_and_date: bool,
    date_visibility: bool,
    battery: bool,
}

impl PendingRedraw {
    fn request(&mut self, key: SettingKey) {
        match key {
            SettingKey::Use12hTime => self.time_and_date = true,
            SettingKey::HideDate => {
                self.time_and_date = true;
                self.date_visibility = true;
            }
            SettingKey::HideBattery => self.battery = true,
        }
    }
}

impl Watchface {
    pub fn new(screen: Size, config: &LayoutConfig, settings: Settings) -> Result<Self, LayoutError> {
        let layout = Layout::compute(screen, config)?;

        let mut dirty = DirtyRegions::new();
        dirty.mark_all(BitFlags::all());

        Ok(Self {
            layout,
            settings,
            state: DisplayState::default(),
            dirty,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn dirty(&self) -> BitFlags<Region> {
        self.dirty.regions()
    }

    pub fn recompute_time(&mut self, now: OffsetDateTime) -> Result<(), Error> {
        let changed = self.state.update_time(now, self.settings.use_12h_time)?;

        debug!("time {} -> {:?} {:?}", now, self.state.digits(), changed);

        self.dirty.mark_all(changed);

        Ok(())
    }

    pub fn recompute_battery(&mut self, percent: u8) {
        if self.state.update_battery(percent) {
            self.dirty.mark(Region::Battery);
        }
    }

    /// Returns the flags to persist, in batch order. Redraws are issued once
    /// for the whole batch.
    pub fn apply_settings(&mut self, entries: &[SettingEntry]) -> Result<Vec<(SettingKey, bool)>, Error> {
        let mut pending = PendingRedraw::default();
        let mut to_persist = Vec::with_capacity(entries.len());

        for entry in entries {
            let Ok(key) = SettingKey::try_from(entry.key) else {
                warn!("unknown setting key {}", entry.key);
                continue;
            };

            let Some(value) = parse_flag(&entry.value) else {
                warn!("ignoring {} = '{}'", key.as_ref(), entry.value);
                continue;
            };

            info!("setting {} = {}", key.as_ref(), value);

            self.settings.set(key, value);
            to_persist.push((key, value));
            pending.request(key);
        }

        self.redraw(pending)?;

        Ok(to_persist)
    }

    pub fn restore_setting(&mut self, key: SettingKey, value: bool) -> Result<(), Error> {
        if !self.settings.set(key, value) {
            return Ok(());
        }

        info!("restored {} = {}", key.as_ref(), value);

        let mut pending = PendingRedraw::default();
        pending.request(key);

        self.redraw(pending)
    }

    fn redraw(&mut self, pending: PendingRedraw) -> Result<(), Error> {
        if pending.time_and_date {
            if let Some(now) = self.state.last_tick() {
                self.recompute_time(now)?;
            }
        }

        if pending.date_visibility {
            self.dirty.mark(Region::Date);
        }

        if pending.battery {
            self.dirty.mark(Region::Battery);
        }

        Ok(())
    }

    pub fn paint<TDisplay>(&mut self, display: &mut TDisplay) -> Result<BitFlags<Region>, TDisplay::Error>
    where
        TDisplay: ClockDisplayInterface,
    {
        // nothing is shown before the first tick
        if self.dirty.is_empty() || self.state.last_tick().is_none() {
            return Ok(BitFlags::empty());
        }

        let regions = self.dirty.take();

        let layout = &self.layout;
        let state = &self.state;
        let settings = &self.settings;

        display.render(|frame| {
            for region in regions.iter() {
                let bounds = layout.bounds_of(region);
                let mut clipped = frame.clipped(&bounds);

                clipped.fill_solid(&bounds, TDisplay::ColorModel::BLACK)?;

                match region {
                    Region::Battery => Renderer::render_battery(
                        &mut clipped,
                        bounds,
                        state.battery_percent(),
                        settings,
                    )?,
                    Region::Date => {
                        Renderer::render_date(&mut clipped, bounds, state.date_label(), settings)?
                    }
                    bullet => {
                        let digit = state.digit(bullet).unwrap_or('0');
                        Renderer::render_bullet(&mut clipped, bounds, digit)?
                    }
                }
            }

            Ok(())
        })?;

        display.commit();

        Ok(regions)
    }
}
