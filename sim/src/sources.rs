use std::io::BufRead;
use std::thread;

use bullets_shared::capabilities::{BatterySource, ConfigChannel};
use bullets_shared::commands::Commands;
use bullets_shared::contract::packets::{SettingEntry, SettingsPacket};
use bullets_shared::error::Error;
use bullets_shared::message_bus::BusSender;
use bullets_shared::settings::SettingKey;
use log::{error, info, warn};
use tokio::sync::mpsc;
use tokio::time::{sleep, Duration};

pub struct SimulatedBattery {
    level: u8,
    period: Duration,
    started: bool,
}

impl SimulatedBattery {
    pub fn new(level: u8, period: Duration) -> Self {
        Self {
            level: level.min(100),
            period,
            started: false,
        }
    }
}

impl BatterySource for SimulatedBattery {
    async fn next_level(&mut self) -> Option<u8> {
        if self.started {
            sleep(self.period).await;

            self.level = match self.level {
                0 => 100,
                level => level - 1,
            };
        }

        self.started = true;

        Some(self.level)
    }
}

/// One message per line: `key=value` pairs keyed by numeric id or setting
/// name, e.g. `use_12h_time=true 2=false`. `q` shuts the watch down.
pub struct StdinConfig {
    rx: mpsc::Receiver<Vec<u8>>,
}

impl StdinConfig {
    pub fn spawn(bus: BusSender) -> Self {
        let (tx, rx) = mpsc::channel::<Vec<u8>>(4);

        thread::spawn(move || {
            let stdin = std::io::stdin();

            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        error!("{}", err);
                        break;
                    }
                };

                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if line == "q" {
                    info!("shutdown requested");
                    bus.send_cmd(Commands::Shutdown);
                    break;
                }

                match parse_settings_line(line) {
                    Ok(packet) => {
                        if tx.blocking_send(packet).is_err() {
                            break;
                        }
                    }
                    Err(err) => warn!("{}", err),
                }
            }
        });

        Self { rx }
    }
}

impl ConfigChannel for StdinConfig {
    async fn next_packet(&mut self) -> Option<Vec<u8>> {
        self.rx.recv().await
    }
}

fn parse_settings_line(line: &str) -> Result<Vec<u8>, Error> {
    let mut entries = Vec::new();

    for pair in line.split_whitespace() {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| Error(format!("expected key=value, got '{}'", pair)))?;

        let key = match key.parse::<u32>() {
            Ok(id) => id,
            Err(_) => SettingKey::from_name(key)
                .map(|x| x as u32)
                .ok_or_else(|| Error(format!("unknown setting '{}'", key)))?,
        };

        entries.push(SettingEntry::new(key, value));
    }

    SettingsPacket::new(entries).serialize()
}
