use std::path::Path;

use serde::Deserialize;

use engine_core::tick::TickConfig;
use mechanics::jump::JumpTuning;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetSection {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for NetSection {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 25001,
        }
    }
}

impl NetSection {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TickSection {
    pub tps: u32,
}

impl Default for TickSection {
    fn default() -> Self {
        Self { tps: 60 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JumpSection {
    pub base_jump_speed: f32,
    pub charge_multiplier: f32,
    pub jump_modifier: f32,
    pub horizontal_boost: f32,
    pub contact_charge: u32,
    /// Optional cap on accumulated charge; absent = unbounded.
    pub charge_cap: Option<u32>,
    pub max_speed: f32,
    pub gravity: f32,
}

impl Default for JumpSection {
    fn default() -> Self {
        Self {
            base_jump_speed: 7.0,
            charge_multiplier: 0.5,
            jump_modifier: 1.0,
            horizontal_boost: 5.0,
            contact_charge: 0,
            charge_cap: None,
            max_speed: 7.0,
            gravity: 20.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldSection {
    /// X position of the fence; hitting it halts the runner.
    pub fence_zone_x: f32,
    /// X position of the zone that force-triggers a jump on entry.
    pub jump_zone_x: f32,
    /// X position of the zone that raises the session-transition event.
    pub transition_zone_x: f32,
    /// Ticks to ramp back to full run speed after a fence hit.
    pub recovery_ticks: u32,
}

impl Default for WorldSection {
    fn default() -> Self {
        Self {
            fence_zone_x: 20.0,
            jump_zone_x: 40.0,
            transition_zone_x: 80.0,
            recovery_ticks: 180,
        }
    }
}

/// Top-level runner server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub net: NetSection,
    pub tick: TickSection,
    pub jump: JumpSection,
    pub world: WorldSection,
}

impl RunnerConfig {
    /// Load configuration from an optional TOML file path.
    pub fn load(config_path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let config = match config_path {
            Some(path) if Path::new(path).exists() => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content)?
            }
            _ => Self::default(),
        };
        Ok(config)
    }

    pub fn to_tick_config(&self) -> TickConfig {
        TickConfig {
            // tps = 0 would make the tick interval undefined.
            tps: self.tick.tps.max(1),
            max_ticks: 0,
        }
    }

    pub fn to_jump_tuning(&self) -> JumpTuning {
        JumpTuning {
            base_jump_speed: self.jump.base_jump_speed,
            charge_multiplier: self.jump.charge_multiplier,
            jump_modifier: self.jump.jump_modifier,
            horizontal_boost: self.jump.horizontal_boost,
            contact_charge: self.jump.contact_charge,
            charge_cap: self.jump.charge_cap,
        }
    }
}

/// Parse CLI arguments and load config.
/// Supports: --config <path>
pub fn parse_cli_args() -> RunnerConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<&str> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                if let Some(val) = args.get(i + 1) {
                    config_path = Some(val.as_str());
                    i += 2;
                } else {
                    eprintln!("--config requires a path argument");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    match RunnerConfig::load(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    }
}
