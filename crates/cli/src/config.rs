//! Envelope settings from an optional JSON file, overridden by flags.

use anyhow::{Context, Result};
use clap::ValueEnum;
use loci::envelope::{EnvelopeCfg, FillSpacing, LevelCount, Unit, VertexOrder};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitArg {
    Ohm,
    Pu,
}

impl From<UnitArg> for Unit {
    fn from(u: UnitArg) -> Self {
        match u {
            UnitArg::Ohm => Unit::Ohm,
            UnitArg::Pu => Unit::PerUnit,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpacingArg {
    AtMost,
    AtLeast,
}

impl From<SpacingArg> for FillSpacing {
    fn from(s: SpacingArg) -> Self {
        match s {
            SpacingArg::AtMost => FillSpacing::AtMost,
            SpacingArg::AtLeast => FillSpacing::AtLeast,
        }
    }
}

/// Settings shared by file and flags. Absent fields keep library defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Fixed base level count; absent means the vertex-count ladder.
    pub levels: Option<usize>,
    pub decimals: Option<i32>,
    pub unit: Option<UnitArg>,
    /// Sort vertices clockwise before scanning (convex loci only).
    pub reorder: Option<bool>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Field-wise override: values set in `flags` win.
    pub fn merged(self, flags: Settings) -> Settings {
        Settings {
            levels: flags.levels.or(self.levels),
            decimals: flags.decimals.or(self.decimals),
            unit: flags.unit.or(self.unit),
            reorder: flags.reorder.or(self.reorder),
        }
    }

    pub fn envelope_cfg(&self) -> EnvelopeCfg {
        let mut cfg = EnvelopeCfg::default();
        if let Some(n) = self.levels {
            cfg.level_count = LevelCount::Fixed(n);
        }
        if let Some(d) = self.decimals {
            cfg.decimals = d;
        }
        if let Some(u) = self.unit {
            cfg.unit = u.into();
        }
        if self.reorder.unwrap_or(false) {
            cfg.order = VertexOrder::Clockwise;
        }
        cfg
    }
}
