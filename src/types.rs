//! Common types and data structures

use crate::constants::UNKNOWN_MOLAR_WEIGHT;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A laboratory liquid and its physical properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidRecord {
    pub name: String,
    /// g/mL
    pub density: f64,
    /// cP
    pub viscosity: f64,
    pub molar_weight: MolarWeight,
    #[serde(rename = "liquid_class")]
    pub liquid_class_name: String,
    pub notes: String,
}

/// Molar weight in g/mol. Solutions and mixtures have none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MolarWeight {
    Known(f64),
    Unknown,
}

impl fmt::Display for MolarWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MolarWeight::Known(value) => write!(f, "{:.2}", value),
            MolarWeight::Unknown => f.write_str(UNKNOWN_MOLAR_WEIGHT),
        }
    }
}

// The wire format carries molar weight as a string ("18.02" or "—").
impl Serialize for MolarWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MolarWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(value) => MolarWeight::Known(value),
            Raw::Text(text) => text
                .trim()
                .parse::<f64>()
                .map(MolarWeight::Known)
                .unwrap_or(MolarWeight::Unknown),
        })
    }
}

/// Recommended setting for one pipetting parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSetting {
    pub label: String,
    #[serde(rename = "value")]
    pub display_value: String,
    /// Multi-line Venus configuration block, display only
    #[serde(rename = "venus_settings")]
    pub instrument_settings: String,
}

impl ParameterSetting {
    /// "Slow (50-100 µL/s)"
    pub fn summary(&self) -> String {
        format!("{} ({})", self.label, self.display_value)
    }
}

/// A named liquid class with its six recommended parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiquidClass {
    pub name: String,
    pub description: String,
    #[serde(rename = "p_speed")]
    pub pipetting_speed: ParameterSetting,
    #[serde(rename = "d_speed")]
    pub dispensing_speed: ParameterSetting,
    pub air_gap: ParameterSetting,
    pub blowout: ParameterSetting,
    pub z_offset: ParameterSetting,
    #[serde(rename = "tips")]
    pub tip_type: ParameterSetting,
}

impl LiquidClass {
    pub fn parameter(&self, kind: ParameterKind) -> &ParameterSetting {
        match kind {
            ParameterKind::PipettingSpeed => &self.pipetting_speed,
            ParameterKind::DispensingSpeed => &self.dispensing_speed,
            ParameterKind::AirGap => &self.air_gap,
            ParameterKind::Blowout => &self.blowout,
            ParameterKind::ZOffset => &self.z_offset,
            ParameterKind::TipType => &self.tip_type,
        }
    }

    /// All six parameters in display order
    pub fn parameters(&self) -> impl Iterator<Item = (ParameterKind, &ParameterSetting)> {
        ParameterKind::ALL.into_iter().map(move |kind| (kind, self.parameter(kind)))
    }
}

/// The six tunable pipetting aspects of a liquid class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    PipettingSpeed,
    DispensingSpeed,
    AirGap,
    Blowout,
    ZOffset,
    TipType,
}

impl ParameterKind {
    pub const ALL: [ParameterKind; 6] = [
        ParameterKind::PipettingSpeed,
        ParameterKind::DispensingSpeed,
        ParameterKind::AirGap,
        ParameterKind::Blowout,
        ParameterKind::ZOffset,
        ParameterKind::TipType,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ParameterKind::PipettingSpeed => "Pipetting Speed",
            ParameterKind::DispensingSpeed => "Dispensing Speed",
            ParameterKind::AirGap => "Air Gap",
            ParameterKind::Blowout => "Blowout",
            ParameterKind::ZOffset => "Z-Offset",
            ParameterKind::TipType => "Recommended Tips",
        }
    }

    /// Field name in the HTTP contract; also the element id in HTML exports
    pub fn wire_key(self) -> &'static str {
        match self {
            ParameterKind::PipettingSpeed => "p_speed",
            ParameterKind::DispensingSpeed => "d_speed",
            ParameterKind::AirGap => "air_gap",
            ParameterKind::Blowout => "blowout",
            ParameterKind::ZOffset => "z_offset",
            ParameterKind::TipType => "tips",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ParameterKind::PipettingSpeed => egui_phosphor::regular::ARROW_FAT_UP,
            ParameterKind::DispensingSpeed => egui_phosphor::regular::ARROW_FAT_DOWN,
            ParameterKind::AirGap => egui_phosphor::regular::WIND,
            ParameterKind::Blowout => egui_phosphor::regular::DROP,
            ParameterKind::ZOffset => egui_phosphor::regular::ARROWS_VERTICAL,
            ParameterKind::TipType => egui_phosphor::regular::EYEDROPPER,
        }
    }
}
