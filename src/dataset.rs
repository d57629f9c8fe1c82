//! Canonical reference dataset
//!
//! Liquids and Hamilton STAR liquid classes with their recommended Venus
//! settings. Values are hand-authored reference data, loaded once and never
//! mutated.

use crate::types::{LiquidClass, LiquidRecord, MolarWeight, ParameterSetting};
use tracing::debug;

pub struct Dataset {
    liquids: Vec<LiquidRecord>,
    classes: Vec<LiquidClass>,
}

impl Dataset {
    pub fn new(liquids: Vec<LiquidRecord>, classes: Vec<LiquidClass>) -> Self {
        Self { liquids, classes }
    }

    /// The embedded reference data
    pub fn builtin() -> Self {
        let dataset = Self::new(builtin_liquids(), builtin_classes());
        debug!(
            liquids = dataset.liquids.len(),
            classes = dataset.classes.len(),
            "Built-in dataset loaded"
        );
        dataset
    }

    pub fn liquids(&self) -> &[LiquidRecord] {
        &self.liquids
    }

    /// Liquids belonging to `class`, in dataset order. `None` returns everything.
    pub fn liquids_in_class(&self, class: Option<&str>) -> Vec<LiquidRecord> {
        match class {
            Some(name) => self
                .liquids
                .iter()
                .filter(|liquid| liquid.liquid_class_name == name)
                .cloned()
                .collect(),
            None => self.liquids.clone(),
        }
    }

    pub fn find_class(&self, name: &str) -> Option<&LiquidClass> {
        self.classes.iter().find(|class| class.name == name)
    }

    pub fn class_names(&self) -> Vec<String> {
        self.classes.iter().map(|class| class.name.clone()).collect()
    }

    /// Liquids whose class is not in the class collection. Rendered as
    /// ordinary rows; only reported.
    pub fn dangling_class_refs(&self) -> Vec<&LiquidRecord> {
        self.liquids
            .iter()
            .filter(|liquid| self.find_class(&liquid.liquid_class_name).is_none())
            .collect()
    }
}

fn liquid(
    name: &str,
    density: f64,
    viscosity: f64,
    molar_weight: MolarWeight,
    class: &str,
    notes: &str,
) -> LiquidRecord {
    LiquidRecord {
        name: name.into(),
        density,
        viscosity,
        molar_weight,
        liquid_class_name: class.into(),
        notes: notes.into(),
    }
}

fn setting(label: &str, value: &str, venus_settings: &str) -> ParameterSetting {
    ParameterSetting {
        label: label.into(),
        display_value: value.into(),
        instrument_settings: venus_settings.into(),
    }
}

fn builtin_liquids() -> Vec<LiquidRecord> {
    vec![
        liquid(
            "Water",
            1.00,
            0.89,
            MolarWeight::Known(18.02),
            "Aqueous",
            "Standard reference liquid",
        ),
        liquid(
            "Ethanol",
            0.79,
            1.07,
            MolarWeight::Known(46.07),
            "Organic-Low",
            "Volatile, adjust for evaporation",
        ),
        liquid(
            "Methanol",
            0.79,
            0.54,
            MolarWeight::Known(32.04),
            "Organic-Low",
            "Highly volatile",
        ),
        liquid(
            "Acetone",
            0.78,
            0.31,
            MolarWeight::Known(58.08),
            "Organic-Low",
            "Very volatile, use slower aspiration",
        ),
        liquid(
            "Dimethyl Sulfoxide (DMSO)",
            1.10,
            1.99,
            MolarWeight::Known(78.13),
            "Organic-Medium",
            "Common solvent for compounds",
        ),
        liquid(
            "Glycerol",
            1.26,
            934.0,
            MolarWeight::Known(92.09),
            "Viscous",
            "Very viscous, requires slow handling",
        ),
        liquid(
            "Isopropanol",
            0.78,
            2.04,
            MolarWeight::Known(60.10),
            "Organic-Low",
            "Moderate volatility",
        ),
        liquid(
            "Acetonitrile",
            0.78,
            0.37,
            MolarWeight::Known(41.05),
            "Organic-Low",
            "Common HPLC solvent",
        ),
        liquid(
            "Hexane",
            0.66,
            0.30,
            MolarWeight::Known(86.18),
            "Organic-Low",
            "Low surface tension, difficult to pipette",
        ),
        liquid(
            "Toluene",
            0.87,
            0.59,
            MolarWeight::Known(92.14),
            "Organic-Low",
            "May affect plastic labware",
        ),
        liquid(
            "Chloroform",
            1.49,
            0.54,
            MolarWeight::Known(119.38),
            "Organic-High-Density",
            "High density, may affect plastics",
        ),
        liquid(
            "Dichloromethane",
            1.33,
            0.41,
            MolarWeight::Known(84.93),
            "Organic-High-Density",
            "Volatile, high density",
        ),
        liquid(
            "10% Glycerol Solution",
            1.02,
            1.31,
            MolarWeight::Unknown,
            "Aqueous-Viscous",
            "Common buffer additive",
        ),
        liquid(
            "50% Glycerol Solution",
            1.13,
            6.00,
            MolarWeight::Unknown,
            "Viscous",
            "Requires slow aspiration/dispensing",
        ),
        liquid(
            "Serum",
            1.02,
            1.50,
            MolarWeight::Unknown,
            "Serum",
            "Protein-rich, adjust for tip wetting",
        ),
        liquid(
            "Phosphate Buffered Saline",
            1.01,
            0.90,
            MolarWeight::Unknown,
            "Aqueous-Buffer",
            "Common biological buffer",
        ),
        liquid(
            "70% Ethanol",
            0.86,
            2.43,
            MolarWeight::Unknown,
            "Aqueous-Organic",
            "Common disinfectant",
        ),
        liquid(
            "n-Butanol",
            0.81,
            2.54,
            MolarWeight::Known(74.12),
            "Organic-Medium",
            "Moderate viscosity",
        ),
        liquid(
            "Acetic Acid (Glacial)",
            1.05,
            1.13,
            MolarWeight::Known(60.05),
            "Organic-Corrosive",
            "Corrosive, adjust for volatility",
        ),
        liquid(
            "Diethyl Ether",
            0.71,
            0.22,
            MolarWeight::Known(74.12),
            "Organic-Low-Volatile",
            "Extremely volatile, difficult to pipette",
        ),
    ]
}

fn builtin_classes() -> Vec<LiquidClass> {
    vec![
        LiquidClass {
            name: "Aqueous".into(),
            description: "For water and water-like solutions".into(),
            pipetting_speed: setting(
                "Standard",
                "100-200 µL/s",
                "Aspirate Speed: 100-200 µL/s\nDelay Aspirate: 0-50 ms\nMixing Cycles: 3-5",
            ),
            dispensing_speed: setting(
                "Standard",
                "100-200 µL/s",
                "Dispense Speed: 100-200 µL/s\nDelay Dispense: 0-50 ms\nEmpty Speed: 200-400 µL/s",
            ),
            air_gap: setting(
                "Small",
                "5-10 µL",
                "Pre-Aspirate Air Gap: 5-10 µL\nPost-Aspirate Air Gap: 0-5 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Standard",
                "Blowout Volume: 5-10 µL\nBlowout Speed: 200-400 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Standard",
                "0.5-1.0 mm",
                "Aspiration Immersion Depth: 0.5-1.0 mm\nDispense Immersion Depth: 0.5-1.0 mm\nBottom Report Offset: 0 mm",
            ),
            tip_type: setting(
                "Standard",
                "Standard",
                "Tip Type: Standard\nTip Pattern: Full\nFilter Tips: Optional",
            ),
        },
        LiquidClass {
            name: "Organic-Low".into(),
            description: "For low viscosity organic solvents".into(),
            pipetting_speed: setting(
                "Slow",
                "50-100 µL/s",
                "Aspirate Speed: 50-100 µL/s\nDelay Aspirate: 100-200 ms\nMixing Cycles: 2-3",
            ),
            dispensing_speed: setting(
                "Slow",
                "50-100 µL/s",
                "Dispense Speed: 50-100 µL/s\nDelay Dispense: 100-200 ms\nEmpty Speed: 100-200 µL/s",
            ),
            air_gap: setting(
                "Large",
                "15-30 µL",
                "Pre-Aspirate Air Gap: 5-10 µL\nPost-Aspirate Air Gap: 10-20 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Enhanced",
                "Blowout Volume: 15-20 µL\nBlowout Speed: 100-150 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Low",
                "0.2-0.5 mm",
                "Aspiration Immersion Depth: 0.2-0.5 mm\nDispense Immersion Depth: 0.2-0.5 mm\nBottom Report Offset: 0.2 mm",
            ),
            tip_type: setting(
                "Conductive",
                "Black conductive",
                "Tip Type: Conductive\nTip Pattern: Full\nFilter Tips: Recommended for volatile solvents",
            ),
        },
        LiquidClass {
            name: "Organic-Medium".into(),
            description: "For medium viscosity organic solvents".into(),
            pipetting_speed: setting(
                "Slow",
                "40-80 µL/s",
                "Aspirate Speed: 40-80 µL/s\nDelay Aspirate: 200-300 ms\nMixing Cycles: 2-3",
            ),
            dispensing_speed: setting(
                "Medium",
                "80-150 µL/s",
                "Dispense Speed: 80-150 µL/s\nDelay Dispense: 100-200 ms\nEmpty Speed: 100-200 µL/s",
            ),
            air_gap: setting(
                "Medium",
                "10-20 µL",
                "Pre-Aspirate Air Gap: 5-10 µL\nPost-Aspirate Air Gap: 5-10 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Enhanced",
                "Blowout Volume: 15-20 µL\nBlowout Speed: 100-150 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Low",
                "0.2-0.5 mm",
                "Aspiration Immersion Depth: 0.2-0.5 mm\nDispense Immersion Depth: 0.2-0.5 mm\nBottom Report Offset: 0.2 mm",
            ),
            tip_type: setting(
                "Conductive",
                "Black conductive",
                "Tip Type: Conductive\nTip Pattern: Full\nFilter Tips: Recommended",
            ),
        },
        LiquidClass {
            name: "Organic-High-Density".into(),
            description: "For dense organic solvents like chloroform".into(),
            pipetting_speed: setting(
                "Very Slow",
                "20-40 µL/s",
                "Aspirate Speed: 20-40 µL/s\nDelay Aspirate: 300-500 ms\nMixing Cycles: 1-2",
            ),
            dispensing_speed: setting(
                "Slow",
                "40-80 µL/s",
                "Dispense Speed: 40-80 µL/s\nDelay Dispense: 200-300 ms\nEmpty Speed: 80-120 µL/s",
            ),
            air_gap: setting(
                "Large",
                "20-30 µL",
                "Pre-Aspirate Air Gap: 5-10 µL\nPost-Aspirate Air Gap: 15-20 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Extended",
                "Blowout Volume: 20-30 µL\nBlowout Speed: 80-120 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Low",
                "0.1-0.3 mm",
                "Aspiration Immersion Depth: 0.1-0.3 mm\nDispense Immersion Depth: 0.1-0.3 mm\nBottom Report Offset: 0.2 mm",
            ),
            tip_type: setting(
                "Conductive",
                "Chemical-resistant",
                "Tip Type: Conductive, Chemical-resistant\nTip Pattern: Full\nFilter Tips: Required",
            ),
        },
        LiquidClass {
            name: "Organic-Low-Volatile".into(),
            description: "For highly volatile organics".into(),
            pipetting_speed: setting(
                "Very Slow",
                "10-30 µL/s",
                "Aspirate Speed: 10-30 µL/s\nDelay Aspirate: 500-1000 ms\nMixing Cycles: 0-1",
            ),
            dispensing_speed: setting(
                "Very Slow",
                "10-30 µL/s",
                "Dispense Speed: 10-30 µL/s\nDelay Dispense: 300-500 ms\nEmpty Speed: 50-100 µL/s",
            ),
            air_gap: setting(
                "Extra Large",
                "30-50 µL",
                "Pre-Aspirate Air Gap: 10-15 µL\nPost-Aspirate Air Gap: 20-35 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Maximum",
                "Blowout Volume: 25-40 µL\nBlowout Speed: 50-100 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Low",
                "0.1-0.3 mm",
                "Aspiration Immersion Depth: 0.1-0.3 mm\nDispense Immersion Depth: 0.1-0.3 mm\nBottom Report Offset: 0.3 mm",
            ),
            tip_type: setting(
                "Conductive",
                "Chemical-resistant",
                "Tip Type: Conductive, Chemical-resistant\nTip Pattern: Full\nFilter Tips: Required\nDisable Tip Touch: Yes",
            ),
        },
        LiquidClass {
            name: "Organic-Corrosive".into(),
            description: "For corrosive organic solvents".into(),
            pipetting_speed: setting(
                "Slow",
                "40-80 µL/s",
                "Aspirate Speed: 40-80 µL/s\nDelay Aspirate: 200-300 ms\nMixing Cycles: 1-2",
            ),
            dispensing_speed: setting(
                "Medium",
                "80-120 µL/s",
                "Dispense Speed: 80-120 µL/s\nDelay Dispense: 100-200 ms\nEmpty Speed: 100-150 µL/s",
            ),
            air_gap: setting(
                "Large",
                "15-25 µL",
                "Pre-Aspirate Air Gap: 5-10 µL\nPost-Aspirate Air Gap: 10-15 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Enhanced",
                "Blowout Volume: 15-25 µL\nBlowout Speed: 100-150 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Medium",
                "0.5-1.0 mm",
                "Aspiration Immersion Depth: 0.5-1.0 mm\nDispense Immersion Depth: 0.5-1.0 mm\nBottom Report Offset: 0.2 mm",
            ),
            tip_type: setting(
                "Resistant",
                "Chemical-resistant",
                "Tip Type: Chemical-resistant\nTip Pattern: Full\nFilter Tips: Required\nEnable Extra Wash Steps: Yes",
            ),
        },
        LiquidClass {
            name: "Viscous".into(),
            description: "For highly viscous liquids like glycerol".into(),
            pipetting_speed: setting(
                "Very Slow",
                "5-20 µL/s",
                "Aspirate Speed: 5-20 µL/s\nDelay Aspirate: 1000-3000 ms\nMixing Cycles: 0-1",
            ),
            dispensing_speed: setting(
                "Very Slow",
                "5-20 µL/s",
                "Dispense Speed: 5-20 µL/s\nDelay Dispense: 1000-3000 ms\nEmpty Speed: 20-40 µL/s",
            ),
            air_gap: setting(
                "Small",
                "5-10 µL",
                "Pre-Aspirate Air Gap: 0-5 µL\nPost-Aspirate Air Gap: 5-10 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Extended",
                "Maximum",
                "Blowout Volume: 30-50 µL\nBlowout Speed: 20-40 µL/s\nChannel Pattern: All enabled\nExtend Blowout Time: Yes",
            ),
            z_offset: setting(
                "High",
                "1.0-2.0 mm",
                "Aspiration Immersion Depth: 1.0-2.0 mm\nDispense Immersion Depth: 1.0-2.0 mm\nBottom Report Offset: 0 mm",
            ),
            tip_type: setting(
                "Wide Bore",
                "Wide Bore",
                "Tip Type: Wide Bore\nTip Pattern: Full\nFilter Tips: Not recommended\nTip Size: Use larger volume tip if possible",
            ),
        },
        LiquidClass {
            name: "Aqueous-Viscous".into(),
            description: "For moderately viscous aqueous solutions".into(),
            pipetting_speed: setting(
                "Medium",
                "50-100 µL/s",
                "Aspirate Speed: 50-100 µL/s\nDelay Aspirate: 300-500 ms\nMixing Cycles: 2-3",
            ),
            dispensing_speed: setting(
                "Medium",
                "50-100 µL/s",
                "Dispense Speed: 50-100 µL/s\nDelay Dispense: 300-500 ms\nEmpty Speed: 100-150 µL/s",
            ),
            air_gap: setting(
                "Small",
                "5-10 µL",
                "Pre-Aspirate Air Gap: 0-5 µL\nPost-Aspirate Air Gap: 5-10 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Extended",
                "Enhanced",
                "Blowout Volume: 15-25 µL\nBlowout Speed: 100-150 µL/s\nChannel Pattern: All enabled\nExtend Blowout Time: Yes",
            ),
            z_offset: setting(
                "Medium",
                "0.5-1.0 mm",
                "Aspiration Immersion Depth: 0.5-1.0 mm\nDispense Immersion Depth: 0.5-1.0 mm\nBottom Report Offset: 0 mm",
            ),
            tip_type: setting(
                "Standard",
                "Standard or Wide Bore",
                "Tip Type: Standard or Wide Bore\nTip Pattern: Full\nFilter Tips: Optional\nTip Size: Match to volume",
            ),
        },
        LiquidClass {
            name: "Serum".into(),
            description: "For serum and protein-rich solutions".into(),
            pipetting_speed: setting(
                "Medium",
                "50-100 µL/s",
                "Aspirate Speed: 50-100 µL/s\nDelay Aspirate: 200-400 ms\nMixing Cycles: 3-5",
            ),
            dispensing_speed: setting(
                "Medium",
                "50-100 µL/s",
                "Dispense Speed: 50-100 µL/s\nDelay Dispense: 200-400 ms\nEmpty Speed: 100-200 µL/s",
            ),
            air_gap: setting(
                "Medium",
                "10-15 µL",
                "Pre-Aspirate Air Gap: 5 µL\nPost-Aspirate Air Gap: 5-10 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Enhanced",
                "Blowout Volume: 15-20 µL\nBlowout Speed: 100-150 µL/s\nChannel Pattern: All enabled\nTip Touch: Enabled",
            ),
            z_offset: setting(
                "Medium",
                "0.5-1.0 mm",
                "Aspiration Immersion Depth: 0.5-1.0 mm\nDispense Immersion Depth: 0.5-1.0 mm\nBottom Report Offset: 0 mm",
            ),
            tip_type: setting(
                "Low Retention",
                "Low Retention",
                "Tip Type: Low Retention\nTip Pattern: Full\nFilter Tips: Recommended\nTip Touch Mode: Side wall",
            ),
        },
        LiquidClass {
            name: "Aqueous-Buffer".into(),
            description: "For common laboratory buffers".into(),
            pipetting_speed: setting(
                "Standard",
                "100-200 µL/s",
                "Aspirate Speed: 100-200 µL/s\nDelay Aspirate: 50-100 ms\nMixing Cycles: 3-5",
            ),
            dispensing_speed: setting(
                "Standard",
                "100-200 µL/s",
                "Dispense Speed: 100-200 µL/s\nDelay Dispense: 50-100 ms\nEmpty Speed: 200-300 µL/s",
            ),
            air_gap: setting(
                "Small",
                "5-10 µL",
                "Pre-Aspirate Air Gap: 0-5 µL\nPost-Aspirate Air Gap: 5 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Standard",
                "Blowout Volume: 10-15 µL\nBlowout Speed: 150-250 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Standard",
                "0.5-1.0 mm",
                "Aspiration Immersion Depth: 0.5-1.0 mm\nDispense Immersion Depth: 0.5-1.0 mm\nBottom Report Offset: 0 mm",
            ),
            tip_type: setting(
                "Standard",
                "Standard",
                "Tip Type: Standard\nTip Pattern: Full\nFilter Tips: Optional for sterile applications",
            ),
        },
        LiquidClass {
            name: "Aqueous-Organic".into(),
            description: "For water-organic mixtures".into(),
            pipetting_speed: setting(
                "Medium",
                "75-150 µL/s",
                "Aspirate Speed: 75-150 µL/s\nDelay Aspirate: 100-200 ms\nMixing Cycles: 3-4",
            ),
            dispensing_speed: setting(
                "Medium",
                "75-150 µL/s",
                "Dispense Speed: 75-150 µL/s\nDelay Dispense: 100-200 ms\nEmpty Speed: 150-250 µL/s",
            ),
            air_gap: setting(
                "Medium",
                "10-15 µL",
                "Pre-Aspirate Air Gap: 5 µL\nPost-Aspirate Air Gap: 5-10 µL\nEmpty Air Gap: 0 µL",
            ),
            blowout: setting(
                "Required",
                "Enhanced",
                "Blowout Volume: 10-20 µL\nBlowout Speed: 150-200 µL/s\nChannel Pattern: All enabled",
            ),
            z_offset: setting(
                "Low",
                "0.3-0.8 mm",
                "Aspiration Immersion Depth: 0.3-0.8 mm\nDispense Immersion Depth: 0.3-0.8 mm\nBottom Report Offset: 0.1 mm",
            ),
            tip_type: setting(
                "Conductive",
                "Conductive",
                "Tip Type: Conductive\nTip Pattern: Full\nFilter Tips: Recommended\nEnable Tip Touch: Yes",
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ParameterKind;

    fn names(liquids: &[LiquidRecord]) -> Vec<&str> {
        liquids.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn builtin_sizes_and_unique_names() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.liquids().len(), 20);
        assert_eq!(dataset.class_names().len(), 11);

        let mut liquid_names = names(dataset.liquids());
        liquid_names.sort_unstable();
        liquid_names.dedup();
        assert_eq!(liquid_names.len(), 20);

        let mut class_names = dataset.class_names();
        class_names.sort_unstable();
        class_names.dedup();
        assert_eq!(class_names.len(), 11);
    }

    #[test]
    fn every_builtin_liquid_references_a_class() {
        assert!(Dataset::builtin().dangling_class_refs().is_empty());
    }

    #[test]
    fn organic_low_filter_keeps_dataset_order() {
        let dataset = Dataset::builtin();
        let organic = dataset.liquids_in_class(Some("Organic-Low"));
        assert_eq!(
            names(&organic),
            ["Ethanol", "Methanol", "Acetone", "Isopropanol", "Acetonitrile", "Hexane", "Toluene"]
        );
    }

    #[test]
    fn filter_is_exact_subsequence_for_every_class() {
        let dataset = Dataset::builtin();
        for class in dataset.class_names() {
            let filtered = dataset.liquids_in_class(Some(&class));
            let expected: Vec<LiquidRecord> = dataset
                .liquids()
                .iter()
                .filter(|l| l.liquid_class_name == class)
                .cloned()
                .collect();
            assert_eq!(filtered, expected, "class {}", class);
        }
    }

    #[test]
    fn no_filter_returns_everything_and_unknown_class_returns_nothing() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.liquids_in_class(None), dataset.liquids());
        assert!(dataset.liquids_in_class(Some("Cryogenic")).is_empty());
        assert!(dataset.liquids_in_class(Some("organic-low")).is_empty());
    }

    #[test]
    fn class_lookup_is_exact() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.find_class("Serum").map(|c| c.name.as_str()), Some("Serum"));
        assert!(dataset.find_class("serum").is_none());
        assert!(dataset.find_class("").is_none());
    }

    #[test]
    fn viscous_air_gap_settings() {
        let dataset = Dataset::builtin();
        let viscous = dataset.find_class("Viscous").unwrap();
        let air_gap = viscous.parameter(ParameterKind::AirGap);
        assert_eq!(air_gap.label, "Small");
        assert_eq!(air_gap.display_value, "5-10 µL");
        assert!(air_gap.instrument_settings.starts_with("Pre-Aspirate Air Gap: 0-5 µL"));
    }

    #[test]
    fn dangling_refs_are_reported_not_dropped() {
        let mut liquids = builtin_liquids();
        liquids.push(liquid("Mystery", 1.0, 1.0, MolarWeight::Unknown, "Cryogenic", ""));
        let dataset = Dataset::new(liquids, builtin_classes());
        let dangling: Vec<&str> =
            dataset.dangling_class_refs().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(dangling, ["Mystery"]);
        assert_eq!(dataset.liquids_in_class(Some("Cryogenic")).len(), 1);
    }
}
