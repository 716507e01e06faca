//! Record types for plant-year observations.

use serde::Serialize;

/// One plant-year observation from the eGRID dataset.
///
/// Constructed once per input row by the decoder and never mutated
/// afterwards. Serialized field names match the documents the legacy
/// exporter wrote, so existing indices stay queryable.
///
/// Most fields are kept as uncoerced text; only the coal flag and the two
/// measurements are converted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantRecord {
    /// Plant name.
    #[serde(rename = "plant_name")]
    pub name: String,
    /// DOE/EIA ORIS plant or facility code.
    #[serde(rename = "Code")]
    pub code: String,
    /// Data year, kept as text because it is part of the document key.
    #[serde(rename = "Year")]
    pub year: String,
    /// Number of generators, stored uncoerced.
    #[serde(rename = "NumGenerators")]
    pub num_generators: String,
    /// Plant primary fuel.
    #[serde(rename = "Fuel")]
    pub fuel: String,
    /// Plant primary fuel category.
    #[serde(rename = "FuelCategory")]
    pub fuel_category: String,
    /// Whether the plant burned or generated any amount of coal.
    #[serde(rename = "UsesCoal")]
    pub uses_coal: bool,
    /// Plant nameplate capacity (MW).
    #[serde(rename = "Capacity")]
    pub capacity: f32,
    /// Plant annual CO2 emissions (tons).
    #[serde(rename = "CO2Emissions")]
    pub co2_emissions: f32,
}

impl PlantRecord {
    /// Document identifier for this record: `"{year}_{code}"`.
    ///
    /// Deterministic and pure. Two records sharing year and code collide
    /// and overwrite each other in the store; this mirrors the source
    /// dataset, which carries one row per (facility, year).
    pub fn id(&self) -> String {
        format!("{}_{}", self.year, self.code)
    }
}

/// An ordered batch of records, accumulated in full before indexing begins.
pub type RecordBatch = Vec<PlantRecord>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlantRecord {
        PlantRecord {
            name: "PlantA".into(),
            code: "55".into(),
            year: "2018".into(),
            num_generators: "3".into(),
            fuel: "Coal".into(),
            fuel_category: "Coal".into(),
            uses_coal: true,
            capacity: 1200.5,
            co2_emissions: 900_000.0,
        }
    }

    #[test]
    fn test_id_format() {
        assert_eq!(sample().id(), "2018_55");
    }

    #[test]
    fn test_id_is_deterministic() {
        let record = sample();
        assert_eq!(record.id(), record.id());

        let mut other = sample();
        other.year = "2019".into();
        assert_ne!(record.id(), other.id());
    }

    #[test]
    fn test_document_json_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["plant_name"], "PlantA");
        assert_eq!(value["Code"], "55");
        assert_eq!(value["Year"], "2018");
        assert_eq!(value["NumGenerators"], "3");
        assert_eq!(value["Fuel"], "Coal");
        assert_eq!(value["FuelCategory"], "Coal");
        assert_eq!(value["UsesCoal"], true);
        assert_eq!(value["Capacity"], 1200.5);
        assert_eq!(value["CO2Emissions"], 900_000.0);
    }
}
