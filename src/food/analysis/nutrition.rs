use crate::food::api::usda::FoodRecord;

/// The nutrients we pull out of a FoodData Central record. Anything else the
/// API reports is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Protein,
    Fat,
    Carbohydrate,
    Fiber,
    Sugars,
    Energy,
    Calcium,
    Iron,
    Sodium,
    VitaminC,
}

impl Nutrient {
    pub const ALL: [Nutrient; 10] = [
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrate,
        Nutrient::Fiber,
        Nutrient::Sugars,
        Nutrient::Energy,
        Nutrient::Calcium,
        Nutrient::Iron,
        Nutrient::Sodium,
        Nutrient::VitaminC,
    ];

    /// Name exactly as it appears in `nutrientName` upstream.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Total lipid (fat)",
            Nutrient::Carbohydrate => "Carbohydrate, by difference",
            Nutrient::Fiber => "Fiber, total dietary",
            Nutrient::Sugars => "Sugars, total including NLEA",
            Nutrient::Energy => "Energy",
            Nutrient::Calcium => "Calcium, Ca",
            Nutrient::Iron => "Iron, Fe",
            Nutrient::Sodium => "Sodium, Na",
            Nutrient::VitaminC => "Vitamin C, total ascorbic acid",
        }
    }

    /// Unit used when the upstream entry carries no `unitName`.
    pub fn default_unit(self) -> &'static str {
        match self {
            Nutrient::Protein
            | Nutrient::Fat
            | Nutrient::Carbohydrate
            | Nutrient::Fiber
            | Nutrient::Sugars => "g",
            Nutrient::Energy => "kcal",
            Nutrient::Calcium | Nutrient::Iron | Nutrient::Sodium | Nutrient::VitaminC => "mg",
        }
    }

    /// Label for the per-food listing. Only the descriptive suffixes and the
    /// fat name are cleaned up; everything else is shown verbatim.
    pub fn display_label(self) -> &'static str {
        match self {
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugars => "Sugars",
            other => other.canonical_name(),
        }
    }

    /// Label for rows of the comparison table and for insights.
    pub fn comparison_label(self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrate => "Carbohydrate",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugars => "Sugars",
            Nutrient::Energy => "Calories",
            Nutrient::Calcium => "Calcium",
            Nutrient::Iron => "Iron",
            Nutrient::Sodium => "Sodium",
            Nutrient::VitaminC => "Vitamin C",
        }
    }

    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.canonical_name() == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NutrientSample {
    pub nutrient: Nutrient,
    pub value: f64,
    pub unit: String,
}

impl NutrientSample {
    pub fn new(nutrient: Nutrient, value: f64, unit: impl Into<String>) -> Self {
        Self {
            nutrient,
            value,
            unit: unit.into(),
        }
    }
}

/// Nutrients of one food, in the order they were first seen upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutrientProfile {
    samples: Vec<NutrientSample>,
}

impl NutrientProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// A nutrient already present keeps its position and takes the new value.
    pub fn insert(&mut self, sample: NutrientSample) {
        match self.samples.iter_mut().find(|s| s.nutrient == sample.nutrient) {
            Some(existing) => *existing = sample,
            None => self.samples.push(sample),
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientSample> {
        self.samples.iter().find(|s| s.nutrient == nutrient)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NutrientSample> {
        self.samples.iter()
    }

    pub fn nutrients(&self) -> impl Iterator<Item = Nutrient> + '_ {
        self.samples.iter().map(|s| s.nutrient)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl FromIterator<NutrientSample> for NutrientProfile {
    fn from_iter<I: IntoIterator<Item = NutrientSample>>(iter: I) -> Self {
        let mut profile = NutrientProfile::new();
        for sample in iter {
            profile.insert(sample);
        }
        profile
    }
}

/// Build the profile of a food record. Entries without a recognised
/// `nutrientName` are skipped; a missing value reads as 0 and a missing unit
/// falls back to the nutrient's default unit.
pub fn extract_nutrients(food: &FoodRecord) -> NutrientProfile {
    let mut profile = NutrientProfile::new();

    for entry in food.nutrient_entries() {
        let Some(nutrient) = entry
            .get("nutrientName")
            .and_then(|n| n.as_str())
            .and_then(Nutrient::from_canonical)
        else {
            continue;
        };

        let value = entry.get("value").and_then(|v| v.as_f64()).unwrap_or(0.0);
        let unit = entry
            .get("unitName")
            .and_then(|u| u.as_str())
            .unwrap_or(nutrient.default_unit());

        profile.insert(NutrientSample::new(nutrient, value, unit));
    }

    log::debug!(
        "Extracted {} nutrients for '{}'",
        profile.len(),
        food.description()
    );
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(nutrients: serde_json::Value) -> FoodRecord {
        serde_json::from_value(json!({
            "description": "Test food",
            "foodNutrients": nutrients,
        }))
        .unwrap()
    }

    #[test]
    fn test_extract_keeps_only_whitelisted_nutrients() {
        let food = record(json!([
            { "nutrientName": "Protein", "value": 1.1, "unitName": "G" },
            { "nutrientName": "Caffeine", "value": 40.0, "unitName": "MG" },
            { "nutrientName": "Energy", "value": 89, "unitName": "KCAL" },
            { "nutrientName": "Water", "value": 74.9, "unitName": "G" },
        ]));

        let profile = extract_nutrients(&food);
        let names: Vec<_> = profile.nutrients().collect();
        assert_eq!(names, vec![Nutrient::Protein, Nutrient::Energy]);
        assert_eq!(profile.get(Nutrient::Energy).unwrap().value, 89.0);
        assert_eq!(profile.get(Nutrient::Protein).unwrap().unit, "G");
    }

    #[test]
    fn test_extract_defaults_missing_value_and_unit() {
        let food = record(json!([
            { "nutrientName": "Iron, Fe" },
            { "nutrientName": "Energy", "value": "lots" },
        ]));

        let profile = extract_nutrients(&food);
        let iron = profile.get(Nutrient::Iron).unwrap();
        assert_eq!(iron.value, 0.0);
        assert_eq!(iron.unit, "mg");
        let energy = profile.get(Nutrient::Energy).unwrap();
        assert_eq!(energy.value, 0.0);
        assert_eq!(energy.unit, "kcal");
    }

    #[test]
    fn test_extract_never_duplicates_a_nutrient() {
        let food = record(json!([
            { "nutrientName": "Protein", "value": 1.0, "unitName": "g" },
            { "nutrientName": "Sodium, Na", "value": 3.0, "unitName": "mg" },
            { "nutrientName": "Protein", "value": 2.5, "unitName": "g" },
        ]));

        let profile = extract_nutrients(&food);
        assert_eq!(profile.len(), 2);
        assert_eq!(profile.iter().next().unwrap().nutrient, Nutrient::Protein);
        assert_eq!(profile.get(Nutrient::Protein).unwrap().value, 2.5);
    }

    #[test]
    fn test_extract_skips_malformed_entries() {
        let food = record(json!([
            "not an object",
            { "value": 12.0 },
            { "nutrientName": 7 },
        ]));
        assert!(extract_nutrients(&food).is_empty());

        let bare: FoodRecord = serde_json::from_value(json!({ "description": "Nothing" })).unwrap();
        assert!(extract_nutrients(&bare).is_empty());
    }

    #[test]
    fn test_label_tables() {
        assert_eq!(Nutrient::Fat.display_label(), "Fat");
        assert_eq!(Nutrient::Energy.display_label(), "Energy");
        assert_eq!(Nutrient::Calcium.display_label(), "Calcium, Ca");
        assert_eq!(Nutrient::Energy.comparison_label(), "Calories");
        assert_eq!(Nutrient::VitaminC.comparison_label(), "Vitamin C");
        for nutrient in Nutrient::ALL {
            assert_eq!(Nutrient::from_canonical(nutrient.canonical_name()), Some(nutrient));
        }
    }
}
