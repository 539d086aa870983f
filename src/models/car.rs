use serde::{Deserialize, Serialize};

/// One row of the `get_cars` reference list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CarModel {
    #[serde(rename = "CarMake", default)]
    pub car_make: String,
    #[serde(rename = "CarModel", default)]
    pub car_model: String,
    #[serde(rename = "CarType", default)]
    pub car_type: String,
    #[serde(rename = "ModelYear", default)]
    pub model_year: Option<i32>,
    #[serde(rename = "DealerId", default)]
    pub dealer_id: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
pub struct CarsResponse {
    #[serde(rename = "CarModels", default)]
    pub car_models: Vec<CarModel>,
}

/// Reference data behind the make/model selects on the review form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarCatalog {
    models: Vec<CarModel>,
}

impl From<Vec<CarModel>> for CarCatalog {
    fn from(models: Vec<CarModel>) -> Self {
        Self { models }
    }
}

impl CarCatalog {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Distinct makes, in the order the backend listed them.
    pub fn makes(&self) -> Vec<String> {
        let mut makes: Vec<String> = Vec::new();
        for model in &self.models {
            if !makes.contains(&model.car_make) {
                makes.push(model.car_make.clone());
            }
        }
        makes
    }

    /// Exactly the models whose make equals `make`.
    pub fn models_for(&self, make: &str) -> Vec<CarModel> {
        self.models
            .iter()
            .filter(|model| model.car_make == make)
            .cloned()
            .collect()
    }

    pub fn has_model(&self, make: &str, model: &str) -> bool {
        self.models
            .iter()
            .any(|m| m.car_make == make && m.car_model == model)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_catalog() -> CarCatalog {
        let json = r#"{"CarModels": [
            {"CarModel": "Camry", "CarMake": "Toyota", "CarType": "Sedan", "ModelYear": 2023, "DealerId": null},
            {"CarModel": "RAV4", "CarMake": "Toyota", "CarType": "SUV", "ModelYear": 2022, "DealerId": null},
            {"CarModel": "F-150", "CarMake": "Ford", "CarType": "Truck", "ModelYear": 2023, "DealerId": 4},
            {"CarModel": "Civic", "CarMake": "Honda", "CarType": "Sedan", "ModelYear": 2023, "DealerId": null}
        ]}"#;
        let parsed: CarsResponse = serde_json::from_str(json).unwrap();
        CarCatalog::from(parsed.car_models)
    }

    #[test]
    fn makes_are_distinct_and_ordered() {
        assert_eq!(sample_catalog().makes(), vec!["Toyota", "Ford", "Honda"]);
    }

    #[test]
    fn models_are_restricted_to_the_make() {
        let catalog = sample_catalog();
        let toyota: Vec<_> = catalog
            .models_for("Toyota")
            .into_iter()
            .map(|m| m.car_model)
            .collect();
        assert_eq!(toyota, vec!["Camry", "RAV4"]);
        assert!(catalog.models_for("").is_empty());
        assert!(catalog.models_for("toyota").is_empty());
    }

    #[test]
    fn has_model_checks_the_pair() {
        let catalog = sample_catalog();
        assert!(catalog.has_model("Ford", "F-150"));
        assert!(!catalog.has_model("Toyota", "F-150"));
    }

    #[test]
    fn missing_list_is_empty() {
        let parsed: CarsResponse = serde_json::from_str("{}").unwrap();
        assert!(CarCatalog::from(parsed.car_models).is_empty());
    }
}
