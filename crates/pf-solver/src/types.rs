//! Request and response shapes for the simulation API.

use serde::{Deserialize, Deserializer, Serialize};

/// A single administered compound and its dosing parameters.
///
/// Treated as an immutable value read by every worker; compound order
/// within a request does not affect results.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compound {
    pub id: String,
    pub name: String,
    /// Administered dose in milligrams; non-positive doses contribute
    /// nothing to any curve.
    pub dosage_mg: f64,
    pub absorption_rate_constant: f64,
    pub elimination_rate_constant: f64,
}

/// One simulation request: a duration in whole days and the compounds
/// administered over it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Requested duration; zero or negative yields an empty response.
    #[serde(default)]
    pub duration_days: i32,
    /// `null` entries in the incoming list are skipped, not an error.
    #[serde(default, deserialize_with = "skip_null_compounds")]
    pub compounds: Vec<Compound>,
}

fn skip_null_compounds<'de, D>(deserializer: D) -> Result<Vec<Compound>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Option<Compound>>::deserialize(deserializer)?;
    Ok(entries.into_iter().flatten().collect())
}

/// One computed day of a simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// 0-based day index; equals this point's position in the response.
    pub day: u32,
    pub serum_concentration: f64,
    pub anabolic_score: f64,
    pub toxicity_score: f64,
}

/// Ordered per-day results, one entry per requested day.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_round_trips_with_camel_case_field_names() {
        let json = r#"{
            "durationDays": 3,
            "compounds": [{
                "id": "testosterone",
                "name": "Testosterone Propionate",
                "dosageMg": 100.0,
                "absorptionRateConstant": 1.2,
                "eliminationRateConstant": 0.4
            }]
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.duration_days, 3);
        assert_eq!(request.compounds.len(), 1);
        assert_eq!(request.compounds[0].dosage_mg, 100.0);
        assert_eq!(request.compounds[0].absorption_rate_constant, 1.2);

        let back = serde_json::to_value(&request).unwrap();
        assert_eq!(back["durationDays"], 3);
        assert_eq!(back["compounds"][0]["eliminationRateConstant"], 0.4);
    }

    #[test]
    fn null_compound_entries_are_skipped() {
        let json = r#"{
            "durationDays": 2,
            "compounds": [
                null,
                {
                    "id": "c1",
                    "name": "Compound One",
                    "dosageMg": 50.0,
                    "absorptionRateConstant": 1.0,
                    "eliminationRateConstant": 0.5
                },
                null
            ]
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.compounds.len(), 1);
        assert_eq!(request.compounds[0].id, "c1");
    }

    #[test]
    fn missing_fields_default_to_empty_request() {
        let request: SimulationRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.duration_days, 0);
        assert!(request.compounds.is_empty());
    }

    #[test]
    fn response_serializes_with_camel_case_field_names() {
        let response = SimulationResponse {
            data_points: vec![DataPoint {
                day: 0,
                serum_concentration: 0.0,
                anabolic_score: 0.0,
                toxicity_score: 0.0,
            }],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["dataPoints"][0]["day"], 0);
        assert!(value["dataPoints"][0].get("serumConcentration").is_some());
        assert!(value["dataPoints"][0].get("anabolicScore").is_some());
        assert!(value["dataPoints"][0].get("toxicityScore").is_some());
    }
}
