use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// One survivor as listed by `GET /survivors`.
///
/// The backend embeds location and resources flat in the record and
/// carries a few more fields (`infected`, `timestamp`) that this front end
/// does not show; those are ignored on decode.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurvivorRecord {
    pub name: String,
    #[serde(deserialize_with = "lenient_number")]
    pub age: f64,
    pub gender: String,
    pub id: String,
    #[serde(deserialize_with = "lenient_number")]
    pub longitude: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub latitude: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub water: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub food: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub medication: f64,
    #[serde(deserialize_with = "lenient_number")]
    pub ammunition: f64,
}

/// Aggregate health split returned by `GET /survivors/stats`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfectionStats {
    pub infected_percentage: f64,
    pub healthy_percentage: f64,
}

impl InfectionStats {
    const TOLERANCE: f64 = 0.5;

    /// True when the pair adds up to 100, or is the all-zero pair the
    /// backend reports for an empty population.
    pub fn is_consistent(&self) -> bool {
        let (infected, healthy) = (self.infected_percentage, self.healthy_percentage);
        if !infected.is_finite() || !healthy.is_finite() || infected < 0.0 || healthy < 0.0 {
            return false;
        }
        if infected == 0.0 && healthy == 0.0 {
            return true;
        }
        (infected + healthy - 100.0).abs() <= Self::TOLERANCE
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

// The reference backend stores food and medication as strings.
fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("expected a number, found '{s}'")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_backend_survivor_with_string_resources() {
        let raw = r#"{
            "name": "Bob",
            "age": 41,
            "gender": "M",
            "id": "7701015009087",
            "longitude": 18.42,
            "latitude": -33.92,
            "water": 3,
            "food": "2",
            "medication": "",
            "ammunition": 120,
            "infected": false,
            "timestamp": "2021-09-03T11:04:17Z"
        }"#;
        let record: SurvivorRecord = serde_json::from_str(raw).expect("decode");
        assert_eq!(record.name, "Bob");
        assert_eq!(record.age, 41.0);
        assert_eq!(record.food, 2.0);
        assert_eq!(record.medication, 0.0);
        assert_eq!(record.latitude, -33.92);
    }

    #[test]
    fn rejects_non_numeric_text_and_missing_fields() {
        let bad_food = r#"{"name":"A","age":1,"gender":"F","id":"1","longitude":0,
            "latitude":0,"water":0,"food":"lots","medication":0,"ammunition":0}"#;
        let err = serde_json::from_str::<SurvivorRecord>(bad_food).unwrap_err();
        assert!(err.to_string().contains("lots"), "{err}");

        let missing = r#"{"name":"A","age":1}"#;
        assert!(serde_json::from_str::<SurvivorRecord>(missing).is_err());
    }

    #[test]
    fn stats_use_camel_case_on_the_wire() {
        let stats: InfectionStats =
            serde_json::from_str(r#"{"healthyPercentage":37,"infectedPercentage":63}"#)
                .expect("decode");
        assert_eq!(stats.infected_percentage, 63.0);
        assert_eq!(stats.healthy_percentage, 37.0);
    }

    #[test]
    fn consistency_accepts_full_and_empty_populations() {
        let split = |infected, healthy| InfectionStats {
            infected_percentage: infected,
            healthy_percentage: healthy,
        };
        assert!(split(63.0, 37.0).is_consistent());
        assert!(split(33.333_333, 66.666_667).is_consistent());
        assert!(split(0.0, 0.0).is_consistent());
        assert!(!split(80.0, 40.0).is_consistent());
        assert!(!split(-5.0, 105.0).is_consistent());
        assert!(!split(f64::NAN, 100.0).is_consistent());
    }
}
