//! Client for the Gemini `generateContent` endpoint, used to produce a
//! short narrative about a selected flight.

use std::env;
use std::fmt;
use std::time::Duration;

use flight_sim::Flight;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_KEY_VAR: &str = "GEMINI_API_KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Represents errors that can occur while generating a flight story.
#[derive(Debug)]
pub enum StoryError {
    MissingApiKey,
    Request(reqwest::Error),
    Api(u16, String), // HTTP status and response body
    EmptyResponse,
}

impl fmt::Display for StoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryError::MissingApiKey => {
                write!(f, "{} is not set in the environment", API_KEY_VAR)
            }
            StoryError::Request(e) => write!(f, "Request to story service failed: {}", e),
            StoryError::Api(status, body) => {
                write!(f, "Story service returned HTTP {}: {}", status, body)
            }
            StoryError::EmptyResponse => write!(f, "Story service returned no candidates"),
        }
    }
}

impl std::error::Error for StoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoryError::Request(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for StoryError {
    fn from(err: reqwest::Error) -> Self {
        StoryError::Request(err)
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Blocking client for the story service. Construct it once and call
/// `generate_story` from a worker thread; requests can take several seconds.
pub struct StoryClient {
    api_key: String,
    model: String,
    http: reqwest::blocking::Client,
}

impl StoryClient {
    /// Builds a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, StoryError> {
        let api_key = env::var(API_KEY_VAR).map_err(|_| StoryError::MissingApiKey)?;
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(StoryClient {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            http,
        })
    }

    /// Asks the model for a ~100-word story about `flight` and returns the
    /// first candidate's text.
    pub fn generate_story(&self, flight: &Flight) -> Result<String, StoryError> {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(flight),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                top_p: 0.95,
            },
        };

        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoryError::Api(
                status.as_u16(),
                response.text().unwrap_or_default(),
            ));
        }

        let parsed: GenerateResponse = response.json()?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(StoryError::EmptyResponse)
    }
}

/// Builds the narrative prompt for a flight.
pub fn build_prompt(flight: &Flight) -> String {
    let mut prompt = format!(
        "Create a short, imaginative and engaging story (about 100 words) about flight {}, \
         a {} operated by {}. The flight is traveling from {} ({}) to {} ({}). \
         Its current status is \"{}\".",
        flight.callsign,
        flight.aircraft_type,
        flight.airline,
        flight.origin.name,
        flight.origin.code,
        flight.destination.name,
        flight.destination.code,
        flight.status.as_str(),
    );

    if flight.is_airborne() {
        prompt.push_str(&format!(
            " It is currently cruising at {:.0} feet at {:.0} knots.",
            flight.altitude, flight.speed
        ));
    }

    prompt.push_str(
        " Make the story sound like a snippet from a travel documentary or an exciting novel. \
         Be creative and avoid just listing the facts; you could describe the view from the \
         window, a passenger's thoughts, or the pilot's perspective.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use flight_sim::{Airport, FlightStatus};

    fn test_flight(status: FlightStatus) -> Flight {
        let now = Utc::now().naive_utc();
        Flight {
            icao24: "a1b2c3d".to_string(),
            callsign: "EMI745".to_string(),
            airline: "Emirates".to_string(),
            aircraft_type: "A380".to_string(),
            origin: Airport::new(
                "Dubai International".to_string(),
                "DXB".to_string(),
                25.25,
                55.36,
            ),
            destination: Airport::new(
                "Sydney Airport".to_string(),
                "SYD".to_string(),
                -33.94,
                151.17,
            ),
            departure_time: now,
            arrival_time: now,
            status,
            latitude: 10.0,
            longitude: 90.0,
            altitude: 38000.0,
            speed: 510.0,
            heading: 120.0,
        }
    }

    #[test]
    fn test_prompt_includes_route_and_status() {
        let prompt = build_prompt(&test_flight(FlightStatus::EnRoute));
        assert!(prompt.contains("EMI745"));
        assert!(prompt.contains("Emirates"));
        assert!(prompt.contains("Dubai International (DXB)"));
        assert!(prompt.contains("Sydney Airport (SYD)"));
        assert!(prompt.contains("\"En Route\""));
        assert!(prompt.contains("38000 feet"));
        assert!(prompt.contains("510 knots"));
    }

    #[test]
    fn test_prompt_omits_cruise_data_when_grounded() {
        let prompt = build_prompt(&test_flight(FlightStatus::Scheduled));
        assert!(prompt.contains("\"Scheduled\""));
        assert!(!prompt.contains("feet"));
        assert!(!prompt.contains("knots"));
    }

    #[test]
    fn test_response_parsing_takes_first_candidate() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Somewhere over the Indian Ocean..."}]}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }"#;
        let parsed: GenerateResponse = serde_json::from_str(body).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text);
        assert_eq!(text.as_deref(), Some("Somewhere over the Indian Ocean..."));
    }

    #[test]
    fn test_response_parsing_tolerates_missing_candidates() {
        let parsed: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoryError::MissingApiKey.to_string(),
            "GEMINI_API_KEY is not set in the environment"
        );
        assert!(StoryError::Api(429, "quota".to_string())
            .to_string()
            .contains("429"));
    }
}
