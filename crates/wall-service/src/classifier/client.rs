//! Sentiment classifier client
//!
//! One HTTP call to a hosted text-generation endpoint per submission, no
//! retry. Every failure mode (transport, status, parse, bad scores)
//! recovers locally with a randomized vector so the submission always goes
//! through; the tagged result lets callers tell confident scores from
//! degraded ones.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use wall_common::ClassifierConfig;
use wall_core::ScoreVector;

/// Lower bound of a random fallback axis score
pub const FALLBACK_MIN: i64 = 10;
/// Upper bound of a random fallback axis score
pub const FALLBACK_MAX: i64 = 40;

/// Substitute for the model's uniform 25/25/25/25 middle-ground refusal
pub const UNIFORM_SUBSTITUTE: ScoreVector = ScoreVector {
    positive: 40.0,
    calm: 25.0,
    energetic: 20.0,
    deep: 15.0,
};

/// Fixed instruction sent with every message
const INSTRUCTION: &str = "Score the following visitor message on four mood axes: \
POSITIVE, CALM, ENERGETIC, DEEP. Respond with a single JSON object whose only keys \
are those four axis names mapping to non-negative numbers summing to 100. The scores \
must be contrasted - do not give every axis the same value. No prose, no markdown.";

/// Result of a classification attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// The hosted model produced a usable vector
    Classified(ScoreVector),
    /// Degraded mode: a locally substituted vector
    Fallback(ScoreVector),
}

impl Classification {
    /// The score vector regardless of origin
    #[must_use]
    pub fn vector(&self) -> ScoreVector {
        match self {
            Self::Classified(v) | Self::Fallback(v) => *v,
        }
    }

    /// Whether this vector came from the degraded path
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Errors on the primary classification path
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("endpoint returned status {0}")]
    Status(u16),

    #[error("response contained no generated text")]
    EmptyResponse,

    #[error("failed to parse scores: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid score vector: {0}")]
    InvalidScores(#[from] wall_core::DomainError),
}

// Wire shapes of the generation endpoint

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Sentiment classifier over a hosted generation endpoint
#[derive(Clone)]
pub struct SentimentClassifier {
    client: reqwest::Client,
    config: ClassifierConfig,
}

impl SentimentClassifier {
    /// Create a new classifier
    #[must_use]
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Classify a message into a four-axis score vector.
    ///
    /// Exactly one attempt against the endpoint; any failure falls back to
    /// random scores. A parsed uniform 25/25/25/25 is replaced with the
    /// fixed non-uniform substitute and tagged as degraded.
    pub async fn classify(&self, text: &str) -> Classification {
        if !self.config.is_enabled() {
            warn!("classifier key not configured, using random fallback scores");
            return Classification::Fallback(Self::random_fallback());
        }

        match self.request_scores(text).await {
            Ok(vector) if Self::is_uniform_refusal(&vector) => {
                debug!("classifier returned uniform scores, substituting fixed vector");
                Classification::Fallback(UNIFORM_SUBSTITUTE)
            }
            Ok(vector) => Classification::Classified(vector),
            Err(e) => {
                warn!(error = %e, "sentiment classification failed, using random fallback scores");
                Classification::Fallback(Self::random_fallback())
            }
        }
    }

    /// The single network attempt
    async fn request_scores(&self, text: &str) -> Result<ScoreVector, ClassifierError> {
        let prompt = format!("{INSTRUCTION}\n\nMessage: {text}");
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
        };

        let url = format!("{}?key={}", self.config.endpoint, self.config.api_key);
        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifierError::Status(status.as_u16()));
        }

        let payload: GenerateResponse = response.json().await?;
        let generated = payload
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.is_empty())
            .ok_or(ClassifierError::EmptyResponse)?;

        let stripped = strip_code_fences(generated);
        let vector: ScoreVector = serde_json::from_str(stripped)?;

        // Re-run the domain checks; the model can emit negatives
        Ok(ScoreVector::new(
            vector.positive,
            vector.calm,
            vector.energetic,
            vector.deep,
        )?)
    }

    fn is_uniform_refusal(vector: &ScoreVector) -> bool {
        vector.is_uniform() && (vector.positive - 25.0).abs() < f64::EPSILON
    }

    /// Four independently drawn integers, one per axis; no sum guarantee
    fn random_fallback() -> ScoreVector {
        let mut rng = rand::thread_rng();
        ScoreVector {
            positive: rng.gen_range(FALLBACK_MIN..=FALLBACK_MAX) as f64,
            calm: rng.gen_range(FALLBACK_MIN..=FALLBACK_MAX) as f64,
            energetic: rng.gen_range(FALLBACK_MIN..=FALLBACK_MAX) as f64,
            deep: rng.gen_range(FALLBACK_MIN..=FALLBACK_MAX) as f64,
        }
    }
}

impl std::fmt::Debug for SentimentClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentClassifier")
            .field("endpoint", &self.config.endpoint)
            .field("enabled", &self.config.is_enabled())
            .finish_non_exhaustive()
    }
}

/// Strip a markdown code fence (optionally tagged `json`) around a payload
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wall_core::MoodAxis;

    fn test_config(api_key: &str) -> ClassifierConfig {
        ClassifierConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_uniform_substitute_is_non_uniform() {
        assert!(!UNIFORM_SUBSTITUTE.is_uniform());
        assert!(SentimentClassifier::is_uniform_refusal(
            &ScoreVector::new(25.0, 25.0, 25.0, 25.0).unwrap()
        ));
        assert!(!SentimentClassifier::is_uniform_refusal(&UNIFORM_SUBSTITUTE));
        // Uniform but not 25s: not the refusal shape
        assert!(!SentimentClassifier::is_uniform_refusal(
            &ScoreVector::new(10.0, 10.0, 10.0, 10.0).unwrap()
        ));
    }

    #[test]
    fn test_random_fallback_within_bounds() {
        for _ in 0..100 {
            let v = SentimentClassifier::random_fallback();
            for axis in MoodAxis::ALL {
                let score = v.get(axis);
                assert!(score >= FALLBACK_MIN as f64 && score <= FALLBACK_MAX as f64);
            }
        }
    }

    #[tokio::test]
    async fn test_classify_without_key_is_fallback() {
        let classifier = SentimentClassifier::new(test_config(""));
        let result = classifier.classify("hello world").await;
        assert!(result.is_fallback());
        for axis in MoodAxis::ALL {
            let score = result.vector().get(axis);
            assert!(score >= FALLBACK_MIN as f64 && score <= FALLBACK_MAX as f64);
        }
    }

    #[tokio::test]
    async fn test_classify_unreachable_endpoint_is_fallback() {
        // Port 9 (discard) refuses connections; the single attempt fails
        let classifier = SentimentClassifier::new(test_config("some-key"));
        let result = classifier.classify("hello world").await;
        assert!(result.is_fallback());
    }

    #[test]
    fn test_response_text_parses_to_vector() {
        let generated = "```json\n{\"POSITIVE\": 55, \"CALM\": 20, \"ENERGETIC\": 15, \"DEEP\": 10}\n```";
        let vector: ScoreVector = serde_json::from_str(strip_code_fences(generated)).unwrap();
        assert_eq!(vector.positive, 55.0);
        assert_eq!(vector.deep, 10.0);
    }
}
