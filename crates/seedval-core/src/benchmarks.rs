//! Comparable-company benchmark providers.
//!
//! The engine cannot price anything without at least one comparable, so
//! [`resolve_benchmarks`] never fails: provider errors are logged and replaced
//! by the built-in [`MockBenchmarkProvider`] set.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::gemini::{GeminiClient, GenerateRequest};
use crate::provider::ProviderError;
use crate::{BenchmarkSet, ComparableBenchmark, OperatingProfile};

/// Number of comparables requested from the model.
pub const REQUESTED_BENCHMARKS: usize = 6;

pub type BenchmarkFuture<'a> =
    Pin<Box<dyn Future<Output = Result<BenchmarkSet, ProviderError>> + Send + 'a>>;

/// Where a benchmark set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkOrigin {
    Gemini,
    Mock,
    File,
}

impl BenchmarkOrigin {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Mock => "mock",
            Self::File => "file",
        }
    }
}

impl Display for BenchmarkOrigin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supplies comparables for a profile.
pub trait BenchmarkProvider: Send + Sync {
    fn origin(&self) -> BenchmarkOrigin;

    fn benchmarks<'a>(&'a self, profile: &'a OperatingProfile) -> BenchmarkFuture<'a>;
}

/// Fixed offline comparable set.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockBenchmarkProvider;

impl MockBenchmarkProvider {
    pub fn benchmark_set() -> BenchmarkSet {
        let rows = [
            (
                "EcoLogix (Simulado)",
                "USA",
                12.5,
                10.2,
                150.0,
                "Perfil de crecimiento similar y segmento de mercado.",
            ),
            (
                "MarketFlow",
                "UK",
                14.0,
                11.5,
                180.0,
                "Tasas de churn comparables y estructura de LTV.",
            ),
            (
                "NexaTech",
                "Brasil",
                9.5,
                7.8,
                90.0,
                "Comparable regional con escala de operaciones similar.",
            ),
        ];

        let benchmarks = rows
            .into_iter()
            .map(|(name, country, ev_mrr, ev_revenue, ev_user, rationale)| ComparableBenchmark {
                name: name.to_owned(),
                country: country.to_owned(),
                industry: String::from("SaaS"),
                ev_mrr_multiple: ev_mrr,
                ev_revenue_multiple: ev_revenue,
                ev_user_multiple: ev_user,
                rationale: rationale.to_owned(),
            })
            .collect();

        BenchmarkSet::from_trusted(benchmarks)
    }
}

impl BenchmarkProvider for MockBenchmarkProvider {
    fn origin(&self) -> BenchmarkOrigin {
        BenchmarkOrigin::Mock
    }

    fn benchmarks<'a>(&'a self, _profile: &'a OperatingProfile) -> BenchmarkFuture<'a> {
        Box::pin(async move { Ok(Self::benchmark_set()) })
    }
}

/// Asks the generative model for comparables matching the profile.
#[derive(Clone)]
pub struct GeminiBenchmarkProvider {
    client: GeminiClient,
}

impl GeminiBenchmarkProvider {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, profile: &OperatingProfile) -> Result<BenchmarkSet, ProviderError> {
        let request = GenerateRequest::json(benchmark_prompt(profile), benchmark_schema());
        let text = self.client.generate(&request).await?;
        if text.trim().is_empty() {
            return Err(ProviderError::invalid_response("empty response from gemini"));
        }

        let (set, rejected) = parse_benchmarks(&text)?;
        for reason in &rejected {
            warn!(reason = %reason, "discarding comparable returned by gemini");
        }
        Ok(set)
    }
}

impl BenchmarkProvider for GeminiBenchmarkProvider {
    fn origin(&self) -> BenchmarkOrigin {
        BenchmarkOrigin::Gemini
    }

    fn benchmarks<'a>(&'a self, profile: &'a OperatingProfile) -> BenchmarkFuture<'a> {
        Box::pin(self.fetch(profile))
    }
}

/// Benchmarks ready for the engine, with provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkResolution {
    pub benchmarks: BenchmarkSet,
    pub origin: BenchmarkOrigin,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl BenchmarkResolution {
    pub fn new(benchmarks: BenchmarkSet, origin: BenchmarkOrigin) -> Self {
        Self {
            benchmarks,
            origin,
            warnings: Vec::new(),
        }
    }
}

/// Ask `provider` for comparables, substituting the mock set on any failure.
pub async fn resolve_benchmarks(
    provider: &dyn BenchmarkProvider,
    profile: &OperatingProfile,
) -> BenchmarkResolution {
    match provider.benchmarks(profile).await {
        Ok(benchmarks) => {
            info!(
                origin = %provider.origin(),
                count = benchmarks.len(),
                "benchmarks resolved"
            );
            BenchmarkResolution::new(benchmarks, provider.origin())
        }
        Err(error) => {
            warn!(
                origin = %provider.origin(),
                error = %error,
                "benchmark provider failed, using mock benchmarks"
            );
            let mut resolution = BenchmarkResolution::new(
                MockBenchmarkProvider::benchmark_set(),
                BenchmarkOrigin::Mock,
            );
            resolution.warnings.push(format!(
                "benchmark provider '{}' failed ({error}); using mock benchmarks",
                provider.origin()
            ));
            resolution
        }
    }
}

/// Parse a JSON array of comparables, keeping valid entries.
///
/// Returns the set plus one message per rejected entry; fails when the
/// payload is not an array or no entry survives validation.
pub fn parse_benchmarks(text: &str) -> Result<(BenchmarkSet, Vec<String>), ProviderError> {
    let payload: Value = serde_json::from_str(strip_code_fence(text)).map_err(|e| {
        ProviderError::invalid_response(format!("benchmark payload is not valid JSON: {e}"))
    })?;
    let Value::Array(items) = payload else {
        return Err(ProviderError::invalid_response(
            "benchmark payload must be a JSON array",
        ));
    };

    let mut accepted = Vec::with_capacity(items.len());
    let mut rejected = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ComparableBenchmark>(item) {
            Ok(benchmark) => accepted.push(benchmark),
            Err(error) => rejected.push(format!("entry {index}: {error}")),
        }
    }

    let set = BenchmarkSet::new(accepted).map_err(|_| {
        ProviderError::invalid_response("gemini returned no usable comparables")
    })?;
    Ok((set, rejected))
}

fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

fn benchmark_prompt(profile: &OperatingProfile) -> String {
    let country = if profile.country.trim().is_empty() {
        "Latinoamérica"
    } else {
        profile.country.as_str()
    };

    format!(
        "Genera {REQUESTED_BENCHMARKS} benchmarks de startups realistas y comparables para una compañía \
en etapa {stage} en la industria {industry} (Modelo: {model}) ubicada en {country}.\n\n\
Asegúrate de que los múltiplos sean realistas para el mercado de Venture Capital actual:\n\
- EV/MRR: típicamente 8x - 25x dependiendo del crecimiento.\n\
- EV/Revenue: típicamente 5x - 15x.\n\
- EV/User: depende de la industria (usa rangos realistas).\n\n\
El campo 'rationale' (racional) debe estar escrito en ESPAÑOL explicando por qué es comparable.\n\n\
Devuelve PURO JSON.",
        stage = profile.stage,
        industry = profile.industry,
        model = profile.business_model,
    )
}

fn benchmark_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "country": { "type": "STRING" },
                "industry": { "type": "STRING" },
                "evMrrMultiple": { "type": "NUMBER" },
                "evRevenueMultiple": { "type": "NUMBER" },
                "evUserMultiple": { "type": "NUMBER" },
                "rationale": { "type": "STRING", "description": "Explanation in Spanish" },
            },
            "required": [
                "name", "country", "industry",
                "evMrrMultiple", "evRevenueMultiple", "evUserMultiple", "rationale",
            ],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_profile;

    #[test]
    fn mock_set_matches_reference_comparables() {
        let set = MockBenchmarkProvider::benchmark_set();
        let names: Vec<&str> = set.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["EcoLogix (Simulado)", "MarketFlow", "NexaTech"]);
        assert_eq!(set.as_slice()[1].ev_user_multiple, 180.0);
    }

    #[test]
    fn parses_array_and_discards_invalid_entries() {
        let text = r#"[
            {"name":"Good","country":"MX","industry":"SaaS","evMrrMultiple":15,"evRevenueMultiple":9,"evUserMultiple":120,"rationale":"ok"},
            {"name":"Bad","country":"MX","industry":"SaaS","evMrrMultiple":0,"evRevenueMultiple":9,"evUserMultiple":120,"rationale":"zero"}
        ]"#;

        let (set, rejected) = parse_benchmarks(text).expect("one valid entry");
        assert_eq!(set.len(), 1);
        assert_eq!(rejected.len(), 1);
        assert!(rejected[0].starts_with("entry 1"));
    }

    #[test]
    fn accepts_fenced_payload() {
        let text = "```json\n[{\"name\":\"A\",\"evMrrMultiple\":1,\"evRevenueMultiple\":1,\"evUserMultiple\":1}]\n```";
        let (set, _) = parse_benchmarks(text).expect("fenced json");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn rejects_object_and_empty_array() {
        assert!(parse_benchmarks("{}").is_err());
        let err = parse_benchmarks("[]").expect_err("empty");
        assert!(err.message().contains("no usable"));
    }

    #[test]
    fn prompt_mentions_profile_context() {
        let prompt = benchmark_prompt(&sample_profile());
        assert!(prompt.contains("Pre-Seed"));
        assert!(prompt.contains("Logistics"));
        assert!(prompt.contains("SaaS"));
        assert!(prompt.contains("Chile"));
    }
}
