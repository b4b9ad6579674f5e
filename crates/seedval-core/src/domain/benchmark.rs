use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Market multiples observed for one comparable company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawBenchmark")]
pub struct ComparableBenchmark {
    pub name: String,
    pub country: String,
    pub industry: String,
    pub ev_mrr_multiple: f64,
    pub ev_revenue_multiple: f64,
    pub ev_user_multiple: f64,
    /// Display-only explanation of why the company is comparable.
    pub rationale: String,
}

impl ComparableBenchmark {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        industry: impl Into<String>,
        ev_mrr_multiple: f64,
        ev_revenue_multiple: f64,
        ev_user_multiple: f64,
        rationale: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyBenchmarkName);
        }

        validate_multiple(&name, "evMrrMultiple", ev_mrr_multiple)?;
        validate_multiple(&name, "evRevenueMultiple", ev_revenue_multiple)?;
        validate_multiple(&name, "evUserMultiple", ev_user_multiple)?;

        Ok(Self {
            name,
            country: country.into(),
            industry: industry.into(),
            ev_mrr_multiple,
            ev_revenue_multiple,
            ev_user_multiple,
            rationale: rationale.into(),
        })
    }
}

/// Unvalidated wire shape; every deserialized benchmark goes through
/// [`ComparableBenchmark::new`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBenchmark {
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub industry: String,
    pub ev_mrr_multiple: f64,
    pub ev_revenue_multiple: f64,
    pub ev_user_multiple: f64,
    #[serde(default)]
    pub rationale: String,
}

impl TryFrom<RawBenchmark> for ComparableBenchmark {
    type Error = ValidationError;

    fn try_from(raw: RawBenchmark) -> Result<Self, Self::Error> {
        Self::new(
            raw.name,
            raw.country,
            raw.industry,
            raw.ev_mrr_multiple,
            raw.ev_revenue_multiple,
            raw.ev_user_multiple,
            raw.rationale,
        )
    }
}

/// Non-empty, ordered collection of comparables.
///
/// Averaging over an empty collection is not representable: the only ways to
/// build a set go through [`BenchmarkSet::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ComparableBenchmark>", into = "Vec<ComparableBenchmark>")]
pub struct BenchmarkSet(Vec<ComparableBenchmark>);

impl BenchmarkSet {
    pub fn new(benchmarks: Vec<ComparableBenchmark>) -> Result<Self, ValidationError> {
        if benchmarks.is_empty() {
            return Err(ValidationError::EmptyBenchmarkSet);
        }
        Ok(Self(benchmarks))
    }

    /// For built-in sets that are non-empty and valid by construction.
    pub(crate) fn from_trusted(benchmarks: Vec<ComparableBenchmark>) -> Self {
        debug_assert!(!benchmarks.is_empty());
        Self(benchmarks)
    }

    pub fn as_slice(&self) -> &[ComparableBenchmark] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparableBenchmark> {
        self.0.iter()
    }

    /// Always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> Vec<ComparableBenchmark> {
        self.0
    }
}

impl TryFrom<Vec<ComparableBenchmark>> for BenchmarkSet {
    type Error = ValidationError;

    fn try_from(value: Vec<ComparableBenchmark>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BenchmarkSet> for Vec<ComparableBenchmark> {
    fn from(value: BenchmarkSet) -> Self {
        value.0
    }
}

impl<'a> IntoIterator for &'a BenchmarkSet {
    type Item = &'a ComparableBenchmark;
    type IntoIter = std::slice::Iter<'a, ComparableBenchmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_multiple(name: &str, field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidMultiple {
            name: name.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}
