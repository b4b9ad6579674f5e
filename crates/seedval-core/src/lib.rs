//! # Seedval Core
//!
//! Valuation engine and domain contracts for pricing early-stage companies.
//!
//! ## Overview
//!
//! - **Domain models** for operating metrics, comparables and risk selectors
//! - **Valuation engine**: a pure, synchronous function from
//!   (profile, benchmarks, risk) to a three-scenario [`ValuationResult`]
//! - **Collaborators**: benchmark providers and narrative summaries backed by
//!   a generative model, each with an offline fallback
//! - **Response envelope** with request metadata
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`benchmarks`] | Benchmark provider trait, Gemini and mock providers |
//! | [`config`] | Provider configuration from the environment |
//! | [`domain`] | Domain models |
//! | [`engine`] | Valuation pipeline stages |
//! | [`envelope`] | Output envelope and metadata |
//! | [`error`] | Core error types |
//! | [`format`] | es-ES number formatting |
//! | [`gemini`] | `generateContent` client |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`provider`] | Collaborator error type |
//! | [`retry`] | Retry policy |
//! | [`summary`] | Executive summary generator |
//!
//! ## Quick Start
//!
//! ```rust
//! use seedval_core::{compute_valuation, MockBenchmarkProvider, OperatingProfile, RiskProfile};
//!
//! let profile: OperatingProfile = serde_json::from_str(r#"{
//!     "industry": "Logistics", "businessModel": "SaaS", "stage": "Pre-Seed",
//!     "mrr": 10000, "mrrGrowth": 20, "activeUsers": 500, "cac": 500, "ltv": 3000,
//!     "runwayMonths": 9, "seekingCapital": 500000
//! }"#).unwrap();
//!
//! let result = compute_valuation(
//!     &profile,
//!     &MockBenchmarkProvider::benchmark_set(),
//!     &RiskProfile::default(),
//! );
//! assert!(result.conservative < result.base && result.base < result.optimistic);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │  CLI / caller   │────▶│ BenchmarkProvider│──▶ Gemini / mock
//! └────────┬────────┘     └──────────────────┘
//!          │ (benchmarks resolved)
//!          ▼
//! ┌─────────────────┐
//! │ ValuationEngine │  sync, side-effect free
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ ValuationResult │────▶│ SummaryGenerator │──▶ Gemini / static text
//! └─────────────────┘     └──────────────────┘
//! ```

pub mod benchmarks;
pub mod config;
pub mod domain;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod format;
pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod retry;
pub mod summary;

pub use benchmarks::{
    resolve_benchmarks, BenchmarkOrigin, BenchmarkProvider, BenchmarkResolution,
    GeminiBenchmarkProvider, MockBenchmarkProvider,
};

pub use config::ProviderConfig;

pub use domain::{
    AdjustmentEntry, AdjustmentKind, BenchmarkSet, BusinessModel, ComparableBenchmark,
    Competition, FundingStage, MarketRisk, MethodologyLine, OperatingProfile, ProductMaturity,
    RiskProfile, RunwayBand, RunwayStatus, TeamQuality, ValuationResult,
};

pub use engine::{compute_valuation, ValuationEngine};

pub use envelope::{Envelope, EnvelopeMeta, SCHEMA_VERSION};

pub use error::{CoreError, ValidationError};

pub use gemini::{GeminiClient, GenerateRequest};

pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};

pub use provider::{ProviderError, ProviderErrorKind};

pub use retry::{Backoff, RetryPolicy};

pub use summary::{resolve_summary, GeminiSummaryGenerator, SummaryGenerator, SummaryOutcome};
