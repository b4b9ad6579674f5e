//! Narrative executive summary for a computed valuation.
//!
//! Purely presentational: the summary consumes a finished [`ValuationResult`]
//! and never feeds back into the engine.

use std::future::Future;
use std::pin::Pin;

use serde::Serialize;
use tracing::warn;

use crate::format::format_millions;
use crate::gemini::{GeminiClient, GenerateRequest};
use crate::provider::{ProviderError, ProviderErrorKind};
use crate::{OperatingProfile, ValuationResult};

pub const MISSING_KEY_MESSAGE: &str = "Falta la API Key. No se puede generar el resumen con IA.";
pub const GENERATION_FAILED_MESSAGE: &str = "Error generando el resumen.";
pub const EMPTY_SUMMARY_MESSAGE: &str = "Análisis no disponible.";

pub type SummaryFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ProviderError>> + Send + 'a>>;

pub trait SummaryGenerator: Send + Sync {
    fn summarize<'a>(
        &'a self,
        profile: &'a OperatingProfile,
        valuation: &'a ValuationResult,
    ) -> SummaryFuture<'a>;
}

#[derive(Clone)]
pub struct GeminiSummaryGenerator {
    client: GeminiClient,
}

impl GeminiSummaryGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl SummaryGenerator for GeminiSummaryGenerator {
    fn summarize<'a>(
        &'a self,
        profile: &'a OperatingProfile,
        valuation: &'a ValuationResult,
    ) -> SummaryFuture<'a> {
        Box::pin(async move {
            let request = GenerateRequest::text(summary_prompt(profile, valuation));
            self.client.generate(&request).await
        })
    }
}

/// Summary text plus whether it came from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryOutcome {
    pub text: String,
    pub generated: bool,
}

impl SummaryOutcome {
    fn fallback(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            generated: false,
        }
    }
}

/// Generate a summary, replacing any failure with a static message.
pub async fn resolve_summary(
    generator: &dyn SummaryGenerator,
    profile: &OperatingProfile,
    valuation: &ValuationResult,
) -> SummaryOutcome {
    match generator.summarize(profile, valuation).await {
        Ok(text) if text.trim().is_empty() => SummaryOutcome::fallback(EMPTY_SUMMARY_MESSAGE),
        Ok(text) => SummaryOutcome {
            text,
            generated: true,
        },
        Err(error) if error.kind() == ProviderErrorKind::MissingCredentials => {
            SummaryOutcome::fallback(MISSING_KEY_MESSAGE)
        }
        Err(error) => {
            warn!(error = %error, "summary generation failed");
            SummaryOutcome::fallback(GENERATION_FAILED_MESSAGE)
        }
    }
}

pub fn summary_prompt(profile: &OperatingProfile, valuation: &ValuationResult) -> String {
    format!(
        "Escribe un resumen financiero ejecutivo profesional para un reporte de valoración de startup.\n\
Idioma: ESPAÑOL.\n\
Estilo: Consultoría estratégica.\n\
IMPORTANTE: Usa formato numérico español con punto para miles y coma para decimales (ej: $1.500.000,00).\n\n\
Contexto de la Startup:\n\
- Industria: {industry} ({model})\n\
- Etapa: {stage}\n\
- MRR: ${mrr}\n\
- Crecimiento: {growth}%\n\
- Runway: {runway} meses\n\n\
Resultados de Valoración:\n\
- Rango: ${low}M - ${high}M (USD)\n\
- Base (Objetivo): ${base}M\n\n\
Instrucciones:\n\
1. Proporciona una \"Tesis de Inversión\" sucinta.\n\
2. Explica el \"Racional de Valoración\" citando el crecimiento y mercado.\n\
3. Da una evaluación de \"Fundraising Fit\" (¿es realista lo que piden?).\n\
4. Manténlo bajo 300 palabras. Usa formato Markdown profesional.",
        industry = profile.industry,
        model = profile.business_model,
        stage = profile.stage,
        mrr = profile.mrr,
        growth = profile.mrr_growth,
        runway = profile.runway_months,
        low = format_millions(valuation.conservative),
        high = format_millions(valuation.optimistic),
        base = format_millions(valuation.base),
    )
}
