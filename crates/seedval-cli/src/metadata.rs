use std::fmt::{Display, Formatter};

use seedval_core::{BenchmarkOrigin, EnvelopeMeta, ValidationError, SCHEMA_VERSION};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request identifier (UUID v4) stamped on every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Command metadata collected before the envelope is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub request_id: RequestId,
    pub benchmark_origin: Option<BenchmarkOrigin>,
    pub latency_ms: u64,
    pub warnings: Vec<String>,
}

impl Metadata {
    pub fn new(benchmark_origin: Option<BenchmarkOrigin>, latency_ms: u64) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            benchmark_origin,
            latency_ms,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    pub fn into_envelope_meta(self) -> Result<EnvelopeMeta, ValidationError> {
        let mut meta =
            EnvelopeMeta::new(self.request_id.to_string(), SCHEMA_VERSION, self.latency_ms)?;
        if let Some(origin) = self.benchmark_origin {
            meta = meta.with_benchmark_origin(origin);
        }

        for warning in self.warnings {
            meta.push_warning(warning);
        }

        Ok(meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_id_is_uuid_v4() {
        let request_id = RequestId::new_v4();
        assert_eq!(request_id.0.get_version_num(), 4);
    }

    #[test]
    fn metadata_carries_origin_and_warnings() {
        let mut metadata = Metadata::new(Some(BenchmarkOrigin::File), 7);
        metadata.push_warning("w1");

        let meta = metadata.into_envelope_meta().expect("valid metadata");
        assert_eq!(meta.benchmark_origin, Some(BenchmarkOrigin::File));
        assert_eq!(meta.warnings, vec![String::from("w1")]);
        assert_eq!(meta.latency_ms, 7);
        assert_eq!(meta.request_id.len(), 36);
    }
}
