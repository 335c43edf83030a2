use crate::ports::RecordResolver;
use dnsprobe_domain::{LookupError, QueryAnswer, QueryRequest, RecordType};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// One executed lookup, with the time it took.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub domain: String,
    pub record_type: RecordType,
    pub result: Result<QueryAnswer, LookupError>,
    pub elapsed: Duration,
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(&self.result, Ok(answer) if !answer.values.is_empty())
    }
}

pub struct LookupUseCase {
    resolver: Arc<dyn RecordResolver>,
}

impl LookupUseCase {
    pub fn new(resolver: Arc<dyn RecordResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domain: &str, record_type: RecordType) -> LookupOutcome {
        let query = QueryRequest::new(domain, record_type);

        let start = Instant::now();
        let result = self.resolver.resolve(&query).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(answer) => info!(
                domain,
                %record_type,
                values = answer.values.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "lookup succeeded"
            ),
            Err(LookupError::NoAnswer(_)) => warn!(domain, %record_type, "no records found"),
            Err(err) => error!(domain, %record_type, error = %err, "lookup failed"),
        }

        LookupOutcome {
            domain: domain.to_string(),
            record_type,
            result,
            elapsed,
        }
    }

    /// Runs one lookup per record type, sequentially, in the given order.
    pub async fn execute_all(
        &self,
        domain: &str,
        record_types: &[RecordType],
    ) -> Vec<LookupOutcome> {
        let mut outcomes = Vec::with_capacity(record_types.len());
        for &record_type in record_types {
            outcomes.push(self.execute(domain, record_type).await);
        }
        outcomes
    }
}
