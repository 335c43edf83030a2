use async_trait::async_trait;
use dnsprobe_domain::{LookupError, QueryAnswer, QueryRequest};

/// Application-layer port for the DNS lookup backend.
///
/// The implementation lives in the infrastructure layer and is injected by
/// the binary. One call performs exactly one query attempt against the
/// configured nameserver, bounded by the configured timeout.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    async fn resolve(&self, query: &QueryRequest) -> Result<QueryAnswer, LookupError>;
}
