//! Hickory-resolver adapter for the `RecordResolver` port.
//!
//! The wire-protocol exchange (query construction, response parsing, EDNS,
//! truncation handling) is delegated to `hickory-resolver`; this adapter
//! selects the target server, bounds the query with a timeout, and maps the
//! library's errors onto the `LookupError` taxonomy.

use crate::dns::rdata;
use crate::dns::record_type_map::RecordTypeMapper;
use async_trait::async_trait;
use dnsprobe_application::RecordResolver;
use dnsprobe_domain::{Config, ConfigError, LookupError, QueryAnswer, QueryRequest, RecordType};
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

const DEFAULT_DNS_PORT: u16 = 53;

pub struct HickoryRecordResolver {
    resolver: TokioAsyncResolver,
}

impl HickoryRecordResolver {
    /// Builds a resolver pointed at the configured nameserver (UDP with TCP
    /// fallback, both handled inside the library).
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let server = parse_server(&config.dns_server)?;
        let group = NameServerConfigGroup::from_ips_clear(&[server.ip()], server.port(), true);
        let resolver_config = ResolverConfig::from_parts(None, vec![], group);

        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_millis(config.query_timeout);
        // one attempt per invocation, no retries
        opts.attempts = 1;

        Ok(Self {
            resolver: TokioAsyncResolver::tokio(resolver_config, opts),
        })
    }
}

#[async_trait]
impl RecordResolver for HickoryRecordResolver {
    async fn resolve(&self, query: &QueryRequest) -> Result<QueryAnswer, LookupError> {
        let hickory_type = RecordTypeMapper::to_hickory(query.record_type);

        let lookup = self
            .resolver
            .lookup(query.domain.as_str(), hickory_type)
            .await
            .map_err(|err| map_resolve_error(err, query.record_type))?;

        let values: Vec<String> = lookup
            .record_iter()
            .filter(|record| record.record_type() == hickory_type)
            .filter_map(|record| record.data())
            .map(rdata::render)
            .collect();

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            values = values.len(),
            "lookup answered"
        );

        if values.is_empty() {
            return Err(LookupError::NoAnswer(query.record_type));
        }

        Ok(QueryAnswer::new(query.record_type, values))
    }
}

fn parse_server(server: &str) -> Result<SocketAddr, ConfigError> {
    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }
    Err(ConfigError::Invalid(format!(
        "dns_server '{server}' is not an IP address or socket address"
    )))
}

fn map_resolve_error(err: ResolveError, record_type: RecordType) -> LookupError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            classify_rcode(*response_code, record_type)
        }
        ResolveErrorKind::Timeout => LookupError::Timeout,
        _ => LookupError::Other(err.to_string()),
    }
}

/// Classifies the response code the resolver reported for an empty answer.
fn classify_rcode(rcode: ResponseCode, record_type: RecordType) -> LookupError {
    match rcode {
        ResponseCode::NXDomain => LookupError::NxDomain,
        ResponseCode::ServFail
        | ResponseCode::Refused
        | ResponseCode::NotImp
        | ResponseCode::FormErr => LookupError::ServerFailure(rcode_name(rcode).to_string()),
        _ => LookupError::NoAnswer(record_type),
    }
}

fn rcode_name(rcode: ResponseCode) -> &'static str {
    match rcode {
        ResponseCode::ServFail => "SERVFAIL",
        ResponseCode::Refused => "REFUSED",
        ResponseCode::NotImp => "NOTIMP",
        ResponseCode::FormErr => "FORMERR",
        _ => "UNKNOWN",
    }
}
