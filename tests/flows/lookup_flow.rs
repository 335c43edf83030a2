//! Full lookup flow against a stub resolver: the scan the CLI performs when
//! no record type is given, and the exit policy derived from the outcomes.

use async_trait::async_trait;
use dnsprobe_application::{LookupUseCase, RecordResolver};
use dnsprobe_domain::{LookupError, QueryAnswer, QueryRequest, RecordType};
use std::collections::HashMap;
use std::sync::Arc;

/// Answers a fixed set of record types; everything else is NXDOMAIN.
struct ScriptedResolver {
    answers: HashMap<RecordType, Vec<String>>,
}

impl ScriptedResolver {
    fn new(answers: &[(RecordType, &[&str])]) -> Self {
        Self {
            answers: answers
                .iter()
                .map(|(record_type, values)| {
                    (
                        *record_type,
                        values.iter().map(|v| v.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }
}

#[async_trait]
impl RecordResolver for ScriptedResolver {
    async fn resolve(&self, query: &QueryRequest) -> Result<QueryAnswer, LookupError> {
        match self.answers.get(&query.record_type) {
            Some(values) => Ok(QueryAnswer::new(query.record_type, values.clone())),
            None => Err(LookupError::NxDomain),
        }
    }
}

#[tokio::test]
async fn test_full_scan_mixes_answers_and_errors() {
    let resolver = Arc::new(ScriptedResolver::new(&[
        (RecordType::A, &["93.184.216.34"]),
        (RecordType::MX, &["10 mail.example.com.", "20 backup.example.com."]),
    ]));
    let lookup = LookupUseCase::new(resolver);

    let outcomes = lookup.execute_all("example.com", RecordType::all()).await;

    assert_eq!(outcomes.len(), 7);
    assert!(outcomes[0].is_success()); // A
    assert!(outcomes[3].is_success()); // MX
    assert!(!outcomes[1].is_success()); // AAAA not scripted

    // exit policy: at least one type answered, so the run succeeds
    assert!(outcomes.iter().any(|outcome| outcome.is_success()));
}

#[tokio::test]
async fn test_all_failures_means_failed_run() {
    let resolver = Arc::new(ScriptedResolver::new(&[]));
    let lookup = LookupUseCase::new(resolver);

    let outcomes = lookup
        .execute_all("nonexistent.invalid", RecordType::all())
        .await;

    assert!(outcomes.iter().all(|outcome| !outcome.is_success()));
    assert!(outcomes
        .iter()
        .all(|outcome| outcome.result == Err(LookupError::NxDomain)));
}

#[tokio::test]
async fn test_repeated_scan_is_idempotent() {
    let resolver = Arc::new(ScriptedResolver::new(&[(
        RecordType::A,
        &["93.184.216.34"],
    )]));
    let lookup = LookupUseCase::new(resolver);

    let first = lookup.execute("example.com", RecordType::A).await;
    let second = lookup.execute("example.com", RecordType::A).await;

    assert_eq!(first.result, second.result);
}
