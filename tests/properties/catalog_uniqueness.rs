//! Property tests for per-client full-name uniqueness.
//!
//! Random sequences of registrations and refreshes run against an in-memory
//! store; whatever is accepted, the client never owns one full name twice.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;

use descsync::domain::ports::{DescriptionReader, DescriptionValidator, ParsedOperation, ReadError, ValidationError};
use descsync::infrastructure::InMemoryClientRepository;
use descsync::{Client, ClientId, DescriptionId, ServiceDescriptionUseCase};

#[derive(Default)]
struct MapReader {
    sources: Mutex<HashMap<String, Vec<ParsedOperation>>>,
}

impl DescriptionReader for MapReader {
    fn read(&self, locator: &str) -> Result<Vec<ParsedOperation>, ReadError> {
        self.sources
            .lock()
            .unwrap()
            .get(locator)
            .cloned()
            .ok_or_else(|| ReadError::Unreachable {
                message: locator.to_string(),
            })
    }
}

struct Silent;

impl DescriptionValidator for Silent {
    fn validate(&self, _locator: &str) -> Result<Vec<String>, ValidationError> {
        Ok(Vec::new())
    }
}

#[derive(Debug, Clone)]
enum Step {
    Register { source: usize, codes: Vec<String> },
    Refresh { target: u64, codes: Vec<String> },
}

fn codes() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-eA-E]", 1..=3)
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0usize..4, codes()).prop_map(|(source, codes)| Step::Register { source, codes }),
        (1u64..5, codes()).prop_map(|(target, codes)| Step::Refresh { target, codes }),
    ]
}

fn parsed(codes: &[String]) -> Vec<ParsedOperation> {
    codes
        .iter()
        .map(|code| ParsedOperation {
            code: code.clone(),
            version: Some("v1".to_string()),
            title: None,
            url: "http://backend".to_string(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After any accepted commit, no two operations of the client
    /// share a full name.
    #[test]
    fn property_commits_keep_full_names_unique(steps in proptest::collection::vec(step(), 1..12)) {
        let client_id = ClientId::member("EE", "GOV", "1");
        let repository = Arc::new(InMemoryClientRepository::with_clients([Client::new(client_id.clone())]));
        let reader = Arc::new(MapReader::default());
        let use_case = ServiceDescriptionUseCase::new(repository.clone(), reader.clone(), Arc::new(Silent));

        for step in steps {
            match step {
                Step::Register { source, codes } => {
                    let url = format!("http://x/{}.wsdl", source);
                    reader.sources.lock().unwrap().insert(url.clone(), parsed(&codes));
                    let _ = use_case.add_wsdl_description(&client_id, &url, true);
                }
                Step::Refresh { target, codes } => {
                    if let Ok(description) = use_case.get_description(DescriptionId(target)) {
                        reader.sources.lock().unwrap().insert(description.url.clone(), parsed(&codes));
                        let _ = use_case.refresh_description(DescriptionId(target), true);
                    }
                }
            }

            let client = descsync::domain::ports::ClientRepository::load_client(repository.as_ref(), &client_id)
                .unwrap()
                .unwrap();
            prop_assert!(client.has_unique_full_names());
        }
    }
}
