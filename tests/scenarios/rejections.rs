//! Scenario: calls the engine refuses, and what the operator sees.

use std::fs;

use crate::common::*;

#[test]
fn colliding_services_are_rejected_with_owner_source() {
    let env = TestEnv::new();
    let users = env.write_catalog("users.json", USERS_V1);
    let legacy = env.write_catalog("legacy.json", COLLIDING);
    env.run(&["client", "add", CLIENT]);
    env.run(&["add", CLIENT, &users]);

    let result = env.run(&["add", CLIENT, &legacy, "--ignore-warnings", "--json"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    let json = result.json();
    let error = &json["error"];
    assert_eq!(error["kind"], "conflict");
    assert_eq!(error["code"], "clients.service_exists");
    assert_eq!(error["metadata"], serde_json::json!(["getUser.v1", users]));
}

#[test]
fn duplicate_source_is_rejected_regardless_of_case() {
    let env = TestEnv::new();
    let users = env.write_catalog("users.json", USERS_V1);
    env.run(&["client", "add", CLIENT]);
    env.run(&["add", CLIENT, &users]);

    let shouted = users.to_uppercase().replacen("FILE", "file", 1);
    let result = env.run(&["add", CLIENT, &shouted, "--json"]);

    assert_eq!(result.exit_code, 1, "{}", result.combined_output());
    assert_eq!(result.json()["error"]["code"], "clients.wsdl_exists");
}

#[test]
fn validator_findings_block_until_ignored() {
    let env = TestEnv::new();
    let url = env.write_catalog("ping.json", UNTITLED);
    env.run(&["client", "add", CLIENT]);

    let refused = env.run(&["add", CLIENT, &url]);
    assert_eq!(refused.exit_code, 1);
    assert!(refused
        .stderr
        .contains("clients.wsdl_validation_warnings: service 'ping' has no title"));
    assert!(refused.stderr.contains("--ignore-warnings"));

    let accepted = env.run(&["add", CLIENT, &url, "--ignore-warnings"]);
    assert!(accepted.success, "{}", accepted.combined_output());
    assert!(accepted.stdout.contains("(ignored)"));
}

#[test]
fn unknown_client_and_description_are_not_found() {
    let env = TestEnv::new();
    let url = env.write_catalog("users.json", USERS_V1);

    let result = env.run(&["add", CLIENT, &url, "--json"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.json()["error"]["code"], "client_not_found");

    let result = env.run(&["enable", "7", "9", "--json"]);
    assert_eq!(result.exit_code, 1);
    assert_eq!(result.json()["error"]["metadata"], serde_json::json!(["7", "9"]));
}

#[test]
fn malformed_and_unreachable_sources() {
    let env = TestEnv::new();
    env.run(&["client", "add", CLIENT]);

    let malformed = env.run(&["add", CLIENT, "not a url", "--json"]);
    assert_eq!(malformed.json()["error"]["code"], "clients.malformed_wsdl_url");

    let missing = file_url(&env.path("catalogs/absent.json"));
    let unreachable = env.run(&["add", CLIENT, &missing, "--json"]);
    assert_eq!(unreachable.json()["error"]["code"], "clients.wsdl_download_failed");

    let remote = env.run(&["add", CLIENT, "https://provider.example/catalog.json"]);
    assert!(!remote.success);
    assert!(
        remote
            .stderr
            .contains("clients.wsdl_download_failed")
            && remote.stderr.contains("only local file:// catalogs are read"),
        "unexpected output:\n{}",
        remote.combined_output()
    );

    let broken = env.write_catalog("broken.json", "{ not json");
    let invalid = env.run(&["add", CLIENT, &broken, "--json"]);
    assert_eq!(invalid.json()["error"]["code"], "clients.invalid_wsdl");
}

#[test]
fn corrupted_store_surfaces_an_error() {
    let env = TestEnv::new();
    env.run(&["client", "add", CLIENT]);
    let clients = env.store_path().join("clients");
    let file = fs::read_dir(&clients)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.extension().map_or(false, |e| e == "toml"))
        .unwrap();
    fs::write(&file, "this is not toml = = =").unwrap();

    let result = env.run(&["list", CLIENT]);

    assert!(!result.success);
    assert!(
        result.stderr.contains("store file corrupted"),
        "stderr:\n{}",
        result.stderr
    );
}
