//! Scenario: an operator creates a client and registers its first catalog.

use crate::common::*;

#[test]
fn register_lists_disabled_description_with_services() {
    let env = TestEnv::new();
    let url = env.write_catalog("users.json", USERS_V1);

    let created = env.run(&["client", "add", CLIENT]);
    assert!(created.success, "{}", created.combined_output());

    let added = env.run(&["add", CLIENT, &url]);
    assert!(added.success, "{}", added.combined_output());
    assert!(added.stdout.contains("registered service description 1"));
    assert!(added.stdout.contains("+ getUser.v1"));
    assert!(added.stdout.contains("+ listUsers.v1"));

    let listed = env.run(&["list", CLIENT, "--json"]);
    assert!(listed.success, "{}", listed.combined_output());
    let json = listed.json();
    let description = &json["descriptions"][0];
    assert_eq!(description["id"], 1);
    assert_eq!(description["url"], url.as_str());
    assert_eq!(description["disabled"], true);
    assert_eq!(description["disabled_notice"], "Out of order");
    assert_eq!(description["services"].as_array().unwrap().len(), 2);
    assert_eq!(description["services"][0]["timeout"], 60);
}

#[test]
fn enable_and_disable_round_trip() {
    let env = TestEnv::new();
    let url = env.write_catalog("users.json", USERS_V1);
    env.run(&["client", "add", CLIENT]);
    env.run(&["add", CLIENT, &url]);

    let enabled = env.run(&["enable", "1"]);
    assert!(enabled.success, "{}", enabled.combined_output());
    assert_eq!(env.run(&["list", CLIENT, "--json"]).json()["descriptions"][0]["disabled"], false);

    let disabled = env.run(&["disable", "1", "--notice", "Maintenance"]);
    assert!(disabled.success, "{}", disabled.combined_output());
    let listed = env.run(&["list", CLIENT, "--json"]).json();
    let description = &listed["descriptions"][0];
    assert_eq!(description["disabled"], true);
    assert_eq!(description["disabled_notice"], "Maintenance");
}

#[test]
fn config_file_sets_engine_defaults() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[sync]
default_timeout = 5
default_disabled_notice = "Not yet live"
"#,
    );
    let url = env.write_catalog("users.json", USERS_V1);
    env.run(&["client", "add", CLIENT]);

    let added = env.run(&["add", CLIENT, &url, "--json"]);
    assert!(added.success, "{}", added.combined_output());
    let json = added.json();
    let description = &json["description"];
    assert_eq!(description["disabled_notice"], "Not yet live");
    assert_eq!(description["services"][0]["timeout"], 5);
}

#[test]
fn client_list_shows_created_clients() {
    let env = TestEnv::new();
    env.run(&["client", "add", CLIENT]);
    env.run(&["client", "add", "EE:COM:12345"]);

    let listed = env.run(&["client", "list", "--json"]);
    assert!(listed.success, "{}", listed.combined_output());
    assert_eq!(
        listed.json()["clients"],
        serde_json::json!(["EE:COM:12345", CLIENT])
    );
}
