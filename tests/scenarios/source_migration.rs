//! Scenario: a provider publishes a new catalog and the operator moves the
//! description over, acknowledging the change warnings.

use std::fs;

use crate::common::*;

#[test]
fn update_requires_acknowledging_added_and_removed_services() {
    let env = TestEnv::new();
    let v1 = env.write_catalog("users-v1.json", USERS_V1);
    let v2 = env.write_catalog("users-v2.json", USERS_V2);
    env.run(&["client", "add", CLIENT]);
    env.run(&["add", CLIENT, &v1]);

    let refused = env.run(&["update", "1", &v2]);
    assert_eq!(refused.exit_code, 1, "{}", refused.combined_output());
    assert!(refused.stderr.contains("clients.warnings_detected"));
    assert!(refused.stderr.contains("clients.adding_services: deleteUser.v1"));
    assert!(refused.stderr.contains("clients.deleting_services: listUsers.v1"));

    let unchanged = env.run(&["list", CLIENT, "--json"]).json();
    assert_eq!(unchanged["descriptions"][0]["url"], v1.as_str());

    let accepted = env.run(&["update", "1", &v2, "--ignore-warnings"]);
    assert!(accepted.success, "{}", accepted.combined_output());
    assert!(accepted.stdout.contains("+ deleteUser.v1"));
    assert!(accepted.stdout.contains("- listUsers.v1"));

    let listed = env.run(&["list", CLIENT, "--json"]).json();
    let names: Vec<&str> = listed["descriptions"][0]["services"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["full_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["getUser.v1", "deleteUser.v1"]);
    assert_eq!(listed["descriptions"][0]["url"], v2.as_str());
}

#[test]
fn refresh_picks_up_edited_catalog() {
    let env = TestEnv::new();
    let url = env.write_catalog("users.json", USERS_V1);
    env.run(&["client", "add", CLIENT]);
    env.run(&["add", CLIENT, &url]);

    let unchanged = env.run(&["refresh", "1", "--json"]);
    assert!(unchanged.success, "{}", unchanged.combined_output());
    assert_eq!(unchanged.json()["added"], serde_json::json!([]));

    fs::write(env.path("catalogs/users.json"), USERS_V2).unwrap();
    let refused = env.run(&["refresh", "1", "--json"]);
    assert_eq!(refused.exit_code, 1);
    assert_eq!(refused.json()["error"]["code"], "clients.warnings_detected");

    let accepted = env.run(&["refresh", "1", "--ignore-warnings", "--json"]);
    assert!(accepted.success, "{}", accepted.combined_output());
    assert_eq!(accepted.json()["removed"], serde_json::json!(["listUsers.v1"]));
}

#[test]
fn deleted_description_frees_its_services() {
    let env = TestEnv::new();
    let users = env.write_catalog("users.json", USERS_V1);
    let legacy = env.write_catalog("legacy.json", COLLIDING);
    env.run(&["client", "add", CLIENT]);
    env.run(&["add", CLIENT, &users]);

    let deleted = env.run(&["delete", "1"]);
    assert!(deleted.success, "{}", deleted.combined_output());

    let added = env.run(&["add", CLIENT, &legacy]);
    assert!(added.success, "{}", added.combined_output());
    assert!(added.stdout.contains("registered service description 2"));
}
