#![allow(dead_code)]

use chrono::NaiveDate;
use github_profile_updater::config::{CardConfig, GitHubConfig, DEFAULT_CARD_URL};
use github_profile_updater::models::RepositorySummary;
use serde_json::{json, Value};
use std::time::Duration;

pub const PLACEHOLDER: &str = "[![placeholder](https://example.com/card.svg)](https://example.com)";

pub fn repo(name: &str, stars: u32) -> RepositorySummary {
    RepositorySummary {
        name: Some(name.to_string()),
        url: Some(format!("https://github.com/alice/{}", name)),
        star_count: stars,
        owner_login: Some("alice".to_string()),
        primary_language: Some("Rust".to_string()),
    }
}

pub fn repo_json(name: &str, stars: u32) -> Value {
    json!({
        "name": name,
        "full_name": format!("alice/{}", name),
        "html_url": format!("https://github.com/alice/{}", name),
        "stargazers_count": stars,
        "language": "Rust",
        "owner": { "login": "alice" }
    })
}

/// `count` repositories named `repo-{offset}`.. with descending star counts
pub fn repo_page(offset: usize, count: usize) -> Value {
    Value::Array(
        (offset..offset + count)
            .map(|i| repo_json(&format!("repo-{}", i), (10_000 - i) as u32))
            .collect(),
    )
}

/// Profile document with marker pairs for the given slots, each holding a placeholder card.
pub fn profile_document(slots: &[usize]) -> String {
    let mut doc = String::from("# Hi there\n\n## Top projects\n\n");
    for i in slots {
        doc.push_str(&format!(
            "<!-- REPO_{i}_START -->\n{}\n<!-- REPO_{i}_END -->\n\n",
            PLACEHOLDER
        ));
    }
    doc.push_str("Thanks for visiting!\n");
    doc
}

pub fn card_config() -> CardConfig {
    CardConfig::new(DEFAULT_CARD_URL)
        .expect("default card URL parses")
        .with_cache_bust(NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date"))
}

pub fn github_config(api_url: &str, token: Option<&str>) -> GitHubConfig {
    GitHubConfig::new(token.map(str::to_string))
        .expect("config builds")
        .with_api_url(api_url)
        .expect("mock server URL parses")
        .with_timeout(Duration::from_secs(5))
}
