use crate::config::CardConfig;

/// Escape characters that would break `[text](url)` link syntax.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '[' | ']') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Stats card image URL for `owner/repo`.
pub fn card_url(config: &CardConfig, owner: &str, repo: &str) -> String {
    let mut url = config.service_url.clone();
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("username", owner)
            .append_pair("repo", repo)
            .append_pair("theme", &config.theme)
            .append_pair("hide_border", if config.hide_border { "true" } else { "false" });
        if let Some(date) = config.cache_bust {
            query.append_pair("v", &date.format("%Y%m%d").to_string());
        }
    }
    url.to_string()
}

/// Markdown snippet: the card image wrapped in a link to the repository.
pub fn build_card(config: &CardConfig, owner: &str, repo: &str, repo_url: &str) -> String {
    format!(
        "[![{}]({})]({})",
        escape_markdown(repo),
        card_url(config, owner, repo),
        repo_url
    )
}
