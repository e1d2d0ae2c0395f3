// Start of file: /src/discord/embeds.rs

/*
    * Embed construction for every GitHub event the relay handles.
    * The structs mirror the JSON shape Discord expects on
    * POST /channels/{id}/messages, so they serialize straight into the
    * request body without an intermediate representation.
*/

use chrono::Utc;
use serde::Serialize;

// * Accent colors, one per event family
pub const COMMIT_COLOR: u32 = 0x2EA043;
pub const PR_COLOR: u32 = 0x8250DF;
pub const ISSUE_COLOR: u32 = 0xCE3C3C;
pub const STAR_COLOR: u32 = 0xE3B341;
pub const FORK_COLOR: u32 = 0x58A6FF;
pub const RELEASE_COLOR: u32 = 0xDB61A2;
pub const NEUTRAL_COLOR: u32 = 0x808080;

// ! Discord rejects field values longer than 1024 characters
const FIELD_VALUE_LIMIT: usize = 1024;
// ! Push embeds list at most this many commits before eliding the rest
const MAX_COMMITS_LISTED: usize = 10;

const FOOTER_TEXT: &str = "GitHub Webhook";

#[derive(Debug, Clone, Serialize)]
pub struct Embed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

// * A single commit entry within a push embed
#[derive(Debug, Clone)]
pub struct CommitInfo {
    pub id: String,
    pub message: String,
    pub url: String,
}

fn base_embed(title: impl Into<String>, url: Option<String>, color: u32) -> Embed {
    Embed {
        title: title.into(),
        url,
        color,
        fields: Vec::new(),
        footer: EmbedFooter {
            text: FOOTER_TEXT.into(),
        },
        timestamp: Utc::now().to_rfc3339(),
    }
}

fn field(name: &str, value: impl Into<String>, inline: bool) -> EmbedField {
    EmbedField {
        name: name.into(),
        value: clamp_field_value(&value.into()),
        inline,
    }
}

// * Truncate to Discord's field limit, keeping char boundaries intact
fn clamp_field_value(value: &str) -> String {
    if value.chars().count() <= FIELD_VALUE_LIMIT {
        return value.to_string();
    }

    let truncated: String = value.chars().take(FIELD_VALUE_LIMIT - 3).collect();
    format!("{truncated}...")
}

// * Empty descriptions are not valid field values, substitute a placeholder
fn description_or_placeholder(description: &str) -> String {
    if description.trim().is_empty() {
        "No description provided.".to_string()
    } else {
        description.to_string()
    }
}

fn short_sha(id: &str) -> &str {
    id.get(..7).unwrap_or(id)
}

pub fn push_embed(
    author: &str,
    commits: &[CommitInfo],
    repo_name: &str,
    branch: &str,
    compare_url: &str,
) -> Embed {
    let mut lines: Vec<String> = commits
        .iter()
        .take(MAX_COMMITS_LISTED)
        .map(|commit| {
            let summary: &str = commit.message.lines().next().unwrap_or("");
            format!("[`{}`]({}) {}", short_sha(&commit.id), commit.url, summary)
        })
        .collect();

    if commits.len() > MAX_COMMITS_LISTED {
        lines.push(format!(
            "... and {} more",
            commits.len() - MAX_COMMITS_LISTED
        ));
    }

    let mut embed: Embed = base_embed(
        format!("New commits in {repo_name}"),
        Some(compare_url.into()),
        COMMIT_COLOR,
    );
    embed.fields = vec![
        field("Author", author, true),
        field("Branch", branch, true),
        field("Commits", lines.join("\n"), false),
    ];
    embed
}

pub fn commit_embed(author: &str, commit_message: &str, commit_url: &str, branch: &str) -> Embed {
    let mut embed: Embed = base_embed("New Commit", Some(commit_url.into()), COMMIT_COLOR);
    embed.fields = vec![
        field("Author", author, true),
        field("Branch", branch, true),
        field("Message", commit_message, false),
    ];
    embed
}

pub fn star_embed(user: &str, repo_name: &str, repo_url: &str, total_stars: u64) -> Embed {
    let mut embed: Embed = base_embed(
        format!("New star on {repo_name}"),
        Some(repo_url.into()),
        STAR_COLOR,
    );
    embed.fields = vec![
        field("Stargazer", user, true),
        field("Total stars", total_stars.to_string(), true),
    ];
    embed
}

pub fn fork_embed(
    user: &str,
    original_repo: &str,
    fork_name: &str,
    fork_url: &str,
    total_forks: u64,
) -> Embed {
    let mut embed: Embed = base_embed(
        format!("New fork of {original_repo}"),
        Some(fork_url.into()),
        FORK_COLOR,
    );
    embed.fields = vec![
        field("Forked by", user, true),
        field("Fork", fork_name, true),
        field("Total forks", total_forks.to_string(), true),
    ];
    embed
}

pub fn release_embed(
    repo_name: &str,
    tag_name: &str,
    author: &str,
    release_url: &str,
    description: &str,
    prerelease: bool,
) -> Embed {
    let mut embed: Embed = base_embed(
        format!("New release in {repo_name}: {tag_name}"),
        Some(release_url.into()),
        RELEASE_COLOR,
    );
    embed.fields = vec![
        field("Author", author, true),
        field("Pre-release", if prerelease { "Yes" } else { "No" }, true),
        field(
            "Description",
            description_or_placeholder(description),
            false,
        ),
    ];
    embed
}

pub fn pull_request_embed(
    title: &str,
    author: &str,
    pr_url: &str,
    state: &str,
    description: &str,
) -> Embed {
    let color: u32 = if state.eq_ignore_ascii_case("opened") || state.eq_ignore_ascii_case("open") {
        PR_COLOR
    } else if state.eq_ignore_ascii_case("closed") {
        ISSUE_COLOR
    } else {
        NEUTRAL_COLOR
    };

    let mut embed: Embed = base_embed(format!("Pull Request: {title}"), Some(pr_url.into()), color);
    embed.fields = vec![
        field("Author", author, true),
        field("State", state, true),
        field(
            "Description",
            description_or_placeholder(description),
            false,
        ),
    ];
    embed
}

pub fn issue_embed(
    title: &str,
    author: &str,
    issue_url: &str,
    state: &str,
    description: &str,
) -> Embed {
    let color: u32 = if state.eq_ignore_ascii_case("opened") || state.eq_ignore_ascii_case("open") {
        ISSUE_COLOR
    } else if state.eq_ignore_ascii_case("closed") {
        COMMIT_COLOR
    } else {
        NEUTRAL_COLOR
    };

    let mut embed: Embed = base_embed(format!("Issue: {title}"), Some(issue_url.into()), color);
    embed.fields = vec![
        field("Author", author, true),
        field("State", state, true),
        field(
            "Description",
            description_or_placeholder(description),
            false,
        ),
    ];
    embed
}


// End of file: /src/discord/embeds.rs
