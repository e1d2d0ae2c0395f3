// Start of file: /src/github/events.rs

/*
    * Typed views over GitHub webhook payloads. Each struct decodes only the
    * fields the corresponding embed needs; everything else in the delivery
    * is ignored by serde.
*/

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct Sender {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub struct Pusher {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct Commit {
    pub id: String,
    pub message: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PushEvent {
    // `ref` is a Rust keyword
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub compare: String,
    pub repository: Repository,
    pub pusher: Pusher,
    // ? Branch deletions and tag pushes arrive with no commits
    #[serde(default)]
    pub commits: Vec<Commit>,
}

impl PushEvent {
    pub fn branch(&self) -> &str {
        self.git_ref
            .strip_prefix("refs/heads/")
            .unwrap_or(&self.git_ref)
    }
}

#[derive(Debug, Deserialize)]
pub struct StarEvent {
    pub action: String,
    pub repository: Repository,
    pub sender: Sender,
}

#[derive(Debug, Deserialize)]
pub struct ForkEvent {
    pub forkee: Repository,
    pub repository: Repository,
    pub sender: Sender,
}

#[derive(Debug, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub html_url: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub prerelease: bool,
    pub author: Sender,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseEvent {
    pub action: String,
    pub release: Release,
    pub repository: Repository,
}

#[derive(Debug, Deserialize)]
pub struct PullRequest {
    pub title: String,
    pub html_url: String,
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    pub user: Sender,
}

#[derive(Debug, Deserialize)]
pub struct PullRequestEvent {
    pub action: String,
    pub pull_request: PullRequest,
    pub repository: Repository,
}

#[derive(Debug, Deserialize)]
pub struct Issue {
    pub title: String,
    pub html_url: String,
    pub state: String,
    #[serde(default)]
    pub body: Option<String>,
    pub user: Sender,
}

#[derive(Debug, Deserialize)]
pub struct IssuesEvent {
    pub action: String,
    pub issue: Issue,
    pub repository: Repository,
}


// End of file: /src/github/events.rs
