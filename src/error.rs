use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntreportError {
    #[error("Not authenticated. Pass --token or set auth.token in the config file.")]
    NotAuthenticated,

    #[error("No enterprise slug. Pass --enterprise or set defaults.enterprise in the config file.")]
    MissingEnterprise,

    #[error("No organization login. Pass --org to pick the environments report target.")]
    MissingOrg,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("API request failed with status {status}: {query}")]
    Api { status: u16, query: String },

    #[error("GraphQL response carried no data: {0}")]
    Graphql(String),

    #[error("Enterprise not found: {0}")]
    EnterpriseNotFound(String),

    #[error("Organization not found: {0}")]
    OrgNotFound(String),

    #[error("GitHub API error: {0}")]
    GitHub(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl EntreportError {
    /// Maps a client error to `Api` when the response status is known,
    /// keeping the text of the query that failed.
    pub fn from_api(err: octocrab::Error, query: &str) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => EntreportError::Api {
                status: source.status_code.as_u16(),
                query: query.to_string(),
            },
            other => EntreportError::GitHub(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, EntreportError>;
