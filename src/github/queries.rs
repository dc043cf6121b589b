use serde_json::{json, Value};

/// Which repositories an organization listing should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    All,
}

impl Visibility {
    pub fn label(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::All => "all",
        }
    }
}

pub const ORGANIZATIONS_QUERY: &str = r#"
query allOrgs($enterpriseSlug: String!, $afterCursor: String) {
    enterprise(slug: $enterpriseSlug) {
        organizations(first: 100, after: $afterCursor) {
            pageInfo {
                hasNextPage
                endCursor
            }
            nodes {
                name
                login
            }
        }
    }
}
"#;

pub const PUBLIC_REPOSITORIES_QUERY: &str = r#"
query allRepos($orgLogin: String!, $afterCursor: String) {
    organization(login: $orgLogin) {
        repositories(first: 100, after: $afterCursor, privacy: PUBLIC) {
            pageInfo {
                hasNextPage
                endCursor
            }
            nodes {
                name
                url
            }
        }
    }
}
"#;

pub const ALL_REPOSITORIES_QUERY: &str = r#"
query allRepos($orgLogin: String!, $afterCursor: String) {
    organization(login: $orgLogin) {
        repositories(first: 100, after: $afterCursor) {
            pageInfo {
                hasNextPage
                endCursor
            }
            nodes {
                name
                url
            }
        }
    }
}
"#;

/// A query document plus the variables for one page request.
pub struct GraphQlRequest {
    pub query: &'static str,
    pub variables: Value,
}

pub fn organizations(enterprise: &str, cursor: Option<&str>) -> GraphQlRequest {
    GraphQlRequest {
        query: ORGANIZATIONS_QUERY,
        variables: json!({
            "enterpriseSlug": enterprise,
            "afterCursor": cursor,
        }),
    }
}

pub fn repositories(login: &str, visibility: Visibility, cursor: Option<&str>) -> GraphQlRequest {
    let query = match visibility {
        Visibility::Public => PUBLIC_REPOSITORIES_QUERY,
        Visibility::All => ALL_REPOSITORIES_QUERY,
    };
    GraphQlRequest {
        query,
        variables: json!({
            "orgLogin": login,
            "afterCursor": cursor,
        }),
    }
}
