use crate::error::{EntreportError, Result};
use crate::github::queries::{self, GraphQlRequest, Visibility};
use http::header::{HeaderName, ACCEPT};
use octocrab::Octocrab;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const GITHUB_API_VERSION: &str = "2022-11-28";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GithubClient {
    octocrab: Octocrab,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Org {
    pub name: Option<String>,
    pub login: String,
}

impl Org {
    /// Display name, falling back to the login for organizations that never
    /// set one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_info: PageInfo,
    pub nodes: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct OrganizationsData {
    enterprise: Option<EnterpriseNode>,
}

#[derive(Debug, Deserialize)]
struct EnterpriseNode {
    organizations: Page<Org>,
}

#[derive(Debug, Deserialize)]
struct RepositoriesData {
    organization: Option<OrganizationNode>,
}

#[derive(Debug, Deserialize)]
struct OrganizationNode {
    repositories: Page<Repo>,
}

impl GithubClient {
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self> {
        let builder = Octocrab::builder()
            .personal_token(token.to_string())
            .add_header(ACCEPT, "application/vnd.github+json".to_string())
            .add_header(
                HeaderName::from_static("x-github-api-version"),
                GITHUB_API_VERSION.to_string(),
            )
            .set_connect_timeout(Some(REQUEST_TIMEOUT))
            .set_read_timeout(Some(REQUEST_TIMEOUT));
        let builder = match api_url {
            Some(url) => builder
                .base_uri(url)
                .map_err(|e| EntreportError::GitHub(e.to_string()))?,
            None => builder,
        };
        let octocrab = builder
            .build()
            .map_err(|e| EntreportError::GitHub(e.to_string()))?;
        Ok(Self { octocrab })
    }

    pub async fn list_enterprise_orgs(&self, enterprise: &str) -> Result<Vec<Org>> {
        self.collect_pages(
            |cursor| queries::organizations(enterprise, cursor),
            |data| {
                let parsed: OrganizationsData = serde_json::from_value(data)?;
                let node = parsed
                    .enterprise
                    .ok_or_else(|| EntreportError::EnterpriseNotFound(enterprise.to_string()))?;
                Ok(node.organizations)
            },
        )
        .await
    }

    pub async fn list_org_repos(&self, login: &str, visibility: Visibility) -> Result<Vec<Repo>> {
        self.collect_pages(
            |cursor| queries::repositories(login, visibility, cursor),
            |data| {
                let parsed: RepositoriesData = serde_json::from_value(data)?;
                let node = parsed
                    .organization
                    .ok_or_else(|| EntreportError::OrgNotFound(login.to_string()))?;
                Ok(node.repositories)
            },
        )
        .await
    }

    pub async fn list_org_repos_rest(&self, org: &str) -> Result<Value> {
        let route = format!("/orgs/{org}/repos");
        let body: Value = self
            .octocrab
            .post(&route, None::<&()>)
            .await
            .map_err(|e| EntreportError::from_api(e, &route))?;
        Ok(body)
    }

    /// Walks a cursor-paginated collection to the end, accumulating nodes in
    /// delivery order. `build` produces the request for a given cursor and
    /// `extract` digs the page out of the response data.
    async fn collect_pages<T, B, X>(&self, build: B, extract: X) -> Result<Vec<T>>
    where
        B: Fn(Option<&str>) -> GraphQlRequest,
        X: Fn(Value) -> Result<Page<T>>,
    {
        let mut nodes = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let request = build(cursor.as_deref());
            let data = self.run_query(&request).await?;
            let page = extract(data)?;
            nodes.extend(page.nodes);
            if !page.page_info.has_next_page {
                break;
            }
            cursor = page.page_info.end_cursor;
        }
        Ok(nodes)
    }

    async fn run_query(&self, request: &GraphQlRequest) -> Result<Value> {
        let payload = serde_json::json!({
            "query": request.query,
            "variables": request.variables,
        });
        let response: GraphQlResponse = self
            .octocrab
            .graphql(&payload)
            .await
            .map_err(|e| EntreportError::from_api(e, request.query))?;
        match response.data {
            Some(data) => Ok(data),
            None => {
                let messages: Vec<String> =
                    response.errors.into_iter().map(|e| e.message).collect();
                Err(EntreportError::Graphql(messages.join("; ")))
            }
        }
    }
}
