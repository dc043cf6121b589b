mod client;
mod queries;

pub use client::{GithubClient, Org, Repo};
pub use queries::Visibility;
