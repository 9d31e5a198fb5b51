use serde::{Deserialize, Serialize};

use crate::utils::media::MediaLinks;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub github: String,
    pub demo: Option<String>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub title: String,
    pub description: String,
    pub image: String,
    pub github: String,
    pub demo: Option<String>,
    pub badges: Vec<String>,
}

impl ProjectResponse {
    pub fn from_project(project: Project, links: &MediaLinks) -> Self {
        ProjectResponse {
            image: links.relative(&project.image),
            title: project.title,
            description: project.description,
            github: project.github,
            demo: project.demo,
            badges: project.badges,
        }
    }
}
