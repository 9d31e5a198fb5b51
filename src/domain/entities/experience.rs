use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Experience {
    pub id: i64,
    pub company_name: String,
    pub position: String,
    pub year: String,
    pub languages: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceResponse {
    pub company_name: String,
    pub position: String,
    pub year: String,
    pub languages: String,
    pub duration: String,
    pub description: String,
}

impl From<Experience> for ExperienceResponse {
    fn from(exp: Experience) -> Self {
        ExperienceResponse {
            company_name: exp.company_name,
            position: exp.position,
            year: exp.year,
            languages: exp.languages,
            duration: exp.duration,
            description: exp.description,
        }
    }
}
