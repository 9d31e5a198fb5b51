use serde::{Deserialize, Serialize};

use crate::utils::media::MediaLinks;

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct About {
    pub id: i64,
    pub name: String,
    pub profile_image: String,
    pub education: String,
    pub about_text: String,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Skill {
    pub id: i64,
    pub about_id: i64,
    pub name: String,
    pub icon: String,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillResponse {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutResponse {
    pub name: String,
    pub profile_image: String,
    pub education: String,
    pub about_text: String,
    pub skills: Vec<SkillResponse>,
}

impl AboutResponse {
    pub fn build(about: About, skills: Vec<Skill>, links: &MediaLinks) -> Self {
        AboutResponse {
            profile_image: links.relative(&about.profile_image),
            name: about.name,
            education: about.education,
            about_text: about.about_text,
            skills: skills
                .into_iter()
                .map(|skill| SkillResponse {
                    icon: links.relative(&skill.icon),
                    name: skill.name,
                })
                .collect(),
        }
    }
}
