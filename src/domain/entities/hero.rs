use std::borrow::Cow;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::{
    constants::{DEFAULT_LOCATION, HERO_SINGLETON_ID},
    entities::option_fields::OptionField,
    errors::AppError,
    utils::{json_body::from_json_object, media::MediaLinks},
};

// ───── Constants ──────────────────────────────────────────────────────
const MAX_NAME_LENGTH: usize = 100;
const MAX_ROLE_LENGTH: usize = 100;
const MAX_LOCATION_LENGTH: usize = 100;
const MAX_NAME_COLOR_LENGTH: usize = 7;
const MAX_SOCIAL_URL_LENGTH: usize = 200;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}){1,2}$").expect("hex colour pattern is valid")
});

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct HeroSection {
    pub id: i32,
    pub name: String,
    pub name_color: String,
    pub role: String,
    pub tagline: String,
    pub resume_file: String,
    pub linkedin_icon: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_icon: Option<String>,
    pub github_url: Option<String>,
    pub instagram_icon: Option<String>,
    pub instagram_url: Option<String>,
    pub location: String,
    pub available_for_work: bool,
    pub updated_at: DateTime<Utc>,
}

impl HeroSection {
    /// The row as created by the column defaults of `hero_section`.
    pub fn new_singleton() -> Self {
        HeroSection {
            id: HERO_SINGLETON_ID,
            name: String::new(),
            name_color: String::new(),
            role: String::new(),
            tagline: String::new(),
            resume_file: String::new(),
            linkedin_icon: None,
            linkedin_url: None,
            github_icon: None,
            github_url: None,
            instagram_icon: None,
            instagram_url: None,
            location: DEFAULT_LOCATION.to_string(),
            available_for_work: true,
            updated_at: Utc::now(),
        }
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroDataResponse {
    pub name: String,
    pub name_color: String,
    pub role: String,
    pub tagline: String,
    pub resume_link: String,
    pub linkedin_icon: String,
    pub github_icon: String,
    pub instagram_icon: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub instagram_url: String,
    pub location: String,
    pub available_for_work: bool,
}

impl HeroDataResponse {
    pub fn from_hero(hero: &HeroSection, links: &MediaLinks) -> Self {
        let location = if hero.location.trim().is_empty() {
            DEFAULT_LOCATION.to_string()
        } else {
            hero.location.clone()
        };

        HeroDataResponse {
            name: hero.name.clone(),
            name_color: hero.name_color.clone(),
            role: hero.role.clone(),
            tagline: hero.tagline.clone(),
            resume_link: links.absolute(&hero.resume_file),
            linkedin_icon: links.absolute_opt(hero.linkedin_icon.as_deref()),
            github_icon: links.absolute_opt(hero.github_icon.as_deref()),
            instagram_icon: links.absolute_opt(hero.instagram_icon.as_deref()),
            linkedin_url: hero.linkedin_url.clone().unwrap_or_default(),
            github_url: hero.github_url.clone().unwrap_or_default(),
            instagram_url: hero.instagram_url.clone().unwrap_or_default(),
            location,
            available_for_work: hero.available_for_work,
        }
    }
}

/// Hero fields shown on the server-rendered landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HeroSummary {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub resume_link: String,
}

impl HeroSummary {
    pub fn from_hero(hero: Option<&HeroSection>, links: &MediaLinks) -> Self {
        match hero {
            Some(hero) => HeroSummary {
                name: hero.name.clone(),
                role: hero.role.clone(),
                tagline: hero.tagline.clone(),
                resume_link: links.relative(&hero.resume_file),
            },
            None => HeroSummary::default(),
        }
    }
}

// ───── Input & Validation ───────────────────────────────────────────

/// Partial update of the hero section. Only keys present in the body are
/// applied; file fields are not part of the patch.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct HeroPatch {
    #[validate(custom(function = "validate_name"))]
    pub name: OptionField<String>,

    #[validate(custom(function = "validate_name_color"))]
    pub name_color: OptionField<String>,

    #[validate(custom(function = "validate_role"))]
    pub role: OptionField<String>,

    #[validate(custom(function = "validate_tagline"))]
    pub tagline: OptionField<String>,

    #[validate(custom(function = "validate_location"))]
    pub location: OptionField<String>,

    #[validate(custom(function = "validate_available_for_work"))]
    pub available_for_work: OptionField<bool>,

    #[validate(custom(function = "validate_social_url"))]
    pub linkedin_url: OptionField<String>,

    #[validate(custom(function = "validate_social_url"))]
    pub github_url: OptionField<String>,

    #[validate(custom(function = "validate_social_url"))]
    pub instagram_url: OptionField<String>,
}

impl HeroPatch {
    /// Parses a request body, which must be a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        from_json_object(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON: {}", e)))
    }

    /// Merges the patch into `hero`. Call `validate()` first: null values for
    /// non-nullable fields are skipped here rather than rejected.
    pub fn apply_to(self, hero: &mut HeroSection) {
        self.name.apply(&mut hero.name);
        self.name_color.apply(&mut hero.name_color);
        self.role.apply(&mut hero.role);
        self.tagline.apply(&mut hero.tagline);
        self.location.apply(&mut hero.location);
        self.available_for_work.apply(&mut hero.available_for_work);

        apply_social_url(self.linkedin_url, &mut hero.linkedin_url);
        apply_social_url(self.github_url, &mut hero.github_url);
        apply_social_url(self.instagram_url, &mut hero.instagram_url);
    }
}

// Empty strings clear the link, same as null.
fn apply_social_url(field: OptionField<String>, target: &mut Option<String>) {
    let field = match field {
        OptionField::SetToValue(url) if url.trim().is_empty() => OptionField::SetToNull,
        OptionField::SetToValue(url) => OptionField::SetToValue(url.trim().to_string()),
        other => other,
    };
    field.apply_nullable(target);
}

// ───── Validation Helpers ───────────────────────────────────────────

fn validate_name(value: &OptionField<String>) -> Result<(), ValidationError> {
    validate_required_text(value, MAX_NAME_LENGTH)
}

fn validate_role(value: &OptionField<String>) -> Result<(), ValidationError> {
    validate_required_text(value, MAX_ROLE_LENGTH)
}

fn validate_tagline(value: &OptionField<String>) -> Result<(), ValidationError> {
    validate_required_text(value, usize::MAX)
}

fn validate_location(value: &OptionField<String>) -> Result<(), ValidationError> {
    validate_required_text(value, MAX_LOCATION_LENGTH)
}

fn validate_name_color(value: &OptionField<String>) -> Result<(), ValidationError> {
    validate_required_text(value, MAX_NAME_COLOR_LENGTH)?;

    match value.flatten_str() {
        Some(color) if !color.is_empty() && !HEX_COLOR.is_match(color) => Err(new_validation_error(
            "invalid_hex_color",
            "Enter a HEX color such as #be123c".into(),
        )),
        _ => Ok(()),
    }
}

fn validate_available_for_work(value: &OptionField<bool>) -> Result<(), ValidationError> {
    if value.is_set_to_null() {
        return Err(null_value_error());
    }
    Ok(())
}

fn validate_social_url(value: &OptionField<String>) -> Result<(), ValidationError> {
    let Some(url) = value.flatten_str().map(str::trim) else {
        return Ok(());
    };
    if url.is_empty() {
        return Ok(());
    }
    if url.chars().count() > MAX_SOCIAL_URL_LENGTH {
        return Err(too_long_error(MAX_SOCIAL_URL_LENGTH));
    }
    validate_url(url)
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) => {
            if parsed.scheme() == "http" || parsed.scheme() == "https" {
                Ok(())
            } else {
                Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://".into()))
            }
        }
        Err(_) => Err(new_validation_error("invalid_url", "Enter a valid URL".into())),
    }
}

fn validate_required_text(value: &OptionField<String>, max_chars: usize) -> Result<(), ValidationError> {
    match value {
        OptionField::SetToNull => Err(null_value_error()),
        OptionField::SetToValue(text) if text.chars().count() > max_chars => Err(too_long_error(max_chars)),
        _ => Ok(()),
    }
}

fn null_value_error() -> ValidationError {
    new_validation_error("null_value", "This field may not be null".into())
}

fn too_long_error(max_chars: usize) -> ValidationError {
    new_validation_error(
        "too_long",
        format!("Ensure this field has no more than {} characters", max_chars).into(),
    )
}

fn new_validation_error(code: &'static str, msg: Cow<'static, str>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(msg);
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn links() -> MediaLinks {
        MediaLinks::new("/media/", Some(Url::parse("http://localhost:8000").unwrap()))
    }

    fn stored_hero() -> HeroSection {
        HeroSection {
            name: "Meet Chovatiya".into(),
            name_color: "#be123c".into(),
            role: "Frontend Engineer".into(),
            tagline: "I build things for the web.".into(),
            resume_file: "resumes/meet.pdf".into(),
            github_icon: Some("social_icons/github.svg".into()),
            github_url: Some("https://github.com/meet".into()),
            ..HeroSection::new_singleton()
        }
    }

    fn patch(json: serde_json::Value) -> HeroPatch {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn omitted_fields_are_left_untouched() {
        let mut hero = stored_hero();
        let before = hero.clone();

        let update = patch(serde_json::json!({"role": "Full Stack Engineer"}));
        update.validate().unwrap();
        update.apply_to(&mut hero);

        assert_eq!(hero.role, "Full Stack Engineer");
        assert_eq!(hero.name, before.name);
        assert_eq!(hero.tagline, before.tagline);
        assert_eq!(hero.github_url, before.github_url);
        assert_eq!(hero.available_for_work, before.available_for_work);
    }

    #[test]
    fn social_urls_can_be_cleared_with_null_or_empty_string() {
        let mut hero = stored_hero();
        hero.linkedin_url = Some("https://linkedin.com/in/meet".into());

        patch(serde_json::json!({"github_url": null, "linkedin_url": ""})).apply_to(&mut hero);

        assert_eq!(hero.github_url, None);
        assert_eq!(hero.linkedin_url, None);
    }

    #[test]
    fn null_for_required_field_fails_validation() {
        let err = patch(serde_json::json!({"name": null})).validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));

        let err = patch(serde_json::json!({"available_for_work": null})).validate().unwrap_err();
        assert!(err.field_errors().contains_key("available_for_work"));
    }

    #[test]
    fn overlong_name_fails_validation() {
        let err = patch(serde_json::json!({"name": "x".repeat(101)})).validate().unwrap_err();
        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn name_color_must_be_hex() {
        assert!(patch(serde_json::json!({"name_color": "#be123c"})).validate().is_ok());
        assert!(patch(serde_json::json!({"name_color": "#fff"})).validate().is_ok());
        assert!(patch(serde_json::json!({"name_color": ""})).validate().is_ok());
        assert!(patch(serde_json::json!({"name_color": "crimson"})).validate().is_err());
    }

    #[test]
    fn validation_errors_carry_rejected_value() {
        let err = patch(serde_json::json!({"name_color": "crimson"})).validate().unwrap_err();
        let errors = err.field_errors();

        assert_eq!(errors["name_color"][0].params["value"], serde_json::json!({"SetToValue": "crimson"}));
    }

    #[test]
    fn social_urls_must_be_http() {
        assert!(patch(serde_json::json!({"github_url": "ftp://github.com/meet"})).validate().is_err());
        assert!(patch(serde_json::json!({"github_url": "not a url"})).validate().is_err());
        assert!(patch(serde_json::json!({"github_url": "https://github.com/meet"})).validate().is_ok());
    }

    #[test]
    fn array_body_is_not_applied_by_position() {
        let err = HeroPatch::from_slice(br##"["Positional Name", "#fff"]"##).unwrap_err();

        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.starts_with("Invalid JSON")));
    }

    #[test]
    fn object_body_parses_into_patch() {
        let update = HeroPatch::from_slice(br#"{"role": "Engineer"}"#).unwrap();

        assert_eq!(update.role.flatten_str(), Some("Engineer"));
        assert!(!update.name.is_set_to_null());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let update = patch(serde_json::json!({"resume_file": "resumes/other.pdf"}));
        let mut hero = stored_hero();

        update.apply_to(&mut hero);

        assert_eq!(hero.resume_file, "resumes/meet.pdf");
    }

    #[test]
    fn response_resolves_files_and_fills_blanks() {
        let mut hero = stored_hero();
        hero.location = "   ".into();

        let response = HeroDataResponse::from_hero(&hero, &links());

        assert_eq!(response.resume_link, "http://localhost:8000/media/resumes/meet.pdf");
        assert_eq!(response.github_icon, "http://localhost:8000/media/social_icons/github.svg");
        assert_eq!(response.linkedin_icon, "");
        assert_eq!(response.linkedin_url, "");
        assert_eq!(response.github_url, "https://github.com/meet");
        assert_eq!(response.location, DEFAULT_LOCATION);
    }

    #[test]
    fn fresh_singleton_serializes_to_empty_defaults() {
        let response = HeroDataResponse::from_hero(&HeroSection::new_singleton(), &links());

        assert_eq!(response.name, "");
        assert_eq!(response.role, "");
        assert_eq!(response.tagline, "");
        assert_eq!(response.resume_link, "");
        assert_eq!(response.location, "Rajkot");
        assert!(response.available_for_work);
    }

    #[test]
    fn summary_of_missing_hero_is_blank() {
        assert_eq!(HeroSummary::from_hero(None, &links()), HeroSummary::default());

        let summary = HeroSummary::from_hero(Some(&stored_hero()), &links());
        assert_eq!(summary.resume_link, "/media/resumes/meet.pdf");
    }
}
