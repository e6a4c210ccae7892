//! Profile Data Structures
//!
//! A profile is a single document per user holding free-form professional
//! fields plus two embedded, independently addressable sub-lists: experience
//! and education. Sub-list entries are prepended on creation and removed by
//! their own id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{ProfileError, SharedError};
use crate::shared::user::UserSummary;
use crate::shared::validation::{parse_date, Validator};

/// Social network links; only provided keys are serialized
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// A job held by the profile owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// A school attended by the profile owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: DateTime<Utc>,
    pub to: Option<DateTime<Utc>>,
    pub current: bool,
    pub description: Option<String>,
}

/// Profile document, one per user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    /// Owning user
    pub user: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// Skills may arrive as a comma separated string or as a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum SkillsInput {
    Text(String),
    List(Vec<String>),
}

impl SkillsInput {
    /// Split on commas, trim each skill, drop empty entries; order is kept
    pub fn normalize(&self) -> Vec<String> {
        let parts: Vec<&str> = match self {
            SkillsInput::Text(text) => text.split(',').collect(),
            SkillsInput::List(items) => items.iter().flat_map(|s| s.split(',')).collect(),
        };
        parts
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Body of `POST /api/profile`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub githubusername: Option<String>,
    pub skills: Option<SkillsInput>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

/// Validated, normalized profile fields ready to merge into a document
///
/// `None` means "not provided": on update the stored value is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ProfileRequest {
    /// Check required fields and build the normalized field set
    pub fn into_fields(self) -> Result<ProfileFields, SharedError> {
        let skills = self.skills.as_ref().map(SkillsInput::normalize).unwrap_or_default();

        Validator::new()
            .required("status", self.status.as_deref().unwrap_or_default(), "Status is required")
            .check("skills", !skills.is_empty(), "Skills is required")
            .finish()?;

        Ok(ProfileFields {
            company: provided(self.company),
            website: provided(self.website),
            location: provided(self.location),
            bio: provided(self.bio),
            status: self.status.unwrap_or_default(),
            githubusername: provided(self.githubusername),
            skills,
            social: Social {
                youtube: provided(self.youtube),
                twitter: provided(self.twitter),
                facebook: provided(self.facebook),
                linkedin: provided(self.linkedin),
                instagram: provided(self.instagram),
            },
        })
    }
}

impl Profile {
    /// New profile for `user` built from validated fields
    pub fn create(user: Uuid, fields: ProfileFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            company: fields.company,
            website: fields.website,
            location: fields.location,
            status: fields.status,
            skills: fields.skills,
            bio: fields.bio,
            githubusername: fields.githubusername,
            social: fields.social,
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        }
    }

    /// Merge fields in place: provided values overwrite, absent ones are kept.
    /// The social map is always replaced as a whole.
    pub fn apply(&mut self, fields: ProfileFields) {
        if let Some(company) = fields.company {
            self.company = Some(company);
        }
        if let Some(website) = fields.website {
            self.website = Some(website);
        }
        if let Some(location) = fields.location {
            self.location = Some(location);
        }
        if let Some(bio) = fields.bio {
            self.bio = Some(bio);
        }
        if let Some(githubusername) = fields.githubusername {
            self.githubusername = Some(githubusername);
        }
        self.status = fields.status;
        self.skills = fields.skills;
        self.social = fields.social;
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experience.insert(0, experience);
    }

    /// Remove the experience entry with `id`; the list is untouched if absent
    pub fn remove_experience(&mut self, id: Uuid) -> Result<Experience, ProfileError> {
        let index = self
            .experience
            .iter()
            .position(|exp| exp.id == id)
            .ok_or(ProfileError::ExperienceNotFound)?;
        Ok(self.experience.remove(index))
    }

    pub fn add_education(&mut self, education: Education) {
        self.education.insert(0, education);
    }

    /// Remove the education entry with `id`; the list is untouched if absent
    pub fn remove_education(&mut self, id: Uuid) -> Result<Education, ProfileError> {
        let index = self
            .education
            .iter()
            .position(|edu| edu.id == id)
            .ok_or(ProfileError::EducationNotFound)?;
        Ok(self.education.remove(index))
    }
}

/// Body of `PUT /api/profile/experience`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl ExperienceRequest {
    pub fn into_experience(self) -> Result<Experience, SharedError> {
        Validator::new()
            .required("title", &self.title, "Title is required")
            .required("from", &self.from, "From date is required")
            .required("company", &self.company, "Company is required")
            .date("from", Some(&self.from), "From date is invalid")
            .date("to", self.to.as_deref(), "To date is invalid")
            .finish()?;

        let from = parse_date(&self.from)
            .ok_or_else(|| SharedError::validation("from", "From date is invalid"))?;

        Ok(Experience {
            id: Uuid::new_v4(),
            title: self.title,
            company: self.company,
            location: provided(self.location),
            from,
            to: self.to.as_deref().and_then(parse_date),
            current: self.current,
            description: provided(self.description),
        })
    }
}

/// Body of `PUT /api/profile/education`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationRequest {
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl EducationRequest {
    pub fn into_education(self) -> Result<Education, SharedError> {
        Validator::new()
            .required("school", &self.school, "School is required")
            .required("degree", &self.degree, "Degree is required")
            .required("fieldofstudy", &self.fieldofstudy, "Field of study is required")
            .required("from", &self.from, "From date is required")
            .date("from", Some(&self.from), "From date is invalid")
            .date("to", self.to.as_deref(), "To date is invalid")
            .finish()?;

        let from = parse_date(&self.from)
            .ok_or_else(|| SharedError::validation("from", "From date is invalid"))?;

        Ok(Education {
            id: Uuid::new_v4(),
            school: self.school,
            degree: self.degree,
            fieldofstudy: self.fieldofstudy,
            from,
            to: self.to.as_deref().and_then(parse_date),
            current: self.current,
            description: provided(self.description),
        })
    }
}

/// Profile with the owning user's name and avatar joined in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileView {
    pub id: Uuid,
    pub user: UserSummary,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileView {
    pub fn new(profile: Profile, user: UserSummary) -> Self {
        Self {
            id: profile.id,
            user,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.date,
        }
    }
}
