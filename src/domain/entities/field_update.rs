use derive_more::Display;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;

use crate::entities::profile::{
    dedup_in_place, CertificationEntry, CurrentGoal, EducationEntry, ExperienceEntry, NewProject,
    Profile, ProjectEntry, TestedSkill,
};
use crate::errors::AppError;

/// The field update policy: every updatable top-level attribute and its merge
/// rule, as one exhaustively-matched enum. Field names not representable here
/// are rejected at parse time; `codeChef`, `leetCode` and `badges` are only
/// reachable through their dedicated operations.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    Name(String),
    ProfilePicture(String),
    AboutMe(String),
    Phone(String),
    Email(String),
    Github(String),
    Linkedin(String),
    Skills(Vec<String>),
    Extracurricular(Vec<String>),
    Projects(Vec<ProjectEntry>),
    Experience(Vec<ExperienceEntry>),
    Certification(Vec<CertificationEntry>),
    Education(Vec<EducationEntry>),
    CurrentGoal(CurrentGoal),
}

impl FieldUpdate {
    /// Looks up `field` in the whitelist and deserializes `value` into the
    /// matching shape. Runs before any store access so a bad request never
    /// touches the document.
    pub fn parse(field: &str, value: Value) -> Result<Self, AppError> {
        fn shaped<T: serde::de::DeserializeOwned>(field: &str, value: Value) -> Result<T, AppError> {
            serde_json::from_value(value).map_err(|e| AppError::InvalidValue {
                field: field.to_string(),
                message: e.to_string(),
            })
        }

        match field {
            "name" => Ok(FieldUpdate::Name(shaped(field, value)?)),
            "profilePicture" => Ok(FieldUpdate::ProfilePicture(shaped(field, value)?)),
            "aboutMe" => Ok(FieldUpdate::AboutMe(shaped(field, value)?)),
            "phone" => Ok(FieldUpdate::Phone(shaped(field, value)?)),
            "email" => Ok(FieldUpdate::Email(shaped(field, value)?)),
            "github" => Ok(FieldUpdate::Github(shaped(field, value)?)),
            "linkedin" => Ok(FieldUpdate::Linkedin(shaped(field, value)?)),
            "skills" => Ok(FieldUpdate::Skills(shaped(field, value)?)),
            "extracurricular" => Ok(FieldUpdate::Extracurricular(shaped(field, value)?)),
            "projects" => {
                // Bulk edits may resubmit stored entries (ids kept) mixed
                // with new ones (ids assigned by the serde default).
                Ok(FieldUpdate::Projects(shaped(field, value)?))
            }
            "experience" => Ok(FieldUpdate::Experience(shaped(field, value)?)),
            "certification" => Ok(FieldUpdate::Certification(shaped(field, value)?)),
            "education" => Ok(FieldUpdate::Education(shaped(field, value)?)),
            "currentGoal" => Ok(FieldUpdate::CurrentGoal(shaped(field, value)?)),
            _ => Err(AppError::InvalidField(field.to_string())),
        }
    }

    pub fn apply(self, profile: &mut Profile) {
        match self {
            FieldUpdate::Name(v) => profile.name = v,
            FieldUpdate::ProfilePicture(v) => profile.profile_picture = v,
            FieldUpdate::AboutMe(v) => profile.about_me = v,
            FieldUpdate::Phone(v) => profile.phone = v,
            FieldUpdate::Email(v) => profile.email = v,
            FieldUpdate::Github(v) => profile.github = v,
            FieldUpdate::Linkedin(v) => profile.linkedin = v,
            FieldUpdate::Skills(v) => profile.skills = v,
            FieldUpdate::Extracurricular(v) => profile.extracurricular = v,
            FieldUpdate::Projects(v) => profile.projects = v,
            FieldUpdate::Experience(v) => profile.experience = v,
            FieldUpdate::Certification(v) => profile.certification = v,
            FieldUpdate::Education(v) => profile.education = v,
            FieldUpdate::CurrentGoal(v) => profile.current_goal = v,
        }
        profile.dedup_skill_sets();
    }
}

/// List-typed attributes addressable by positional index. `testedSkills` is
/// append-only and `badges` merge-only, so neither appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ListField {
    #[display("projects")]
    Projects,
    #[display("experience")]
    Experience,
    #[display("certification")]
    Certification,
    #[display("education")]
    Education,
    #[display("extracurricular")]
    Extracurricular,
    #[display("skills")]
    Skills,
}

impl FromStr for ListField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "projects" => Ok(ListField::Projects),
            "experience" => Ok(ListField::Experience),
            "certification" => Ok(ListField::Certification),
            "education" => Ok(ListField::Education),
            "extracurricular" => Ok(ListField::Extracurricular),
            "skills" => Ok(ListField::Skills),
            _ => Err(AppError::InvalidField(s.to_string())),
        }
    }
}

impl ListField {
    pub fn len(&self, profile: &Profile) -> usize {
        match self {
            ListField::Projects => profile.projects.len(),
            ListField::Experience => profile.experience.len(),
            ListField::Certification => profile.certification.len(),
            ListField::Education => profile.education.len(),
            ListField::Extracurricular => profile.extracurricular.len(),
            ListField::Skills => profile.skills.len(),
        }
    }

    pub fn is_empty(&self, profile: &Profile) -> bool {
        self.len(profile) == 0
    }

    /// Removes the element at `index`, preserving the order of the rest.
    /// Caller has already bounds-checked.
    pub fn remove_at(&self, profile: &mut Profile, index: usize) {
        match self {
            ListField::Projects => {
                profile.projects.remove(index);
            }
            ListField::Experience => {
                profile.experience.remove(index);
            }
            ListField::Certification => {
                profile.certification.remove(index);
            }
            ListField::Education => {
                profile.education.remove(index);
            }
            ListField::Extracurricular => {
                profile.extracurricular.remove(index);
            }
            ListField::Skills => {
                profile.skills.remove(index);
            }
        }
    }
}

/// Enumerated append dispatch: the only two list fields with an incremental
/// append surface.
#[derive(Debug, Clone)]
pub enum ListAppend {
    Project(NewProject),
    TestedSkill(TestedSkill),
}

/// Canonical mutation surface for the `skills` set. The generic field update
/// for `skills` projects onto `Replace`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "lowercase")]
pub enum SkillsOp {
    Replace(Vec<String>),
    Add(Vec<String>),
    Remove(Vec<String>),
}

impl SkillsOp {
    pub fn apply(self, skills: &mut Vec<String>) {
        match self {
            SkillsOp::Replace(new) => *skills = new,
            SkillsOp::Add(extra) => skills.extend(extra),
            SkillsOp::Remove(gone) => skills.retain(|s| !gone.contains(s)),
        }
        dedup_in_place(skills);
    }
}
