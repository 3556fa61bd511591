use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored document per user, keyed by `profile_id`. Serialized camelCase
/// to match the wire/document layout; every field carries a default so
/// partial documents written by older versions still deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub profile_id: String,
    pub name: String,
    pub profile_picture: String,
    pub about_me: String,
    pub phone: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub skills: Vec<String>,
    pub extracurricular: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub certification: Vec<CertificationEntry>,
    pub education: Vec<EducationEntry>,
    pub tested_skills: Vec<TestedSkill>,
    pub code_chef: CodeChefStats,
    pub leet_code: LeetCodeStats,
    pub current_goal: CurrentGoal,
    pub badges: Vec<Badge>,
}

impl Profile {
    pub fn new(profile_id: impl Into<String>) -> Self {
        Profile {
            profile_id: profile_id.into(),
            ..Profile::default()
        }
    }

    /// Re-establishes the set invariants on skill-valued lists after a
    /// mutation: exact-match duplicates dropped, first occurrence wins.
    pub fn dedup_skill_sets(&mut self) {
        dedup_in_place(&mut self.skills);
        dedup_in_place(&mut self.current_goal.skill);
        for badge in &mut self.badges {
            dedup_in_place(&mut badge.skills);
        }
    }

    /// Merges a batch of incoming badges: a badge with an unseen name is
    /// appended, a badge matching an existing name unions its skill set into
    /// the stored one. Re-applying the same batch is a no-op.
    pub fn merge_badges(&mut self, incoming: Vec<Badge>) {
        for badge in incoming {
            match self.badges.iter_mut().find(|b| b.name == badge.name) {
                Some(existing) => {
                    for skill in badge.skills {
                        if !existing.skills.contains(&skill) {
                            existing.skills.push(skill);
                        }
                    }
                }
                None => {
                    let mut badge = badge;
                    dedup_in_place(&mut badge.skills);
                    self.badges.push(badge);
                }
            }
        }
    }
}

/// Case-sensitive exact-match de-duplication, preserving first occurrence.
pub fn dedup_in_place(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    /// Stable per-item identifier, assigned at creation.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

/// Append payload for a project; the repository assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
}

impl NewProject {
    pub fn into_entry(self) -> ProjectEntry {
        ProjectEntry {
            id: Uuid::new_v4(),
            name: self.name,
            description: self.description,
            link: self.link,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub company_name: String,
    pub job_role: String,
    pub time: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationEntry {
    pub institute_name: String,
    pub time: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub institute_name: String,
    pub time: String,
    pub marks: String,
    pub stream: String,
}

/// Append-only record of an assessment attempt.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TestedSkill {
    pub skill: String,
    pub date_tested: Option<DateTime<Utc>>,
    pub score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeChefStats {
    pub username: String,
    pub rating: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct LeetCodeStats {
    pub username: String,
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentGoal {
    pub role: String,
    pub skill: Vec<String>,
}

/// Named bundle of skills awarded when a recommendation match is saved.
/// Unique by `name` within a profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Badge {
    pub name: String,
    pub skills: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_has_documented_defaults() {
        let profile = Profile::new("u1");
        assert_eq!(profile.profile_id, "u1");
        assert_eq!(profile.about_me, "");
        assert!(profile.skills.is_empty());
        assert!(profile.projects.is_empty());
        assert_eq!(profile.code_chef.rating, 0);
        assert_eq!(profile.leet_code.total_solved, 0);
    }

    #[test]
    fn dedup_is_case_sensitive_and_order_preserving() {
        let mut skills = vec![
            "Rust".to_string(),
            "rust".to_string(),
            "Rust".to_string(),
            "SQL".to_string(),
        ];
        dedup_in_place(&mut skills);
        assert_eq!(skills, vec!["Rust", "rust", "SQL"]);
    }

    #[test]
    fn badge_merge_unions_skills_by_name() {
        let mut profile = Profile::new("u1");
        profile.badges.push(Badge {
            name: "X".into(),
            skills: vec!["a".into()],
        });

        profile.merge_badges(vec![Badge {
            name: "X".into(),
            skills: vec!["b".into()],
        }]);

        assert_eq!(profile.badges.len(), 1);
        assert_eq!(profile.badges[0].skills, vec!["a", "b"]);
    }

    #[test]
    fn badge_merge_is_idempotent() {
        let mut profile = Profile::new("u1");
        let batch = vec![Badge {
            name: "X".into(),
            skills: vec!["a".into(), "b".into()],
        }];

        profile.merge_badges(batch.clone());
        profile.merge_badges(batch);

        assert_eq!(profile.badges.len(), 1);
        assert_eq!(profile.badges[0].skills, vec!["a", "b"]);
    }

    #[test]
    fn partial_document_deserializes_with_defaults() {
        let doc = serde_json::json!({
            "profileId": "u9",
            "aboutMe": "hi",
            "skills": ["rust"]
        });
        let profile: Profile = serde_json::from_value(doc).unwrap();
        assert_eq!(profile.profile_id, "u9");
        assert_eq!(profile.about_me, "hi");
        assert_eq!(profile.skills, vec!["rust"]);
        assert!(profile.badges.is_empty());
        assert_eq!(profile.current_goal.role, "");
    }
}
