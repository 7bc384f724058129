#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skills {
    pub programming: Vec<String>,
    pub erp: Vec<String>,
    pub tools: Vec<String>,
    pub business: Vec<String>,
}

impl Skills {
    /// Skill categories in display order, paired with their headings.
    pub fn categories(&self) -> Vec<(&'static str, &[String])> {
        return vec![
            ("Engineering", self.programming.as_slice()),
            ("ERP & Systems", self.erp.as_slice()),
            ("Infrastructure", self.tools.as_slice()),
            ("Strategy", self.business.as_slice()),
        ];
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub duration: String,
    pub description: Vec<String>,
    #[serde(default)]
    pub is_current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl Experience {
    pub fn link_label(&self) -> &str {
        return self.link_text.as_deref().unwrap_or("View Details");
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl Project {
    /// Projects with a screenshot are shown as featured work.
    pub fn is_featured(&self) -> bool {
        return self.image.is_some();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Certification {
    pub id: String,
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Honor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Socials {
    pub github: String,
    pub linkedin: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

/// Everything shown about the résumé owner. Loaded once at startup and only
/// ever read afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub years_of_experience: String,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub honors: Vec<Honor>,
    pub socials: Socials,
}

impl Profile {
    pub fn current_role(&self) -> Option<&Experience> {
        return self.experience.iter().find(|e| return e.is_current);
    }

    pub fn featured_projects(&self) -> Vec<&Project> {
        return self
            .projects
            .iter()
            .filter(|project| return project.is_featured())
            .collect();
    }

    pub fn additional_projects(&self) -> Vec<&Project> {
        return self
            .projects
            .iter()
            .filter(|project| return !project.is_featured())
            .collect();
    }
}
