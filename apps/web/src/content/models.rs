use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    #[serde(rename = "AI")]
    Ai,
    Web,
    Tools,
    Games,
}

impl ProjectCategory {
    /// Display order used by the projects page filter bar.
    pub const ALL: [ProjectCategory; 4] = [
        ProjectCategory::Ai,
        ProjectCategory::Web,
        ProjectCategory::Tools,
        ProjectCategory::Games,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Ai => "AI",
            ProjectCategory::Web => "Web",
            ProjectCategory::Tools => "Tools",
            ProjectCategory::Games => "Games",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown project category '{s}'"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMethods {
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

impl ContactMethods {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` URI with the spaces stripped out of the display number.
    pub fn tel(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    /// Rotated through by the hero typing effect, in this order.
    pub roles: Vec<String>,
    pub bio: String,
    pub contact: ContactMethods,
    pub resume_url: String,
}

impl Profile {
    /// The name shown after "Hi, I'm": everything but the leading family name.
    pub fn display_name(&self) -> &str {
        match self.name.split_once(' ') {
            Some((_, rest)) if !rest.trim().is_empty() => rest.trim(),
            _ => self.name.trim(),
        }
    }

    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub id: String,
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub description: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: u32,
    pub institution: String,
    pub degree: String,
    pub duration: String,
    /// CGPA on a 10-point scale.
    pub grade: f32,
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub category: ProjectCategory,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub id: u32,
    pub provider: String,
    pub certificates: Vec<String>,
    pub year: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub message: String,
    pub image: String,
}

/// Everything the site renders. Loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub testimonials: Vec<Testimonial>,
}
