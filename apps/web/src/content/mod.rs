// Static content store: the biographical record every page renders from.
// Deserialized once from the embedded document; shared read-only via Arc.

pub mod filter;
pub mod handlers;
pub mod models;

use anyhow::{ensure, Context, Result};
use tracing::info;

pub use models::{Portfolio, Project, ProjectCategory};

const PORTFOLIO_JSON: &str = include_str!("portfolio.json");

/// Number of skill groups the about page lays out.
pub const SKILL_CATEGORY_COUNT: usize = 5;

/// Parses and checks the embedded portfolio document.
pub fn load() -> Result<Portfolio> {
    let portfolio = parse(PORTFOLIO_JSON)?;
    info!(
        "Content loaded: {} projects, {} experience entries, {} roles",
        portfolio.projects.len(),
        portfolio.experience.len(),
        portfolio.profile.roles.len()
    );
    Ok(portfolio)
}

fn parse(raw: &str) -> Result<Portfolio> {
    let portfolio: Portfolio =
        serde_json::from_str(raw).context("Portfolio content is not valid JSON")?;

    ensure!(
        !portfolio.profile.roles.is_empty(),
        "Profile must list at least one role"
    );
    ensure!(
        portfolio.skills.len() == SKILL_CATEGORY_COUNT,
        "Expected {SKILL_CATEGORY_COUNT} skill categories, found {}",
        portfolio.skills.len()
    );

    Ok(portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let portfolio = load().unwrap();
        assert_eq!(portfolio.profile.name, "Digutla Ranjith Kumar");
        assert_eq!(portfolio.profile.roles.len(), 5);
        assert_eq!(portfolio.skills.len(), SKILL_CATEGORY_COUNT);
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.testimonials.len(), 2);
    }

    #[test]
    fn test_optional_project_links() {
        let portfolio = load().unwrap();
        let spam = portfolio
            .projects
            .iter()
            .find(|p| p.title == "YouTube Spam Detector")
            .unwrap();
        assert!(spam.github_url.is_some());
        assert!(spam.live_url.is_none());
    }

    #[test]
    fn test_category_parsed_from_display_name() {
        let portfolio = load().unwrap();
        assert_eq!(portfolio.projects[0].category, ProjectCategory::Ai);
        assert_eq!(portfolio.projects[3].category, ProjectCategory::Web);
    }

    #[test]
    fn test_rejects_empty_roles() {
        let mut value: serde_json::Value = serde_json::from_str(PORTFOLIO_JSON).unwrap();
        value["profile"]["roles"] = serde_json::json!([]);
        let err = parse(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("at least one role"));
    }

    #[test]
    fn test_rejects_missing_skill_category() {
        let mut value: serde_json::Value = serde_json::from_str(PORTFOLIO_JSON).unwrap();
        value["skills"].as_array_mut().unwrap().pop();
        assert!(parse(&value.to_string()).is_err());
    }

    #[test]
    fn test_display_name_and_initials() {
        let portfolio = load().unwrap();
        assert_eq!(portfolio.profile.display_name(), "Ranjith Kumar");
        assert_eq!(portfolio.profile.initials(), "RK");
    }

    #[test]
    fn test_contact_uris() {
        let portfolio = load().unwrap();
        let contact = &portfolio.profile.contact;
        assert_eq!(contact.mailto(), "mailto:ranjithkumar93250@gmail.com");
        assert_eq!(contact.tel(), "tel:+917075127970");
    }
}
