use crate::content::models::SkillCategory;
use crate::content::Portfolio;
use crate::pages::{badges, esc, layout, page_header, NavPage};

const WHAT_I_DO: [(&str, &str); 2] = [
    (
        "Full-Stack Development",
        "Building scalable web applications with modern frameworks and best practices.",
    ),
    (
        "AI & Machine Learning",
        "Developing intelligent systems and data-driven solutions for complex problems.",
    ),
];

fn skill_section(category: &SkillCategory) -> String {
    format!(
        r#"<section class="skill-category" id="skills-{id}"><h3>{label} Skills</h3><div class="badges">{skills}</div></section>"#,
        id = esc(&category.id),
        label = esc(&category.label),
        skills = badges(&category.skills),
    )
}

pub fn render(content: &Portfolio, year: i32) -> String {
    let profile = &content.profile;

    let featured_roles = badges(&profile.roles[..profile.roles.len().min(3)]);
    let what_i_do: String = WHAT_I_DO
        .iter()
        .map(|(heading, text)| {
            format!(
                "<article><h3>{}</h3><p>{}</p></article>",
                esc(heading),
                esc(text)
            )
        })
        .collect();
    let skills: String = content.skills.iter().map(skill_section).collect();

    let body = format!(
        r#"{header}
<section class="profile-card"><h2>{name}</h2><p>{title}</p><div class="badges">{roles}</div></section>
<section class="story"><h2>My Story</h2><p>{bio}</p><p>I'm passionate about leveraging cutting-edge technologies to solve real-world problems. My journey in technology has been driven by curiosity and a desire to create meaningful impact through innovative solutions.</p></section>
<section class="what-i-do"><h2>What I Do</h2>{what_i_do}</section>
<section class="skills"><h2>Technical Skills</h2>{skills}</section>"#,
        header = page_header(
            "About Me",
            "Get to know me better - my background, skills, and what drives my passion for technology",
        ),
        name = esc(&profile.name),
        title = esc(&profile.title),
        roles = featured_roles,
        bio = esc(&profile.bio),
        what_i_do = what_i_do,
        skills = skills,
    );

    layout(content, Some(NavPage::About), "About", &body, None, year)
}
