use crate::content::Portfolio;
use crate::pages::{esc, external_link, layout, NavPage};

/// Where `site.js` subscribes for the typewriter frames.
pub const ROLE_STREAM_PATH: &str = "/api/v1/hero/roles";

const OVERVIEW: [(NavPage, &str, &str, &str); 4] = [
    (
        NavPage::About,
        "About Me",
        "Learn about my background, skills, and passion for technology",
        "Learn More",
    ),
    (
        NavPage::Experience,
        "Experience",
        "Explore my professional journey and educational background",
        "View Experience",
    ),
    (
        NavPage::Projects,
        "Projects",
        "Discover my featured projects and technical implementations",
        "View Projects",
    ),
    (
        NavPage::Contact,
        "Contact",
        "Get in touch for opportunities and collaborations",
        "Contact Me",
    ),
];

fn hero(content: &Portfolio) -> String {
    let profile = &content.profile;
    let focus: String = ["AI", "Web", "Data"]
        .iter()
        .map(|tag| format!(r#"<span class="badge">{tag}</span>"#))
        .collect();

    format!(
        r#"<section id="home" class="hero">
<div class="hero-text">
<h1><span class="greeting">Hi, I'm</span> <span class="hero-name">{display_name}</span></h1>
<p class="role-line"><span id="role-text" data-role-stream="{stream}"></span><span class="cursor" aria-hidden="true">|</span></p>
<noscript><p class="role-line">{title}</p></noscript>
<p class="subtitle">{subtitle}</p>
<div class="cta">{resume} <a class="button" href="/contact">Get In Touch</a></div>
<div class="social">{github} {linkedin} <a href="{mailto}">Email</a></div>
</div>
<aside class="hero-card">
<span class="initials">{initials}</span>
<p>{title}</p>
<div class="focus">{focus}</div>
</aside>
</section>"#,
        display_name = esc(profile.display_name()),
        stream = ROLE_STREAM_PATH,
        title = esc(&profile.title),
        subtitle = esc(&profile.subtitle),
        resume = external_link(&profile.resume_url, "Download Resume"),
        github = external_link(&profile.contact.github, "GitHub"),
        linkedin = external_link(&profile.contact.linkedin, "LinkedIn"),
        mailto = esc(&profile.contact.mailto()),
        initials = esc(&profile.initials()),
        focus = focus,
    )
}

fn overview() -> String {
    let cards: String = OVERVIEW
        .iter()
        .map(|(page, heading, blurb, cta)| {
            format!(
                r#"<article class="card"><h3>{heading}</h3><p>{blurb}</p><a href="{path}">{cta}</a></article>"#,
                path = page.path(),
            )
        })
        .collect();

    format!(r#"<section class="overview"><h2>Quick Overview</h2><div class="grid">{cards}</div></section>"#)
}

pub fn render(content: &Portfolio, year: i32) -> String {
    let body = format!("{}\n{}", hero(content), overview());
    layout(content, Some(NavPage::Home), "Home", &body, None, year)
}
