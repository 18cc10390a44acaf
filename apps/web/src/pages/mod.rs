// Server-rendered pages. Each renderer is a pure function of the content store
// (plus per-request view state) to an HTML document; handlers supply the year.

pub mod about;
pub mod contact;
pub mod experience;
pub mod handlers;
pub mod home;
pub mod projects;

use chrono::{Datelike, Utc};

use crate::contact::models::{Notification, NotificationVariant};
use crate::content::Portfolio;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

impl NavPage {
    pub const ALL: [NavPage; 5] = [
        NavPage::Home,
        NavPage::About,
        NavPage::Experience,
        NavPage::Projects,
        NavPage::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            NavPage::Home => "/",
            NavPage::About => "/about",
            NavPage::Experience => "/experience",
            NavPage::Projects => "/projects",
            NavPage::Contact => "/contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::About => "About",
            NavPage::Experience => "Experience",
            NavPage::Projects => "Projects",
            NavPage::Contact => "Contact",
        }
    }
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Escapes text for element content and double-quoted attribute values.
pub fn esc(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<span class="badge">` per item.
pub(crate) fn badges(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="badge">{}</span>"#, esc(item)))
        .collect()
}

pub(crate) fn external_link(href: &str, label: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        esc(href),
        esc(label)
    )
}

pub(crate) fn page_header(title: &str, intro: &str) -> String {
    format!(
        r#"<section class="page-header"><h1>{}</h1><p>{}</p></section>"#,
        esc(title),
        esc(intro)
    )
}

fn nav(active: Option<NavPage>, content: &Portfolio) -> String {
    let links: String = NavPage::ALL
        .iter()
        .map(|page| {
            let current = if Some(*page) == active {
                r#" aria-current="page""#
            } else {
                ""
            };
            format!(
                r#"<li><a href="{}"{}>{}</a></li>"#,
                page.path(),
                current,
                page.label()
            )
        })
        .collect();

    format!(
        r#"<header class="navbar"><a class="brand" href="/">{}</a><nav><ul>{}</ul></nav></header>"#,
        esc(&content.profile.initials()),
        links
    )
}

fn footer(content: &Portfolio, year: i32) -> String {
    let profile = &content.profile;
    let quick_links: String = NavPage::ALL
        .iter()
        .map(|page| format!(r#"<li><a href="{}">{}</a></li>"#, page.path(), page.label()))
        .collect();

    format!(
        r#"<footer class="footer">
<section class="footer-brand"><h3>{name}</h3><p>Passionate about creating innovative solutions that make a difference. Let's build something amazing together.</p></section>
<section class="footer-links"><h4>Quick Links</h4><ul>{quick_links}</ul></section>
<section class="footer-social"><h4>Connect</h4><ul><li>{github}</li><li>{linkedin}</li><li><a href="{mailto}">Email</a></li></ul></section>
<p class="copyright">&copy; {year} {name}. All rights reserved.</p>
</footer>"#,
        name = esc(&profile.name),
        quick_links = quick_links,
        github = external_link(&profile.contact.github, "GitHub"),
        linkedin = external_link(&profile.contact.linkedin, "LinkedIn"),
        mailto = esc(&profile.contact.mailto()),
        year = year,
    )
}

/// Toast markup; `site.js` removes it after `data-duration` milliseconds.
pub fn toast(notification: &Notification) -> String {
    let variant = match notification.variant {
        NotificationVariant::Success => "success",
        NotificationVariant::Destructive => "destructive",
    };
    let role = match notification.variant {
        NotificationVariant::Success => "status",
        NotificationVariant::Destructive => "alert",
    };
    format!(
        r#"<div class="toast toast-{variant}" role="{role}" data-duration="{duration}"><strong class="toast-title">{title}</strong><p class="toast-description">{description}</p></div>"#,
        variant = variant,
        role = role,
        duration = notification.duration_ms,
        title = esc(&notification.title),
        description = esc(&notification.description),
    )
}

/// Wraps a page body in the shared document shell.
pub fn layout(
    content: &Portfolio,
    active: Option<NavPage>,
    title: &str,
    body: &str,
    notification: Option<&Notification>,
    year: i32,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {name}</title>
<meta name="description" content="{subtitle}">
<script src="/assets/site.js" defer></script>
</head>
<body>
{nav}
<main>
{body}
</main>
{footer}
<div id="toasts" aria-live="polite">{toast}</div>
</body>
</html>
"#,
        title = esc(title),
        name = esc(&content.profile.name),
        subtitle = esc(&content.profile.subtitle),
        nav = nav(active, content),
        body = body,
        footer = footer(content, year),
        toast = notification.map(toast).unwrap_or_default(),
    )
}

pub fn not_found(content: &Portfolio, path: &str, year: i32) -> String {
    let body = format!(
        r#"<section class="not-found"><h1>Page not found</h1><p>Nothing lives at <code>{}</code>.</p><a href="/">Back to home</a></section>"#,
        esc(path)
    );
    layout(content, None, "Not Found", &body, None, year)
}
