use crate::content::filter::{category_counts, filter_projects, CategoryCount, CategoryFilter};
use crate::content::{Portfolio, Project};
use crate::pages::{badges, esc, external_link, layout, page_header, NavPage};

pub const EMPTY_TITLE: &str = "No projects found";
pub const EMPTY_HINT: &str = "Try selecting a different category filter.";

fn filter_bar(counts: &[CategoryCount]) -> String {
    let buttons: String = counts
        .iter()
        .map(|c| {
            let current = if c.active { r#" aria-current="true""# } else { "" };
            format!(
                r#"<a class="filter" href="/projects?category={name}"{current}>{name} <span class="badge">{count}</span></a>"#,
                name = c.name,
                current = current,
                count = c.count,
            )
        })
        .collect();

    format!(r#"<nav class="filters" aria-label="Project categories">{buttons}</nav>"#)
}

fn project_card(project: &Project) -> String {
    let mut links = String::new();
    if let Some(url) = &project.github_url {
        links.push_str(&external_link(url, "Code"));
    }
    if let Some(url) = &project.live_url {
        links.push_str(&external_link(url, "Live Demo"));
    }

    format!(
        r#"<article class="card project" id="project-{id}">
<img src="{image}" alt="{title}" loading="lazy">
<span class="badge category">{category}</span>
<h3>{title}</h3>
<p>{description}</p>
<div class="badges">{technologies}</div>
<div class="links">{links}</div>
</article>"#,
        id = project.id,
        image = esc(&project.image),
        title = esc(&project.title),
        category = project.category,
        description = esc(&project.description),
        technologies = badges(&project.technologies),
        links = links,
    )
}

fn empty_state() -> String {
    format!(r#"<div class="empty-state"><h3>{EMPTY_TITLE}</h3><p>{EMPTY_HINT}</p></div>"#)
}

pub fn render(content: &Portfolio, filter: CategoryFilter, year: i32) -> String {
    let counts = category_counts(&content.projects, filter);
    let visible = filter_projects(&content.projects, filter);

    let grid = if visible.is_empty() {
        empty_state()
    } else {
        let cards: String = visible.into_iter().map(project_card).collect();
        format!(r#"<div class="grid projects">{cards}</div>"#)
    };

    let body = format!(
        r#"{header}
{filters}
{grid}
<section class="cta"><h3>Have a project in mind?</h3><p>Let's collaborate and bring your ideas to life!</p><a class="button" href="/contact">Start a Project</a></section>"#,
        header = page_header(
            "Featured Projects",
            "Explore my latest work spanning AI, web development, and innovative tools",
        ),
        filters = filter_bar(&counts),
        grid = grid,
    );

    layout(content, Some(NavPage::Projects), "Projects", &body, None, year)
}
