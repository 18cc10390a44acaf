use crate::content::models::{Certification, EducationEntry, ExperienceEntry};
use crate::content::Portfolio;
use crate::pages::{badges, esc, layout, page_header, NavPage};

fn experience_card(entry: &ExperienceEntry) -> String {
    let achievements: String = entry
        .achievements
        .iter()
        .map(|a| format!("<li>{}</li>", esc(a)))
        .collect();

    format!(
        r#"<article class="card experience" id="experience-{id}">
<h3>{position}</h3>
<p class="meta"><span class="company">{company}</span> · <span>{duration}</span> · <span>{location}</span></p>
<p>{description}</p>
<ul class="achievements">{achievements}</ul>
</article>"#,
        id = entry.id,
        position = esc(&entry.position),
        company = esc(&entry.company),
        duration = esc(&entry.duration),
        location = esc(&entry.location),
        description = esc(&entry.description),
        achievements = achievements,
    )
}

fn education_card(entry: &EducationEntry) -> String {
    format!(
        r#"<article class="card education" id="education-{id}">
<h3>{degree}</h3>
<p class="meta"><span class="institution">{institution}</span> · <span>{duration}</span></p>
<p class="grade">CGPA: <span>{grade:.2}</span></p>
<div class="badges">{subjects}</div>
</article>"#,
        id = entry.id,
        degree = esc(&entry.degree),
        institution = esc(&entry.institution),
        duration = esc(&entry.duration),
        grade = entry.grade,
        subjects = badges(&entry.subjects),
    )
}

fn certification_card(cert: &Certification) -> String {
    format!(
        r#"<article class="card certification"><h3>{provider}</h3><p class="year">{year}</p><div class="badges">{certificates}</div></article>"#,
        provider = esc(&cert.provider),
        year = cert.year,
        certificates = badges(&cert.certificates),
    )
}

pub fn render(content: &Portfolio, year: i32) -> String {
    let experience: String = content.experience.iter().map(experience_card).collect();
    let education: String = content.education.iter().map(education_card).collect();
    let certifications: String = content.certifications.iter().map(certification_card).collect();

    let body = format!(
        r#"{header}
<section class="experience-list"><h2>Professional Experience</h2>{experience}</section>
<section class="education-list"><h2>Education</h2>{education}</section>
<section class="certifications"><h2>Professional Certifications</h2><p>Continuous learning and skill development through recognized certifications</p><div class="grid">{certifications}</div></section>"#,
        header = page_header(
            "Experience & Education",
            "My professional journey, educational background, and continuous learning path in technology",
        ),
        experience = experience,
        education = education,
        certifications = certifications,
    );

    layout(content, Some(NavPage::Experience), "Experience", &body, None, year)
}
