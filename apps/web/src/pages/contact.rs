use crate::contact::models::{ContactForm, Notification};
use crate::content::models::Testimonial;
use crate::content::Portfolio;
use crate::pages::{esc, layout, page_header, NavPage};

/// Per-request view state for the contact page.
#[derive(Debug, Clone, Default)]
pub struct ContactPageState {
    pub form: ContactForm,
    pub notification: Option<Notification>,
}

fn contact_methods(content: &Portfolio) -> String {
    let contact = &content.profile.contact;
    let methods = [
        ("Email", contact.email.as_str(), contact.mailto(), false),
        ("Phone", contact.phone.as_str(), contact.tel(), false),
        ("GitHub", "View Profile", contact.github.clone(), true),
        ("LinkedIn", "Connect", contact.linkedin.clone(), true),
    ];

    let items: String = methods
        .iter()
        .map(|(label, value, href, external)| {
            let target = if *external {
                r#" target="_blank" rel="noopener noreferrer""#
            } else {
                ""
            };
            format!(
                r#"<li><a href="{href}"{target}><span class="label">{label}</span> <span class="value">{value}</span></a></li>"#,
                href = esc(href),
                target = target,
                label = label,
                value = esc(value),
            )
        })
        .collect();

    format!(
        r#"<section class="contact-methods"><h2>Get in Touch</h2><p>Choose your preferred way to connect</p><ul>{items}</ul></section>"#
    )
}

fn form(form: &ContactForm) -> String {
    format!(
        r#"<section class="contact-form">
<h2>Send me a message</h2>
<p>Fill out the form below and I'll get back to you within 24 hours.</p>
<form method="post" action="/contact" data-submit-guard>
<label for="name">Full Name *</label>
<input id="name" name="name" type="text" required placeholder="Your full name" value="{name}">
<label for="email">Email Address *</label>
<input id="email" name="email" type="email" required placeholder="your.email@example.com" value="{email}">
<label for="phone">Phone Number (Optional)</label>
<input id="phone" name="phone" type="tel" placeholder="+1 (555) 123-4567" value="{phone}">
<label for="message">Message *</label>
<textarea id="message" name="message" required rows="6" placeholder="Tell me about your project, opportunity, or just say hello...">{message}</textarea>
<button type="submit" data-busy-label="Sending...">Send Message</button>
</form>
</section>"#,
        name = esc(&form.name),
        email = esc(&form.email),
        phone = esc(&form.phone),
        message = esc(&form.message),
    )
}

fn testimonial(t: &Testimonial) -> String {
    format!(
        r#"<blockquote class="testimonial"><img src="{image}" alt="{name}" loading="lazy"><p>{message}</p><footer>{name}, {company}</footer></blockquote>"#,
        image = esc(&t.image),
        name = esc(&t.name),
        message = esc(&t.message),
        company = esc(&t.company),
    )
}

pub fn render(content: &Portfolio, state: &ContactPageState, year: i32) -> String {
    let testimonials: String = content.testimonials.iter().map(testimonial).collect();

    let body = format!(
        r#"{header}
<div class="contact-layout">
{form}
<aside>
{methods}
<section class="availability"><h3>Available for Work</h3><p>Currently accepting new projects and opportunities</p><span class="badge">Open to opportunities</span></section>
</aside>
</div>
<section class="testimonials"><h2>What People Say</h2>{testimonials}</section>"#,
        header = page_header(
            "Let's Connect",
            "Ready to collaborate? Let's discuss your next project or opportunities.",
        ),
        form = form(&state.form),
        methods = contact_methods(content),
        testimonials = testimonials,
    );

    layout(
        content,
        Some(NavPage::Contact),
        "Contact",
        &body,
        state.notification.as_ref(),
        year,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::test_support::portfolio;

    #[test]
    fn test_empty_form_has_required_fields() {
        let html = render(&portfolio(), &ContactPageState::default(), 2025);
        assert_eq!(html.matches(" required ").count(), 3);
        assert!(html.contains(r#"value="""#));
        assert!(html.contains(r#"data-busy-label="Sending...""#));
        assert!(!html.contains("toast-"));
    }

    #[test]
    fn test_failed_submission_keeps_input_and_shows_toast() {
        let state = ContactPageState {
            form: ContactForm {
                name: "Jane <Doe>".to_string(),
                email: "jane@example.com".to_string(),
                phone: String::new(),
                message: "Hello & bye".to_string(),
            },
            notification: Some(Notification::failed("Please try again")),
        };
        let html = render(&portfolio(), &state, 2025);
        assert!(html.contains(r#"value="Jane &lt;Doe&gt;""#));
        assert!(html.contains(">Hello &amp; bye</textarea>"));
        assert!(html.contains("toast-destructive"));
        assert!(html.contains("Please try again"));
    }

    #[test]
    fn test_contact_methods_build_uris() {
        let html = render(&portfolio(), &ContactPageState::default(), 2025);
        assert!(html.contains(r#"href="mailto:ranjithkumar93250@gmail.com""#));
        assert!(html.contains(r#"href="tel:+917075127970""#));
        assert!(html.contains(r#"href="https://github.com/ranjith93250" target="_blank""#));
    }

    #[test]
    fn test_renders_testimonials() {
        let html = render(&portfolio(), &ContactPageState::default(), 2025);
        assert_eq!(html.matches(r#"<blockquote class="testimonial">"#).count(), 2);
    }
}
