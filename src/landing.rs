//! Landing page generation.
//!
//! Renders one complete, self-contained HTML document: fixed navigation
//! header, hero with call-to-action links, a three-card feature grid, a demo
//! preview section, and a footer. All styling is inline — config-generated
//! CSS custom properties followed by a static stylesheet embedded at compile
//! time — so the page can be dropped on any host as a single file.
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//!
//! Dynamic substitution points are exactly: project name, description, demo
//! URL, repository URL, and the palette. Everything else is static copy.

use crate::config::{self, ShowcaseConfig};
use crate::form::FormState;
use maud::{DOCTYPE, Markup, html};

const CSS_STATIC: &str = include_str!("../static/landing.css");

/// Hero subheading when the form left the description empty.
const FALLBACK_TAGLINE: &str = "A modern web application built with cutting-edge technologies to deliver exceptional user experiences.";

/// Feature cards in the highlights grid: glyph, title, blurb.
const FEATURES: [(&str, &str, &str); 3] = [
    (
        "⚡",
        "Lightning Fast",
        "Optimized performance with modern build tools and best practices for blazing fast load times.",
    ),
    (
        "📱",
        "Responsive Design",
        "Beautiful, mobile-first design that works perfectly on all devices and screen sizes.",
    ),
    (
        "🛡️",
        "Secure & Reliable",
        "Built with security best practices and robust error handling for reliable operation.",
    ),
];

/// Anchor target for a link the form left empty.
fn link_or_placeholder(url: &str) -> &str {
    if url.is_empty() { "#" } else { url }
}

/// Render the landing page document.
pub fn build_landing(form: &FormState, config: &ShowcaseConfig) -> String {
    let name = form.project_name();
    let tagline = form.description_or(FALLBACK_TAGLINE);
    let demo_link = link_or_placeholder(&form.demo_url);
    let repo_link = link_or_placeholder(&form.repo_url);
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (name) " - Modern Web Application" }
                style { (css) }
            }
            body {
                (page_header(&name))
                main {
                    (hero(&name, tagline, demo_link, repo_link))
                    (features_grid())
                    (demo_preview(&name, demo_link))
                }
                (page_footer(&name))
            }
        }
    };
    markup.into_string()
}

/// Fixed navigation header with the project name as logo.
fn page_header(name: &str) -> Markup {
    html! {
        header {
            nav.container {
                div.logo { (name) }
                ul.nav-links {
                    li { a href="#home" { "Home" } }
                    li { a href="#features" { "Features" } }
                    li { a href="#demo" { "Demo" } }
                    li { a href="#contact" { "Contact" } }
                }
            }
        }
    }
}

fn hero(name: &str, tagline: &str, demo_link: &str, repo_link: &str) -> Markup {
    html! {
        section.hero id="home" {
            div.container {
                h1 { (name) }
                p { (tagline) }
                div.cta-buttons {
                    a.btn.btn-primary href=(demo_link) { "View Live Demo" }
                    a.btn.btn-secondary href=(repo_link) { "View Source Code" }
                }
            }
        }
    }
}

fn features_grid() -> Markup {
    html! {
        section.features id="features" {
            div.container {
                h2 { "Key Features" }
                div.features-grid {
                    @for (glyph, title, blurb) in FEATURES {
                        div.feature-card {
                            div.feature-icon { (glyph) }
                            h3 { (title) }
                            p { (blurb) }
                        }
                    }
                }
            }
        }
    }
}

fn demo_preview(name: &str, demo_link: &str) -> Markup {
    html! {
        section.demo-section id="demo" {
            div.container {
                h2 { "See It In Action" }
                p { "Experience the power and elegance of " (name) }
                div.demo-preview {
                    div.demo-placeholder {
                        div.demo-glyph { "🚀" }
                        h3 { "Demo Preview" }
                        p { "Your application demo would appear here" }
                    }
                }
                div.cta-buttons {
                    a.btn.btn-primary href=(demo_link) { "Try It Now" }
                }
            }
        }
    }
}

fn page_footer(name: &str) -> Markup {
    html! {
        footer id="contact" {
            div.container {
                p { "© 2024 " (name) ". Built with ❤️ using modern web technologies." }
            }
        }
    }
}
