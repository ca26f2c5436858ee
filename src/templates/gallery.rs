//! Landing page listing the available layouts.

use crate::render::TemplateVariant;

use super::components::base_html;

pub fn render_gallery() -> String {
    let cards: String = TemplateVariant::ALL
        .iter()
        .map(|variant| {
            format!(
                r#"<a href="/customize/{id}" class="template-card">
                    <div class="template-swatch {id}"></div>
                    <div class="body">
                        <h2>{name}</h2>
                        <p>{description}</p>
                    </div>
                </a>"#,
                id = variant.id(),
                name = variant.display_name(),
                description = variant.description(),
            )
        })
        .collect();

    let content = format!(
        r#"<h1>Choose Your Portfolio Template</h1>
        <div class="gallery">{}</div>"#,
        cards
    );

    base_html("Portfolio Builder", &content, None)
}
