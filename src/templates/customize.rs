//! Customization form with a live preview frame.

use crate::models::{ColorScheme, Font, ImageSlot, PortfolioData};
use crate::render::common::html_escape;
use crate::render::Selection;

use super::components::base_html;

fn text_input(name: &str, label: &str, value: &str, kind: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="form-group">
                <label for="{name}">{label}</label>
                <input type="{kind}" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}">
            </div>"#,
        name = name,
        label = label,
        kind = kind,
        value = html_escape(value),
        placeholder = placeholder,
    )
}

fn text_area(name: &str, label: &str, value: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="form-group">
                <label for="{name}">{label}</label>
                <textarea id="{name}" name="{name}" rows="4" placeholder="{placeholder}">{value}</textarea>
            </div>"#,
        name = name,
        label = label,
        value = html_escape(value),
        placeholder = placeholder,
    )
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        value,
        if selected { " selected" } else { "" },
        label
    )
}

fn projects_card(data: &PortfolioData, base: &str) -> String {
    let items: String = data
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let link = if project.link.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="meta">{}</div>"#, html_escape(&project.link))
            };
            format!(
                r#"<li class="project-item">
                    <div><strong>{name}</strong><div>{description}</div>{link}</div>
                    <form method="post" action="{base}/projects/{i}/delete">
                        <button type="submit" class="btn secondary small">Remove</button>
                    </form>
                </li>"#,
                name = html_escape(&project.name),
                description = html_escape(&project.description),
                link = link,
                base = base,
                i = i,
            )
        })
        .collect();

    format!(
        r#"<div class="card">
            <h2>Projects</h2>
            <ul class="project-list">{items}</ul>
            <form method="post" action="{base}/projects">
                <div class="form-group"><input type="text" name="name" placeholder="Project Name"></div>
                <div class="form-group"><textarea name="description" placeholder="Project Description"></textarea></div>
                <div class="form-group"><input type="url" name="link" placeholder="Project Link"></div>
                <div class="form-group"><input type="url" name="image" placeholder="Project Image URL"></div>
                <button type="submit" class="btn secondary">Add Project</button>
                <small>Name and description are required.</small>
            </form>
        </div>"#,
        items = items,
        base = base,
    )
}

fn image_slot(data: &PortfolioData, slot: ImageSlot, label: &str, base: &str) -> String {
    let current = match data.image(slot) {
        Some(asset) => format!(
            r#"<img src="{src}" alt="{label}">
                <span>{file}</span>
                <button type="submit" class="btn secondary small" formaction="{base}/images/{slot}/clear">Remove</button>"#,
            src = html_escape(&asset.data_uri()),
            label = label,
            file = html_escape(&asset.file_name),
            base = base,
            slot = slot.as_str(),
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="form-group">
                <label for="{field}">{label}</label>
                <div class="image-slot">
                    <input type="file" id="{field}" name="{field}" accept="image/*">
                    {current}
                </div>
            </div>"#,
        field = slot.field_name(),
        label = label,
        current = current,
    )
}

pub fn render_customize(selection: &Selection, data: &PortfolioData, max_upload_bytes: usize) -> String {
    let id = urlencoding::encode(selection.id()).into_owned();
    let base = format!("/customize/{}", id);

    let notice = match selection {
        Selection::Template(_) => String::new(),
        Selection::Invalid(raw) => format!(
            r#"<div class="message error">Unknown template "{}". <a href="/">Pick one of the available templates.</a></div>"#,
            html_escape(raw)
        ),
    };

    let schemes: String = [ColorScheme::Light, ColorScheme::Dark]
        .iter()
        .map(|s| {
            let label = match s {
                ColorScheme::Light => "Light",
                ColorScheme::Dark => "Dark",
            };
            option(s.as_str(), label, *s == data.color_scheme)
        })
        .collect();

    let fonts: String = Font::ALL
        .iter()
        .map(|f| option(f.as_str(), f.label(), *f == data.font))
        .collect();

    let links = &data.social_links;

    let content = format!(
        r##"<h1>Customize Your Portfolio</h1>
        {notice}
        <div class="customize-grid">
            <div>
                <form id="profile-form" method="post" action="{base}">
                    <div class="card">
                        <h2>Personal Information</h2>
                        <div class="form-row">
                            {name}
                            {title}
                        </div>
                        {bio}
                        <div class="form-row">
                            {email}
                            {phone}
                        </div>
                    </div>

                    <div class="card">
                        <h2>Skills &amp; Experience</h2>
                        {skills}
                        {experience}
                        {education}
                    </div>

                    <div class="card">
                        <h2>Social Links</h2>
                        {linkedin}
                        {github}
                        {twitter}
                    </div>

                    <div class="card">
                        <h2>Appearance</h2>
                        <div class="form-row">
                            <div class="form-group">
                                <label for="color_scheme">Color Scheme</label>
                                <select id="color_scheme" name="color_scheme">{schemes}</select>
                            </div>
                            <div class="form-group">
                                <label for="font">Font</label>
                                <select id="font" name="font">{fonts}</select>
                            </div>
                        </div>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn secondary">Save</button>
                        <button type="submit" name="next" value="preview" class="btn">Generate Portfolio</button>
                        <span class="save-status" id="save-status"></span>
                    </div>
                </form>

                {projects}

                <form class="card" method="post" action="{base}/images" enctype="multipart/form-data">
                    <h2>Images</h2>
                    {profile_image}
                    {cover_image}
                    <small>PNG, JPG, GIF up to {max_mb}MB</small>
                    <div class="form-actions">
                        <button type="submit" class="btn secondary">Upload</button>
                    </div>
                </form>
            </div>

            <div class="preview-panel">
                <h2>Live Preview</h2>
                <iframe id="preview-frame" class="preview-frame" src="/render/{id}" title="Live preview"></iframe>
            </div>
        </div>

        <script>
            const form = document.getElementById('profile-form');
            const statusEl = document.getElementById('save-status');
            const frame = document.getElementById('preview-frame');
            let saveTimer = null;

            async function autoSave() {{
                statusEl.textContent = 'Saving...';
                statusEl.className = 'save-status saving';
                try {{
                    const response = await fetch(form.action, {{
                        method: 'POST',
                        headers: {{ 'Content-Type': 'application/x-www-form-urlencoded' }},
                        body: new URLSearchParams(new FormData(form))
                    }});
                    if (!response.ok) throw new Error('HTTP ' + response.status);
                    statusEl.textContent = 'Saved';
                    statusEl.className = 'save-status saved';
                    frame.src = '/render/{id}?t=' + Date.now();
                }} catch (e) {{
                    statusEl.textContent = 'Save failed';
                    statusEl.className = 'save-status error';
                }}
            }}

            form.addEventListener('input', () => {{
                clearTimeout(saveTimer);
                saveTimer = setTimeout(autoSave, 600);
            }});
        </script>"##,
        notice = notice,
        base = base,
        id = id,
        name = text_input("name", "Name", &data.name, "text", "Your full name"),
        title = text_input("title", "Title", &data.title, "text", "Your professional title"),
        bio = text_area("bio", "Bio", &data.bio, "A brief description about yourself"),
        email = text_input("email", "Email", &data.email, "email", "your.email@example.com"),
        phone = text_input("phone", "Phone", &data.phone, "tel", "Your phone number"),
        skills = text_input(
            "skills",
            "Skills (comma-separated)",
            &data.skills,
            "text",
            "e.g., JavaScript, React, Node.js"
        ),
        experience = text_area(
            "experience",
            "Experience",
            &data.experience,
            "One role per line, e.g. Engineer - Built the billing system"
        ),
        education = text_area("education", "Education", &data.education, "Your educational background"),
        linkedin = text_input(
            "linkedin",
            "LinkedIn",
            links.linkedin.as_deref().unwrap_or(""),
            "url",
            "Your LinkedIn profile URL"
        ),
        github = text_input(
            "github",
            "GitHub",
            links.github.as_deref().unwrap_or(""),
            "url",
            "Your GitHub profile URL"
        ),
        twitter = text_input(
            "twitter",
            "Twitter",
            links.twitter.as_deref().unwrap_or(""),
            "url",
            "Your Twitter profile URL"
        ),
        schemes = schemes,
        fonts = fonts,
        projects = projects_card(data, &base),
        profile_image = image_slot(data, ImageSlot::Profile, "Profile Image", &base),
        cover_image = image_slot(data, ImageSlot::Cover, "Cover Image (Optional)", &base),
        max_mb = max_upload_bytes / (1024 * 1024),
    );

    base_html("Customize Portfolio", &content, Some(selection.id()))
}
