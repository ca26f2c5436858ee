//! Professional layout: banner header with inline nav, experience timeline.

use super::common::{
    footer_text, html_escape, image_src, multiline, parse_experience, parse_skills, profile_img,
    project_image_src, root_attrs, safe_url, social_links, SocialStyle,
};
use super::Fragment;
use crate::models::{ColorScheme, PortfolioData};

pub fn render(data: &PortfolioData, scheme: ColorScheme) -> Fragment {
    let root_class = scheme.pick("bg-white text-gray-900", "bg-gray-900 text-white");
    let muted = scheme.pick("text-gray-600", "text-gray-400");
    let tag_class = scheme.pick("bg-blue-50 text-blue-700", "bg-gray-800 text-blue-300");
    let footer_class = scheme.pick("bg-gray-100 text-gray-600", "bg-gray-800 text-gray-400");

    // No gradient fallback here: the banner's solid blue is the fallback.
    let cover = match image_src(data.cover_image.as_ref()) {
        Some(src) => format!(
            r#"<div class="absolute inset-0 bg-cover bg-center opacity-30" style="background-image: url('{}')"></div>"#,
            src
        ),
        None => String::new(),
    };

    let skills: String = parse_skills(&data.skills)
        .into_iter()
        .map(|skill| {
            format!(
                r#"<li class="skill {} rounded px-3 py-1 text-sm font-medium">{}</li>"#,
                tag_class,
                html_escape(skill)
            )
        })
        .collect();

    let experience: String = parse_experience(&data.experience)
        .into_iter()
        .map(|entry| {
            format!(
                r#"<div class="experience-entry border-l-4 border-blue-600 pl-4"><h4 class="text-xl font-semibold">{}</h4><p class="{}">{}</p></div>"#,
                html_escape(entry.title),
                muted,
                html_escape(entry.subtitle),
            )
        })
        .collect();

    let projects: String = data
        .projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="border rounded-lg overflow-hidden shadow-lg">
                    <img src="{image}" alt="{name}" class="w-full h-48 object-cover">
                    <div class="p-6">
                        <h4 class="text-xl font-semibold mb-2">{name}</h4>
                        <p class="{muted} mb-4">{description}</p>
                        <a href="{link}" class="text-blue-600 hover:underline" target="_blank" rel="noopener noreferrer">View Project</a>
                    </div>
                </div>"#,
                image = project_image_src(project),
                name = html_escape(&project.name),
                muted = muted,
                description = html_escape(&project.description),
                link = safe_url(&project.link),
            )
        })
        .collect();

    let education = if data.education.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<section id="education" class="mb-16">
                <h3 class="text-3xl font-bold mb-4">Education</h3>
                <p class="text-lg leading-relaxed">{}</p>
            </section>"#,
            multiline(&data.education)
        )
    };

    let email = if data.email.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<a href="mailto:{addr}" class="text-blue-600 hover:underline">{addr}</a>"#,
            addr = html_escape(data.email.trim())
        )
    };

    let socials = social_links(
        data,
        &SocialStyle {
            container: "flex space-x-4 text-2xl",
            link: "text-blue-600 hover:text-blue-800",
        },
    );

    let markup = format!(
        r##"<div {attrs} class="font-sans {root_class}">
    <header class="relative bg-blue-600 text-white">
        {cover}
        <div class="relative z-10 max-w-6xl mx-auto px-4 py-8 flex flex-col md:flex-row items-center justify-between">
            <div class="flex items-center mb-4 md:mb-0">
                {profile}
                <div>
                    <h1 class="text-4xl font-bold">{name}</h1>
                    <h2 class="text-xl">{title}</h2>
                </div>
            </div>
            <nav class="mt-4 md:mt-0">
                <ul class="flex space-x-6">
                    <li><a href="#about" class="hover:underline">About</a></li>
                    <li><a href="#experience" class="hover:underline">Experience</a></li>
                    <li><a href="#projects" class="hover:underline">Projects</a></li>
                    <li><a href="#contact" class="hover:underline">Contact</a></li>
                </ul>
            </nav>
        </div>
    </header>
    <main class="max-w-6xl mx-auto px-4 py-16">
        <section id="about" class="mb-16">
            <h3 class="text-3xl font-bold mb-4">About Me</h3>
            <p class="text-lg leading-relaxed">{bio}</p>
        </section>
        <section id="skills" class="mb-16">
            <h3 class="text-3xl font-bold mb-4">Core Skills</h3>
            <ul class="flex flex-wrap gap-2">{skills}</ul>
        </section>
        <section id="experience" class="mb-16">
            <h3 class="text-3xl font-bold mb-4">Experience</h3>
            <div class="space-y-8">{experience}</div>
        </section>
        {education}
        <section id="projects" class="mb-16">
            <h3 class="text-3xl font-bold mb-8">Projects</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{projects}</div>
        </section>
        <section id="contact">
            <h3 class="text-3xl font-bold mb-4">Contact</h3>
            <p class="mb-2">Email: {email}</p>
            <p class="mb-4">Phone: {phone}</p>
            {socials}
        </section>
    </main>
    <footer class="py-8 text-center {footer_class}">{footer}</footer>
</div>"##,
        attrs = root_attrs(data, "professional", scheme),
        root_class = root_class,
        cover = cover,
        profile = profile_img(
            data,
            "w-16 h-16 rounded-full mr-4 border-2 border-white shadow-lg object-cover"
        ),
        name = html_escape(&data.name),
        title = html_escape(&data.title),
        bio = multiline(&data.bio),
        skills = skills,
        experience = experience,
        education = education,
        projects = projects,
        email = email,
        phone = html_escape(&data.phone),
        socials = socials,
        footer_class = footer_class,
        footer = footer_text(data),
    );

    Fragment::new(markup)
}
