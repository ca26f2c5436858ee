//! Creative layout: gradient hero, serif type, hover-reveal project cards.

use super::common::{
    cover_layer, footer_text, html_escape, multiline, parse_experience, parse_skills,
    profile_img, project_image_src, root_attrs, safe_url, social_links, SocialStyle,
};
use super::Fragment;
use crate::models::{ColorScheme, PortfolioData};

pub fn render(data: &PortfolioData, scheme: ColorScheme) -> Fragment {
    let root_class = scheme.pick("bg-white text-gray-900", "bg-gray-900 text-white");
    let cover = cover_layer(
        data,
        "absolute inset-0 bg-black opacity-50",
        r#"<div class="absolute inset-0 bg-gradient-to-r from-purple-400 via-pink-500 to-red-500"></div>"#,
    );
    let chip_class = scheme.pick(
        "border-pink-500 text-pink-600",
        "border-pink-400 text-pink-300",
    );
    let card_class = scheme.pick("bg-gray-50", "bg-gray-800");

    let skills: String = parse_skills(&data.skills)
        .into_iter()
        .map(|skill| {
            format!(
                r#"<span class="skill border-2 {} rounded-full px-5 py-2 text-lg">{}</span>"#,
                chip_class,
                html_escape(skill)
            )
        })
        .collect();

    let experience: String = parse_experience(&data.experience)
        .into_iter()
        .map(|entry| {
            let subtitle = if entry.subtitle.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<p class="text-lg opacity-75">{}</p>"#,
                    html_escape(entry.subtitle)
                )
            };
            format!(
                r#"<div class="experience-entry {card} rounded-lg p-6 shadow-lg"><h4 class="text-2xl font-bold mb-2">{title}</h4>{subtitle}</div>"#,
                card = card_class,
                title = html_escape(entry.title),
                subtitle = subtitle,
            )
        })
        .collect();

    let projects: String = data
        .projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="group relative overflow-hidden rounded-lg shadow-lg">
                    <img src="{image}" alt="{name}" class="w-full h-64 object-cover transition-transform duration-300 group-hover:scale-110">
                    <div class="absolute inset-0 bg-black bg-opacity-75 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                        <div class="text-center px-4">
                            <h4 class="text-2xl font-bold text-white mb-2">{name}</h4>
                            <p class="text-gray-300 mb-4">{description}</p>
                            <a href="{link}" class="inline-block bg-pink-500 text-white py-2 px-4 rounded hover:bg-pink-600 transition-colors" target="_blank" rel="noopener noreferrer">View Project</a>
                        </div>
                    </div>
                </div>"#,
                image = project_image_src(project),
                name = html_escape(&project.name),
                description = html_escape(&project.description),
                link = safe_url(&project.link),
            )
        })
        .collect();

    let education = if data.education.trim().is_empty() {
        String::new()
    } else {
        format!(
            r#"<section id="education" class="mb-24 text-center">
                <h3 class="text-4xl font-bold mb-8">Education</h3>
                <p class="text-xl leading-relaxed">{}</p>
            </section>"#,
            multiline(&data.education)
        )
    };

    let socials = social_links(
        data,
        &SocialStyle {
            container: "flex justify-center space-x-6",
            link: "text-3xl hover:text-pink-500 transition-colors",
        },
    );

    let markup = format!(
        r##"<div {attrs} class="font-serif {root_class}">
    <header class="relative py-24 text-center text-white">
        {cover}
        <div class="relative z-10">
            {profile}
            <h1 class="text-6xl font-bold mb-4">{name}</h1>
            <h2 class="text-3xl">{title}</h2>
        </div>
    </header>
    <nav class="bg-gray-800 text-white py-4">
        <ul class="flex justify-center space-x-8">
            <li><a href="#about" class="hover:text-pink-500 transition-colors">About</a></li>
            <li><a href="#skills" class="hover:text-pink-500 transition-colors">Skills</a></li>
            <li><a href="#projects" class="hover:text-pink-500 transition-colors">Projects</a></li>
            <li><a href="#contact" class="hover:text-pink-500 transition-colors">Contact</a></li>
        </ul>
    </nav>
    <main class="max-w-5xl mx-auto px-4 py-16">
        <section id="about" class="mb-24">
            <h3 class="text-4xl font-bold mb-8 text-center">About Me</h3>
            <p class="text-xl leading-relaxed">{bio}</p>
        </section>
        <section id="skills" class="mb-24 text-center">
            <h3 class="text-4xl font-bold mb-8">What I Do</h3>
            <div class="flex flex-wrap justify-center gap-4">{skills}</div>
        </section>
        <section id="experience" class="mb-24">
            <h3 class="text-4xl font-bold mb-8 text-center">Journey</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{experience}</div>
        </section>
        {education}
        <section id="projects" class="mb-24">
            <h3 class="text-4xl font-bold mb-12 text-center">My Projects</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-12">{projects}</div>
        </section>
        <section id="contact" class="text-center">
            <h3 class="text-4xl font-bold mb-8">Get in Touch</h3>
            <p class="text-xl mb-4">Email: {email}</p>
            <p class="text-xl mb-8">Phone: {phone}</p>
            {socials}
        </section>
    </main>
    <footer class="text-center py-8 text-sm opacity-75">{footer}</footer>
</div>"##,
        attrs = root_attrs(data, "creative", scheme),
        root_class = root_class,
        cover = cover,
        profile = profile_img(
            data,
            "w-32 h-32 rounded-full mx-auto mb-4 border-4 border-white shadow-lg object-cover"
        ),
        name = html_escape(&data.name),
        title = html_escape(&data.title),
        bio = multiline(&data.bio),
        skills = skills,
        experience = experience,
        education = education,
        projects = projects,
        email = html_escape(&data.email),
        phone = html_escape(&data.phone),
        socials = socials,
        footer = footer_text(data),
    );

    Fragment::new(markup)
}
