//! Minimalist layout: centered header, sticky section nav, skill badges.

use super::common::{
    cover_layer, footer_text, html_escape, multiline, parse_experience, parse_skills,
    profile_img, project_image_src, root_attrs, safe_url, skill_emoji, social_links,
    SocialStyle,
};
use super::Fragment;
use crate::models::{ColorScheme, PortfolioData};

const SCRIPT: &str = r##"<script>
document.querySelectorAll('a[href^="#"]').forEach(anchor => {
    anchor.addEventListener('click', function (e) {
        const target = document.querySelector(this.getAttribute('href'));
        if (target) {
            e.preventDefault();
            target.scrollIntoView({ behavior: 'smooth' });
        }
    });
});

const observer = new IntersectionObserver((entries) => {
    entries.forEach((entry) => {
        if (entry.isIntersecting) {
            entry.target.classList.add('fade-in-visible');
        }
    });
}, { threshold: 0.1 });

document.querySelectorAll('.fade-in').forEach((section) => {
    observer.observe(section);
});
</script>"##;

const STYLE: &str = r#"<style>
@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}
.fade-in {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.5s ease-out, transform 0.5s ease-out;
}
.fade-in-visible {
    opacity: 1;
    transform: translateY(0);
}
</style>"#;

pub fn render(data: &PortfolioData, scheme: ColorScheme) -> Fragment {
    let root_class = scheme.pick("bg-white text-gray-900", "bg-gray-900 text-white");
    let header_height = if data.cover_image.is_some() { "h-96" } else { "py-16" };
    let cover = cover_layer(
        data,
        &format!(
            "absolute inset-0 {} opacity-50",
            scheme.pick("bg-white", "bg-black")
        ),
        &format!(
            r#"<div class="absolute inset-0 bg-gradient-to-r {}"></div>"#,
            scheme.pick("from-blue-100 to-purple-100", "from-blue-900 to-purple-900")
        ),
    );
    let nav_class = scheme.pick("bg-white", "bg-gray-800");
    let badge_class = scheme.pick("bg-gray-200", "bg-gray-700");
    let footer_class = scheme.pick("bg-gray-100 text-gray-500", "bg-gray-800 text-gray-400");

    let skills: String = parse_skills(&data.skills)
        .into_iter()
        .map(|skill| {
            format!(
                r#"<div class="skill flex items-center {badge} rounded-full px-4 py-2 transition-transform hover:scale-105"><span class="text-xl mr-2" role="img" aria-label="{label}">{emoji}</span><span>{label}</span></div>"#,
                badge = badge_class,
                label = html_escape(skill),
                emoji = skill_emoji(skill),
            )
        })
        .collect();

    let experience: String = parse_experience(&data.experience)
        .into_iter()
        .map(|entry| {
            format!(
                r#"<li class="experience-entry mb-4"><p class="font-semibold">{}</p><p class="text-sm opacity-75">{}</p></li>"#,
                html_escape(entry.title),
                html_escape(entry.subtitle),
            )
        })
        .collect();

    let projects: String = data
        .projects
        .iter()
        .map(|project| {
            format!(
                r#"<div class="border rounded-lg overflow-hidden shadow-lg transition-transform hover:scale-105">
                    <img src="{image}" alt="{name}" class="w-full h-48 object-cover">
                    <div class="p-4">
                        <h4 class="text-xl font-semibold mb-2">{name}</h4>
                        <p class="mb-4 text-sm">{description}</p>
                        <a href="{link}" class="inline-block bg-blue-500 text-white px-4 py-2 rounded hover:bg-blue-600 transition-colors" target="_blank" rel="noopener noreferrer">View Project</a>
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
            r#"<section id="education" class="mb-16 fade-in">
                <h3 class="text-3xl font-semibold mb-4 border-b-2 border-blue-500 pb-2">Education</h3>
                <p class="text-lg leading-relaxed">{}</p>
            </section>"#,
            multiline(&data.education)
        )
    };

    let socials = social_links(
        data,
        &SocialStyle {
            container: "flex space-x-4 justify-start md:justify-end text-2xl",
            link: "text-blue-500 hover:text-blue-600 transition-colors",
        },
    );

    let markup = format!(
        r##"<div {attrs} class="font-sans min-h-screen {root_class}">
    <header class="relative {header_height} text-center">
        {cover}
        <div class="relative z-10 container mx-auto px-4 h-full flex flex-col justify-center items-center">
            {profile}
            <h1 class="text-5xl font-bold mb-2">{name}</h1>
            <h2 class="text-2xl">{title}</h2>
        </div>
    </header>
    <nav class="sticky top-0 z-10 {nav_class} shadow-md">
        <div class="max-w-4xl mx-auto px-4">
            <ul class="flex justify-center space-x-6 py-4">
                <li><a href="#about" class="hover:text-blue-500 transition-colors">About</a></li>
                <li><a href="#skills" class="hover:text-blue-500 transition-colors">Skills</a></li>
                <li><a href="#experience" class="hover:text-blue-500 transition-colors">Experience</a></li>
                <li><a href="#projects" class="hover:text-blue-500 transition-colors">Projects</a></li>
                <li><a href="#contact" class="hover:text-blue-500 transition-colors">Contact</a></li>
            </ul>
        </div>
    </nav>
    <main class="max-w-4xl mx-auto px-4 py-8">
        <section id="about" class="mb-16 fade-in">
            <h3 class="text-3xl font-semibold mb-4 border-b-2 border-blue-500 pb-2">About Me</h3>
            <p class="text-lg leading-relaxed">{bio}</p>
        </section>
        <section id="skills" class="mb-16 fade-in">
            <h3 class="text-3xl font-semibold mb-4 border-b-2 border-blue-500 pb-2">Skills</h3>
            <div class="flex flex-wrap gap-4">{skills}</div>
        </section>
        <section id="experience" class="mb-16 fade-in">
            <h3 class="text-3xl font-semibold mb-4 border-b-2 border-blue-500 pb-2">Experience</h3>
            <ul>{experience}</ul>
        </section>
        {education}
        <section id="projects" class="mb-16 fade-in">
            <h3 class="text-3xl font-semibold mb-4 border-b-2 border-blue-500 pb-2">Projects</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">{projects}</div>
        </section>
        <section id="contact" class="mb-16 fade-in">
            <h3 class="text-3xl font-semibold mb-4 border-b-2 border-blue-500 pb-2">Contact</h3>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                <div>
                    <p class="mb-2"><span class="font-semibold">Email:</span> {email}</p>
                    <p class="mb-4"><span class="font-semibold">Phone:</span> {phone}</p>
                </div>
                {socials}
            </div>
        </section>
    </main>
    <footer class="text-center py-8 text-sm {footer_class}">{footer}</footer>
    {script}
    {style}
</div>"##,
        attrs = root_attrs(data, "minimalist", scheme),
        root_class = root_class,
        header_height = header_height,
        cover = cover,
        profile = profile_img(
            data,
            "w-32 h-32 rounded-full mx-auto mb-4 border-4 border-white shadow-lg object-cover"
        ),
        name = html_escape(&data.name),
        title = html_escape(&data.title),
        nav_class = nav_class,
        bio = multiline(&data.bio),
        skills = skills,
        experience = experience,
        education = education,
        projects = projects,
        email = html_escape(&data.email),
        phone = html_escape(&data.phone),
        socials = socials,
        footer_class = footer_class,
        footer = footer_text(data),
        script = SCRIPT,
        style = STYLE,
    );

    Fragment::new(markup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smooth_scroll_script_is_intact() {
        let fragment = render(&PortfolioData::default(), ColorScheme::Light);
        assert!(fragment
            .markup
            .contains(r##"document.querySelectorAll('a[href^="#"]')"##));
        assert!(fragment.markup.contains("observer.observe(section);\n});\n</script>"));
        assert!(fragment.markup.contains("@keyframes fadeIn"));
    }
}
