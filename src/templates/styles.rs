//! CSS styles for the builder's own pages (gallery, form, preview).
//!
//! Exported portfolios do not use this sheet; they rely on Tailwind.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base0: #839496;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --yellow: #b58900;
    --orange: #cb4b16;
    --red: #dc322f;
    --magenta: #d33682;
    --violet: #6c71c4;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
    --card-bg: #f5ecd5;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-top: 1.5em; margin-bottom: 0.5em; }
h1 { font-size: 1.5rem; }
h2 { font-size: 1.2rem; }
h3 { font-size: 1rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}

.nav-bar a, .nav-bar button { font-size: 0.9rem; }
.nav-bar .spacer { flex: 1; }
.nav-bar .brand { font-weight: 600; color: var(--base01); }

.nav-bar button {
    background: none;
    border: none;
    color: var(--link);
    cursor: pointer;
    font-family: inherit;
}

/* Template Gallery */
.gallery {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
    gap: 1.5rem;
    margin-top: 1rem;
}

.template-card {
    border: 1px solid var(--border);
    border-radius: 8px;
    overflow: hidden;
    background: var(--card-bg);
    display: block;
    color: var(--fg);
}
.template-card:hover { border-color: var(--blue); text-decoration: none; }

.template-swatch { height: 140px; }
.template-swatch.minimalist { background: linear-gradient(90deg, #dbeafe, #f3e8ff); }
.template-swatch.creative { background: linear-gradient(90deg, #c084fc, #ec4899, #ef4444); }
.template-swatch.professional { background: #2563eb; }

.template-card .body { padding: 1rem; }
.template-card h2 { margin-top: 0; }

/* Customization Form */
.customize-grid {
    display: grid;
    grid-template-columns: minmax(0, 1fr) minmax(0, 1fr);
    gap: 2rem;
}

@media (max-width: 900px) {
    .customize-grid { grid-template-columns: 1fr; }
}

.card {
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 1rem 1.25rem;
    margin-bottom: 1.25rem;
    background: var(--bg);
}
.card h2 { margin-top: 0; }

.form-group { margin-bottom: 1rem; }
.form-group label { display: block; margin-bottom: 0.25rem; font-weight: 600; font-size: 0.9rem; }
.form-group input, .form-group select, .form-group textarea {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--base1);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-size: 1rem;
    font-family: inherit;
}
.form-group textarea { min-height: 6rem; resize: vertical; }
.form-group small { font-size: 0.8rem; color: var(--muted); }

.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }

.form-actions { display: flex; gap: 1rem; margin-top: 1rem; align-items: center; }

.project-list { list-style: none; margin-bottom: 1rem; }
.project-item {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    gap: 1rem;
    padding: 0.5rem 0;
    border-bottom: 1px solid var(--border);
}
.project-item .meta { font-size: 0.85rem; color: var(--muted); }

.image-slot {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.5rem 0;
}
.image-slot img { width: 64px; height: 64px; object-fit: cover; border-radius: 4px; }

.btn {
    padding: 0.5rem 1rem;
    border: 1px solid var(--base1);
    border-radius: 4px;
    background: var(--blue);
    color: var(--base3);
    cursor: pointer;
    font-size: 0.9rem;
    font-family: inherit;
    text-decoration: none;
    display: inline-block;
}

.btn:hover { background: var(--cyan); border-color: var(--cyan); color: var(--base3); text-decoration: none; }
.btn.secondary { background: var(--base2); color: var(--base00); border-color: var(--base1); }
.btn.secondary:hover { background: var(--base3); }
.btn.wide { width: 100%; }
.btn.small { padding: 0.2rem 0.6rem; font-size: 0.8rem; }

.save-status {
    font-size: 0.85rem;
    color: var(--muted);
}
.save-status.saving { color: var(--link); }
.save-status.saved { color: #4a4; }
.save-status.error { color: #c44; }

.message {
    padding: 0.75rem 1rem;
    border-radius: 4px;
    margin-bottom: 1rem;
}
.message.error { background: #fdf2f2; color: var(--red); border: 1px solid var(--red); }
.message.success { background: #f5f9f5; color: var(--green); border: 1px solid var(--green); }

/* Preview */
.preview-panel {
    position: sticky;
    top: 4rem;
    align-self: start;
    border: 1px solid var(--border);
    border-radius: 8px;
    padding: 1rem;
    background: var(--accent);
}
.preview-panel h2 { margin-top: 0; }

.preview-frame {
    width: 100%;
    height: 600px;
    border: 1px solid var(--border);
    border-radius: 8px;
    background: white;
}

.preview-toolbar { display: flex; gap: 1rem; align-items: center; margin-bottom: 1rem; }

.back-link {
    display: inline-block;
    margin-bottom: 1rem;
    font-size: 0.9rem;
}
"#;
