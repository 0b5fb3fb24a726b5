//! Theme switching: head script and the navigation bar button

use crate::config::SiteConfig;

/// localStorage key holding the chosen theme
pub const THEME_STORAGE_KEY: &str = "ftui-theme";

/// Script applying the stored theme before first paint and exposing
/// `setTheme` / `cycleTheme` to the page
pub fn theme_script(config: &SiteConfig) -> String {
    let ids: Vec<&str> = config.themes.iter().map(|t| t.id.as_str()).collect();
    // serde_json output is a valid JS literal; only `</` could end the script early
    let themes = serde_json::to_string(&ids)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");
    let default = serde_json::to_string(&config.default_theme)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/");

    format!(
        r#"<script>
const THEMES = {themes};
const DEFAULT_THEME = {default};
function getStoredTheme() {{
    return localStorage.getItem('{key}') || DEFAULT_THEME;
}}
function setTheme(theme) {{
    if (!THEMES.includes(theme)) theme = DEFAULT_THEME;
    document.documentElement.setAttribute('data-theme', theme);
    localStorage.setItem('{key}', theme);
    document.querySelectorAll('[data-theme-btn]').forEach(btn => {{
        btn.classList.toggle('active', btn.dataset.themeBtn === theme);
    }});
    window.dispatchEvent(new CustomEvent('themechange', {{ detail: {{ theme }} }}));
}}
function cycleTheme() {{
    const index = THEMES.indexOf(getStoredTheme());
    setTheme(THEMES[(index + 1) % THEMES.length]);
}}
document.documentElement.setAttribute('data-theme', getStoredTheme());
document.addEventListener('DOMContentLoaded', () => setTheme(getStoredTheme()));
</script>"#,
        themes = themes,
        default = default,
        key = THEME_STORAGE_KEY
    )
}

/// Compact button cycling through the configured themes
pub fn theme_switcher() -> String {
    r#"<button onclick="cycleTheme()" class="theme-switcher-compact btn" title="Cycle theme" type="button"><span class="text-lg">&#x25d0;</span></button>"#
        .to_string()
}
