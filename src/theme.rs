use yew::prelude::*;

/// Palette, typography and the handful of utility classes every section shares.
pub const BASE_CSS: &str = r#"
:root {
    --primary: #1e3a8a;
    --accent: #f97316;
    --foreground: #0f172a;
    --muted: #64748b;
    --background: #f8fafc;
    --border: #e2e8f0;
    --shadow-soft: 0 4px 20px -2px rgba(30, 58, 138, 0.1);
    --shadow-large: 0 20px 40px -10px rgba(30, 58, 138, 0.25);
    --gradient-overlay: linear-gradient(135deg, rgba(30, 58, 138, 0.85), rgba(249, 115, 22, 0.55));
    --font-display: 'Poppins', 'Inter', system-ui, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    color: var(--foreground);
    background: #fff;
    -webkit-font-smoothing: antialiased;
}

h1, h2, h3, h4 {
    font-family: var(--font-display);
    color: inherit;
}

img {
    max-width: 100%;
}

.section-inner {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-header h2 {
    font-size: clamp(2.25rem, 4vw, 3rem);
    font-weight: 700;
    margin: 0 0 1.5rem;
}

.section-header p {
    font-size: 1.25rem;
    color: var(--muted);
    max-width: 48rem;
    margin: 0 auto;
}

.text-primary {
    color: var(--primary);
}

.text-accent {
    color: var(--accent);
}

.card {
    background: #fff;
    border: 1px solid var(--border);
    border-radius: 1rem;
    padding: 1.5rem;
    box-shadow: var(--shadow-soft);
}

.icon-badge {
    flex-shrink: 0;
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    color: #fff;
    background: linear-gradient(to bottom right, var(--primary), var(--accent));
}

.icon-badge.small {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 0.5rem;
    font-size: 1.125rem;
}

.icon-badge.large {
    width: 4rem;
    height: 4rem;
    border-radius: 1rem;
    font-size: 2rem;
}

.btn-primary,
.btn-accent,
.btn-outline {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.875rem 2rem;
    border-radius: 0.75rem;
    font: inherit;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.3s ease, box-shadow 0.3s ease, background 0.3s ease, color 0.3s ease;
}

.btn-primary {
    border: none;
    color: #fff;
    background: var(--primary);
    box-shadow: var(--shadow-soft);
}

.btn-accent {
    border: none;
    color: #fff;
    background: var(--accent);
    box-shadow: var(--shadow-soft);
}

.btn-primary:hover,
.btn-accent:hover {
    transform: translateY(-2px);
    box-shadow: var(--shadow-large);
}

.btn-outline {
    border: 2px solid #fff;
    color: #fff;
    background: transparent;
}

.btn-outline:hover {
    color: var(--primary);
    background: #fff;
}

.btn-outline.dark {
    border-color: var(--primary);
    color: var(--primary);
}

.btn-outline.dark:hover {
    color: #fff;
    background: var(--primary);
}

@media (prefers-reduced-motion: reduce) {
    html {
        scroll-behavior: auto;
    }
}
"#;

#[function_component(Theme)]
pub fn theme() -> Html {
    html! { <style>{BASE_CSS}</style> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_every_shared_variable() {
        for var in [
            "--primary:",
            "--accent:",
            "--foreground:",
            "--muted:",
            "--background:",
            "--border:",
            "--shadow-soft:",
            "--shadow-large:",
            "--gradient-overlay:",
            "--font-display:",
        ] {
            assert!(BASE_CSS.contains(var), "missing {}", var);
        }
    }
}
