use business::domain::recommendation::model::Recommendation;
use business::domain::recommendation::state::RequestState;
use business::domain::recommendation::view::{Card, ResultsView, SubmitControl};

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; background: #111827; color: #f3f4f6; font-family: system-ui, sans-serif; }
.container { max-width: 56rem; margin: 0 auto; padding: 2rem 1rem; }
header { text-align: center; margin-bottom: 2rem; }
h1 { font-size: 3rem; margin: 0 0 .5rem; background: linear-gradient(to right, #818cf8, #a855f7); -webkit-background-clip: text; color: transparent; }
.tagline { color: #9ca3af; }
label { display: block; font-size: 1.125rem; color: #d1d5db; margin-bottom: .5rem; }
textarea { width: 100%; height: 8rem; padding: 1rem; box-sizing: border-box; resize: none; background: #1f2937; color: #e5e7eb; border: 2px solid #374151; border-radius: .5rem; }
button { margin-top: 1rem; width: 100%; padding: .75rem 1.5rem; background: #4f46e5; color: #fff; font-weight: 600; border: 0; border-radius: .5rem; cursor: pointer; }
button:disabled { background: #312e81; color: #9ca3af; cursor: not-allowed; }
.spinner { display: inline-block; width: 1rem; height: 1rem; margin-right: .5rem; border: 2px solid #9ca3af; border-top-color: transparent; border-radius: 50%; animation: spin 1s linear infinite; vertical-align: middle; }
@keyframes spin { to { transform: rotate(360deg); } }
.results { margin-top: 2.5rem; }
.error { padding: 1rem; background: rgba(127, 29, 29, .5); border: 1px solid #b91c1c; color: #fca5a5; border-radius: .5rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1.5rem; }
.card { background: #1f2937; border: 1px solid #374151; border-radius: .5rem; padding: 1.25rem; }
.card img { width: 100%; border-radius: .25rem; margin-bottom: .75rem; }
.card h3 { margin: 0 0 .25rem; color: #a5b4fc; }
.meta { color: #9ca3af; font-size: .875rem; margin: 0 0 .75rem; }
.placeholder { text-align: center; color: #6b7280; padding: 2.5rem 0; font-size: 1.125rem; }
h2 { text-align: center; color: #e5e7eb; }
"#;

/// Renders the whole page for the given input and request state.
pub fn render_page(input: &str, state: &RequestState) -> String {
    let control = SubmitControl::from_state(state);
    let disabled = if control.is_disabled() { " disabled" } else { "" };
    // Keep other tabs in sync while a request is running.
    let refresh = if control.is_disabled() {
        r#"<meta http-equiv="refresh" content="2">"#
    } else {
        ""
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{refresh}<title>CineSuggest AI</title>
<style>{STYLE}</style>
</head>
<body>
<div class="container">
<header>
<h1>CineSuggest AI</h1>
<p class="tagline">Discover your next favorite movie from around the world.</p>
</header>
<main>
<form method="post" action="/">
<label for="movie-input">Tell me some movies you love...</label>
<textarea id="movie-input" name="movies" placeholder="e.g., Parasite, The Dark Knight, Spirited Away, RRR"{disabled}>{input}</textarea>
<button type="submit"{disabled}>{button}</button>
</form>
<div class="results">
{results}
</div>
</main>
</div>
</body>
</html>
"#,
        input = escape(input),
        button = render_button(control),
        results = render_results(&ResultsView::from_state(state)),
    )
}

fn render_button(control: SubmitControl) -> &'static str {
    match control {
        SubmitControl::Ready => "Get Recommendations",
        SubmitControl::Busy => r#"<span class="spinner"></span>Finding Gems..."#,
    }
}

fn render_results(view: &ResultsView<'_>) -> String {
    match view {
        ResultsView::Placeholder => {
            r#"<div class="placeholder"><p>Your personalized movie recommendations will appear here.</p></div>"#
                .to_string()
        }
        ResultsView::Pending => String::new(),
        ResultsView::ErrorBanner(message) => {
            format!(r#"<div class="error" role="alert"><p>{}</p></div>"#, escape(message))
        }
        ResultsView::ResultGrid(cards) => {
            let cards: String = cards.iter().map(render_card).collect();
            format!(
                r#"<h2>Here are some movies you might enjoy:</h2>
<div class="grid">{}</div>"#,
                cards
            )
        }
    }
}

fn render_card(card: &Card<'_>) -> String {
    let movie: &Recommendation = card.recommendation;
    let poster = movie
        .poster_url
        .as_deref()
        .map(|url| format!(r#"<img src="{}" alt="{}">"#, escape(url), escape(&movie.title)))
        .unwrap_or_default();
    let meta: Vec<&str> = [&movie.year, &movie.country, &movie.genre]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .collect();
    let meta = if meta.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="meta">{}</p>"#, escape(&meta.join(" · ")))
    };
    let reason = movie
        .reason
        .as_deref()
        .map(|reason| format!("<p>{}</p>", escape(reason)))
        .unwrap_or_default();

    format!(
        r#"<article class="card" data-key="{}">{}<h3>{}</h3>{}{}</article>"#,
        escape(&card.key),
        poster,
        escape(&movie.title),
        meta,
        reason
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
