// HTML Page Rendering
// Deterministic server-side rendering of the whole page: hero, tab
// control, the active tab's cards, the recommendations grid, and footer.
// Same (data, tab) input always yields byte-identical output.

use crate::cards::{cards_for, Card};
use crate::data::{PortfolioData, Recommendation};
use crate::tabs::Tab;

/// Render the full HTML document for the given active tab.
pub fn render_page(data: &PortfolioData, tab: Tab) -> String {
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!("<title>{} - Portfolio</title>\n", escape(&data.profile.name)));
    out.push_str("<style>");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"page\">\n");

    render_hero(&mut out, data);
    render_tab_bar(&mut out, tab);

    out.push_str("<section class=\"content\" id=\"content\">\n");
    out.push_str(&render_content(data, tab));
    out.push_str("</section>\n");

    render_recommendations(&mut out, &data.recommendations);
    render_footer(&mut out, data);

    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Render only the tab content region: the active dataset's cards, in
/// dataset order. Split out so the region can be compared across tab
/// round-trips.
pub fn render_content(data: &PortfolioData, tab: Tab) -> String {
    let mut out = String::with_capacity(4 * 1024);
    for card in cards_for(tab, data) {
        render_card(&mut out, &card);
    }
    out
}

fn render_hero(out: &mut String, data: &PortfolioData) {
    let profile = &data.profile;

    out.push_str("<section class=\"hero\">\n");
    out.push_str(&format!(
        "<img class=\"photo\" src=\"{}\" alt=\"Profile\">\n",
        escape(&profile.photo_url)
    ));
    out.push_str(&format!(
        "<h1>Hi, I'm <span class=\"accent\">{}</span></h1>\n",
        escape(&profile.name)
    ));
    out.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape(&profile.tagline)));
    out.push_str("<p class=\"contacts\">");
    out.push_str(&format!(
        "<a href=\"mailto:{}\">{}</a>",
        escape(&profile.email),
        escape(&profile.email)
    ));
    out.push_str(" &bull; ");
    out.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">GitHub</a>",
        escape(&profile.github)
    ));
    out.push_str("</p>\n</section>\n");
}

fn render_tab_bar(out: &mut String, active: Tab) {
    out.push_str("<nav class=\"tabs\">\n");
    for tab in Tab::ALL {
        let class = if tab == active { "tab active" } else { "tab" };
        out.push_str(&format!(
            "<a class=\"{}\" href=\"/?tab={}\">{}</a>\n",
            class,
            tab.as_str(),
            escape(tab.title())
        ));
    }
    out.push_str("</nav>\n");
}

fn render_card(out: &mut String, card: &Card) {
    out.push_str("<article class=\"card\">\n");
    out.push_str(&format!("<h3>{}</h3>\n", escape(&card.heading)));
    out.push_str(&format!("<p class=\"subline\">{}</p>\n", escape(&card.subline)));

    if let Some(link) = &card.link {
        out.push_str(&format!(
            "<a class=\"project-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">View Project</a>\n",
            escape(link)
        ));
    }

    out.push_str(&format!("<p class=\"description\">{}</p>\n", escape(&card.description)));

    if let Some(impact) = &card.impact {
        out.push_str(&format!(
            "<p class=\"impact\"><strong>Impact:</strong> {}</p>\n",
            escape(impact)
        ));
    }

    out.push_str(&format!("<p class=\"tag-label\">{}</p>\n", escape(&card.tag_label)));
    out.push_str("<ul class=\"tags\">\n");
    for tag in &card.tags {
        out.push_str(&format!("<li class=\"tag\">{}</li>\n", escape(tag)));
    }
    out.push_str("</ul>\n</article>\n");
}

fn render_recommendations(out: &mut String, recommendations: &[Recommendation]) {
    out.push_str("<section class=\"recommendations\">\n");
    out.push_str("<h2>Recommendations</h2>\n");
    out.push_str("<p class=\"subline\">What others say about my work</p>\n");
    out.push_str("<div class=\"rec-grid\">\n");

    for rec in recommendations {
        out.push_str("<article class=\"rec-card\">\n");
        out.push_str(&format!("<h3>{}</h3>\n", escape(&rec.name)));
        out.push_str(&format!("<p class=\"subline\">{}</p>\n", escape(&rec.title)));
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Read Letter</a>\n",
            escape(&rec.pdf_link)
        ));
        out.push_str("</article>\n");
    }

    out.push_str("</div>\n</section>\n");
}

fn render_footer(out: &mut String, data: &PortfolioData) {
    out.push_str(&format!(
        "<footer>&copy; 2026 {}. Built with Rust</footer>\n",
        escape(&data.profile.name)
    ));
}

/// Minimal HTML escaping for text and attribute values
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
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

const STYLESHEET: &str = "\
body{margin:0;font-family:system-ui,sans-serif;background:#fafafa;color:#1a1a2e}\
.page{max-width:56rem;margin:0 auto;padding:4rem 1.5rem}\
.hero{text-align:center}\
.photo{width:8rem;height:8rem;border-radius:50%;object-fit:cover}\
.accent{color:#6246ea}\
.tagline{color:#555;max-width:40rem;margin:0 auto}\
.tabs{display:flex;gap:1rem;justify-content:center;margin:3rem 0 2rem}\
.tab{padding:1rem 2rem;border-radius:.75rem;border:2px solid #ddd;text-decoration:none;color:inherit;font-weight:600}\
.tab.active{background:#6246ea;border-color:#6246ea;color:#fff}\
.card,.rec-card{background:#fff;border-radius:.75rem;padding:1.5rem;margin-bottom:1.5rem;box-shadow:0 1px 4px rgba(0,0,0,.08)}\
.subline{color:#777;font-size:.875rem}\
.impact{background:#f0edfd;border-radius:.5rem;padding:.75rem}\
.tag-label{font-size:.875rem;font-weight:600;color:#555}\
.tags{list-style:none;display:flex;flex-wrap:wrap;gap:.5rem;padding:0}\
.tag{background:#eee;border-radius:1rem;padding:.25rem .75rem;font-size:.875rem}\
.rec-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(14rem,1fr));gap:1.5rem}\
.rec-card{text-align:center}\
footer{text-align:center;color:#777;font-size:.875rem;padding-top:2rem}";

// ============================================================================
// TESTS
// ============================================================================
