use ammonia::clean_text;

use crate::entities::{hero::HeroSummary, testimonial::TestimonialResponse};

const PAGE_STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem;color:#1f2937}\
.testimonial{border-bottom:1px solid #e5e7eb;padding:1rem 0}.stars{color:#f59e0b}";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        clean_text(title),
        PAGE_STYLE,
        body
    )
}

/// Landing page built from the hero summary.
pub fn render_index_page(hero: &HeroSummary) -> String {
    let title = if hero.name.is_empty() { "Portfolio" } else { hero.name.as_str() };

    let mut body = format!(
        "<header>\n<h1>{}</h1>\n<h2>{}</h2>\n<p>{}</p>\n",
        clean_text(&hero.name),
        clean_text(&hero.role),
        clean_text(&hero.tagline),
    );
    if !hero.resume_link.is_empty() {
        body.push_str(&format!(
            "<a class=\"resume\" href=\"{}\">Download resume</a>\n",
            clean_text(&hero.resume_link)
        ));
    }
    body.push_str("</header>\n");

    page(title, &body)
}

pub fn render_testimonials_page(testimonials: &[TestimonialResponse]) -> String {
    let mut body = String::from("<h1>Testimonials</h1>\n");

    if testimonials.is_empty() {
        body.push_str("<p>No testimonials yet.</p>\n");
    }

    for t in testimonials {
        body.push_str("<article class=\"testimonial\">\n");
        if !t.image.is_empty() {
            body.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\" width=\"64\" height=\"64\">\n",
                clean_text(&t.image),
                clean_text(&t.name)
            ));
        }
        body.push_str(&format!(
            "<h3>{}</h3>\n<p class=\"meta\">{}, {} &middot; {}</p>\n\
<p class=\"stars\" aria-label=\"{} out of 5\">{}</p>\n<blockquote>{}</blockquote>\n</article>\n",
            clean_text(&t.name),
            clean_text(&t.title),
            clean_text(&t.company),
            clean_text(&t.location),
            t.rating,
            t.stars(),
            clean_text(&t.feedback),
        ));
    }

    page("Testimonials", &body)
}
