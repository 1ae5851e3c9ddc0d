// src/web/render.rs
//! Pure page rendering: result sets in, HTML string out. No server state.

use crate::internships::InternshipListing;
use crate::listings::JobListingRow;
use crate::types::UserQuery;

const EDUCATION_LEVELS: [&str; 5] = [
    "High School",
    "Diploma",
    "Bachelor's Degree",
    "Master's Degree",
    "PhD",
];

const SECTORS: [&str; 8] = [
    "Technology",
    "Finance",
    "Healthcare",
    "Marketing",
    "Education",
    "Design",
    "Consulting",
    "Media",
];

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Career Opportunity Finder</title>
    <link href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css" rel="stylesheet">
    <style>
        .gradient-bg { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }
        .card-hover { transition: all 0.3s ease; }
        .card-hover:hover { transform: translateY(-5px); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
    </style>
</head>
"#;

/// Render the whole page.
///
/// `query` is `None` before any submission (form only) and carries the
/// submitted fields afterwards, in which case both result panels render even
/// when empty.
pub fn render_page(
    query: Option<&UserQuery>,
    internships: &[InternshipListing],
    suggestions: &[JobListingRow],
) -> String {
    let mut page = String::with_capacity(16 * 1024);
    page.push_str(PAGE_HEAD);
    page.push_str("<body class=\"gradient-bg min-h-screen\">\n<div class=\"container mx-auto px-4 py-8\">\n");
    page.push_str(
        "<div class=\"text-center mb-12\">\n\
         <h1 class=\"text-5xl font-bold text-white mb-4\">Career Opportunity Finder</h1>\n\
         <p class=\"text-xl text-white opacity-90\">Discover your perfect internship and job matches</p>\n\
         </div>\n",
    );
    page.push_str(&render_form(query));
    if query.is_some() {
        page.push_str(&render_results(internships, suggestions));
    }
    page.push_str("</div>\n</body>\n</html>\n");
    page
}

fn render_form(query: Option<&UserQuery>) -> String {
    let mut form = String::with_capacity(4 * 1024);
    form.push_str(
        "<div class=\"max-w-4xl mx-auto bg-white rounded-2xl shadow-2xl overflow-hidden\">\n\
         <div class=\"bg-gradient-to-r from-indigo-500 to-purple-600 p-6\">\n\
         <h2 class=\"text-3xl font-bold text-white text-center\">Tell Us About Yourself</h2>\n\
         </div>\n\
         <form action=\"/\" method=\"POST\" class=\"p-8 space-y-8\">\n",
    );

    // Education level
    form.push_str(
        "<div class=\"space-y-2\">\n\
         <label for=\"education\" class=\"text-lg font-semibold text-gray-700\">Education Level</label>\n\
         <select name=\"education\" id=\"education\" class=\"w-full p-4 border-2 border-gray-200 rounded-xl\" required>\n\
         <option value=\"\">Select your education level</option>\n",
    );
    for level in EDUCATION_LEVELS {
        let selected = if query.map(|q| q.education_level == level).unwrap_or(false) {
            " selected"
        } else {
            ""
        };
        form.push_str(&format!(
            "<option value=\"{level}\"{selected}>{level}</option>\n",
            level = escape_html(level),
            selected = selected,
        ));
    }
    form.push_str("</select>\n</div>\n");

    // Location
    let location = query.map(|q| q.location.as_str()).unwrap_or("");
    form.push_str(&format!(
        "<div class=\"space-y-2\">\n\
         <label for=\"location\" class=\"text-lg font-semibold text-gray-700\">Preferred Location</label>\n\
         <input type=\"text\" name=\"location\" id=\"location\" value=\"{}\" \
         placeholder=\"e.g., Mumbai, Delhi, Bangalore, Remote\" \
         class=\"w-full p-4 border-2 border-gray-200 rounded-xl\" required>\n\
         </div>\n",
        escape_html(location),
    ));

    // Skills
    let skills = query.map(|q| q.skills.join(", ")).unwrap_or_default();
    form.push_str(&format!(
        "<div class=\"space-y-2\">\n\
         <label for=\"skills\" class=\"text-lg font-semibold text-gray-700\">Your Skills</label>\n\
         <textarea name=\"skills\" id=\"skills\" rows=\"3\" \
         placeholder=\"e.g., Python, JavaScript, Machine Learning, Marketing...\" \
         class=\"w-full p-4 border-2 border-gray-200 rounded-xl resize-none\" required>{}</textarea>\n\
         <p class=\"text-sm text-gray-500\">Separate multiple skills with commas</p>\n\
         </div>\n",
        escape_html(&skills),
    ));

    // Sector interests
    form.push_str(
        "<div class=\"space-y-2\">\n\
         <label class=\"text-lg font-semibold text-gray-700\">Sector Interests</label>\n\
         <div class=\"grid grid-cols-2 md:grid-cols-4 gap-3\">\n",
    );
    for sector in SECTORS {
        let checked = if query
            .map(|q| q.sector_interests.iter().any(|s| s == sector))
            .unwrap_or(false)
        {
            " checked"
        } else {
            ""
        };
        form.push_str(&format!(
            "<label class=\"flex items-center space-x-2 p-3 border-2 border-gray-200 rounded-lg cursor-pointer\">\n\
             <input type=\"checkbox\" name=\"sectors\" value=\"{sector}\"{checked}>\n\
             <span class=\"text-sm font-medium\">{sector}</span>\n\
             </label>\n",
            sector = escape_html(sector),
            checked = checked,
        ));
    }
    form.push_str("</div>\n</div>\n");

    form.push_str(
        "<div class=\"text-center pt-6\">\n\
         <button type=\"submit\" class=\"bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-bold py-4 px-12 rounded-xl shadow-lg\">\
         Find My Opportunities</button>\n\
         </div>\n\
         </form>\n</div>\n",
    );
    form
}

fn render_results(internships: &[InternshipListing], suggestions: &[JobListingRow]) -> String {
    let mut section = String::with_capacity(8 * 1024);
    section.push_str(
        "<div class=\"max-w-6xl mx-auto mt-12\" id=\"results\">\n\
         <div class=\"grid grid-cols-1 lg:grid-cols-2 gap-8\">\n",
    );
    section.push_str(&render_internship_panel(internships));
    section.push_str(&render_suggestion_panel(suggestions));
    section.push_str(
        "</div>\n\
         <div class=\"text-center mt-8\">\n\
         <a href=\"/\" class=\"inline-flex items-center bg-gray-600 text-white font-bold py-3 px-8 rounded-xl\">Search Again</a>\n\
         </div>\n</div>\n",
    );
    section
}

fn render_internship_panel(internships: &[InternshipListing]) -> String {
    let mut panel = String::new();
    panel.push_str(
        "<div class=\"bg-white rounded-2xl shadow-2xl overflow-hidden\">\n\
         <div class=\"bg-gradient-to-r from-blue-500 to-cyan-500 p-6\">\n\
         <h2 class=\"text-2xl font-bold text-white text-center\">Internship Opportunities</h2>\n\
         </div>\n\
         <div class=\"p-6 space-y-4 max-h-96 overflow-y-auto\">\n",
    );
    if internships.is_empty() {
        panel.push_str(
            "<p class=\"text-gray-500 text-center py-8\">No internships found. Try different skills or location.</p>\n",
        );
    } else {
        for listing in internships {
            panel.push_str(&render_internship_card(listing));
        }
    }
    panel.push_str("</div>\n</div>\n");
    panel
}

fn render_internship_card(listing: &InternshipListing) -> String {
    let mut card = String::new();
    card.push_str("<div class=\"card-hover bg-blue-50 p-4 rounded-xl border border-blue-100\">\n");
    card.push_str(&format!(
        "<h3 class=\"font-bold text-lg text-gray-800\">{}</h3>\n",
        escape_html(&listing.title),
    ));
    if listing.company != "N/A" {
        card.push_str(&format!(
            "<p class=\"text-gray-600 mb-2\">{}</p>\n",
            escape_html(&listing.company),
        ));
    }
    card.push_str(&format!(
        "<a href=\"{}\" target=\"_blank\" class=\"inline-flex items-center text-blue-600 font-medium\">View Details</a>\n",
        escape_html(&listing.link),
    ));
    card.push_str("</div>\n");
    card
}

fn render_suggestion_panel(suggestions: &[JobListingRow]) -> String {
    let mut panel = String::new();
    panel.push_str(
        "<div class=\"bg-white rounded-2xl shadow-2xl overflow-hidden\">\n\
         <div class=\"bg-gradient-to-r from-green-500 to-emerald-500 p-6\">\n\
         <h2 class=\"text-2xl font-bold text-white text-center\">Job Suggestions</h2>\n\
         </div>\n\
         <div class=\"p-6 space-y-4 max-h-96 overflow-y-auto\">\n",
    );
    if suggestions.is_empty() {
        panel.push_str(
            "<p class=\"text-gray-500 text-center py-8\">No job suggestions found. Try different skills or sectors.</p>\n",
        );
    } else {
        for row in suggestions {
            panel.push_str(&render_job_card(row));
        }
    }
    panel.push_str("</div>\n</div>\n");
    panel
}

fn render_job_card(row: &JobListingRow) -> String {
    let mut card = String::new();
    card.push_str("<div class=\"card-hover bg-green-50 p-4 rounded-xl border border-green-100\">\n");
    card.push_str(&format!(
        "<h3 class=\"font-bold text-lg text-gray-800\">{}</h3>\n",
        escape_html(&row.title),
    ));
    if row.company() != "N/A" {
        card.push_str(&format!(
            "<p class=\"text-gray-600\">{}</p>\n",
            escape_html(row.company()),
        ));
    }
    if row.location() != "N/A" {
        card.push_str(&format!(
            "<p class=\"text-gray-600\">{}</p>\n",
            escape_html(row.location()),
        ));
    }
    card.push_str(&format!(
        "<div class=\"mt-2\">\n\
         <span class=\"text-xs text-gray-500\">Required Skills:</span>\n\
         <p class=\"text-sm text-gray-700\">{}</p>\n\
         </div>\n",
        escape_html(&row.required_skills),
    ));
    card.push_str("</div>\n");
    card
}

/// Minimal page used by the error catchers
pub fn render_error_page(title: &str, message: &str) -> String {
    format!(
        "{head}<body class=\"gradient-bg min-h-screen\">\n\
         <div class=\"container mx-auto px-4 py-8 text-center\">\n\
         <h1 class=\"text-5xl font-bold text-white mb-4\">{title}</h1>\n\
         <p class=\"text-xl text-white opacity-90\">{message}</p>\n\
         <a href=\"/\" class=\"inline-flex items-center mt-8 bg-gray-600 text-white font-bold py-3 px-8 rounded-xl\">Back to search</a>\n\
         </div>\n</body>\n</html>\n",
        head = PAGE_HEAD,
        title = escape_html(title),
        message = escape_html(message),
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internship(title: &str, company: &str) -> InternshipListing {
        InternshipListing {
            title: title.to_string(),
            company: company.to_string(),
            link: "https://internshala.com/internship/detail-1".to_string(),
        }
    }

    fn job_row(title: &str) -> JobListingRow {
        JobListingRow {
            title: title.to_string(),
            company: Some("Acme Corp".to_string()),
            location: None,
            required_skills: "Python, SQL".to_string(),
        }
    }

    fn submitted_query() -> UserQuery {
        UserQuery {
            education_level: "PhD".to_string(),
            location: "Bangalore".to_string(),
            skills: vec!["Python".to_string(), "flask".to_string()],
            sector_interests: vec!["Finance".to_string()],
        }
    }

    #[test]
    fn test_idle_page_has_form_but_no_results() {
        let page = render_page(None, &[], &[]);
        assert!(page.contains("name=\"skills\""));
        assert!(page.contains("name=\"education\""));
        assert!(page.contains("name=\"sectors\""));
        assert!(!page.contains("id=\"results\""));
    }

    #[test]
    fn test_submitted_page_shows_empty_panels() {
        let page = render_page(Some(&submitted_query()), &[], &[]);
        assert!(page.contains("id=\"results\""));
        assert!(page.contains("No internships found. Try different skills or location."));
        assert!(page.contains("No job suggestions found. Try different skills or sectors."));
    }

    #[test]
    fn test_form_refilled_from_query() {
        let page = render_page(Some(&submitted_query()), &[], &[]);
        assert!(page.contains("value=\"Bangalore\""));
        assert!(page.contains("<option value=\"PhD\" selected>"));
        assert!(page.contains("value=\"Finance\" checked"));
        assert!(page.contains(">Python, flask</textarea>"));
    }

    #[test]
    fn test_internship_card_rendering() {
        let page = render_page(
            Some(&submitted_query()),
            &[internship("Data Science Intern", "Acme Corp")],
            &[],
        );
        assert!(page.contains("Data Science Intern"));
        assert!(page.contains("Acme Corp"));
        assert!(page.contains("https://internshala.com/internship/detail-1"));
    }

    #[test]
    fn test_internship_card_hides_na_company() {
        let page = render_page(Some(&submitted_query()), &[internship("Intern", "N/A")], &[]);
        assert!(!page.contains("<p class=\"text-gray-600 mb-2\">N/A</p>"));
    }

    #[test]
    fn test_job_card_shows_skills_and_hides_na_location() {
        let page = render_page(Some(&submitted_query()), &[], &[job_row("Data Analyst")]);
        assert!(page.contains("Data Analyst"));
        assert!(page.contains("Python, SQL"));
        assert!(!page.contains(">N/A</p>"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let query = UserQuery {
            location: "<script>alert(1)</script>".to_string(),
            ..submitted_query()
        };
        let page = render_page(Some(&query), &[], &[]);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"x\" <y>'z'"), "&quot;x&quot; &lt;y&gt;&#39;z&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }
}
