//! Question panel markup for injection into a page
//!
//! Entries are written as-is: list-item entries are HTML fragments and are
//! meant to render as markup. Error text is escaped.

use super::console::PANEL_TITLE;
use thinker_application::QuestionPanel;

const FOOTER: &str = "Critical Thinker for Medium";

const STYLE: &str = "<style>\
.critical-thinker-popup{position:fixed;bottom:80px;right:24px;width:360px;z-index:9999;\
background:#fff;border:1px solid #e5e7eb;border-radius:8px;box-shadow:0 10px 25px rgba(0,0,0,.15);\
font-family:sans-serif;color:#1f2937}\
.critical-thinker-popup h2{font-size:18px;margin:0;padding:12px 16px}\
.critical-thinker-popup .questions-container{padding:8px 16px 16px;max-height:300px;overflow-y:auto}\
.critical-thinker-popup li{margin-bottom:16px;line-height:1.5}\
.critical-thinker-popup .remaining{font-size:12px;color:#6b7280;text-align:center}\
.critical-thinker-popup .error{background:#fef2f2;color:#b91c1c;padding:12px;border-radius:6px}\
.critical-thinker-popup footer{border-top:1px solid #e5e7eb;font-size:12px;color:#6b7280;\
text-align:center;padding:8px 16px}\
</style>";

/// Renders a [`QuestionPanel`] as static HTML
pub struct PanelHtml;

impl PanelHtml {
    pub fn render(panel: &QuestionPanel) -> String {
        let mut html = String::new();
        html.push_str(STYLE);
        html.push_str("<div class=\"critical-thinker-popup\">");
        html.push_str(&format!("<h2>{}</h2>", PANEL_TITLE));
        html.push_str("<div class=\"questions-container\">");

        if let Some(error) = panel.error() {
            html.push_str(&format!(
                "<div class=\"error\"><p>{}</p></div>",
                escape(&error.to_string())
            ));
        }

        if let Some(questions) = panel.questions() {
            html.push_str("<ul>");
            for question in questions {
                html.push_str(&format!("<li><span>{}</span></li>", question));
            }
            html.push_str("</ul>");
            if questions.is_fallback() {
                html.push_str(
                    "<p class=\"remaining\">API error occurred. Using fallback questions.</p>",
                );
            }
        }

        html.push_str(&format!(
            "<p class=\"remaining\">{}</p>",
            panel.remaining_message()
        ));
        html.push_str("</div>");
        html.push_str(&format!("<footer>{}</footer>", FOOTER));
        html.push_str("</div>");
        html
    }
}

/// Escape text for an HTML text node
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use thinker_application::{PanelError, QuestionSource};
    use thinker_domain::QuestionSet;

    struct Fixed(Result<QuestionSet, PanelError>);

    #[async_trait(?Send)]
    impl QuestionSource for Fixed {
        async fn fetch(&self, _previous: Option<&QuestionSet>) -> Result<QuestionSet, PanelError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn test_render_questions() {
        let mut panel = QuestionPanel::new(3);
        let questions = QuestionSet::new(vec![
            "Is it <em>new</em>?".to_string(),
            "Who pays?".to_string(),
        ])
        .unwrap();
        panel.open(&Fixed(Ok(questions))).await;

        let html = PanelHtml::render(&panel);

        assert!(html.contains("<h2>Critical Thinking Questions</h2>"));
        assert!(html.contains("<li><span>Is it <em>new</em>?</span></li>"));
        assert!(html.contains("You have 3 regenerations remaining."));
        assert!(html.contains("Critical Thinker for Medium"));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn test_render_error_is_escaped() {
        let mut panel = QuestionPanel::new(3);
        panel
            .open(&Fixed(Err(PanelError::Rejected("<401>".to_string()))))
            .await;

        let html = PanelHtml::render(&panel);

        assert!(html.contains("&lt;401&gt;"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & \"b\" <c>"), "a &amp; &quot;b&quot; &lt;c&gt;");
    }
}
