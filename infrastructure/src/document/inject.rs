//! Panel injection into a host page

/// Id of the single root container the panel lives in.
pub const ROOT_CONTAINER_ID: &str = "critical-thinker-extension";

/// Append `<div id="critical-thinker-extension">` holding `inner_html` to
/// the page body.
///
/// The container goes right before the last `</body>` (any case), or at the
/// end when the page has none. A page that already carries the container is
/// returned unchanged.
pub fn inject_root_container(page: &str, inner_html: &str) -> String {
    if page.contains(&format!("id=\"{}\"", ROOT_CONTAINER_ID)) {
        return page.to_string();
    }

    let container = format!("<div id=\"{}\">{}</div>", ROOT_CONTAINER_ID, inner_html);
    match page.to_ascii_lowercase().rfind("</body>") {
        Some(index) => {
            let mut out = String::with_capacity(page.len() + container.len());
            out.push_str(&page[..index]);
            out.push_str(&container);
            out.push_str(&page[index..]);
            out
        }
        None => format!("{}{}", page, container),
    }
}
