//! Markdown Exporter
//!
//! Serializes the rendered document into a downloadable Markdown file. The
//! live DOM is snapshotted into a plain tree first; everything after the
//! snapshot is pure string work.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Element, HtmlAnchorElement, Url};

use crate::api::js_err;

/// Serializer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Name of the downloaded file
    pub file_name: String,
    /// Optional document title emitted as a leading `# ` heading
    pub title: Option<String>,
    /// div classes whose subtrees are skipped (controls, nested sections)
    pub skip_classes: Vec<String>,
    /// Heading levels serialized besides the per-section `##`
    pub heading_levels: Vec<u8>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            file_name: "api_endpoints_documentation.md".to_string(),
            title: None,
            skip_classes: vec!["button-container".to_string(), "section".to_string()],
            heading_levels: vec![1, 2, 3],
        }
    }
}

/// Plain snapshot of one DOM element, detached from the live document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementNode {
    /// Lowercase tag name
    pub tag: String,
    pub classes: Vec<String>,
    /// Full text content, descendants included
    pub text: String,
    pub is_checkbox: bool,
    pub checked: bool,
    pub children: Vec<ElementNode>,
}

/// Capture a live element and its element children
pub fn snapshot_element(element: &Element) -> ElementNode {
    let tag = element.tag_name().to_lowercase();
    let is_checkbox =
        tag == "input" && element.get_attribute("type").as_deref() == Some("checkbox");
    let checked = element
        .dyn_ref::<web_sys::HtmlInputElement>()
        .map(|input| input.checked())
        .unwrap_or(false);

    let mut children = Vec::new();
    let child_elements = element.children();
    for i in 0..child_elements.length() {
        if let Some(child) = child_elements.item(i) {
            children.push(snapshot_element(&child));
        }
    }

    ElementNode {
        tag,
        classes: element
            .class_name()
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        text: element.text_content().unwrap_or_default(),
        is_checkbox,
        checked,
        children,
    }
}

/// Serialize every `.section` on the page and trigger a client-side download.
pub fn download_markdown(opts: &ExportOptions) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("no document")?;
    let nodes = document.query_selector_all(".section").map_err(js_err)?;

    let mut sections = Vec::new();
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            sections.push(snapshot_element(&element));
        }
    }

    let markdown = build_markdown(&sections, opts);
    web_sys::console::log_1(
        &format!("[EXPORT] {} sections, {} bytes", sections.len(), markdown.len()).into(),
    );

    trigger_download(&document, &opts.file_name, &markdown)
}

/// Build the full Markdown document from snapshotted `.section` containers
pub fn build_markdown(sections: &[ElementNode], opts: &ExportOptions) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &opts.title {
        lines.push(format!("# {}", title));
        lines.push(String::new());
    }

    for section in sections {
        if let Some(heading) = section.children.iter().find(|c| c.tag == "h2") {
            lines.push(format!("## {}", heading.text.trim()));
            lines.push(String::new());
        }
        for child in &section.children {
            process_element(child, &mut lines, opts);
        }
        lines.push(String::new());
    }

    collapse_blank_lines(&lines.join("\n"))
}

/// Emit Markdown lines for one element, dispatching on its tag
pub fn process_element(node: &ElementNode, lines: &mut Vec<String>, opts: &ExportOptions) {
    match node.tag.as_str() {
        "h1" if opts.heading_levels.contains(&1) => {
            lines.push(format!("# {}", node.text.trim()));
            lines.push(String::new());
        }
        "h3" if opts.heading_levels.contains(&3) => {
            lines.push(format!("### {}", node.text.trim()));
            lines.push(String::new());
        }
        // Section headings are emitted by the section walk itself
        "h1" | "h2" | "h3" => {}
        "ul" => {
            for item in node.children.iter().filter(|c| c.tag == "li") {
                lines.push(list_item_line(item));
            }
            lines.push(String::new());
        }
        "pre" => {
            let code = node
                .children
                .iter()
                .find(|c| c.tag == "code")
                .map(|c| c.text.as_str())
                .unwrap_or(node.text.as_str());
            lines.push("```".to_string());
            for line in code.trim_end_matches('\n').lines() {
                lines.push(line.to_string());
            }
            lines.push("```".to_string());
            lines.push(String::new());
        }
        "p" => {
            lines.push(node.text.trim().to_string());
            lines.push(String::new());
        }
        "div" => {
            if node.classes.iter().any(|c| opts.skip_classes.contains(c)) {
                return;
            }
            for child in &node.children {
                process_element(child, lines, opts);
            }
        }
        _ => {
            let text = node.text.trim();
            if text.is_empty() {
                return;
            }
            // Deduplicated against the immediately preceding line only
            if lines.last().map(String::as_str) != Some(text) {
                lines.push(text.to_string());
            }
        }
    }
}

/// `- [x] label` / `- [ ] label` for checkbox items, `- text` otherwise
fn list_item_line(item: &ElementNode) -> String {
    match find_checkbox(item) {
        Some(checkbox) => {
            let label = item
                .children
                .iter()
                .find(|c| c.tag == "label")
                .map(|c| c.text.trim())
                .unwrap_or("");
            let mark = if checkbox.checked { 'x' } else { ' ' };
            format!("- [{}] {}", mark, label)
        }
        None => format!("- {}", item.text.trim()),
    }
}

fn find_checkbox(node: &ElementNode) -> Option<&ElementNode> {
    if node.is_checkbox {
        return Some(node);
    }
    node.children.iter().find_map(find_checkbox)
}

/// Collapse runs of 3+ newlines down to one blank line and trim the ends
fn collapse_blank_lines(text: &str) -> String {
    let mut out = text.to_string();
    while out.contains("\n\n\n") {
        out = out.replace("\n\n\n", "\n\n");
    }
    out.trim().to_string()
}

fn trigger_download(
    document: &web_sys::Document,
    file_name: &str,
    content: &str,
) -> Result<(), String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let bag = BlobPropertyBag::new();
    bag.set_type("text/markdown;charset=utf-8");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &bag).map_err(js_err)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;
    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "anchor element cast failed".to_string())?;
    link.set_href(&url);
    link.set_download(file_name);
    link.click();
    // Release the blob URL right after the synthetic click
    Url::revoke_object_url(&url).map_err(js_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(tag: &str, children: Vec<ElementNode>) -> ElementNode {
        ElementNode {
            tag: tag.to_string(),
            children,
            ..Default::default()
        }
    }

    fn text_el(tag: &str, text: &str) -> ElementNode {
        ElementNode {
            tag: tag.to_string(),
            text: text.to_string(),
            ..Default::default()
        }
    }

    fn checkbox(checked: bool) -> ElementNode {
        ElementNode {
            tag: "input".to_string(),
            is_checkbox: true,
            checked,
            ..Default::default()
        }
    }

    fn task_item(label: &str, checked: bool) -> ElementNode {
        ElementNode {
            tag: "li".to_string(),
            text: label.to_string(),
            children: vec![checkbox(checked), text_el("label", label)],
            ..Default::default()
        }
    }

    fn section(title: &str, mut children: Vec<ElementNode>) -> ElementNode {
        let mut all = vec![text_el("h2", title)];
        all.append(&mut children);
        ElementNode {
            tag: "div".to_string(),
            classes: vec!["section".to_string()],
            children: all,
            ..Default::default()
        }
    }

    #[test]
    fn test_task_items_round_trip() {
        let sections = vec![section(
            "Orders",
            vec![el("ul", vec![task_item("Foo", true), task_item("Bar", false)])],
        )];

        let md = build_markdown(&sections, &ExportOptions::default());

        let lines: Vec<&str> = md.lines().collect();
        assert!(lines.contains(&"- [x] Foo"));
        assert!(lines.contains(&"- [ ] Bar"));
    }

    #[test]
    fn test_plain_list_item() {
        let sections = vec![section(
            "Notes",
            vec![el("ul", vec![text_el("li", "  No checkbox here  ")])],
        )];

        let md = build_markdown(&sections, &ExportOptions::default());
        assert!(md.lines().any(|l| l == "- No checkbox here"));
    }

    #[test]
    fn test_code_block_three_lines() {
        let mut lines = Vec::new();
        let pre = el("pre", vec![text_el("code", "x=1")]);

        process_element(&pre, &mut lines, &ExportOptions::default());

        assert_eq!(&lines[..3], &["```", "x=1", "```"]);
    }

    #[test]
    fn test_multiline_code_kept_verbatim() {
        let sections = vec![section(
            "Orders",
            vec![el("pre", vec![text_el("code", "POST /v1/orders\n{\n  \"pickup\": \"a\"\n}\n")])],
        )];

        let md = build_markdown(&sections, &ExportOptions::default());
        assert!(md.contains("```\nPOST /v1/orders\n{\n  \"pickup\": \"a\"\n}\n```"));
    }

    #[test]
    fn test_section_heading_and_subheading() {
        let sections = vec![section(
            "Authentication",
            vec![
                text_el("h3", "Token lifecycle"),
                text_el("p", "All endpoints require a token."),
            ],
        )];

        let md = build_markdown(&sections, &ExportOptions::default());

        assert!(md.starts_with("## Authentication"));
        assert!(md.contains("### Token lifecycle"));
        assert!(md.contains("All endpoints require a token."));
        // The h2 must not be re-emitted by the recursive walk
        assert_eq!(md.matches("Authentication").count(), 1);
    }

    #[test]
    fn test_heading_levels_option() {
        let sections = vec![section("Main", vec![text_el("h3", "Sub")])];
        let opts = ExportOptions {
            heading_levels: vec![2],
            ..ExportOptions::default()
        };

        let md = build_markdown(&sections, &opts);

        assert!(md.contains("## Main"));
        assert!(!md.contains("### Sub"));
    }

    #[test]
    fn test_title_line() {
        let opts = ExportOptions {
            title: Some("API Endpoints Documentation".to_string()),
            ..ExportOptions::default()
        };

        let md = build_markdown(&[section("Auth", vec![])], &opts);
        assert!(md.starts_with("# API Endpoints Documentation\n\n## Auth"));
    }

    #[test]
    fn test_skip_classes() {
        let controls = ElementNode {
            tag: "div".to_string(),
            classes: vec!["button-container".to_string()],
            children: vec![text_el("button", "Download Markdown")],
            ..Default::default()
        };
        let sections = vec![section("Auth", vec![controls])];

        let md = build_markdown(&sections, &ExportOptions::default());
        assert!(!md.contains("Download Markdown"));
    }

    #[test]
    fn test_nested_section_not_duplicated() {
        // A .section div nested inside a section subtree is skipped; its
        // content is serialized when the outer walk reaches it directly.
        let inner = section("Inner", vec![text_el("p", "inner text")]);
        let outer = section("Outer", vec![el("div", vec![inner.clone()])]);

        let md = build_markdown(&[outer, inner], &ExportOptions::default());
        assert_eq!(md.matches("inner text").count(), 1);
    }

    #[test]
    fn test_plain_div_recursed() {
        let wrapper = el("div", vec![text_el("p", "wrapped")]);
        let md = build_markdown(&[section("Auth", vec![wrapper])], &ExportOptions::default());
        assert!(md.contains("wrapped"));
    }

    #[test]
    fn test_default_branch_dedups_previous_line_only() {
        let mut lines = Vec::new();
        let opts = ExportOptions::default();

        process_element(&text_el("blockquote", "Note"), &mut lines, &opts);
        process_element(&text_el("blockquote", "Note"), &mut lines, &opts);
        process_element(&text_el("blockquote", "Other"), &mut lines, &opts);
        process_element(&text_el("blockquote", "Note"), &mut lines, &opts);

        assert_eq!(lines, vec!["Note", "Other", "Note"]);
    }

    #[test]
    fn test_default_branch_skips_empty_text() {
        let mut lines = Vec::new();
        process_element(
            &text_el("span", "   "),
            &mut lines,
            &ExportOptions::default(),
        );
        assert!(lines.is_empty());
    }

    #[test]
    fn test_no_triple_blank_lines() {
        let sections = vec![
            section("Empty", vec![]),
            section("Another", vec![text_el("p", "text")]),
            section("Last", vec![el("ul", vec![])]),
        ];

        let md = build_markdown(&sections, &ExportOptions::default());

        assert!(!md.contains("\n\n\n"));
        assert!(!md.starts_with('\n'));
        assert!(!md.ends_with('\n'));
    }

    #[test]
    fn test_export_idempotent() {
        let sections = vec![section(
            "Auth",
            vec![
                text_el("h3", "Tokens"),
                el("ul", vec![task_item("Confirm TTL", true)]),
                el("pre", vec![text_el("code", "GET /v1/auth")]),
            ],
        )];
        let opts = ExportOptions::default();

        assert_eq!(
            build_markdown(&sections, &opts),
            build_markdown(&sections, &opts)
        );
    }

    #[test]
    fn test_collapse_blank_lines() {
        assert_eq!(collapse_blank_lines("a\n\n\n\n\nb"), "a\n\nb");
        assert_eq!(collapse_blank_lines("\n\na\n\n"), "a");
    }

    #[test]
    fn test_exported_markdown_parses_as_task_list() {
        use pulldown_cmark::{Event, Options, Parser};

        let sections = vec![section(
            "Orders",
            vec![el(
                "ul",
                vec![task_item("Settle idempotency", true), task_item("List fields", false)],
            )],
        )];
        let md = build_markdown(&sections, &ExportOptions::default());

        let marks: Vec<bool> = Parser::new_ext(&md, Options::ENABLE_TASKLISTS)
            .filter_map(|event| match event {
                Event::TaskListMarker(checked) => Some(checked),
                _ => None,
            })
            .collect();

        assert_eq!(marks, vec![true, false]);
    }
}
