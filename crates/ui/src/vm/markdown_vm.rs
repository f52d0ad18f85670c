use std::collections::{HashMap, HashSet};

/// Renders lesson text to sanitized HTML. Fenced code blocks become
/// `<pre><code>`; everything else is plain prose, lists and inline code.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let normalized = normalize_markdown(input);
    let parser = pulldown_cmark::Parser::new_ext(&normalized, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "em", "strong", "b", "i", "code", "pre", "blockquote", "ul",
        "ol", "li", "a", "table", "thead", "tbody", "tr", "th", "td", "del",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());
    attributes.insert("code", ["class"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

/// Lesson text is authored inside an indented literal; strip trailing
/// whitespace, collapse blank runs and drop leading blank lines so stray
/// indentation never turns prose into a code block.
#[must_use]
pub fn normalize_markdown(input: &str) -> String {
    let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    let mut blank_streak = 0usize;

    for line in normalized.split('\n') {
        let trimmed = line.trim_end_matches([' ', '\t']).to_string();
        if trimmed.is_empty() {
            if lines.is_empty() {
                continue;
            }
            blank_streak += 1;
            if blank_streak > 1 {
                continue;
            }
        } else {
            blank_streak = 0;
        }
        lines.push(trimmed);
    }

    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }

    let mut output = lines.join("\n");
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::{markdown_to_html, normalize_markdown};

    #[test]
    fn normalize_markdown_trims_and_collapses_blank_lines() {
        let input = "\n  \nLine one  \r\n        \r\n\r\nLine two\t\r\n\r\n";
        let output = normalize_markdown(input);
        assert_eq!(output, "Line one\n\nLine two\n");
    }

    #[test]
    fn fenced_python_becomes_a_code_block() {
        let html = markdown_to_html("Example:\n```python\nx = 5\nprint(x)\n```\nDone.");

        assert!(html.contains("<p>Example:</p>"));
        assert!(html.contains("<pre><code class=\"language-python\">x = 5\nprint(x)\n</code></pre>"));
        assert!(html.contains("<p>Done.</p>"));
    }

    #[test]
    fn star_lists_and_inline_code_render() {
        let html = markdown_to_html("Operators:\n* `+` Addition\n* `-` Subtraction");

        assert!(html.contains("<ul>"));
        assert!(html.contains("<li><code>+</code> Addition</li>"));
    }

    #[test]
    fn markdown_to_html_sanitizes_links_and_scripts() {
        let html = markdown_to_html("[Link](javascript:alert(1))\n\n<script>alert(1)</script>");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("<script>"));
    }
}
