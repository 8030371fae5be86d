/// Lines of a JSDoc block for `text`. Blank text yields no block.
pub fn lines(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.lines().map(|line| line.trim_end().to_string()).collect()
}

/// Description followed by a documentation link line, either part optional.
pub fn describe(description: &str, url: &str) -> String {
    match (description.trim(), url.trim()) {
        ("", "") => String::new(),
        (text, "") => text.to_string(),
        ("", link) => documentation_link(link),
        (text, link) => format!("{text}\n\n{}", documentation_link(link)),
    }
}

/// `[Documentation](url)`, the trailing line of every documented declaration.
pub fn documentation_link(url: &str) -> String {
    format!("[Documentation]({url})")
}
