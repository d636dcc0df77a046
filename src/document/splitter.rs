//! Splitting input text into `---`-delimited sections.

/// One `---`-delimited document section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Leading `#` comment captured from the section's first line, or a
    /// synthetic `# <file>` banner for the first section of a named input.
    /// Carries a two-space suffix so emitted comments can be appended.
    pub banner: Option<String>,
    /// The section's text, including any leading comment line.
    pub body: String,
}

/// Splits input into sections on lines exactly equal to `---`.
///
/// Blank sections are dropped. When `source_name` is given, the first
/// section gets a `# <source_name>` banner unless its own first line is a
/// `#` comment, which always takes precedence.
pub fn split_documents(input: &str, source_name: Option<&str>) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut body = String::new();
    let mut banner = source_name.map(|name| format!("# {}  ", name));
    let mut line_count = 0;

    for line in input.lines() {
        if line == "---" {
            line_count = 0;
            if !body.trim().is_empty() {
                sections.push(Section {
                    banner: banner.take(),
                    body: std::mem::take(&mut body),
                });
            } else {
                body.clear();
            }
            continue;
        }
        line_count += 1;
        if line_count == 1 && line.starts_with('#') {
            banner = Some(format!("{}  ", line));
        }
        body.push_str(line);
        body.push('\n');
    }
    if !body.trim().is_empty() {
        sections.push(Section {
            banner: banner.take(),
            body,
        });
    }

    sections
}
