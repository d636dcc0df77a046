//! The per-section decode / merge / emit pipeline.

use crate::config::{Config, OutputMode};
use crate::document::{split_documents, Section};
use crate::emit::Marshaler;
use crate::error::Error;
use crate::fieldpath::PathFilter;
use crate::merge::merge;
use crate::sort::KeyOrder;
use crate::value::{self, Value};
use tracing::debug;

/// Marker injected into emitted banner comments, and scrubbed back out of
/// banners captured from input so the tool's own output can be fed back in.
const POWERED_BY: &str = "# powered by ";

/// Decodes one document from text, as YAML or JSON.
pub fn decode(text: &str, json_input: bool) -> Result<Value, Error> {
    if json_input {
        Ok(value::from_json(text)?)
    } else {
        Ok(value::from_yaml(text)?)
    }
}

/// Processes a whole input: splits it into sections, runs each through
/// decode, optional override merge, and emission, and returns the
/// accumulated output text.
///
/// Sections are handled strictly in order; the first failure aborts the run
/// and no output should be flushed by the caller.
pub fn process_input(
    input: &str,
    source_name: Option<&str>,
    overlay: Option<&Value>,
    config: &Config,
) -> Result<String, Error> {
    let order = KeyOrder::new(config.prior_keys.clone());
    let filter = PathFilter::new(config.skip_keys.clone(), config.select_keys.clone());

    let sections = split_documents(input, source_name);
    debug!(sections = sections.len(), "processing input");

    let mut out = String::new();
    for section in &sections {
        process_section(&mut out, section, overlay, config, &order, &filter)?;
    }
    Ok(out)
}

fn process_section(
    out: &mut String,
    section: &Section,
    overlay: Option<&Value>,
    config: &Config,
    order: &KeyOrder,
    filter: &PathFilter,
) -> Result<(), Error> {
    let mut data = decode(&section.body, config.json_input)?;
    if let Some(overlay) = overlay {
        data = merge(data, overlay, order)?;
    }

    let banner = scrub_banner(section.banner.as_deref());

    match config.mode {
        OutputMode::Sorted => {
            let text = Marshaler::new(order, filter)
                .quote_strings(config.quote_strings)
                .array_indent_plus_2(config.array_indent_plus_2)
                .marshal(&data);
            out.push_str("---\n");
            out.push_str(&banner);
            out.push_str("# powered by yamlsort marshal\n");
            out.push_str(&text);
            out.push('\n');
        }
        OutputMode::Normal => {
            let text = value::to_yaml(&data)?;
            out.push_str("---\n");
            out.push_str(&banner);
            out.push_str("# powered by serde_yaml marshal\n");
            out.push_str(&text);
            out.push('\n');
        }
        OutputMode::Json => {
            let text = value::to_json(&data)?;
            out.push_str(&text);
            out.push('\n');
        }
    }

    Ok(())
}

/// Strips any previously injected `# powered by ...` suffix from a banner.
fn scrub_banner(banner: Option<&str>) -> String {
    let banner = banner.unwrap_or_default();
    match banner.find(POWERED_BY) {
        Some(idx) => banner[..idx].to_string(),
        None => banner.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorted_sections_end_to_end() {
        let config = Config::default();
        let out = process_input("---\nb: 2\na: 1\n---\nc: 3\n", None, None, &config).unwrap();
        assert_eq!(
            out,
            "---\n# powered by yamlsort marshal\na: 1\nb: 2\n\n\
             ---\n# powered by yamlsort marshal\nc: 3\n\n"
        );
    }

    #[test]
    fn test_banner_re_emitted_and_scrubbed() {
        let config = Config::default();
        let input = "# hello  # powered by yamlsort marshal\na: 1\n";
        let out = process_input(input, None, None, &config).unwrap();
        assert_eq!(out, "---\n# hello  # powered by yamlsort marshal\na: 1\n\n");
    }

    #[test]
    fn test_source_name_banner() {
        let config = Config::default();
        let out = process_input("a: 1\n", Some("in.yaml"), None, &config).unwrap();
        assert_eq!(out, "---\n# in.yaml  # powered by yamlsort marshal\na: 1\n\n");
    }

    #[test]
    fn test_override_applied_to_every_section() {
        let config = Config::default();
        let overlay = decode("a: 9\n", false).unwrap();
        let out =
            process_input("---\na: 1\nb: 2\n---\na: 3\n", None, Some(&overlay), &config).unwrap();
        assert_eq!(
            out,
            "---\n# powered by yamlsort marshal\na: 9\nb: 2\n\n\
             ---\n# powered by yamlsort marshal\na: 9\n\n"
        );
    }

    #[test]
    fn test_json_output_mode() {
        let config = Config {
            mode: OutputMode::Json,
            ..Config::default()
        };
        let out = process_input("a: 1\n", None, None, &config).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_json_input_mode() {
        let config = Config {
            json_input: true,
            ..Config::default()
        };
        let out = process_input("{\"b\": 2, \"a\": 1}\n", None, None, &config).unwrap();
        assert_eq!(out, "---\n# powered by yamlsort marshal\na: 1\nb: 2\n\n");
    }

    #[test]
    fn test_normal_output_mode() {
        let config = Config {
            mode: OutputMode::Normal,
            ..Config::default()
        };
        let out = process_input("b: 2\na: 1\n", None, None, &config).unwrap();
        assert!(out.starts_with("---\n# powered by serde_yaml marshal\n"));
        assert!(out.contains("a: 1\n"));
        assert!(out.contains("b: 2\n"));
    }

    #[test]
    fn test_decode_error_aborts() {
        let config = Config::default();
        assert!(process_input("a: [unclosed\n", None, None, &config).is_err());
    }
}
