//! URL construction and snippet rendering

use super::types::ValidatedInput;

/// Default OpenGraph image service host
pub const DEFAULT_IMAGE_HOST: &str = "https://opengraph.githubassets.com";

/// Base of every target URL
pub const GITHUB_HOST: &str = "https://github.com";

/// Alt text used by every snippet format
pub const ALT_TEXT: &str = "GitHub Card";

/// Everything derived from one validated form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub image_url: String,
    pub target_url: String,
    pub markdown: String,
    pub restructured_text: String,
    pub asciidoc: String,
    pub html: String,
}

impl GeneratedOutput {
    /// Get the string for one of the copy rows
    pub fn get(&self, format: OutputFormat) -> &str {
        match format {
            OutputFormat::Url => &self.image_url,
            OutputFormat::Markdown => &self.markdown,
            OutputFormat::RestructuredText => &self.restructured_text,
            OutputFormat::AsciiDoc => &self.asciidoc,
            OutputFormat::Html => &self.html,
        }
    }
}

/// Copyable representations, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Url,
    Markdown,
    RestructuredText,
    AsciiDoc,
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Url,
        OutputFormat::Markdown,
        OutputFormat::RestructuredText,
        OutputFormat::AsciiDoc,
        OutputFormat::Html,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::Markdown => "Markdown",
            Self::RestructuredText => "reStructuredText",
            Self::AsciiDoc => "AsciiDoc",
            Self::Html => "HTML",
        }
    }
}

/// Builds card URLs against a given image host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRenderer {
    image_host: String,
}

impl Default for CardRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_HOST)
    }
}

impl CardRenderer {
    pub fn new(image_host: &str) -> Self {
        Self {
            image_host: image_host.trim_end_matches('/').to_string(),
        }
    }

    /// Build the image URL, the target URL, and every snippet for `input`
    pub fn build_urls(&self, input: &ValidatedInput) -> GeneratedOutput {
        let suffix = input.path_suffix();
        let image_url = format!(
            "{}/{}{}",
            self.image_host,
            input.card_type.image_id(),
            suffix
        );
        let target_url = format!("{GITHUB_HOST}{suffix}");

        GeneratedOutput {
            markdown: markdown(&image_url, &target_url),
            restructured_text: restructured_text(&image_url, &target_url),
            asciidoc: asciidoc(&image_url, &target_url),
            html: html(&image_url, &target_url),
            image_url,
            target_url,
        }
    }
}

fn markdown(image_url: &str, target_url: &str) -> String {
    format!("[![{ALT_TEXT}]({image_url})]({target_url})")
}

fn restructured_text(image_url: &str, target_url: &str) -> String {
    format!(".. image:: {image_url}\n   :alt: {ALT_TEXT}\n   :target: {target_url}")
}

fn asciidoc(image_url: &str, target_url: &str) -> String {
    format!("image:{image_url}[{ALT_TEXT},link={target_url}]")
}

fn html(image_url: &str, target_url: &str) -> String {
    format!(
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><img src=\"{}\" alt=\"{ALT_TEXT}\" /></a>",
        escape_attr(target_url),
        escape_attr(image_url)
    )
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
