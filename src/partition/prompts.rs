/*!
 * Prompt templates for lyric splitting.
 *
 * The template instructs the text-completion service to return exactly
 * the requested number of parts, one per line, with no numbering, so the
 * response can be consumed line-by-line by the requester.
 */

/// Prompt template for the split instruction.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The template string with placeholders
    template: String,
}

impl PromptTemplate {
    /// The default prompt for splitting lyrics into slides.
    pub const SLIDE_SPLITTER: &'static str = r#"Split the lyrics below into exactly {slide_count} parts.
Each part must be a natural unit of the song, following these rules:

1. Each part consists of one or two lines.
2. When a part has two lines, separate them with a '/' character.
3. Do not prefix parts with numbers or symbols.
4. Keep content inside brackets.
5. Keep repeated sections as they are.
6. You must produce exactly {slide_count} parts.
7. Even if the lyrics are short, still produce {slide_count} parts.

Lyrics:
{lyrics}

Response format:
first part
second part
...with each part on its own new line."#;

    /// Create a new prompt template.
    pub fn new(template: &str) -> Self {
        Self {
            template: template.to_string(),
        }
    }

    /// Create the default slide splitter template.
    pub fn slide_splitter() -> Self {
        Self::new(Self::SLIDE_SPLITTER)
    }

    /// Render the template with the given variables.
    pub fn render(&self, slide_count: usize, lyrics: &str) -> String {
        self.template
            .replace("{slide_count}", &slide_count.to_string())
            .replace("{lyrics}", lyrics)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::slide_splitter()
    }
}
