/*!
 * Marp slide-deck assembly.
 *
 * Turns a title, an artist, and a partition into a single Marp markup
 * document: a front-matter header with deck-wide styling, a title slide,
 * and one numbered lyric slide per partition entry. Regenerated wholesale
 * on every request; never mutated incrementally.
 */

use crate::partition::Partition;

/// Line that separates Marp sections
pub const SECTION_DELIMITER: &str = "---";

/// Front-matter header with deck-wide styling directives
const DECK_HEADER: &str = r#"---
marp: true
theme: default
paginate: false
size: 16:9
style: |
  .lyrics {
    position: absolute;
    bottom: 50px;
    left: 0;
    right: 0;
    text-align: center;
    font-size: 36px;
    font-weight: bold;
    color: #333;
  }
  .slide-number {
    position: absolute;
    bottom: 20px;
    right: 20px;
    font-size: 14px;
    color: #888;
  }
  section {
    background-color:;
    display: flex;
    justify-content: center;
    align-items: center;
  }
---
"#;

/// A fully assembled slide-deck document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideDocument {
    /// The Marp markup text
    text: String,
    /// Number of lyric slides (excluding the title slide)
    lyric_slide_count: usize,
}

impl SlideDocument {
    /// The Marp markup text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the document, returning the markup text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of lyric slides in the deck
    pub fn lyric_slide_count(&self) -> usize {
        self.lyric_slide_count
    }

    /// Total number of slides, title slide included
    pub fn total_slide_count(&self) -> usize {
        self.lyric_slide_count + 1
    }
}

impl std::fmt::Display for SlideDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Title-slide metadata for a deck
#[derive(Debug, Clone, Default)]
pub struct DeckTemplate {
    /// Song title
    pub title: String,
    /// Artist name
    pub artist: String,
}

impl DeckTemplate {
    /// Create a deck template for a song
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Assemble the Marp document for a partition
    pub fn render(&self, partition: &Partition) -> SlideDocument {
        let mut text = String::from(DECK_HEADER);

        // Title slide
        text.push_str("\n<!-- _class: lead -->\n");
        text.push_str(&format!("# {}\n", self.title));
        text.push_str(&format!("## {}\n", self.artist));
        text.push_str(&format!("\n{}\n\n", SECTION_DELIMITER));

        // Lyric slides, numbered from 1
        for (index, lyric) in partition.slides.iter().enumerate() {
            text.push_str(&format!("<div class=\"slide-number\">{}</div>\n", index + 1));
            text.push_str(&format!("<div class=\"lyrics\">{}</div>\n", lyric));
            text.push_str(&format!("\n{}\n\n", SECTION_DELIMITER));
        }

        SlideDocument {
            text,
            lyric_slide_count: partition.slides.len(),
        }
    }
}
