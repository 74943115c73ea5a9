/*!
 * Tests for Marp slide-deck assembly
 */

use lyricdeck::document::{DeckTemplate, SECTION_DELIMITER};
use lyricdeck::partition::{Partition, PartitionSource, SlideCount};
use lyricdeck::fallback_partition;

use crate::common::SAMPLE_LYRICS;

fn partition_of(slides: &[&str]) -> Partition {
    Partition::new(
        slides.iter().map(|s| s.to_string()).collect(),
        PartitionSource::Service,
    )
}

/// The document opens with the Marp front matter
#[test]
fn test_render_shouldStartWithMarpFrontMatter() {
    let document = DeckTemplate::new("Song", "Artist").render(&partition_of(&["x"]));
    let text = document.as_str();

    assert!(text.starts_with("---\nmarp: true\n"));
    assert!(text.contains("theme: default"));
    assert!(text.contains("paginate: false"));
    assert!(text.contains(".lyrics {"));
    assert!(text.contains(".slide-number {"));
}

/// One title section plus one section per slide
#[test]
fn test_render_withNSlides_shouldEmitNPlusOneSections() {
    for n in [1, 5, 25, 50] {
        let partition = fallback_partition(SAMPLE_LYRICS, SlideCount::clamped(n));
        let document = DeckTemplate::new("Song", "Artist").render(&partition);

        assert_eq!(document.lyric_slide_count(), n);
        assert_eq!(document.total_slide_count(), n + 1);

        // Skip the front-matter fences, then count section delimiters
        let body = document
            .as_str()
            .splitn(3, SECTION_DELIMITER)
            .nth(2)
            .expect("document should carry front matter");
        assert_eq!(body.matches("\n---\n").count(), n + 1, "n={}", n);
    }
}

/// Slide numbers ascend from 1 in document order
#[test]
fn test_render_shouldNumberSlidesInAscendingOrder() {
    let document =
        DeckTemplate::new("Song", "Artist").render(&partition_of(&["a", "b", "c", "d"]));
    let text = document.as_str();

    let mut last_position = 0;
    for n in 1..=4 {
        let marker = format!("<div class=\"slide-number\">{}</div>", n);
        let position = text.find(&marker).unwrap_or_else(|| panic!("missing {}", marker));
        assert!(position > last_position, "slide {} out of order", n);
        last_position = position;
    }
}

/// Title and artist land on the lead slide
#[test]
fn test_render_shouldPlaceTitleAndArtistOnLeadSlide() {
    let document = DeckTemplate::new("Night Drive", "The Motors").render(&partition_of(&["x"]));
    let text = document.as_str();

    let lead = text.find("<!-- _class: lead -->").expect("lead slide missing");
    let title = text.find("# Night Drive").expect("title missing");
    let artist = text.find("## The Motors").expect("artist missing");
    let first_lyric = text.find("<div class=\"lyrics\">").expect("lyric slide missing");

    assert!(lead < title && title < artist && artist < first_lyric);
}

/// Each slide carries its partition entry verbatim
#[test]
fn test_render_shouldEmbedPartitionTextVerbatim() {
    let partition = partition_of(&["hello there / how are you", "[Chorus] again"]);
    let document = DeckTemplate::new("S", "A").render(&partition);
    let text = document.as_str();

    assert!(text.contains("<div class=\"lyrics\">hello there / how are you</div>"));
    assert!(text.contains("<div class=\"lyrics\">[Chorus] again</div>"));
}

/// Regeneration replaces the document wholesale
#[test]
fn test_render_calledTwice_shouldProduceIdenticalDocuments() {
    let deck = DeckTemplate::new("Song", "Artist");
    let partition = fallback_partition(SAMPLE_LYRICS, SlideCount::clamped(7));

    assert_eq!(deck.render(&partition), deck.render(&partition));
}
