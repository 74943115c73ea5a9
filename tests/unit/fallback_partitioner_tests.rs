/*!
 * Tests for the deterministic fallback partitioner
 */

use lyricdeck::partition::fallback::{fallback_partition, PLACEHOLDER, SEGMENT_SEPARATOR};
use lyricdeck::partition::{PartitionSource, SlideCount};

use crate::common::SAMPLE_LYRICS;

/// One line per slide when counts match
#[test]
fn test_fallbackPartition_withMatchingCounts_shouldAssignOneLinePerSlide() {
    let partition = fallback_partition("a\nb\nc", SlideCount::clamped(3));
    assert_eq!(partition.slides, vec!["a", "b", "c"]);
    assert_eq!(partition.source, PartitionSource::Fallback);
}

/// Two lines into four slides leaves gaps for the repair pass
#[test]
fn test_fallbackPartition_withTwoLinesIntoFourSlides_shouldRepairGaps() {
    let partition = fallback_partition("a\nb", SlideCount::clamped(4));
    assert_eq!(partition.slides, vec!["a", PLACEHOLDER, "b", PLACEHOLDER]);
}

/// Lines sharing a bucket are joined with the separator
#[test]
fn test_fallbackPartition_withFourLinesIntoTwoSlides_shouldJoinPairs() {
    let partition = fallback_partition("a\nb\nc\nd", SlideCount::clamped(2));
    assert_eq!(partition.slides, vec!["a / b", "c / d"]);
}

/// Empty input yields all placeholders
#[test]
fn test_fallbackPartition_withNoLines_shouldReturnAllPlaceholders() {
    let partition = fallback_partition("", SlideCount::clamped(5));
    assert_eq!(partition.slides, vec![PLACEHOLDER; 5]);

    let whitespace = fallback_partition(" \n\t\n  ", SlideCount::clamped(2));
    assert_eq!(whitespace.slides, vec![PLACEHOLDER; 2]);
}

/// Output length is exactly N and no entry is empty, for every N in range
#[test]
fn test_fallbackPartition_forAllSlideCounts_shouldSatisfyInvariants() {
    let inputs = ["", "solo line", "a\nb", SAMPLE_LYRICS];

    for lyrics in inputs {
        for n in 1..=50 {
            let partition = fallback_partition(lyrics, SlideCount::clamped(n));
            assert_eq!(partition.slides.len(), n, "lyrics={:?} n={}", lyrics, n);
            assert!(
                partition.slides.iter().all(|slide| !slide.is_empty()),
                "empty slide for lyrics={:?} n={}",
                lyrics,
                n
            );
        }
    }
}

/// Same input, same output
#[test]
fn test_fallbackPartition_withSameInput_shouldBeIdempotent() {
    for n in [1, 3, 7, 25, 50] {
        let count = SlideCount::clamped(n);
        assert_eq!(
            fallback_partition(SAMPLE_LYRICS, count),
            fallback_partition(SAMPLE_LYRICS, count)
        );
    }
}

/// N slightly above K exercises the repair pass without losing content
#[test]
fn test_fallbackPartition_withCountSlightlyAboveLineCount_shouldKeepEveryLine() {
    let lines: Vec<&str> = SAMPLE_LYRICS.lines().collect();
    let line_count = lines.len();

    for n in line_count + 1..=line_count + 5 {
        let partition = fallback_partition(SAMPLE_LYRICS, SlideCount::clamped(n));
        let joined = partition.slides.join(SEGMENT_SEPARATOR);
        for line in &lines {
            assert!(joined.contains(line), "lost {:?} at n={}", line, n);
        }
    }
}

/// Bracketed annotations and repeated lines survive untouched
#[test]
fn test_fallbackPartition_withAnnotationsAndRepeats_shouldPreserveThem() {
    let partition = fallback_partition(SAMPLE_LYRICS, SlideCount::clamped(7));

    assert!(partition.slides.iter().any(|s| s.contains("[Chorus]")));
    let repeats = partition
        .slides
        .iter()
        .flat_map(|s| s.split(SEGMENT_SEPARATOR))
        .filter(|s| *s == "Hold on, hold on tonight")
        .count();
    assert_eq!(repeats, 2);
}

/// Slide order follows line order
#[test]
fn test_fallbackPartition_shouldPreserveLineOrder() {
    let partition = fallback_partition("one\ntwo\nthree\nfour\nfive\nsix", SlideCount::clamped(3));
    assert_eq!(partition.slides, vec!["one / two", "three / four", "five / six"]);
}
