/*!
 * Deterministic fallback partitioner.
 *
 * Distributes the non-empty lines of a lyrics blob across exactly N
 * buckets using a proportional floor mapping, then repairs any buckets
 * the mapping left empty. Pure and idempotent: same input, same output.
 */

use super::{Partition, PartitionSource, SlideCount};

/// Marker used to fill a slide that would otherwise be empty
pub const PLACEHOLDER: &str = "...";

/// Separator between lines that share a bucket
pub const SEGMENT_SEPARATOR: &str = " / ";

/// Partition lyrics into exactly `count` non-empty slide texts without
/// consulting the external service.
///
/// Lines are assigned to bucket `floor(i * N / K)` where K is the number
/// of non-empty trimmed lines. Lines landing in an occupied bucket are
/// joined with `" / "`. A repair pass then fills empty buckets, borrowing
/// the last segment of the preceding bucket when it holds more than one,
/// and falling back to the `"..."` placeholder otherwise.
pub fn fallback_partition(lyrics: &str, count: SlideCount) -> Partition {
    let total_parts = count.get();
    let lines: Vec<&str> = lyrics
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        return Partition::new(
            vec![PLACEHOLDER.to_string(); total_parts],
            PartitionSource::Fallback,
        );
    }

    let mut buckets: Vec<String> = vec![String::new(); total_parts];
    for (i, line) in lines.iter().enumerate() {
        let target_index = (i * total_parts) / lines.len();
        if buckets[target_index].is_empty() {
            buckets[target_index].push_str(line);
        } else {
            buckets[target_index].push_str(SEGMENT_SEPARATOR);
            buckets[target_index].push_str(line);
        }
    }

    repair_empty_buckets(&mut buckets);

    Partition::new(buckets, PartitionSource::Fallback)
}

/// Fill empty buckets in increasing index order.
///
/// An empty bucket takes the last `" / "`-delimited segment of its
/// immediate predecessor when that predecessor holds more than one
/// segment; otherwise it is filled with the placeholder.
fn repair_empty_buckets(buckets: &mut [String]) {
    for i in 0..buckets.len() {
        if !buckets[i].is_empty() {
            continue;
        }
        if i > 0 && !buckets[i - 1].is_empty() {
            let mut segments: Vec<String> = buckets[i - 1]
                .split(SEGMENT_SEPARATOR)
                .map(|s| s.to_string())
                .collect();
            if segments.len() > 1 {
                // Borrow the neighbor's trailing segment
                if let Some(last) = segments.pop() {
                    buckets[i] = last;
                    buckets[i - 1] = segments.join(SEGMENT_SEPARATOR);
                }
            } else {
                buckets[i] = PLACEHOLDER.to_string();
            }
        } else {
            buckets[i] = PLACEHOLDER.to_string();
        }
    }
}
