//! Processed event id tracking example.
//!
//! A consumer records the ids of the events it has handled. Because the set
//! is persistent, each checkpoint is just a cheap clone of the current
//! version, and checkpoints can be compared with set algebra later on.

use persistent_avl_set::AvlSet;

fn main() {
    println!("=== Event Id Tracking Example ===\n");

    let mut processed: AvlSet<u64> = AvlSet::new();
    let mut checkpoints = Vec::new();

    // Process events in order (mostly sequential)
    println!("Processing events 1000-1099...");
    for id in 1000..1100 {
        processed = processed.add(id);
    }
    checkpoints.push(processed.clone());

    // Another batch with a gap (a failed event)
    println!("Processing events 1101-1150 (gap at 1100)...");
    for id in 1101..=1150 {
        processed = processed.add(id);
    }
    checkpoints.push(processed.clone());

    println!("\nTracking stats:");
    println!("  Total processed: {}", processed.cardinal());
    println!("  Earliest id: {:?}", processed.min_elt_opt());
    println!("  Latest id: {:?}", processed.max_elt_opt());

    println!("\nId checks:");
    println!("  Event 1050 processed: {}", processed.contains(&1050));
    println!("  Event 1100 processed: {}", processed.contains(&1100));

    println!("\nDetecting gaps:");
    detect_gaps(&processed, 1000, 1150);

    // Range query over a window of ids
    println!("\nRange query (ids 1010-1020):");
    let window: Vec<u64> = processed.range(1010..=1020).copied().collect();
    println!("  Processed ids: {:?}", window);
    println!("  Count: {}", window.len());

    // Catch up on the gap
    println!("\nProcessing missing event 1100...");
    processed = processed.add(1100);
    checkpoints.push(processed.clone());
    println!("  Event 1100 now processed: {}", processed.contains(&1100));

    println!("\nVerifying no gaps in range 1000-1150:");
    detect_gaps(&processed, 1000, 1150);

    // Re-processing the same id changes nothing, not even the tree
    println!("\nIdempotent processing:");
    let again = processed.add(1050);
    println!("  Re-adding event 1050 shares the tree: {}", again.ptr_eq(&processed));
    println!("  Total count unchanged: {}", again.cardinal());

    // Compare checkpoints
    println!("\nCheckpoint history:");
    for (i, pair) in checkpoints.windows(2).enumerate() {
        let new_ids = pair[1].diff(&pair[0]);
        println!(
            "  checkpoint {} -> {}: {} new id(s), first {:?}",
            i,
            i + 1,
            new_ids.cardinal(),
            new_ids.min_elt_opt()
        );
    }

    // Drop everything below a watermark; older checkpoints keep their data
    println!("\nCleanup old ids:");
    let watermark = 1050;
    let (old, kept) = processed.split_at(&watermark);
    println!("  Dropped {} ids (< {})", old.cardinal(), watermark);
    println!("  Remaining ids: {}", kept.cardinal());
    println!("  New earliest id: {:?}", kept.min_elt_opt());
    println!(
        "  First checkpoint still holds {} ids",
        checkpoints[0].cardinal()
    );

    println!("\n=== Example Complete ===");
}

/// Detect and report gaps in processed ids within `start..=end`.
fn detect_gaps(ids: &AvlSet<u64>, start: u64, end: u64) {
    let mut gaps = Vec::new();
    let mut current = start;

    while current <= end {
        if !ids.contains(&current) {
            let gap_start = current;

            // Next processed id after the hole bounds the gap
            let gap_end = match ids.find_first_opt(|x| *x > current) {
                Some(&next) if next <= end => next - 1,
                _ => end,
            };

            gaps.push((gap_start, gap_end));
            current = gap_end + 1;
        } else {
            current += 1;
        }
    }

    if gaps.is_empty() {
        println!("  No gaps found in range {}-{}", start, end);
    } else {
        println!("  Found {} gap(s):", gaps.len());
        for (gap_start, gap_end) in gaps {
            if gap_start == gap_end {
                println!("    Missing id: {}", gap_start);
            } else {
                println!("    Missing id range: {}-{}", gap_start, gap_end);
            }
        }
    }
}
