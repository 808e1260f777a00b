//! Basic usage example for persistent-avl-set.
//!
//! This example walks through the core operations and shows that every
//! version of a set stays usable after it has been "modified".

use persistent_avl_set::{AvlSet, Reversed};

fn main() {
    println!("=== Persistent AVL Set - Basic Usage Example ===\n");

    // Start from the empty set and add elements one at a time
    let empty: AvlSet<u64> = AvlSet::new();
    println!("Created empty set (is_empty = {})", empty.is_empty());

    println!("\nAdding keys: 100, 200, 150, 300");
    let v1 = empty.add(100).add(200).add(150).add(300);
    println!("Set now contains {} keys", v1.cardinal());

    // Check membership
    println!("\nMembership checks:");
    println!("  contains(150): {}", v1.contains(&150));
    println!("  contains(999): {}", v1.contains(&999));

    // Extremes
    println!("\nMin/Max:");
    println!("  min: {:?}", v1.min_elt());
    println!("  max: {:?}", v1.max_elt());
    println!("  min of empty: {:?}", empty.min_elt());

    // Monotone searches stand in for successor/predecessor
    println!("\nNavigation:");
    println!("  first > 100: {:?}", v1.find_first_opt(|x| *x > 100));
    println!("  first > 175: {:?}", v1.find_first_opt(|x| *x > 175));
    println!("  last < 200: {:?}", v1.find_last_opt(|x| *x < 200));
    println!("  last < 175: {:?}", v1.find_last_opt(|x| *x < 175));

    // Iterate in sorted order
    println!("\nIteration (sorted order):");
    print!("  Keys: ");
    for key in &v1 {
        print!("{} ", key);
    }
    println!();

    // Range queries
    println!("\nRange queries:");
    let range: Vec<u64> = v1.range(100..200).copied().collect();
    println!("  range(100..200): {:?}", range);

    let range: Vec<u64> = v1.range(100..=200).copied().collect();
    println!("  range(100..=200): {:?}", range);

    // Remove a key: v1 is untouched
    println!("\nRemoving key 150:");
    let v2 = v1.remove(&150);
    println!("  v2 contains(150): {}", v2.contains(&150));
    println!("  v1 contains(150): {}", v1.contains(&150));
    println!("  v1 = {:?}", v1);
    println!("  v2 = {:?}", v2);

    // No-op updates return the very same tree
    println!("\nNo-op updates:");
    println!("  v1.add(100) shares v1: {}", v1.add(100).ptr_eq(&v1));
    println!("  v1.remove(&7) shares v1: {}", v1.remove(&7).ptr_eq(&v1));

    // Whole-set algebra
    println!("\n=== Set Algebra ===\n");
    let a = AvlSet::of_list(vec![1, 2, 3]);
    let b = AvlSet::of_list(vec![3, 4, 5]);
    println!("  a = {:?}, b = {:?}", a, b);
    println!("  a | b = {:?}", &a | &b);
    println!("  a & b = {:?}", &a & &b);
    println!("  a - b = {:?}", &a - &b);
    println!("  a ^ b = {:?}", &a ^ &b);
    println!("  a subset of a | b: {}", a.subset(&(&a | &b)));

    // Split and join
    println!("\n=== Split / Join ===\n");
    let big: AvlSet<u64> = (0..1_000).collect();
    let (lo, present, hi) = big.split(&500);
    println!(
        "  split(500): {} below, present = {}, {} above",
        lo.cardinal(),
        present,
        hi.cardinal()
    );
    let rejoined = AvlSet::join(&lo, 500, &hi);
    println!("  join restores the set: {}", rejoined == big);
    println!("  height of a 1000-element set: {}", big.height());

    // Custom order
    println!("\n=== Custom Order ===\n");
    let desc = AvlSet::of_list_by(vec![5, 1, 4, 2, 3], Reversed);
    println!("  descending: {:?}", desc.elements());

    println!("\n=== Example Complete ===");
}
