//! Example usage of the key generator for a manually reorderable list.
//!
//! This example maintains a small task list sorted purely by key and shows
//! that moving an item never rewrites any other item's key.

use lexorank::{Key, KeyGenerator};

fn print_list(items: &[(Key, &str)]) {
    for (key, title) in items {
        println!("  {:<10} {}", key.to_string(), title);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let generator = KeyGenerator::new()?;

    // Build an initial list by appending: each key comes after the last
    let mut items: Vec<(Key, &str)> = Vec::new();
    let mut last: Option<Key> = None;
    for title in ["write report", "review PRs", "plan sprint", "send invoices"] {
        let key = generator.between(last.as_ref(), None)?;
        last = Some(key.clone());
        items.push((key, title));
    }

    println!("Initial list:");
    print_list(&items);

    // Move "send invoices" to the top: generate a key before the first
    // item and leave everything else untouched
    let (moved_key, moved_title) = items.pop().expect("list is not empty");
    let first_key = &items[0].0;
    let new_key = generator.before(first_key)?;
    println!(
        "Moving {:?} to the top: {} -> {}",
        moved_title, moved_key, new_key
    );
    items.insert(0, (new_key, moved_title));
    print_list(&items);

    // Drop "plan sprint" between the first two items
    let wedged = generator.between(Some(&items[0].0), Some(&items[1].0))?;
    let (_, title) = items.remove(3);
    println!("Moving {:?} between the first two items: {}", title, wedged);
    items.insert(1, (wedged, title));
    print_list(&items);

    // The list stays sorted by key alone
    let sorted = items.windows(2).all(|pair| pair[0].0 < pair[1].0);
    println!("List sorted by key: {}", sorted);

    Ok(())
}
