//! Example usage of buckets: several independent lists, one generator.
//!
//! Bucket keys carry a namespace tag, so a single string-ordered table can
//! hold many lists at once without their keys interleaving.

use std::sync::Arc;

use lexorank::{Bucket, BucketConfig, BucketKey, KeyGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One generator shared by every bucket
    let generator = Arc::new(KeyGenerator::new()?);

    let todo = Bucket::with_config(BucketConfig {
        default_tag: "todo".to_string(),
        generator: Some(Arc::clone(&generator)),
        ..BucketConfig::default()
    })?;
    let done = Bucket::with_config(BucketConfig {
        default_tag: "done".to_string(),
        generator: Some(Arc::clone(&generator)),
        ..BucketConfig::default()
    })?;

    // Each bucket starts its own sequence under its own tag
    let mut todo_keys: Vec<BucketKey> = Vec::new();
    let mut last: Option<BucketKey> = None;
    for _ in 0..3 {
        let key = todo.between(last.as_ref(), None)?;
        last = Some(key.clone());
        todo_keys.push(key);
    }
    println!("todo keys: {:?}", todo_keys);

    let first_done = done.between(None, None)?;
    println!("done keys: {:?}", [&first_done]);

    // Insert between two existing todo items
    let wedged = todo.between(Some(&todo_keys[0]), Some(&todo_keys[1]))?;
    println!(
        "between {} and {}: {}",
        todo_keys[0], todo_keys[1], wedged
    );

    // A single table ordered by plain string comparison keeps the lists
    // apart: every "done|..." key sorts away from every "todo|..." key
    let mut table: Vec<&BucketKey> = todo_keys.iter().chain([&wedged, &first_done]).collect();
    table.sort();
    println!("combined table order:");
    for key in table {
        println!("  {}", key);
    }

    // Mixing tags in one call is a hard error
    match todo.between(Some(&todo_keys[0]), Some(&first_done)) {
        Err(err) => println!("mixing tags fails: {}", err),
        Ok(key) => unreachable!("unexpected key {}", key),
    }

    Ok(())
}
