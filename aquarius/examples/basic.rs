// Example: diff two snapshots and replay the script on a mirrored list.
use aquarius::{DifferStrategy, UpdateLog, strategies};

fn main() {
    let old = ["inbox", "drafts", "sent", "spam"];
    let new = ["sent", "inbox", "archive", "drafts"];

    let strategy = strategies::with_fns::<&str, _, _>(|a, b| a == b, |a, b| a == b);
    let script = strategy.calculate_diff(&old[..], &new[..]);
    for update in &script {
        println!("{update:?}");
    }

    let mut log = UpdateLog::new();
    script.dispatch_updates_to(&mut log);
    println!("dispatched {} updates", log.updates().len());

    let mut mirror: Vec<String> = old.iter().map(|s| s.to_string()).collect();
    script
        .apply_to(
            &mut mirror,
            |i| new[i].to_string(),
            |i, slot, _| *slot = new[i].to_string(),
        )
        .expect("script fits the old list");
    println!("mirror={mirror:?}");
}
