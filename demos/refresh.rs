//! Two "components" share a bus: a table that refetches on `dataRefresh` /
//! `userUpdate`, and a badge that counts `userUpdate` asynchronously.
//!
//! Run with `RUST_LOG=custom_events=debug` to see subscribe/unsubscribe logs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use custom_events::{dispatch_custom_event, Bus, BusConfig, Callback, ListenerRegistrar};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let bus = Bus::builder(BusConfig::default()).build();

    let fetches = Arc::new(AtomicU64::new(0));
    let refetch = Callback::new({
        let fetches = Arc::clone(&fetches);
        move || {
            let n = fetches.fetch_add(1, Ordering::Relaxed) + 1;
            println!("table: refetch #{n}");
        }
    });

    let badge = Arc::new(AtomicU64::new(0));
    let bump_badge = Callback::future({
        let badge = Arc::clone(&badge);
        move || {
            let badge = Arc::clone(&badge);
            async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                let n = badge.fetch_add(1, Ordering::Relaxed) + 1;
                println!("badge: {n} update(s)");
            }
        }
    });

    let flaky = Callback::fallible(|| Err::<(), _>("backend unavailable"));

    let mut table = ListenerRegistrar::new(bus.clone());
    let mut header = ListenerRegistrar::new(bus.clone());
    let mut status = ListenerRegistrar::new(bus.clone());

    // mount
    table.activate(["dataRefresh", "userUpdate"], &refetch);
    header.activate("userUpdate", &bump_badge);
    status.activate("dataRefresh", &flaky);

    dispatch_custom_event(bus.as_ref(), "dataRefresh");
    dispatch_custom_event(bus.as_ref(), ["userUpdate", "userUpdate"]);

    // re-render with identical inputs: nothing is re-subscribed
    let before = table.handler_id();
    table.activate(vec!["dataRefresh".to_string(), "userUpdate".to_string()], &refetch);
    assert_eq!(before, table.handler_id());

    // unmount the table; later refreshes only reach the status listener
    table.unmount();
    dispatch_custom_event(bus.as_ref(), "dataRefresh");

    tokio::time::sleep(Duration::from_millis(200)).await;
    println!(
        "done: fetches={} badge={}",
        fetches.load(Ordering::Relaxed),
        badge.load(Ordering::Relaxed)
    );
}
