//! matchpool - Demo driver binary
//!
//! Thin driver over the scheduler core: admits a demo batch, drains
//! pairings until none remain, and prints the run receipt. All loop policy
//! lives here; the core only exposes single-step operations.

use matchpool::Scheduler;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("===========================================");
    println!("  matchpool - seed-ordered matchmaking");
    println!("===========================================");
    println!();

    let mut scheduler = Scheduler::with_capacity(16);

    // Demo admission batch
    let batch = [(101u64, 3u64), (102, 1), (103, 2), (104, 8), (105, 5)];
    for (id, seed) in batch {
        match scheduler.admit(id, seed) {
            Ok(()) => println!("Admitted {} (seed {})", id, seed),
            Err(err) => eprintln!("Admission failed: {}", err),
        }
    }
    println!();

    // Drain all possible pairings
    while let Some(pairing) = scheduler.next_pairing() {
        println!("{}", pairing);
    }
    println!();

    let receipt = scheduler.receipt();
    println!("Run complete:");
    println!("  Admitted:  {}", receipt.participants_admitted);
    println!("  Pairings:  {}", receipt.pairings_produced);
    println!("  Waiting:   {}", receipt.waiting);
    println!("  Ledger root: {}", receipt.ledger_root_hex());
}
