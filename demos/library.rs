//! Library wait list demo
//!
//! Run with: cargo run --example library
//!
//! Set `RUST_LOG=claimcast=debug` to see queueing and per-delivery logs.
//!
//! A book can only be checked out by one patron. Patrons who ask for it while
//! it is out go on the wait list. When the book is returned, everyone on the
//! wait list gets a phone call, and the first to come back for it gets it.
//! The wait list is not first-come, first-served.

use std::sync::Arc;

use async_trait::async_trait;
use claimcast::{
    BroadcastService, ChannelDelivery, ClaimResult, Deliver, DeliveryError, Inbox, Notice,
    ResourceId, Subscriber,
};
use tracing_subscriber::EnvFilter;

/// Reaches a patron by "phone": prints the greeting, then forwards the
/// notice to the patron's own task.
struct PhoneCall {
    name: String,
    line: ChannelDelivery,
}

#[async_trait]
impl Deliver for PhoneCall {
    async fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        println!("  [phone] Hello, {}. {}", self.name, notice);
        self.line.deliver(notice).await
    }
}

fn patron(name: &str) -> (Subscriber, Inbox) {
    let (line, inbox) = ChannelDelivery::new();
    let phone = PhoneCall {
        name: name.to_string(),
        line,
    };
    (Subscriber::new(name, phone), inbox)
}

async fn checkout(service: &BroadcastService, book: &ResourceId, who: &Subscriber) {
    match service.request(book, who).await {
        ClaimResult::Claimed => {
            println!("{}, you have successfully checked out {}.", who.id(), book)
        }
        ClaimResult::Queued => {
            println!("Sorry, {}. {} is already checked out.", who.id(), book);
            println!("We will add you to the wait list.");
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("claimcast=info")),
        )
        .init();

    let library = Arc::new(BroadcastService::new());
    let dune = ResourceId::new("Dune");

    let (bobby, _bobby_inbox) = patron("Bobby Tables");
    let (billy, billy_inbox) = patron("Billy");
    let (isaac, isaac_inbox) = patron("Isaac");

    checkout(&library, &dune, &bobby).await;
    checkout(&library, &dune, &billy).await;
    checkout(&library, &dune, &isaac).await;

    let waiting: Vec<String> = library
        .waiting(&dune)
        .await
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Wait list for {}: [{}]", dune, waiting.join(", "));

    // Each waiting patron heads back to the library as soon as they hear
    let mut racers = Vec::new();
    for (who, mut inbox) in [(billy, billy_inbox), (isaac, isaac_inbox)] {
        let library = Arc::clone(&library);
        let dune = dune.clone();
        racers.push(tokio::spawn(async move {
            if inbox.recv().await.is_some() {
                checkout(&library, &dune, &who).await;
            }
        }));
    }

    println!("{} returns {}.", bobby.id(), dune);
    let outcome = library.release(&dune, bobby.id()).await?;
    println!(
        "Notified {} patron(s), {} unreachable.",
        outcome.report.delivered().len(),
        outcome.report.failed().len()
    );

    for racer in racers {
        racer.await?;
    }

    if let Some(holder) = library.holder(&dune).await {
        println!("{} now has {}.", holder, dune);
    }
    if let Some(stats) = library.stats(&dune).await {
        println!(
            "Stats: claims={} releases={} still waiting={}",
            stats.claims, stats.releases, stats.waiting_count
        );
    }

    Ok(())
}
