//! Example: Adding cards and showing the newest one.
//!
//! Requires a running server:
//!   cargo run -p llamavocs-server -- --database :memory:
//!
//! Run with: cargo run -p llamavocs-client --example study_session

use std::sync::Arc;

use llamavocs_client::{CardView, CreateInput, Error, GetAllInput, LlamaClient};

#[tokio::main]
async fn main() -> llamavocs_client::Result<()> {
    let client = LlamaClient::new();

    // ========== ADD CARDS ==========
    println!("--- Adding cards ---");

    for (front, back, difficulty) in [
        ("hola", "hello", 1),
        ("gato", "cat", 2),
        ("mariposa", "butterfly", 4),
    ] {
        let card = client
            .cards()
            .create(CreateInput::new(front, back, "es").difficulty(difficulty))
            .await?;
        println!("Created {} ({} -> {})", card.id, card.front, card.back);
    }

    // ========== INVALID INPUT ==========
    println!("\n--- Rejected input ---");

    match client
        .cards()
        .create(CreateInput::new("", "nothing", "es").difficulty(9))
        .await
    {
        Ok(card) => println!("Unexpectedly created {}", card.id),
        Err(Error::Remote(err)) => {
            for issue in &err.issues {
                println!("  {issue}");
            }
        }
        Err(e) => return Err(e),
    }

    // ========== LIST ==========
    println!("\n--- Two newest Spanish cards ---");

    for card in client
        .cards()
        .get_all(GetAllInput::new().language("es").limit(2))
        .await?
    {
        println!("  {} -> {} (difficulty {})", card.front, card.back, card.difficulty);
    }

    // ========== VIEW ==========
    println!("\n--- Card view ---");

    let mut view = CardView::new();
    view.mount(Arc::new(client));
    view.settled().await;
    println!("{}", view.panel());

    Ok(())
}
