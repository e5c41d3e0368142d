use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use spanish21::{Card, DealerStep, Phase, Seat, Table};

#[derive(Parser)]
#[command(name = "play", about = "Play Spanish 21 rounds in the terminal")]
struct Args {
    /// Number of 52-card decks in the shoe
    #[arg(long, default_value = "1")]
    decks: u8,

    /// Seed the shoe for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Delay between dealer draws, in milliseconds
    #[arg(long, default_value = "600")]
    dealer_delay_ms: u64,
}

fn main() {
    let args = Args::parse();

    let mut table = match args.seed {
        Some(seed) => Table::with_seed(args.decks, seed),
        None => Table::new(args.decks),
    }
    .unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });

    println!("Spanish 21 — [d]eal, [h]it, [s]tand, [q]uit");
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }

        let result = match line.trim() {
            "d" | "deal" => table.deal(),
            "h" | "hit" => table.hit(),
            "s" | "stand" => table.stand(),
            "q" | "quit" => break,
            "" => continue,
            other => {
                eprintln!("unknown command '{other}'");
                continue;
            }
        };

        if let Err(e) = result {
            eprintln!("{e}");
            continue;
        }

        // The dealer's draws are paced here so each card is visible.
        while table.phase() == Phase::DealerTurn {
            render(&table);
            thread::sleep(Duration::from_millis(args.dealer_delay_ms));
            match table.dealer_step() {
                Ok(DealerStep::Card(_)) => {}
                Ok(DealerStep::Resolved(_)) | Err(_) => break,
            }
        }

        render(&table);
        if table.phase() == Phase::Resolved {
            if let Some(text) = table.last_result() {
                println!("{text}");
            }
            let (wins, losses) = table.session();
            println!("session: {wins} won, {losses} lost");
        }
    }

    let (wins, losses) = table.session();
    println!("final tally: {wins} won, {losses} lost");
}

fn render(table: &Table) {
    let mut dealer: Vec<String> = table
        .visible_dealer_cards()
        .iter()
        .map(|&id| Card::from_id(id).to_string())
        .collect();
    if table.hole_hidden() {
        dealer.insert(0, "??".to_string());
    }
    let player: Vec<String> = table
        .player_cards()
        .iter()
        .map(|&id| Card::from_id(id).to_string())
        .collect();

    if table.hole_hidden() {
        println!("dealer: {}", dealer.join(" "));
    } else {
        let value = table.hand_value(Seat::Dealer);
        println!("dealer: {} ({})", dealer.join(" "), value.total);
    }
    let value = table.hand_value(Seat::Player);
    println!(
        "player: {} ({}{})",
        player.join(" "),
        value.total,
        if value.is_soft { " soft" } else { "" },
    );
    println!("shoe: {} cards left", table.shoe_len());
}
