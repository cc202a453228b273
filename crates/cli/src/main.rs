use anyhow::{Context, Result};
use mathdeck_core::{
    hand_record, public_view, Card, Event, EventBus, Game, Hand, HandSink, ReplacementChooser,
    ReplacementKind, RngState,
};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

const DEFAULT_PLAYERS: usize = 6;

#[derive(Debug, Clone)]
struct CliOptions {
    players: usize,
    seed: Option<u64>,
    dir: PathBuf,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut players = DEFAULT_PLAYERS;
    let mut seed = None;
    let mut dir = PathBuf::from(".");
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--players" | "-p" => {
                if let Some(value) = args.get(idx + 1) {
                    if let Ok(parsed) = value.parse::<usize>() {
                        players = parsed;
                    }
                    idx += 1;
                }
            }
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--dir" => {
                if let Some(value) = args.get(idx + 1) {
                    dir = PathBuf::from(value);
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    CliOptions { players, seed, dir }
}

/// Writes `player_<i>.txt` under the chosen directory, overwriting the whole
/// record on every call.
struct FileHandSink {
    dir: PathBuf,
}

impl HandSink for FileHandSink {
    fn persist_hand(&mut self, player: usize, hand: &Hand) -> Result<(), String> {
        let path = self.dir.join(format!("player_{player}.txt"));
        fs::write(&path, hand_record(hand))
            .map_err(|err| format!("write {}: {err}", path.display()))
    }
}

/// Asks on stdin which kind to purge after a multiply draw. Tokens outside
/// `+`, `-`, `x` remove nothing.
struct StdinChooser;

impl ReplacementChooser for StdinChooser {
    fn choose_removal(&mut self, player: usize, _hand: &Hand) -> Option<ReplacementKind> {
        let prompt =
            format!("Player {player} draws a x card. Select a card to replace: (+,-,x): ");
        let token = read_token(&prompt)?;
        ReplacementKind::parse_token(token.as_str())
    }
}

fn read_token(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn card_short(card: &Card) -> String {
    match card.rank {
        Some(rank) if card.is_num() => format!("{rank} {}", card.color.name()),
        _ => card.kind.symbol().to_string(),
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::Redealt { .. } => "Re-deal".to_string(),
        Event::CardDealt { player, card } => {
            format!("player {player} dealt {}", card_short(card))
        }
        Event::CardsRemoved {
            player,
            kind,
            count,
        } => format!(
            "player {player} removed {count} {} card(s)",
            kind.card_kind().symbol()
        ),
        Event::BonusSkipped { card, .. } => {
            format!("bonus draw skipped {}", card_short(card))
        }
        Event::BonusDealt { player, card } => {
            format!("player {player} bonus {}", card_short(card))
        }
        Event::TurnAdvanced { round, turn } => format!("round {round} turn {turn}"),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: CliOptions) -> Result<()> {
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    println!("seed: {}", rng.seed());

    let mut game = Game::new(options.players, rng).context("start game")?;
    let mut sink = FileHandSink {
        dir: options.dir.clone(),
    };
    for player in 0..game.players() {
        if let Some(hand) = game.hand(player) {
            sink.persist_hand(player, hand)
                .map_err(anyhow::Error::msg)
                .context("persist initial hand")?;
        }
    }

    let mut chooser = StdinChooser;
    let mut events = EventBus::default();

    while let Some(token) = read_token("> ") {
        match token.as_str() {
            "exit" => break,
            "n" => {}
            _ => {
                println!("Not supported");
                continue;
            }
        }

        game.deal(&mut sink, &mut chooser, &mut events)
            .context("deal")?;
        for event in events.drain() {
            println!("{}", format_event(&event));
        }
        print!("{}", public_view(&game));

        if game.round() == 2 && game.turn() == 0 {
            println!("First round Bid");
        }
        if game.round() == 3 && game.turn() == 0 {
            println!("Second round Bid");
            break;
        }
    }

    // Bidding and showdown are later stages this program does not play out;
    // the confirmations only mark where they would start.
    if read_token("> ").as_deref() == Some("n") {
        println!("Decide Bid 1 or 20 or both");
    }
    if read_token("> ").as_deref() == Some("n") {
        println!("Show");
    }
    Ok(())
}
