use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use warships::cli::{BoardView, StdinInput, TerminalNarrator};
use warships::{
    init_logging, AutomatedCombatant, Combatant, HumanCombatant, Side, StandardGame, TurnState,
    BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Naval combat against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Let the computer play the human seat as well.
    #[arg(long)]
    autoplay: bool,
    /// Show the opponent's vessels.
    #[arg(long)]
    reveal: bool,
}

fn greet() {
    println!("-------------------------------");
    println!("  All hands on deck, Captain!");
    println!("  Time to sink the enemy fleet");
    println!("-------------------------------");
    println!(" input format: row column");
    println!(" e.g. \"2 5\" fires at row 2, column 5");
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let human: Box<dyn Combatant> = if cli.autoplay {
        Box::new(AutomatedCombatant::new(BOARD_SIZE))
    } else {
        Box::new(HumanCombatant::new(StdinInput::new()))
    };
    let automated = Box::new(AutomatedCombatant::new(BOARD_SIZE));
    let mut game = StandardGame::with_random_boards(human, automated, &mut rng);
    let mut narrator = TerminalNarrator::new();

    greet();
    while let TurnState::AwaitingTurn(side) = game.state() {
        println!("{}", "-".repeat(20));
        println!("Your waters:");
        println!("{}", BoardView::new(game.board(Side::Human), false));
        println!("{}", "-".repeat(20));
        println!("Enemy waters:");
        println!("{}", BoardView::new(game.board(Side::Automated), !cli.reveal));
        println!("{}", "-".repeat(20));
        match side {
            Side::Human => println!("Your move, Captain!"),
            Side::Automated => println!("The opponent takes aim..."),
        }
        game.step(&mut rng, &mut narrator)?;
    }

    let summary = game.summary();
    println!(
        "Shots fired: you {}, opponent {}",
        summary.shots[Side::Human.index()],
        summary.shots[Side::Automated.index()]
    );
    Ok(())
}
