use rand::{rngs::SmallRng, SeedableRng};
use warships::{init_logging, AutomatedCombatant, Silent, StandardGame, BOARD_SIZE};

/// Plays one automated-vs-automated match and prints its summary as JSON.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <placement-seed> <play-seed>", args[0]);
        std::process::exit(1);
    }
    let placement_seed: u64 = args[1].parse()?;
    let play_seed: u64 = args[2].parse()?;

    let mut placement_rng = SmallRng::seed_from_u64(placement_seed);
    let mut play_rng = SmallRng::seed_from_u64(play_seed);

    let mut game = StandardGame::with_random_boards(
        Box::new(AutomatedCombatant::new(BOARD_SIZE)),
        Box::new(AutomatedCombatant::new(BOARD_SIZE)),
        &mut placement_rng,
    );
    game.run(&mut play_rng, &mut Silent)?;

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
