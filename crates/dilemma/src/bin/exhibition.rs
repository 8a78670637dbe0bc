//! Exhibition Binary
//!
//! Round-robin between the built-in strategies, reporting cooperation
//! rates per pairing. Payoffs are the harness's business, not ours.
//!
//! Options: --turns

use clap::Parser;
use dilemma::detective::*;
use dilemma::gameplay::*;
use dilemma::players::*;

#[derive(Parser)]
#[command(about = "round-robin exhibition between the built-in strategies")]
struct Args {
    /// Turns played per pairing.
    #[arg(long, default_value_t = 200)]
    turns: usize,
}

fn main() {
    use rayon::iter::IntoParallelIterator;
    use rayon::iter::ParallelIterator;
    dilemma::core::init();
    let args = Args::parse();
    let roster: Vec<(&str, Box<dyn Strategy<Memory = ()>>)> = vec![
        ("detective", Box::new(Detective)),
        ("titfortat", Box::new(TitForTat)),
        ("grudge", Box::new(Grudge)),
        ("hawk", Box::new(Always(Move::Defect))),
        ("dove", Box::new(Always(Move::Cooperate))),
        ("fish", Box::new(Fish)),
    ];
    let pairings = (0..roster.len())
        .flat_map(|i| (i..roster.len()).map(move |j| (i, j)))
        .collect::<Vec<_>>();
    log::info!("exhibition: {} pairings over {} turns", pairings.len(), args.turns);
    let results = pairings
        .into_par_iter()
        .map(|(i, j)| {
            let hero = roster[i].1.as_ref();
            let villain = roster[j].1.as_ref();
            let history = Duel::new(hero, villain).play(args.turns);
            (i, j, history.cooperation())
        })
        .collect::<Vec<_>>();
    log::info!(
        "{:<12}{:<12}{:>10}{:>10}",
        "hero",
        "villain",
        "hero coop",
        "vill coop"
    );
    for (i, j, (hero, villain)) in results {
        log::info!(
            "{:<12}{:<12}{:>10.2}{:>10.2}",
            roster[i].0,
            roster[j].0,
            hero,
            villain
        );
    }
}
