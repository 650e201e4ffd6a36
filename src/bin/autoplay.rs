//! Hastily slapped-together headless driver: a memoryless player picks
//! random face-down tiles until it stumbles into a win, then the final grid
//! and score line get printed. Handy for eyeballing the turn cycle without
//! wiring up a real frontend.

use std::{thread, time::Duration};

use rand::{rngs::SmallRng, Rng, SeedableRng};

use pelman::{timing::format_elapsed, GameState, Response, Rules, SetPicker};

fn main() {
    // real frontends keep the stock pacing; a bot doesn't need to see the
    // second tile before the pair resolves
    let rules = Rules::default()
        .tick(Duration::from_millis(50))
        .reveal_delay(Duration::from_millis(20));
    let mut rng = SmallRng::from_entropy();
    let mut game = GameState::new(rules);
    game.start(&mut rng);

    let picker = SetPicker::new();
    println!(
        "dealt {} tiles from \"{}\"",
        game.tiles().len(),
        picker.current().name
    );

    loop {
        if game.input_enabled() {
            let hidden: Vec<usize> = game
                .tiles()
                .iter()
                .enumerate()
                .filter(|(_, t)| t.is_hidden())
                .map(|(i, _)| i)
                .collect();
            game.select(hidden[rng.gen_range(0..hidden.len())]);
        }
        match game.pump() {
            Response::Won => break,
            _ => thread::sleep(Duration::from_millis(2)),
        }
    }

    println!();
    for row in game.tiles().chunks(4) {
        let line = row
            .iter()
            .map(|t| picker.glyph(t.face()))
            .collect::<Vec<_>>()
            .join("  ");
        println!("  {}", line);
    }
    println!();

    let summary = game.summary().expect("loop only exits on a win");
    println!("moves: {}", summary.moves);
    println!("stars: {}/3", summary.stars);
    println!("time:  {}", format_elapsed(summary.elapsed));
}
