use crate::game::Briefing;
use crate::game::Card;
use crate::game::Setup;
use crate::locations::Location;
use colored::Colorize;

const RULE: usize = 21;

/// title card shown once at startup
pub fn banner() {
    println!();
    println!("{}", "COVERUP".yellow());
    println!("Find the spy. Protect your cover.");
}

/// scroll anything secret off the screen
pub fn wipe() {
    print!("{}", "\n".repeat(50));
}

/// face-down screen while the device changes hands
pub fn pass(briefing: &Briefing) {
    wipe();
    println!("{}", "-".repeat(RULE));
    println!(
        "Player {} of {}   {}",
        briefing.phase().display(),
        briefing.seats(),
        progress(briefing),
    );
    println!("Make sure no one else can see!");
}

/// face-up screen while the current seat reads their card
pub fn card(card: &Card) {
    println!("{}", "-".repeat(RULE));
    match card {
        Card::Spy => {
            println!("{}", "YOU ARE THE SPY".red());
            println!("You don't know the location.");
            println!("Try to blend in and figure it out!");
        }
        Card::Cover { location, role } => {
            println!("LOCATION  {}", location.name().yellow());
            println!("ROLE      {}", role.as_str().green());
        }
    }
}

/// terminal screen once every seat has been briefed
pub fn game_on(setup: &Setup) {
    wipe();
    println!("{}", "-".repeat(RULE));
    println!("{}", "GAME ON".yellow());
    println!("Start asking questions to find the spy!");
    println!("{}", setup);
}

/// the shared secret, printed only on explicit request
pub fn location(location: &Location) {
    println!("THE LOCATION IS  {}", location.name().yellow());
    println!("(Don't show this to the spies!)");
}

/// spy cap hint after reseating
pub fn cap(setup: &Setup) {
    println!(
        "Max {} spies for {} players",
        setup.max_spies(),
        setup.players()
    );
}

fn progress(briefing: &Briefing) -> String {
    (0..briefing.seats())
        .map(|seat| match seat <= briefing.phase().seat() {
            true => '●',
            false => '○',
        })
        .collect()
}
