use super::screen;
use crate::game::Action;
use crate::game::Briefing;
use crate::game::Setup;
use crate::locations::Catalog;
use dialoguer::Input;
use dialoguer::Select;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// How one round at the table ends.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Restart,
    Home,
    Quit,
}

/// The shared device, passed around one table of players.
///
/// Runs the whole evening: the lobby to agree on a setup, then one
/// briefing walk per round with the game-on screen in between. All
/// deals draw from one seedable RNG, so a fixed seed replays the
/// same evening.
pub struct Table {
    catalog: Catalog,
    setup: Setup,
    rng: SmallRng,
}

impl Table {
    pub fn new(catalog: Catalog, setup: Setup, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        log::debug!("seed {}", seed);
        Self {
            catalog,
            setup,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        log::info!("opening table · {}", self.catalog);
        screen::banner();
        loop {
            if !self.lobby() {
                break;
            }
            loop {
                match self.play()? {
                    Outcome::Restart => continue,
                    Outcome::Home => break,
                    Outcome::Quit => return Ok(()),
                }
            }
        }
        log::info!("closing table");
        Ok(())
    }

    //
    fn lobby(&mut self) -> bool {
        loop {
            let items = [
                format!("Start Game · {}", self.setup),
                String::from("Players"),
                String::from("Spies"),
                String::from("Quit"),
            ];
            let choice = Select::new()
                .with_prompt("Lobby")
                .report(false)
                .items(&items)
                .default(0)
                .interact()
                .unwrap();
            match choice {
                0 => return true,
                1 => self.setup = self.setup.seat(Self::count("Players", self.setup.players())),
                2 => {
                    self.setup = self.setup.plant(Self::count("Spies", self.setup.spies()));
                    screen::cap(&self.setup);
                }
                _ => return false,
            }
        }
    }
    fn play(&mut self) -> anyhow::Result<Outcome> {
        log::info!("dealing · {}", self.setup);
        let mut briefing = Briefing::deal(&self.catalog, &self.setup, &mut self.rng)?;
        while !briefing.phase().is_playing() {
            briefing = self.brief(briefing);
        }
        self.game_on(&briefing)
    }
    fn brief(&self, briefing: Briefing) -> Briefing {
        match briefing.peek() {
            None => {
                screen::pass(&briefing);
                Select::new()
                    .with_prompt("Tap to reveal your role")
                    .report(false)
                    .items(&[Action::Reveal.label()])
                    .default(0)
                    .interact()
                    .unwrap();
                briefing.apply(Action::Reveal)
            }
            Some(card) => {
                screen::card(&card);
                let advance = match briefing.phase().display() == briefing.seats() {
                    true => "Start Round",
                    false => Action::Advance.label(),
                };
                let choice = Select::new()
                    .with_prompt(format!("{}", briefing))
                    .report(false)
                    .items(&[advance, Action::Hide.label()])
                    .default(0)
                    .interact()
                    .unwrap();
                match choice {
                    0 => briefing.apply(Action::Advance),
                    _ => briefing.apply(Action::Hide),
                }
            }
        }
    }
    fn game_on(&self, briefing: &Briefing) -> anyhow::Result<Outcome> {
        log::debug!("game on · {}", self.setup);
        screen::game_on(&self.setup);
        loop {
            let items = ["Show Location", "New Game", "Home", "Quit"];
            let choice = Select::new()
                .with_prompt(format!("{}", briefing))
                .report(false)
                .items(&items)
                .default(0)
                .interact()
                .unwrap();
            match choice {
                0 => screen::location(briefing.location().unwrap()),
                1 => return Ok(Outcome::Restart),
                2 => return Ok(Outcome::Home),
                _ => return Ok(Outcome::Quit),
            }
        }
    }
    fn count(prompt: &str, current: usize) -> usize {
        Input::new()
            .with_prompt(format!("{} [{}]", prompt, current))
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.parse::<usize>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err("Enter a NUMBER"),
                }
            })
            .interact()
            .unwrap()
            .parse::<usize>()
            .unwrap()
    }
}
