use std::io::{self, BufRead, Lines, StdinLock, Write};
use std::str::FromStr;

use aerogate_checkin::{CheckinPipeline, LuggageSpec, PassengerRegistration};

use crate::app_config::AppConfig;
use crate::render;

/// Interactive menu loop over stdin.
///
/// Owns the pipeline for the lifetime of the session; all presentation
/// lives here and in `render`, the pipeline only hands back snapshots.
pub struct Shell {
    pipeline: CheckinPipeline,
    config: AppConfig,
}

impl Shell {
    pub fn new(config: AppConfig) -> Self {
        Self {
            pipeline: CheckinPipeline::new(),
            config,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            render::menu(self.config.display.table_width);
            let Some(choice) = prompt(&mut lines, "Enter choice: ")? else {
                break;
            };
            match choice.trim() {
                "1" => {
                    if !self.register(&mut lines)? {
                        break;
                    }
                }
                "2" => {
                    if !self.process_check_in(&mut lines)? {
                        break;
                    }
                }
                "3" => render::passenger_queue(
                    self.pipeline.queued_passengers(),
                    self.config.display.table_width,
                ),
                "4" => render::roster(self.pipeline.roster(), self.config.display.table_width),
                "5" => render::cart(
                    self.pipeline.cart_contents(),
                    self.config.display.table_width,
                ),
                "6" => self.unload_cart(),
                "7" => {
                    println!("Goodbye.");
                    break;
                }
                other => println!("Unrecognized choice: {}", other),
            }
        }
        Ok(())
    }

    fn register(&mut self, lines: &mut Lines<StdinLock<'_>>) -> anyhow::Result<bool> {
        let Some(name) = prompt(lines, "Passenger name: ")? else {
            return Ok(false);
        };
        let Some(bag_count) = prompt_parsed::<i32>(lines, "Number of bags: ")? else {
            return Ok(false);
        };
        let Some(airline) = prompt(lines, "Airline: ")? else {
            return Ok(false);
        };
        let Some(terminal) = prompt_parsed::<i32>(lines, "Terminal: ")? else {
            return Ok(false);
        };

        let passenger = self.pipeline.register_passenger(PassengerRegistration {
            name: name.trim().to_string(),
            bag_count,
            airline: airline.trim().to_string(),
            terminal,
        });
        println!("{} registered and waiting in line.", passenger.name);
        Ok(true)
    }

    fn process_check_in(&mut self, lines: &mut Lines<StdinLock<'_>>) -> anyhow::Result<bool> {
        let Some(next_name) = self.pipeline.next_passenger().map(|p| p.name.clone()) else {
            println!("No passengers waiting for check-in.");
            if self.config.checkin.drain_belt_on_idle {
                let moved = self.pipeline.drain_belt_to_cart();
                if moved.is_empty() {
                    println!("Belt is already clear.");
                } else {
                    for unload in &moved {
                        println!("Moved {}'s luggage from belt to cart.", unload.owner_name);
                    }
                }
            }
            return Ok(true);
        };

        println!("Now serving: {}", next_name);
        let Some(size) = prompt(lines, "Luggage size (Small/Medium/Large): ")? else {
            return Ok(false);
        };
        let Some(weight_kg) = prompt_parsed::<f64>(lines, "Luggage weight (kg): ")? else {
            return Ok(false);
        };

        match self.pipeline.process_next_check_in(LuggageSpec {
            size: size.trim().to_string(),
            weight_kg,
        }) {
            Ok(result) => println!(
                "{} checked in. Luggage is on the belt; {} still in line.",
                result.passenger.name, result.remaining_in_queue
            ),
            Err(e) => println!("Check-in failed: {}", e),
        }
        Ok(true)
    }

    fn unload_cart(&mut self) {
        match self.pipeline.unload_cart() {
            Ok(removals) => {
                for removal in &removals {
                    println!("Removed {}'s luggage from the cart.", removal.owner_name);
                }
                println!("Cart is now empty.");
            }
            Err(e) => println!("{}", e),
        }
    }
}

fn prompt(lines: &mut Lines<StdinLock<'_>>, label: &str) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}

/// Re-prompts until the input parses; `None` means stdin closed.
fn prompt_parsed<T: FromStr>(
    lines: &mut Lines<StdinLock<'_>>,
    label: &str,
) -> anyhow::Result<Option<T>> {
    loop {
        let Some(raw) = prompt(lines, label)? else {
            return Ok(None);
        };
        match raw.trim().parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Could not read that, try again."),
        }
    }
}
