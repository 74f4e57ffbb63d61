use aerogate_domain::{Luggage, Passenger};

fn heading(title: &str, width: usize) -> String {
    format!("{:=^width$}", format!(" {} ", title))
}

pub fn menu(width: usize) {
    println!();
    println!("{}", heading("AeroGate Check-in", width));
    println!("1. Register Passenger");
    println!("2. Process Check-In");
    println!("3. Display Passenger Queue");
    println!("4. Display Completed Check-Ins");
    println!("5. Display Baggage Cart");
    println!("6. Unload Baggage Cart");
    println!("7. Exit");
}

pub fn passenger_queue<'a>(passengers: impl Iterator<Item = &'a Passenger>, width: usize) {
    println!("{}", heading("Passenger Queue", width));
    println!("{:<20} {:>5} {:<15} {:>8}", "Name", "Bags", "Airline", "Terminal");
    println!("{}", "-".repeat(width));

    let mut empty = true;
    for p in passengers {
        empty = false;
        println!(
            "{:<20} {:>5} {:<15} {:>8}",
            p.name, p.bag_count, p.flight.airline, p.flight.terminal
        );
    }
    if empty {
        println!("(no passengers waiting)");
    }
}

pub fn roster(passengers: &[Passenger], width: usize) {
    println!("{}", heading("Completed Check-Ins", width));
    println!("{:<20} {:<18} {:<10}", "Name", "State", "Luggage");
    println!("{}", "-".repeat(width));

    if passengers.is_empty() {
        println!("(no completed check-ins)");
        return;
    }
    for p in passengers {
        let luggage = if p.luggage_id.is_some() { "Checked" } else { "-" };
        println!("{:<20} {:<18} {:<10}", p.name, p.state, luggage);
    }
}

pub fn cart<'a>(bags: impl Iterator<Item = &'a Luggage>, width: usize) {
    println!("{}", heading("Baggage Cart (top first)", width));
    println!("{:<20} {:<10} {:>11}", "Owner", "Size", "Weight (kg)");
    println!("{}", "-".repeat(width));

    let mut empty = true;
    for bag in bags {
        empty = false;
        println!("{:<20} {:<10} {:>11.1}", bag.owner_name, bag.size, bag.weight_kg);
    }
    if empty {
        println!("(cart is empty)");
    }
}
