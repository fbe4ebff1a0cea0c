//! Booking Session
//!
//! Walks one visitor through the bundled Moroccan catalog: filter by
//! city, open the booking modal, review the form, close the modal.
//!
//! Run with: RUST_LOG=car_rental=debug cargo run --example booking_session

use car_rental::booking::BookingForm;
use car_rental::controller::Heading;
use car_rental::{Catalog, SelectionController};
use chrono::{Days, Utc};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

fn print_view(controller: &SelectionController) {
    let view = controller.snapshot();
    match view.heading {
        Heading::AllCities { total } => {
            println!("{total} premium cars available across Morocco");
        }
        Heading::City {
            city_id,
            city,
            available,
        } => {
            let name = city.map(|c| c.name.as_str()).unwrap_or(city_id.as_str());
            println!("{available} cars available in {name}");
        }
    }
    for vehicle in &view.vehicles {
        println!("  - {:<28} {:>5} MAD/day", vehicle.name, vehicle.price_per_day);
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Car Rental Booking Session ===\n");

    let mut controller = SelectionController::new(Catalog::bundled()?);
    print_view(&controller);

    controller.set_city("marrakech");
    print_view(&controller);

    controller.book_click("porsche-911");
    // Ignored: not in the catalog.
    controller.book_click("lada-niva");

    let today = Utc::now().date_naive();
    let pickup = today.checked_add_days(Days::new(2)).ok_or("date overflow")?;
    let dropoff = pickup.checked_add_days(Days::new(4)).ok_or("date overflow")?;

    let incomplete = BookingForm::new(pickup, today).customer("Yasmine", "yasmine@", "");
    if let Some(Validation::Failure(errors)) = controller.review_booking(&incomplete, today) {
        println!("Booking form has {} problems:", errors.len());
        for error in errors.iter() {
            println!("  - {error}");
        }
        println!();
    }

    let form = BookingForm::new(pickup, dropoff).customer(
        "Yasmine El Amrani",
        "yasmine@example.ma",
        "+212 661 234 567",
    );
    if let Some(Validation::Success(summary)) = controller.review_booking(&form, today) {
        println!("Booking request {}", summary.reference);
        println!(
            "  {} in {} from {} to {} ({} days)",
            summary.vehicle_name,
            summary.pickup_city,
            summary.pickup_date,
            summary.return_date,
            summary.rental_days
        );
        println!("  Estimated total: {} MAD\n", summary.total_price);
    }

    controller.close_modal();
    controller.set_city("");
    print_view(&controller);

    println!("Session path:");
    for transition in controller.history().transitions() {
        println!(
            "  {:<10} -> city: {:?}, booking: {:?}",
            transition.intent.name(),
            transition.to.selected_city_id(),
            transition.to.selected_vehicle_id()
        );
    }

    println!("\n=== Session Complete ===");
    Ok(())
}
