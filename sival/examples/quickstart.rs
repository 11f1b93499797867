//! Minimal end-to-end example: mixed-scale sums, derived units and same-dimension ratios.

use sival::scale::Unity;
use sival::{Centimeters, Coulombs, Meters, MetersPerSecond, SquareKilometers, A, CM, KM, M, S};

fn main() {
    let total = 4 * M + 2 * CM;
    assert_eq!(total, Centimeters::new(402));
    println!("4 m + 2 cm = {total}");

    let metres = total.convert::<f64, Unity>();
    println!("           = {metres}");

    let distance = (3 * KM).convert::<i32, Unity>();
    let speed = distance / (600 * S);
    assert_eq!(speed, MetersPerSecond::new(5));
    println!("3 km in 600 s = {speed}");

    let side = SquareKilometers::new(49).sqrt();
    println!("sqrt(49 km²) = {side}");

    let charge = Coulombs::new(8);
    let duration = charge / (2 * A);
    println!("8 C at 2 A lasts {duration}");

    let ratio: f64 = Meters::new(4.0) / Centimeters::new(160);
    println!("4 m / 160 cm = {ratio}");
}
