//! Example demonstrating the serde_with_unit helper module.
//!
//! Run with: cargo run --example serde_with_unit --features serde

#[cfg(feature = "serde")]
fn main() {
    use serde::{Deserialize, Serialize};
    use sival::{Kilometers, Meters, Minutes};

    #[derive(Serialize, Deserialize, Debug)]
    struct Route {
        #[serde(with = "sival::serde_with_unit")]
        length: Kilometers<f64>,

        climb: Meters<i32>,

        #[serde(with = "sival::serde_with_unit")]
        estimate: Minutes<u32>,
    }

    let route = Route {
        length: Kilometers::new(12.4),
        climb: Meters::new(380),
        estimate: Minutes::new(95),
    };

    let json = serde_json::to_string_pretty(&route).expect("serializable");
    println!("{json}");

    let back: Route = serde_json::from_str(&json).expect("round-trips");
    println!("{back:?}");

    let wrong = r#"{"length":{"value":12.4,"unit":"km"},"climb":380,"estimate":{"value":95}}"#;
    match serde_json::from_str::<Route>(wrong) {
        Ok(_) => unreachable!("unit mismatch must be rejected"),
        Err(err) => println!("rejected: {err}"),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_unit --features serde");
}
