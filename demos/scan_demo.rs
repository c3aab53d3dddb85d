use chrono::TimeZone;
use chrono_tz::America::Chicago;

use conjunction::angles::{format_dms, rad_to_deg, separation};
use conjunction::{
    format_time_point, render_results, render_setup, scan, BodyDescriptor, Ephemeris,
    ObservationWindow, Observer, PositionProvider, ScanConfig,
};

fn main() {
    let observer = Observer::new(32.9029, -96.5639, 153.7).named("Rowlett, TX");
    let start = Chicago
        .with_ymd_and_hms(2017, 4, 24, 11, 45, 29)
        .unwrap()
        .with_timezone(&chrono::Utc);

    let jupiter = BodyDescriptor::Named("Jupiter".to_string());
    let moon = BodyDescriptor::Named("Moon".to_string());

    println!("=== Positions at the start of the window ===");
    for body in [&jupiter, &moon] {
        let pos = Ephemeris.position_of(body, &observer, start).unwrap();
        println!(
            "{:>8}: azimuth {:.2}°, altitude {:.2}°",
            body,
            rad_to_deg(pos.azimuth),
            rad_to_deg(pos.altitude)
        );
    }
    let a = Ephemeris.position_of(&jupiter, &observer, start).unwrap();
    let b = Ephemeris.position_of(&moon, &observer, start).unwrap();
    println!(
        "Separation at {}: {}",
        format_time_point(&start),
        format_dms(rad_to_deg(separation(a, b)))
    );
    println!();

    let config = ScanConfig {
        objects: [jupiter, moon],
        observer,
        window: ObservationWindow::new(start, 20 * 86_400, 600).unwrap(),
    };
    print!("{}", render_setup(&config));
    let outcome = scan(&config, &Ephemeris).unwrap();
    print!("{}", render_results(&outcome));
    println!("({} samples)", outcome.samples);
}
