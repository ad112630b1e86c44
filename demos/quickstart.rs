use chrono::Utc;
use sunclock::{greenwich_sidereal_hours, sun_position_at, Observer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let now = Utc::now();
    let sun = sun_position_at(now);

    println!("UTC: {now}");
    println!("Declination: {:.3}°", sun.declination());
    println!("Subsolar longitude: {:.3}°", sun.subsolar_longitude());
    println!("GST: {:.4} h", greenwich_sidereal_hours(now.timestamp()));

    for (name, lat, lon) in [
        ("London", 51.48, 0.0),
        ("New York", 40.71, -74.01),
        ("Tokyo", 35.68, 139.69),
        ("Sydney", -33.87, 151.21),
    ] {
        let Ok(city) = Observer::new(lat, lon) else {
            continue;
        };
        println!(
            "{name:>9}: {:?} (altitude {:.1}°)",
            city.daylight(&sun),
            city.solar_altitude(&sun)
        );
    }
}
