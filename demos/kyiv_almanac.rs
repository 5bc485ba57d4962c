#![allow(missing_docs, clippy::unwrap_used)]
use chrono::{Timelike, Utc};
use chrono_tz::Europe::Kyiv;
use suncalc::{SunCalc, SunEvent, SunTimeKind};

fn show(label: &str, event: &SunEvent<chrono_tz::Tz>) {
    match event {
        SunEvent::Occurs(instant) => println!("  {label:<16} {}", instant.format("%H:%M:%S %Z")),
        SunEvent::AlwaysAbove => println!("  {label:<16} sun stays above"),
        SunEvent::AlwaysBelow => println!("  {label:<16} sun stays below"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Kyiv, Ukraine
    let latitude = 50.4501;
    let longitude = 30.5234;
    let height = 179.0; // meters above the surrounding terrain

    let now = Utc::now().with_timezone(&Kyiv);
    let dt = now.with_hour(12).ok_or("No local noon today")?;

    println!("SunCalc Example - Kyiv");
    println!("Location: {:.4}°N, {:.4}°E", latitude, longitude);
    println!("Date: {}", dt.format("%B %d, %Y"));
    println!("Observer height: {:.1} meters", height);
    println!("{:=<60}", "");

    let calc = SunCalc::new(latitude, longitude, dt).with_height(height);

    let sun = calc.sun_position();
    println!("Sun at {}:", dt.format("%H:%M %Z"));
    println!("  Azimuth (from south): {:.2}°", sun.azimuth.to_degrees());
    println!("  Altitude: {:.2}°", sun.altitude.to_degrees());
    println!();

    let times = calc.sun_times()?;
    println!("Sun times:");
    for kind in SunTimeKind::ALL {
        show(kind.name(), &times.event(kind));
    }
    println!();

    let (morning, evening) = calc.sun_crossing(-3.0)?;
    println!("Sun at -3°:");
    show("morning", &morning);
    show("evening", &evening);
    println!();

    let moon = calc.moon_position();
    let phase = calc.moon_phase()?;
    println!("Moon:");
    println!("  Altitude: {:.2}°", moon.altitude.to_degrees());
    println!("  Distance: {:.0} km", moon.distance_km);
    println!("  Phase: {} {} ({:.0}% lit)", phase.glyph, phase.phase, phase.illuminated_fraction * 100.0);
    println!("  Zodiac: {:?}", calc.moon_zodiac_sign());

    let moon_times = calc.moon_times()?;
    match (&moon_times.rise, &moon_times.set) {
        (None, None) if moon_times.always_up => println!("  Moon stays up all day"),
        (None, None) => println!("  Moon stays down all day"),
        (rise, set) => {
            if let Some(rise) = rise {
                println!("  Moonrise: {}", rise.format("%H:%M:%S %Z"));
            }
            if let Some(set) = set {
                println!("  Moonset: {}", set.format("%H:%M:%S %Z"));
            }
        }
    }
    Ok(())
}
