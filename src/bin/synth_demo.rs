//! Demo that runs a canned forecast through the synthesizer (stdout only).

use weather_alert_synthesizer::{synthesize, ForecastSample};

fn main() {
    let samples = vec![
        ForecastSample::new(1_755_500_400, 36.5).with_condition("clear sky"),
        ForecastSample::new(1_755_511_200, 33.0).with_condition("scattered clouds"),
        ForecastSample::new(1_755_522_000, 28.4).with_condition("thunderstorm with heavy rain"),
        ForecastSample::new(1_755_532_800, 21.0).with_condition("heavy intensity rain"),
        ForecastSample::new(1_755_543_600, -2.3).with_condition("light snow"),
    ];

    for alert in synthesize(&samples) {
        println!("{} @ {}: {}", alert.event, alert.start, alert.description);
    }

    println!("synth-demo done");
}
