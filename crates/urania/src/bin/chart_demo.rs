use chrono::Utc;
use urania::chart::Chart;
use urania::config;
use urania::ephemeris::OrbitalPositionCalculator;
use urania::zodiac::format_dms;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cfg = config::load_from_env()?;
    let datetime = cfg.datetime.unwrap_or_else(Utc::now);
    let calculator = OrbitalPositionCalculator::new();

    let chart = Chart::compute(&calculator, datetime, cfg.location, &cfg.chart)?;

    for p in &chart.placements {
        log::info!(
            "{:<8} {}{}",
            p.body().name(),
            format_dms(&p.zodiac),
            if p.retrograde { " R" } else { "" }
        );
    }
    if let Some(phase) = chart.lunar_phase() {
        log::info!("Lunar phase: {}", phase);
    }

    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
