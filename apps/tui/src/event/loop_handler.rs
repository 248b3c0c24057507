use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use heatmap::chart::month::month_name;
use heatmap::{DataSource, Dataset, Record};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::Stdout;
use tracing::debug;

use crate::app::{handle_input, handle_mouse, App};
use crate::ui;

/// Print dataset stats instead of opening the viewer.
pub fn run_headless(dataset: &Dataset, source: &DataSource, json: bool) -> Result<()> {
    let stats = build_headless_stats(dataset, source);

    if json {
        let json = serde_json::to_string_pretty(&stats)?;
        println!("{json}");
    } else {
        render_headless_stats(&stats);
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nGlobal Temperature Stats");
    println!("========================");
    println!("Source: {}", stats.source);
    println!("{}", stats.description);
    println!("Records: {}", stats.records);
    println!(
        "Temperature domain: {:.0}°C to {:.0}°C",
        stats.temperature_domain[0], stats.temperature_domain[1]
    );

    if let Some(coldest) = &stats.coldest {
        println!(
            "Coldest: {} {} at {:.2}°C",
            coldest.month, coldest.year, coldest.temp
        );
    }
    if let Some(warmest) = &stats.warmest {
        println!(
            "Warmest: {} {} at {:.2}°C",
            warmest.month, warmest.year, warmest.temp
        );
    }

    println!("\nMean temperature by month:");
    for (month, mean) in &stats.monthly_means {
        println!("- {month}: {mean:.2}°C");
    }
}

fn build_headless_stats(dataset: &Dataset, source: &DataSource) -> HeadlessStats {
    let by_temp = |a: &&Record, b: &&Record| a.temp.total_cmp(&b.temp);
    let coldest = dataset.records.iter().min_by(by_temp).map(HeadlessRecord::from);
    let warmest = dataset.records.iter().max_by(by_temp).map(HeadlessRecord::from);

    let mut sums = [(0.0_f64, 0_u32); 12];
    for record in &dataset.records {
        let (sum, count) = &mut sums[usize::from(record.month)];
        *sum += record.temp;
        *count += 1;
    }

    let monthly_means = (0_i32..)
        .zip(sums)
        .filter(|(_, (_, count))| *count > 0)
        .map(|(month, (sum, count))| (month_name(month).to_string(), sum / f64::from(count)))
        .collect();

    HeadlessStats {
        source: source.to_string(),
        description: dataset.description(),
        base_temperature: dataset.base_temperature,
        records: dataset.len(),
        first_year: dataset.first_year(),
        last_year: dataset.last_year(),
        temperature_domain: dataset.temp_domain,
        coldest,
        warmest,
        monthly_means,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    source: String,
    description: String,
    base_temperature: f64,
    records: usize,
    first_year: Option<i32>,
    last_year: Option<i32>,
    temperature_domain: [f64; 2],
    coldest: Option<HeadlessRecord>,
    warmest: Option<HeadlessRecord>,
    monthly_means: Vec<(String, f64)>,
}

#[derive(serde::Serialize)]
struct HeadlessRecord {
    year: i32,
    month: String,
    temp: f64,
    variance: f64,
}

impl From<&Record> for HeadlessRecord {
    fn from(record: &Record) -> Self {
        Self {
            year: record.year,
            month: record.month_name().to_string(),
            temp: record.temp,
            variance: record.variance,
        }
    }
}

/// Run the main application event loop
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if !matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            continue;
        }

        // Hit testing needs the same frame size the last draw used.
        let area = terminal
            .size()
            .map_or_else(|_| Rect::default(), |size| Rect::new(0, 0, size.width, size.height));

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code, area);
                if !app.running {
                    break;
                }
            }
            Ok(Event::Mouse(mouse)) => handle_mouse(app, mouse, area),
            Ok(Event::Resize(width, height)) => {
                debug!(width, height, "terminal resized");
                app.unhover();
            }
            Ok(Event::FocusLost) => app.unhover(),
            Ok(Event::Key(_) | Event::FocusGained | Event::Paste(_)) | Err(_) => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatmap::data::parse_dataset;

    fn dataset() -> Dataset {
        let json = r#"{"baseTemperature": 8.66, "monthlyVariance": [
            {"year": 1753, "month": 1, "variance": -1.366},
            {"year": 1753, "month": 2, "variance": -2.223},
            {"year": 1754, "month": 1, "variance": 0.5}
        ]}"#;
        parse_dataset(json, [240.0, 0.0]).unwrap()
    }

    #[test]
    fn stats_pick_extremes() {
        let stats = build_headless_stats(&dataset(), &DataSource::Remote("http://x".into()));
        assert_eq!(stats.records, 3);
        assert_eq!(stats.first_year, Some(1753));
        assert_eq!(stats.last_year, Some(1754));

        let coldest = stats.coldest.unwrap();
        assert_eq!((coldest.year, coldest.month.as_str()), (1753, "February"));
        let warmest = stats.warmest.unwrap();
        assert_eq!((warmest.year, warmest.month.as_str()), (1754, "January"));
    }

    #[test]
    fn stats_average_each_month() {
        let stats = build_headless_stats(&dataset(), &DataSource::Remote("http://x".into()));
        assert_eq!(stats.monthly_means.len(), 2);

        let (name, mean) = &stats.monthly_means[0];
        assert_eq!(name, "January");
        assert!((mean - (8.66 + (-1.366 + 0.5) / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn stats_serialize_as_json() {
        let stats = build_headless_stats(&dataset(), &DataSource::File("data.json".into()));
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["source"], "data.json");
        assert_eq!(value["records"], 3);
        assert_eq!(value["monthly_means"][1][0], "February");
    }
}
