mod bootstrap;

use anyhow::Result;
use clap::Parser;
use workout_core::duration::format_duration;
use workout_core::settings::Settings;
use workout_data::pipeline::{analyze_workouts, CategoryReport, ChartData};
use workout_runtime::store::ChartStore;

fn main() -> Result<()> {
    let settings = Settings::parse();
    settings.validate()?;

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::info!("Workout Charts v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Categories: {}", settings.categories.join(", "));

    let input = bootstrap::resolve_input_path(settings.input.as_deref())?;
    tracing::info!("Reading export from {}", input.display());

    // One load event: the result replaces whatever was published before,
    // and a failed load publishes nothing.
    let mut store = ChartStore::new();
    let ticket = store.begin_load();
    let result = analyze_workouts(&input, &settings.categories)?;
    store.publish(ticket, result);

    let Some(data) = store.current() else {
        return Ok(());
    };

    if settings.json {
        println!("{}", serde_json::to_string_pretty(data)?);
    } else {
        print_text_report(data);
    }

    Ok(())
}

// ── Text rendering ─────────────────────────────────────────────────────────────

/// Print one stats block and one series table per configured category.
fn print_text_report(data: &ChartData) {
    for report in &data.categories {
        print_category(report);
        println!();
    }

    println!(
        "{} rows read, {} used, {} skipped",
        data.metadata.rows_read,
        data.metadata.rows_used,
        data.metadata.skipped.len()
    );
    for row_error in &data.metadata.skipped {
        println!("  line {}: {}", row_error.line, row_error.message);
    }
}

fn print_category(report: &CategoryReport) {
    println!("== {} ==", report.label);
    println!("  Sessions:       {}", report.stats.session_count);
    println!(
        "  Total duration: {}",
        format_duration(report.stats.total_duration_minutes)
    );
    println!("  Avg calories:   {}", report.stats.avg_calories);
    println!("  Max heart rate: {:.0}", report.stats.max_heart_rate);

    if report.series.is_empty() {
        println!("  (no sessions)");
        return;
    }

    println!("  {:<10} {:>9} {:>8}", "Date", "Calories", "Max HR");
    for point in &report.series {
        println!(
            "  {:<10} {:>9.0} {:>8.0}",
            point.date_label, point.calories, point.max_heart_rate
        );
    }
}
