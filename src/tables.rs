use chrono::{DateTime, Local};
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{health::Health, view::Summary},
    db::{battery::Battery, battery_log::BatteryLog},
    quantity::percent::Percent,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

const fn charge_color(level: Percent) -> Color {
    if level.0 < 20.0 {
        Color::Red
    } else if level.0 < 50.0 {
        Color::DarkYellow
    } else {
        Color::Green
    }
}

pub fn build_inventory_table(batteries: &[&Battery], now: DateTime<Local>) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "ID", "Name", "Chemistry", "Charge", "Health", "Cycles", "Capacity", "Voltage",
        "Last charge", "Notes",
    ]);
    for battery in batteries {
        let health = Health::estimate(battery);
        table.add_row(vec![
            Cell::new(&battery.id).add_attribute(Attribute::Dim),
            Cell::new(&battery.name),
            Cell::new(battery.chemistry).fg(battery.chemistry.color()),
            Cell::new(battery.charge_level)
                .set_alignment(CellAlignment::Right)
                .fg(charge_color(battery.charge_level)),
            Cell::new(health).fg(health.status.color()),
            Cell::new(battery.cycle_count).set_alignment(CellAlignment::Right),
            Cell::new(battery.capacity).set_alignment(CellAlignment::Right),
            Cell::new(battery.voltage).set_alignment(CellAlignment::Right),
            if battery.is_stale(now) {
                Cell::new(battery.last_charge_date).fg(Color::Red)
            } else {
                Cell::new(battery.last_charge_date).add_attribute(Attribute::Dim)
            },
            Cell::new(battery.notes.as_deref().unwrap_or_default()).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_history_table(logs: &[BatteryLog]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Timestamp", "Action", "Level", "Details"]);
    for log in logs {
        table.add_row(vec![
            Cell::new(log.timestamp.format("%b %d, %H:%M")).add_attribute(Attribute::Dim),
            Cell::new(log.action).fg(log.action.color()),
            Cell::new(log.level_after)
                .set_alignment(CellAlignment::Right)
                .fg(charge_color(log.level_after)),
            Cell::new(&log.details),
        ]);
    }
    table
}

pub fn build_summary_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Batteries"),
        Cell::new(summary.n_batteries).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Fully charged"),
        Cell::new(format!("{} ({}%)", summary.n_full, summary.full_share()))
            .set_alignment(CellAlignment::Right)
            .fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Past 60 cycles"),
        Cell::new(summary.n_high_cycle).set_alignment(CellAlignment::Right).fg(
            if summary.n_high_cycle == 0 { Color::Green } else { Color::DarkYellow },
        ),
    ]);
    table.add_row(vec![
        Cell::new("Total capacity"),
        Cell::new(summary.total_capacity).set_alignment(CellAlignment::Right),
    ]);
    table
}

pub fn build_distribution_table(summary: &Summary) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Chemistry", "Count", "Share"]);
    for (chemistry, count) in &summary.distribution {
        table.add_row(vec![
            Cell::new(chemistry).fg(chemistry.color()),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}%", summary.share_of(*count)))
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
