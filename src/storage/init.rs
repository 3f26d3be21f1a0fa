//! Storage initialization
//!
//! Handles first-run setup and the optional sample tour.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::config::paths::TourPaths;
use crate::config::settings::Settings;
use crate::error::TourError;
use crate::models::{Expense, ExpenseCategory, Member, Money, Tour, TourId};

use super::tours::TourStore;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and writes default settings if none exist.
pub fn initialize_storage(paths: &TourPaths) -> Result<Settings, TourError> {
    paths.ensure_directories()?;

    let settings = Settings::load_or_create(paths)?;
    if !paths.settings_file().exists() {
        settings.save(paths)?;
        tracing::info!(path = %paths.settings_file().display(), "Created default settings");
    }

    Ok(settings)
}

/// Seed the sample tour when the store holds no tours
///
/// Returns the id of the seeded tour, or None if tours already exist.
pub fn seed_sample_tour(store: &dyn TourStore) -> Result<Option<TourId>, TourError> {
    if !store.load_tours().is_empty() {
        return Ok(None);
    }

    let tour = sample_tour();
    let id = tour.id;
    let mut tours = HashMap::new();
    tours.insert(id, tour);

    store.save_tours(&tours)?;
    store.save_active_tour(Some(id))?;
    tracing::info!(tour = %id, "Seeded sample tour");

    Ok(Some(id))
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, d).unwrap_or_default()
}

/// Five friends, five days in Bangkok
pub fn sample_tour() -> Tour {
    let mut tour = Tour::new(
        "Bangkok Adventure 2025",
        "5-day group trip to Bangkok",
        day(20),
        day(24),
    );

    for (name, contact) in [
        ("Alex", "+1-555-0101"),
        ("Sarah", "+1-555-0102"),
        ("Mike", "+1-555-0103"),
        ("Emma", "+1-555-0104"),
        ("David", "+1-555-0105"),
    ] {
        tour.add_member(Member::with_contact(name, contact));
    }

    let ids: Vec<_> = tour.members.iter().map(|m| m.id).collect();
    let (alex, sarah, mike, emma) = (ids[0], ids[1], ids[2], ids[3]);
    let without_david = ids[..4].to_vec();

    let expenses = [
        ("Airport taxi to hotel", 1200, ExpenseCategory::Transport, 20, alex, ids.clone()),
        ("Hotel booking (4 nights)", 8000, ExpenseCategory::Hotel, 20, mike, ids.clone()),
        ("Welcome dinner at Chatuchak", 2500, ExpenseCategory::Food, 20, sarah, ids.clone()),
        ("Grand Palace tour", 1800, ExpenseCategory::Tour, 21, emma, without_david),
        ("Floating market trip", 2800, ExpenseCategory::Tour, 22, sarah, ids.clone()),
        ("Tuk-tuk city tour", 1500, ExpenseCategory::Transport, 23, emma, ids.clone()),
        ("Farewell rooftop dinner", 4200, ExpenseCategory::Food, 23, alex, ids.clone()),
    ];

    for (description, amount, category, d, paid_by, participants) in expenses {
        tour.expenses.push(Expense::new(
            description,
            Money::from_units(amount),
            category,
            day(d),
            paid_by,
            participants,
        ));
    }

    tour
}
