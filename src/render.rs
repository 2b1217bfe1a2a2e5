//! Plain-text views the driver prints.

use crate::battle::{Outcome, Side};
use crate::model::{Animal, Award};
use crate::store::RecordStore;

pub fn animal_card(animal: &Animal) -> String {
    let mut lines = vec![
        animal.name.to_uppercase(),
        format!("Type: {}", animal.category),
        format!("Habitat: {}", animal.habitat),
        format!("Description: {}", animal.description),
        format!("Fun Fact: {}", animal.fun_fact),
        format!("Attributes: {}", animal.attributes.join(", ")),
    ];
    if !animal.awards.is_empty() {
        lines.push(format!("Awards: {}", animal.awards.join(", ")));
    }
    lines.join("\n")
}

/// Numbered list; the category suffix is shown when `with_type` is set.
pub fn animal_list(animals: &[&Animal], with_type: bool) -> String {
    animals
        .iter()
        .enumerate()
        .map(|(idx, animal)| {
            if with_type {
                format!("{}. {} ({})", idx + 1, animal.name, animal.category)
            } else {
                format!("{}. {}", idx + 1, animal.name)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn award_entry(store: &RecordStore, award: &Award) -> String {
    let winners = store.animals_by_award(&award.id);
    let winners_line = if winners.is_empty() {
        "No winners yet".to_string()
    } else {
        let names: Vec<&str> = winners.iter().map(|w| w.name.as_str()).collect();
        format!("Winners: {}", names.join(", "))
    };
    format!(
        "{} ({})\nCategory: {}\nDescription: {}\n{winners_line}",
        award.name, award.year, award.category, award.description
    )
}

fn side_label(side: Side) -> &'static str {
    match side {
        Side::A => "first",
        Side::B => "second",
    }
}

fn matchup(name_a: &str, attribute_a: &str, name_b: &str, attribute_b: &str) -> String {
    format!("{name_a}'s {attribute_a} vs {name_b}'s {attribute_b}")
}

/// Header line plus outcome message. Every outcome kind renders.
pub fn battle_report(outcome: &Outcome) -> String {
    let detail = match outcome {
        Outcome::Tie {
            animal_a,
            animal_b,
            attribute,
        } => matchup(animal_a, attribute, animal_b, attribute),
        Outcome::NoContest {
            animal_a,
            animal_b,
            attribute_a,
            attribute_b,
        } => matchup(animal_a, attribute_a, animal_b, attribute_b),
        Outcome::Win {
            winner: Side::A,
            winner_name,
            loser_name,
            winning_attribute,
            losing_attribute,
            ..
        } => matchup(winner_name, winning_attribute, loser_name, losing_attribute),
        Outcome::Win {
            winner: Side::B,
            winner_name,
            loser_name,
            winning_attribute,
            losing_attribute,
            ..
        } => matchup(loser_name, losing_attribute, winner_name, winning_attribute),
        Outcome::AnimalNotFound { missing } => missing
            .iter()
            .map(|(side, id)| format!("Unknown {} animal: {id}", side_label(*side)))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::InvalidAttribute {
            side, animal_id, ..
        } => format!("Invalid choice for the {} animal ({animal_id})", side_label(*side)),
    };
    format!("=== BATTLE RESULTS ===\n{detail}\n{}", outcome.message())
}
