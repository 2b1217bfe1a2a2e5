use crate::model::Animal;
use crate::store::RecordStore;

/// Which combatant an outcome refers to, in argument order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    A,
    B,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Tie {
        animal_a: String,
        animal_b: String,
        attribute: String,
    },
    Win {
        winner: Side,
        winner_id: String,
        winner_name: String,
        loser_name: String,
        winning_attribute: String,
        losing_attribute: String,
    },
    NoContest {
        animal_a: String,
        animal_b: String,
        attribute_a: String,
        attribute_b: String,
    },
    /// Every side whose id did not resolve, with the id that was asked for.
    AnimalNotFound { missing: Vec<(Side, String)> },
    InvalidAttribute {
        side: Side,
        animal_id: String,
        animal_name: String,
        attribute: String,
    },
}

impl Outcome {
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Tie { .. } => "tie",
            Outcome::Win { .. } => "win",
            Outcome::NoContest { .. } => "no_contest",
            Outcome::AnimalNotFound { .. } => "animal_not_found",
            Outcome::InvalidAttribute { .. } => "invalid_attribute",
        }
    }

    pub fn winner(&self) -> Option<&str> {
        match self {
            Outcome::Win { winner_id, .. } => Some(winner_id),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Outcome::AnimalNotFound { .. } | Outcome::InvalidAttribute { .. }
        )
    }

    pub fn message(&self) -> String {
        match self {
            Outcome::Tie { attribute, .. } => format!("It's a tie! Both used {attribute}"),
            Outcome::Win {
                winner_name,
                loser_name,
                winning_attribute,
                losing_attribute,
                ..
            } => format!(
                "{winner_name}'s {winning_attribute} beats {loser_name}'s {losing_attribute}!"
            ),
            Outcome::NoContest { .. } => {
                "No clear winner - attributes don't directly counter each other".to_string()
            }
            Outcome::AnimalNotFound { .. } => "One or both animals not found".to_string(),
            Outcome::InvalidAttribute {
                animal_name,
                attribute,
                ..
            } => format!("{animal_name} doesn't have attribute: {attribute}"),
        }
    }
}

/// True when `attacking` declares `defending` in its beats list.
/// Attributes with no relationship entry beat nothing.
pub fn beats(store: &RecordStore, attacking: &str, defending: &str) -> bool {
    store
        .relationship(attacking)
        .is_some_and(|rel| rel.defeats(defending))
}

/// Resolve one battle between (`animal_a`, `attribute_a`) and (`animal_b`, `attribute_b`).
///
/// Checks run in a fixed order: both ids must exist, then each animal must own its
/// attribute. A's beats list is consulted before B's, so if the table declares both
/// directions the first combatant wins.
pub fn resolve(
    store: &RecordStore,
    animal_a: &str,
    attribute_a: &str,
    animal_b: &str,
    attribute_b: &str,
) -> Outcome {
    let outcome = resolve_inner(store, animal_a, attribute_a, animal_b, attribute_b);
    tracing::debug!(
        animal_a,
        attribute_a,
        animal_b,
        attribute_b,
        outcome = outcome.kind(),
        "battle resolved"
    );
    outcome
}

fn resolve_inner(
    store: &RecordStore,
    animal_a: &str,
    attribute_a: &str,
    animal_b: &str,
    attribute_b: &str,
) -> Outcome {
    let (a, b) = match (store.animal(animal_a), store.animal(animal_b)) {
        (Some(a), Some(b)) => (a, b),
        (a, b) => {
            let mut missing = Vec::new();
            if a.is_none() {
                missing.push((Side::A, animal_a.to_string()));
            }
            if b.is_none() {
                missing.push((Side::B, animal_b.to_string()));
            }
            return Outcome::AnimalNotFound { missing };
        }
    };

    if !a.has_attribute(attribute_a) {
        return invalid_attribute(Side::A, a, attribute_a);
    }
    if !b.has_attribute(attribute_b) {
        return invalid_attribute(Side::B, b, attribute_b);
    }

    if attribute_a == attribute_b {
        return Outcome::Tie {
            animal_a: a.name.clone(),
            animal_b: b.name.clone(),
            attribute: attribute_a.to_string(),
        };
    }

    if beats(store, attribute_a, attribute_b) {
        win(Side::A, a, b, attribute_a, attribute_b)
    } else if beats(store, attribute_b, attribute_a) {
        win(Side::B, b, a, attribute_b, attribute_a)
    } else {
        Outcome::NoContest {
            animal_a: a.name.clone(),
            animal_b: b.name.clone(),
            attribute_a: attribute_a.to_string(),
            attribute_b: attribute_b.to_string(),
        }
    }
}

fn invalid_attribute(side: Side, animal: &Animal, attribute: &str) -> Outcome {
    Outcome::InvalidAttribute {
        side,
        animal_id: animal.id.clone(),
        animal_name: animal.name.clone(),
        attribute: attribute.to_string(),
    }
}

fn win(side: Side, winner: &Animal, loser: &Animal, winning: &str, losing: &str) -> Outcome {
    Outcome::Win {
        winner: side,
        winner_id: winner.id.clone(),
        winner_name: winner.name.clone(),
        loser_name: loser.name.clone(),
        winning_attribute: winning.to_string(),
        losing_attribute: losing.to_string(),
    }
}
