use cosmic_animal_awards::battle::{resolve, Outcome, Side};
use cosmic_animal_awards::model::{Animal, AttributeRelationship, Category};
use cosmic_animal_awards::RecordStore;

fn make_animal(id: &str, name: &str, attributes: &[&str]) -> Animal {
    Animal {
        id: id.to_string(),
        name: name.to_string(),
        category: Category::Earth,
        image: format!("images/{id}.png"),
        description: String::new(),
        habitat: String::new(),
        fun_fact: String::new(),
        attributes: attributes.iter().map(|a| a.to_string()).collect(),
        awards: Box::new([]),
    }
}

fn make_rel(attribute: &str, beats: &[&str]) -> AttributeRelationship {
    AttributeRelationship {
        attribute: attribute.to_string(),
        beats: beats.iter().map(|b| b.to_string()).collect(),
        loses_to: Vec::new(),
        description: String::new(),
    }
}

fn arena(relationships: Vec<AttributeRelationship>) -> RecordStore {
    RecordStore::from_records(
        vec![
            make_animal("x", "Xenofox", &["Fire", "Claws", "Stealth"]),
            make_animal("y", "Yeti", &["Ice", "Claws", "Fire"]),
            make_animal("z", "Zebra", &["Claws", "Speed"]),
        ],
        vec![],
        relationships,
    )
}

#[test]
fn same_attribute_is_a_tie() {
    let store = arena(vec![make_rel("Claws", &["Claws"])]);
    let outcome = resolve(&store, "x", "Claws", "y", "Claws");
    assert_eq!(
        outcome,
        Outcome::Tie {
            animal_a: "Xenofox".to_string(),
            animal_b: "Yeti".to_string(),
            attribute: "Claws".to_string(),
        }
    );
    assert_eq!(outcome.winner(), None);
}

#[test]
fn declared_relation_wins() {
    let store = arena(vec![make_rel("Fire", &["Ice"])]);
    let outcome = resolve(&store, "x", "Fire", "y", "Ice");
    assert_eq!(
        outcome,
        Outcome::Win {
            winner: Side::A,
            winner_id: "x".to_string(),
            winner_name: "Xenofox".to_string(),
            loser_name: "Yeti".to_string(),
            winning_attribute: "Fire".to_string(),
            losing_attribute: "Ice".to_string(),
        }
    );
    assert_eq!(outcome.message(), "Xenofox's Fire beats Yeti's Ice!");
}

#[test]
fn second_combatant_can_win() {
    let store = arena(vec![make_rel("Fire", &["Ice"])]);
    let outcome = resolve(&store, "y", "Ice", "x", "Fire");
    match outcome {
        Outcome::Win {
            winner,
            winner_id,
            winning_attribute,
            losing_attribute,
            ..
        } => {
            assert_eq!(winner, Side::B);
            assert_eq!(winner_id, "x");
            assert_eq!(winning_attribute, "Fire");
            assert_eq!(losing_attribute, "Ice");
        }
        other => panic!("expected a win, got {other:?}"),
    }
}

#[test]
fn unrelated_attributes_are_no_contest() {
    let store = arena(vec![make_rel("Fire", &["Ice"])]);
    let outcome = resolve(&store, "x", "Fire", "y", "Claws");
    assert!(matches!(outcome, Outcome::NoContest { .. }));
    assert_eq!(
        outcome.message(),
        "No clear winner - attributes don't directly counter each other"
    );
}

#[test]
fn attribute_without_entry_never_wins() {
    // Stealth has no relationship entry at all.
    let store = arena(vec![make_rel("Fire", &["Ice"])]);
    let outcome = resolve(&store, "x", "Stealth", "y", "Claws");
    assert!(matches!(outcome, Outcome::NoContest { .. }));
    let reversed = resolve(&store, "y", "Claws", "x", "Stealth");
    assert!(matches!(reversed, Outcome::NoContest { .. }));
}

#[test]
fn unknown_animal_reported_before_attribute_checks() {
    let store = arena(vec![]);
    let outcome = resolve(&store, "x", "Nonsense", "ghost", "Fire");
    assert_eq!(
        outcome,
        Outcome::AnimalNotFound {
            missing: vec![(Side::B, "ghost".to_string())],
        }
    );

    let both = resolve(&store, "nope", "Fire", "ghost", "Fire");
    assert_eq!(
        both,
        Outcome::AnimalNotFound {
            missing: vec![
                (Side::A, "nope".to_string()),
                (Side::B, "ghost".to_string()),
            ],
        }
    );
}

#[test]
fn attribute_not_owned_by_first_animal() {
    let store = arena(vec![make_rel("Fire", &["Ice"])]);
    // The second side is also invalid; the first side is reported.
    let outcome = resolve(&store, "z", "Fire", "y", "Telepathy");
    assert_eq!(
        outcome,
        Outcome::InvalidAttribute {
            side: Side::A,
            animal_id: "z".to_string(),
            animal_name: "Zebra".to_string(),
            attribute: "Fire".to_string(),
        }
    );
    assert_eq!(outcome.message(), "Zebra doesn't have attribute: Fire");
}

#[test]
fn attribute_not_owned_by_second_animal() {
    let store = arena(vec![]);
    let outcome = resolve(&store, "x", "Fire", "z", "Ice");
    assert!(matches!(
        outcome,
        Outcome::InvalidAttribute { side: Side::B, ref animal_id, .. } if animal_id == "z"
    ));
}

#[test]
fn first_combatant_wins_when_both_directions_declared() {
    let store = arena(vec![make_rel("Fire", &["Ice"]), make_rel("Ice", &["Fire"])]);
    let outcome = resolve(&store, "x", "Fire", "y", "Ice");
    assert_eq!(outcome.winner(), Some("x"));
    let flipped = resolve(&store, "y", "Ice", "x", "Fire");
    assert_eq!(flipped.winner(), Some("y"));
}

#[test]
fn resolution_is_deterministic() {
    let store = arena(vec![make_rel("Fire", &["Ice"]), make_rel("Claws", &["Stealth"])]);
    let cases = [
        ("x", "Fire", "y", "Ice"),
        ("x", "Stealth", "z", "Claws"),
        ("x", "Claws", "z", "Claws"),
        ("x", "Fire", "z", "Speed"),
    ];
    for (a, attr_a, b, attr_b) in cases {
        assert_eq!(
            resolve(&store, a, attr_a, b, attr_b),
            resolve(&store, a, attr_a, b, attr_b)
        );
    }
}

#[test]
fn same_animal_may_fight_itself() {
    let store = arena(vec![make_rel("Fire", &["Claws"])]);
    let outcome = resolve(&store, "x", "Fire", "x", "Claws");
    assert_eq!(outcome.winner(), Some("x"));
}
