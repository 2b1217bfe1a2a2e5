pub mod battle;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod store;

use crate::battle::resolve;
use crate::model::Category;
pub use crate::error::DataLoadError;
pub use crate::store::{DataSources, RecordStore};
use anyhow::Context;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Summary,
    Animals(Option<Category>),
    Show(String),
    Awards,
    Battle {
        animal_a: String,
        attribute_a: String,
        animal_b: String,
        attribute_b: String,
    },
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub data_dir: PathBuf,
    pub command: Command,
}

pub fn load_store(opts: &CliOptions) -> anyhow::Result<RecordStore> {
    RecordStore::load_dir(&opts.data_dir)
        .with_context(|| format!("Failed to load game data from {}", opts.data_dir.display()))
}

/// Render the output of one command against an already loaded store.
pub fn execute(store: &RecordStore, command: &Command) -> anyhow::Result<String> {
    let text = match command {
        Command::Summary => format!(
            "Welcome to Cosmic Animal Awards!\nLoaded {} animals and {} awards.",
            store.animal_count(),
            store.award_count()
        ),
        Command::Animals(None) => render::animal_list(&store.animals_sorted_by_id(), true),
        Command::Animals(Some(category)) => {
            render::animal_list(&store.animals_by_type(*category), false)
        }
        Command::Show(id) => match store.animal(id) {
            Some(animal) => render::animal_card(animal),
            None => format!("No animal with id {id}"),
        },
        Command::Awards => store
            .all_awards()
            .map(|award| render::award_entry(store, award))
            .collect::<Vec<_>>()
            .join("\n\n"),
        Command::Battle {
            animal_a,
            attribute_a,
            animal_b,
            attribute_b,
        } => {
            let outcome = resolve(store, animal_a, attribute_a, animal_b, attribute_b);
            render::battle_report(&outcome)
        }
    };
    Ok(text)
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    let store = load_store(&opts)?;
    let text = execute(&store, &opts.command)?;
    println!("{text}");
    Ok(())
}
