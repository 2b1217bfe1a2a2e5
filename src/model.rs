use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Earth,
    Alien,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Earth => "earth",
            Category::Alien => "alien",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "earth" => Ok(Category::Earth),
            "alien" => Ok(Category::Alien),
            other => anyhow::bail!("Unknown animal type {other} (use earth or alien)"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Animal {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub image: String,
    pub description: String,
    pub habitat: String,
    pub fun_fact: String,
    pub attributes: Vec<String>,
    #[serde(default)]
    pub awards: Box<[String]>,
}

impl Animal {
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| a == attribute)
    }

    pub fn has_award(&self, award_id: &str) -> bool {
        self.awards.iter().any(|a| a == award_id)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Award {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub year: i32,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct AttributeRelationship {
    pub attribute: String,
    pub beats: Vec<String>,
    pub loses_to: Vec<String>,
    pub description: String,
}

impl AttributeRelationship {
    pub fn defeats(&self, other: &str) -> bool {
        self.beats.iter().any(|b| b == other)
    }
}

#[derive(Debug, Deserialize)]
pub struct AnimalsFile {
    pub animals: Vec<Animal>,
}

#[derive(Debug, Deserialize)]
pub struct AwardsFile {
    pub awards: Vec<Award>,
}

#[derive(Debug, Deserialize)]
pub struct RelationshipsFile {
    pub relationships: Vec<AttributeRelationship>,
}
