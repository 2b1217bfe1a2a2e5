//! Read-only accessors over a loaded [`RecordStore`].

use crate::model::{Animal, AttributeRelationship, Award, Category};
use crate::store::RecordStore;

impl RecordStore {
    /// Animals of one category, in load order.
    pub fn animals_by_type(&self, category: Category) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    pub fn animal(&self, id: &str) -> Option<&Animal> {
        self.animals.get(id)
    }

    pub fn award(&self, id: &str) -> Option<&Award> {
        self.awards.get(id)
    }

    /// Animals whose award list contains `award_id`, in load order.
    pub fn animals_by_award(&self, award_id: &str) -> Vec<&Animal> {
        self.animals
            .iter()
            .filter(|a| a.has_award(award_id))
            .collect()
    }

    pub fn relationship(&self, attribute: &str) -> Option<&AttributeRelationship> {
        self.relationships.get(attribute)
    }

    pub fn all_animals(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter()
    }

    pub fn animals_sorted_by_id(&self) -> Vec<&Animal> {
        let mut animals: Vec<&Animal> = self.animals.iter().collect();
        animals.sort_by(|lhs, rhs| lhs.id.cmp(&rhs.id));
        animals
    }

    pub fn all_awards(&self) -> impl Iterator<Item = &Award> {
        self.awards.iter()
    }
}
