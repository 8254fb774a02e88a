use stockroom_core::Entity;

stockroom_core::numeric_id! {
    /// Category identifier.
    pub struct CategoryId;
}

/// Product category (e.g. "Engines").
#[derive(Debug, Clone)]
pub struct Category {
    id: CategoryId,
    name: String,
}

impl Category {
    pub fn new(id: CategoryId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Category(id={}, name={})", self.id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_id_and_name() {
        let category = Category::new(CategoryId::new(1), "Engines");
        assert_eq!(category.to_string(), "Category(id=1, name=Engines)");
        assert_eq!(category.id(), CategoryId::new(1));
    }
}
