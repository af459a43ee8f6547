use crate::enums::category_key::CategoryKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Код псевдокатегории «Все товары»
pub const ALL_CODE: &str = "all";

/// Текущий фильтр каталога: все товары или одна категория
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CategoryKey),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CODE,
            CategoryFilter::Only(key) => key.code(),
        }
    }

    /// Подходит ли товар категории `category` под фильтр
    pub fn matches(&self, category: CategoryKey) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(key) => *key == category,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        if code == ALL_CODE {
            return Some(CategoryFilter::All);
        }
        CategoryKey::from_code(code).map(CategoryFilter::Only)
    }
}

impl From<CategoryKey> for CategoryFilter {
    fn from(key: CategoryKey) -> Self {
        CategoryFilter::Only(key)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Карточка категории для селектора: подпись, иконка и акцентный цвет
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDescriptor {
    pub label: String,
    pub filter: CategoryFilter,
    /// Имя иконки из набора `shared::icons` во frontend
    pub icon: String,
    /// CSS-цвет в формате `#rrggbb`
    pub color: String,
}

impl CategoryDescriptor {
    pub fn new(label: &str, filter: CategoryFilter, icon: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            filter,
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    /// Ключ для `<For>`: совпадает с кодом фильтра
    pub fn key(&self) -> &'static str {
        self.filter.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        for key in CategoryKey::all() {
            assert!(CategoryFilter::All.matches(key));
        }
    }

    #[test]
    fn test_only_matches_its_key() {
        let filter = CategoryFilter::Only(CategoryKey::Coal);
        assert!(filter.matches(CategoryKey::Coal));
        assert!(!filter.matches(CategoryKey::Liquid));
    }

    #[test]
    fn test_from_code() {
        assert_eq!(CategoryFilter::from_code("all"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::from_code("tobacco"),
            Some(CategoryFilter::Only(CategoryKey::Tobacco))
        );
        assert_eq!(CategoryFilter::from_code("snacks"), None);
        assert_eq!(CategoryFilter::default(), CategoryFilter::All);
    }
}
