use serde::{Deserialize, Serialize};
use std::fmt;

/// Категории товаров витрины
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Hookah,
    Tobacco,
    Disposable,
    Coal,
    Liquid,
}

impl CategoryKey {
    /// Получить код категории
    pub fn code(&self) -> &'static str {
        match self {
            CategoryKey::Hookah => "hookah",
            CategoryKey::Tobacco => "tobacco",
            CategoryKey::Disposable => "disposable",
            CategoryKey::Coal => "coal",
            CategoryKey::Liquid => "liquid",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryKey::Hookah => "Кальяны",
            CategoryKey::Tobacco => "Табак",
            CategoryKey::Disposable => "Одноразки",
            CategoryKey::Coal => "Уголь",
            CategoryKey::Liquid => "Жидкости",
        }
    }

    /// Получить все категории в порядке показа
    pub fn all() -> [CategoryKey; 5] {
        [
            CategoryKey::Hookah,
            CategoryKey::Tobacco,
            CategoryKey::Disposable,
            CategoryKey::Coal,
            CategoryKey::Liquid,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "hookah" => Some(CategoryKey::Hookah),
            "tobacco" => Some(CategoryKey::Tobacco),
            "disposable" => Some(CategoryKey::Disposable),
            "coal" => Some(CategoryKey::Coal),
            "liquid" => Some(CategoryKey::Liquid),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_for_every_key() {
        for key in CategoryKey::all() {
            assert_eq!(CategoryKey::from_code(key.code()), Some(key));
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(CategoryKey::from_code("all"), None);
        assert_eq!(CategoryKey::from_code("Hookah"), None);
        assert_eq!(CategoryKey::from_code(""), None);
    }

    #[test]
    fn test_display_uses_code() {
        assert_eq!(CategoryKey::Disposable.to_string(), "disposable");
    }
}
