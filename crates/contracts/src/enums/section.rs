use serde::{Deserialize, Serialize};
use std::fmt;

/// Разделы одностраничной витрины.
///
/// Переключаются кликом по ссылке в навигации; переходы между любыми
/// разделами разрешены.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Catalog,
    About,
    Contacts,
}

impl Section {
    pub fn code(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Catalog => "catalog",
            Section::About => "about",
            Section::Contacts => "contacts",
        }
    }

    /// Подпись пункта навигации
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Home => "Главная",
            Section::Catalog => "Каталог",
            Section::About => "О нас",
            Section::Contacts => "Контакты",
        }
    }

    /// Порядок пунктов в навигации
    pub fn all() -> [Section; 4] {
        [
            Section::Home,
            Section::Catalog,
            Section::About,
            Section::Contacts,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "home" => Some(Section::Home),
            "catalog" => Some(Section::Catalog),
            "about" => Some(Section::About),
            "contacts" => Some(Section::Contacts),
            _ => None,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn test_from_code() {
        for section in Section::all() {
            assert_eq!(Section::from_code(section.code()), Some(section));
        }
        assert_eq!(Section::from_code("checkout"), None);
    }
}
