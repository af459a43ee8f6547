use anyhow::Context;
use serde::Deserialize;

/// Статический контент витрины: название, тексты, контакты, ссылки
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub store: StoreInfo,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub hours: Vec<OpeningHours>,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct StoreInfo {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub footer_note: String,
    #[serde(default)]
    pub copyright: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HeroConfig {
    pub title: String,
    pub lead: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AboutConfig {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ContactsConfig {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactsConfig {
    /// Ссылка для звонилки: `tel:+79991234567`
    pub fn tel_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OpeningHours {
    pub days: String,
    pub time: String,
}

/// Внешняя ссылка (мессенджер, соцсеть); открывается в новой вкладке
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

/// Конфигурация, встроенная в сборку
const BUNDLED_CONFIG: &str = include_str!("../../config/storefront.toml");

impl StoreConfig {
    /// Разобрать конфигурацию из TOML и проверить её
    pub fn from_toml_str(source: &str) -> anyhow::Result<Self> {
        let config: StoreConfig =
            toml::from_str(source).context("Не удалось разобрать конфигурацию витрины")?;
        config.validate().map_err(anyhow::Error::msg)?;
        Ok(config)
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.store.name.trim().is_empty() {
            return Err("Название магазина не может быть пустым".into());
        }
        if self.contacts.phone.chars().filter(char::is_ascii_digit).count() == 0 {
            return Err("Телефон должен содержать цифры".into());
        }
        for link in &self.links {
            if !link.url.starts_with("http://") && !link.url.starts_with("https://") {
                return Err(format!(
                    "Ссылка «{}» должна начинаться с http:// или https://",
                    link.label
                ));
            }
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store: StoreInfo {
                name: "Kalyan House".into(),
                tagline: "Кальянный магазин".into(),
                footer_note: String::new(),
                copyright: String::new(),
            },
            hero: HeroConfig {
                title: "Kalyan House".into(),
                lead: String::new(),
                features: Vec::new(),
            },
            about: AboutConfig {
                title: "О магазине".into(),
                paragraphs: Vec::new(),
            },
            contacts: ContactsConfig {
                phone: "+7 (999) 123-45-67".into(),
                email: "info@kalyanhouse.ru".into(),
                address: String::new(),
            },
            hours: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Загрузить встроенную конфигурацию витрины
pub fn load_config() -> anyhow::Result<StoreConfig> {
    StoreConfig::from_toml_str(BUNDLED_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_loads() {
        let config = load_config();
        assert!(config.is_ok(), "{:?}", config.err());
        let config = config.unwrap();
        assert_eq!(config.store.name, "Kalyan House");
        assert_eq!(config.hero.features.len(), 3);
        assert_eq!(config.hours.len(), 2);
        assert_eq!(config.links.len(), 2);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(StoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_tel_href() {
        let contacts = StoreConfig::default().contacts;
        assert_eq!(contacts.tel_href(), "tel:+79991234567");
        assert_eq!(contacts.mailto_href(), "mailto:info@kalyanhouse.ru");
    }

    #[test]
    fn test_rejects_non_http_link() {
        let source = BUNDLED_CONFIG.replace("https://t.me/kalyanhouse", "t.me/kalyanhouse");
        let err = StoreConfig::from_toml_str(&source).unwrap_err();
        assert!(err.to_string().contains("Telegram"));
    }

    #[test]
    fn test_rejects_broken_toml() {
        assert!(StoreConfig::from_toml_str("[store\nname = 1").is_err());
    }
}
