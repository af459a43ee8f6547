use crate::domain::common::AggregateId;
use crate::enums::category_key::CategoryKey;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара (стабилен, уникален в каталоге)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        u32::from_string(s).map(ProductId::new)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Price
// ============================================================================

/// Цена в минимальных единицах валюты (в каталоге это целые рубли)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub u32);

impl Price {
    pub fn new(amount: u32) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> u32 {
        self.0
    }

    /// Стоимость позиции: цена × количество
    pub fn times(&self, quantity: u32) -> u64 {
        u64::from(self.0) * u64::from(quantity)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога. Создаётся один раз при старте и больше не меняется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: CategoryKey,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        id: u32,
        name: &str,
        price: u32,
        category: CategoryKey,
        image: &str,
        description: Option<&str>,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Price::new(price),
            category,
            image: image.to_string(),
            description: description.map(str::to_string),
        }
    }

    /// Получить ID как строку (для ключей в списках)
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err(format!("Товар {}: наименование не может быть пустым", self.id));
        }
        if !self.image.starts_with("http://") && !self.image.starts_with("https://") {
            return Err(format!(
                "Товар {}: адрес изображения должен начинаться с http:// или https://",
                self.id
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_string() {
        assert_eq!(ProductId::from_string("14"), Ok(ProductId(14)));
        assert_eq!(ProductId::from_string(" 7 "), Ok(ProductId(7)));
        assert!(ProductId::from_string("-1").is_err());
        assert!(ProductId::from_string("abc").is_err());
    }

    #[test]
    fn test_price_times_does_not_overflow_u32() {
        let price = Price::new(u32::MAX);
        assert_eq!(price.times(2), u64::from(u32::MAX) * 2);
        assert_eq!(Price::new(390).times(0), 0);
    }

    #[test]
    fn test_validate() {
        let ok = Product::new(1, "Кальян", 100, CategoryKey::Hookah, "https://x/y.jpg", None);
        assert!(ok.validate().is_ok());

        let no_name = Product { name: "  ".into(), ..ok.clone() };
        assert!(no_name.validate().is_err());

        let bad_image = Product { image: "ftp://x".into(), ..ok };
        assert!(bad_image.validate().is_err());
    }
}
