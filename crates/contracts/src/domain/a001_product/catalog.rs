//! Статический каталог витрины.
//!
//! Список товаров и категорий задан в коде и собирается один раз при первом
//! обращении. Порядок элементов совпадает с порядком показа на странице.

use super::aggregate::{Product, ProductId};
use crate::domain::a002_category::aggregate::{CategoryDescriptor, CategoryFilter};
use crate::enums::category_key::CategoryKey;
use once_cell::sync::Lazy;

const IMG_HOOKAH: &str = "https://images.unsplash.com/photo-1591238371728-70fbfe6c9bf8?w=600";
const IMG_TOBACCO: &str = "https://images.unsplash.com/photo-1580870069867-74c08b0c5195?w=600";
const IMG_DISPOSABLE: &str = "https://images.unsplash.com/photo-1607853202273-797f1c22a38e?w=600";
const IMG_COAL: &str = "https://images.unsplash.com/photo-1610448721566-47369c768e70?w=600";
const IMG_LIQUID: &str = "https://images.unsplash.com/photo-1608671685857-c8f451c42065?w=600";

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    use CategoryKey::*;
    vec![
        // Кальяны
        Product::new(1, "Кальян Premium Gold", 15900, Hookah, IMG_HOOKAH, Some("Премиум кальян с золотым покрытием")),
        Product::new(2, "Кальян Portable Mini", 4900, Hookah, IMG_HOOKAH, Some("Компактный портативный кальян")),
        Product::new(3, "Кальян Classic Steel", 8500, Hookah, IMG_HOOKAH, Some("Классический стальной кальян")),
        // Табак
        Product::new(4, "Darkside 250г", 1290, Tobacco, IMG_TOBACCO, Some("Крепкий табак премиум класса")),
        Product::new(5, "Brusko 50г", 650, Tobacco, IMG_TOBACCO, Some("Популярный бренд табака")),
        Product::new(6, "Daily Hookah 250г", 1100, Tobacco, IMG_TOBACCO, Some("Табак для ежедневного курения")),
        Product::new(7, "Must Have 125г", 890, Tobacco, IMG_TOBACCO, Some("Сбалансированный вкус")),
        Product::new(8, "Sebero 100г", 750, Tobacco, IMG_TOBACCO, Some("Яркие фруктовые миксы")),
        // Одноразки
        Product::new(9, "ELF BAR 5000", 650, Disposable, IMG_DISPOSABLE, Some("5000 затяжек")),
        Product::new(10, "HQD Ultra", 550, Disposable, IMG_DISPOSABLE, Some("Популярная одноразка")),
        Product::new(11, "Puff Bar Plus", 450, Disposable, IMG_DISPOSABLE, Some("Компактная и удобная")),
        // Уголь
        Product::new(12, "Уголь кокосовый 1кг", 450, Coal, IMG_COAL, Some("Натуральный кокосовый уголь")),
        Product::new(13, "Уголь Tom Coco 1кг", 550, Coal, IMG_COAL, Some("Премиум уголь Tom Coco")),
        // Жидкости
        Product::new(14, "Жидкость Salt 30мл", 390, Liquid, IMG_LIQUID, Some("Солевой никотин 30мл")),
        Product::new(15, "Жидкость Freebase 60мл", 490, Liquid, IMG_LIQUID, Some("Классический никотин 60мл")),
    ]
});

static CATEGORIES: Lazy<Vec<CategoryDescriptor>> = Lazy::new(|| {
    let mut list = vec![CategoryDescriptor::new(
        "Все товары",
        CategoryFilter::All,
        "store",
        "#9b87f5",
    )];
    list.extend(CategoryKey::all().into_iter().map(|key| {
        let (icon, color) = match key {
            CategoryKey::Hookah => ("flame", "#9b87f5"),
            CategoryKey::Tobacco => ("package", "#7E69AB"),
            CategoryKey::Disposable => ("zap", "#D946EF"),
            CategoryKey::Coal => ("circle", "#F97316"),
            CategoryKey::Liquid => ("droplets", "#0EA5E9"),
        };
        CategoryDescriptor::new(key.display_name(), key.into(), icon, color)
    }));
    list
});

/// Все товары каталога в исходном порядке
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Карточки категорий; «Все товары» всегда первая
pub fn categories() -> &'static [CategoryDescriptor] {
    &CATEGORIES
}

/// Товары, подходящие под фильтр, в исходном порядке
pub fn filter_products(filter: CategoryFilter) -> Vec<Product> {
    products()
        .iter()
        .filter(|p| filter.matches(p.category))
        .cloned()
        .collect()
}

/// Сколько товаров покажет фильтр
pub fn count_in(filter: CategoryFilter) -> usize {
    products().iter().filter(|p| filter.matches(p.category)).count()
}

pub fn find_product(id: ProductId) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_integrity() {
        let ids: HashSet<ProductId> = products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products().len(), "product ids must be unique");
        for p in products() {
            assert!(p.validate().is_ok(), "{:?}", p.validate());
        }
    }

    #[test]
    fn test_filter_all_returns_full_list_in_order() {
        let all = filter_products(CategoryFilter::All);
        assert_eq!(all.as_slice(), products());
        let ids: Vec<u32> = all.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let tobacco = filter_products(CategoryKey::Tobacco.into());
        let ids: Vec<u32> = tobacco.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![4, 5, 6, 7, 8]);
        assert!(tobacco.iter().all(|p| p.category == CategoryKey::Tobacco));
    }

    #[test]
    fn test_every_category_is_non_empty_and_partitions_catalog() {
        let total: usize = CategoryKey::all()
            .into_iter()
            .map(|k| count_in(k.into()))
            .inspect(|n| assert!(*n > 0))
            .sum();
        assert_eq!(total, products().len());
        assert_eq!(count_in(CategoryFilter::All), 15);
    }

    #[test]
    fn test_categories_start_with_all() {
        let cats = categories();
        assert_eq!(cats.len(), 6);
        assert_eq!(cats[0].filter, CategoryFilter::All);
        assert_eq!(cats[0].label, "Все товары");
        assert_eq!(cats[5].key(), "liquid");
    }

    #[test]
    fn test_find_product() {
        let p = find_product(ProductId(5)).map(|p| p.name.as_str());
        assert_eq!(p, Some("Brusko 50г"));
        assert!(find_product(ProductId(99)).is_none());
    }
}
