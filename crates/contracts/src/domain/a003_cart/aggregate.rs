use crate::domain::a001_product::aggregate::{Price, Product, ProductId};
use serde::{Deserialize, Serialize};

/// Позиция корзины: товар и его количество (всегда ≥ 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    pub fn price(&self) -> Price {
        self.product.price
    }

    /// Стоимость позиции
    pub fn subtotal(&self) -> u64 {
        self.product.price.times(self.quantity)
    }
}

/// Корзина покупателя.
///
/// Значение неизменяемое: каждая операция возвращает новый снимок, старый
/// остаётся как был. Позиции идут в порядке первого добавления, на один
/// `ProductId` приходится не больше одной позиции.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Число различных товаров
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Добавить одну штуку товара
    pub fn add(&self, product: &Product) -> Cart {
        if self.get(product.id).is_some() {
            return self.map_item(product.id, |item| item.quantity + 1);
        }
        let mut items = self.items.clone();
        items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        Cart { items }
    }

    /// Убрать позицию целиком; отсутствующий ID ничего не меняет
    pub fn remove(&self, id: ProductId) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .filter(|item| item.id() != id)
                .cloned()
                .collect(),
        }
    }

    /// Установить количество. Ноль удаляет позицию.
    pub fn update_quantity(&self, id: ProductId, quantity: u32) -> Cart {
        if quantity == 0 {
            return self.remove(id);
        }
        self.map_item(id, |_| quantity)
    }

    /// Всего штук в корзине
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Итоговая сумма: Σ цена × количество
    pub fn total_price(&self) -> u64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    fn map_item(&self, id: ProductId, quantity: impl Fn(&CartItem) -> u32) -> Cart {
        Cart {
            items: self
                .items
                .iter()
                .map(|item| {
                    if item.id() == id {
                        CartItem {
                            product: item.product.clone(),
                            quantity: quantity(item),
                        }
                    } else {
                        item.clone()
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::products;
    use crate::enums::category_key::CategoryKey;

    fn product(id: u32, price: u32) -> Product {
        Product::new(id, "Товар", price, CategoryKey::Liquid, "https://img/1.jpg", None)
    }

    fn quantities(cart: &Cart) -> Vec<(u32, u32)> {
        cart.items()
            .iter()
            .map(|item| (item.id().value(), item.quantity))
            .collect()
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), 0);
    }

    #[test]
    fn test_add_same_product_twice() {
        let p = product(5, 390);
        let cart = Cart::new().add(&p).add(&p);
        assert_eq!(quantities(&cart), vec![(5, 2)]);
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price(), 780);
    }

    #[test]
    fn test_repeated_adds_keep_single_entry() {
        let p = product(3, 100);
        for n in 1..=20u32 {
            let cart = (0..n).fold(Cart::new(), |cart, _| cart.add(&p));
            assert_eq!(cart.len(), 1);
            assert_eq!(cart.get(p.id).map(|i| i.quantity), Some(n));
        }
    }

    #[test]
    fn test_insertion_order_is_first_add() {
        let a = product(1, 10);
        let b = product(2, 20);
        let cart = Cart::new().add(&b).add(&a).add(&b);
        assert_eq!(quantities(&cart), vec![(2, 2), (1, 1)]);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let cart = Cart::new()
            .add(&product(1, 15900))
            .add(&product(1, 15900))
            .add(&product(4, 450));
        assert_eq!(cart.total_price(), 32250);

        let cart = cart.update_quantity(ProductId(1), 0);
        assert_eq!(quantities(&cart), vec![(4, 1)]);
        assert_eq!(cart.total_price(), 450);
    }

    #[test]
    fn test_update_quantity_unknown_id_is_noop() {
        let cart = Cart::new().add(&product(1, 100));
        assert_eq!(cart.update_quantity(ProductId(42), 0), cart);
        assert_eq!(cart.update_quantity(ProductId(42), 3), cart);
        assert_eq!(cart.remove(ProductId(42)), cart);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let cart = Cart::new().add(&product(7, 890)).update_quantity(ProductId(7), 5);
        assert_eq!(quantities(&cart), vec![(7, 5)]);
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), 4450);
    }

    #[test]
    fn test_operations_do_not_touch_previous_snapshot() {
        let p = product(2, 4900);
        let before = Cart::new().add(&p);
        let snapshot = before.clone();

        let _ = before.add(&p);
        let _ = before.update_quantity(p.id, 10);
        let _ = before.remove(p.id);

        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_totals_over_whole_catalog() {
        let cart = products().iter().fold(Cart::new(), |cart, p| cart.add(p).add(p));
        let expected: u64 = products().iter().map(|p| u64::from(p.price.amount()) * 2).sum();
        assert_eq!(cart.len(), products().len());
        assert_eq!(cart.total_items(), 2 * products().len() as u64);
        assert_eq!(cart.total_price(), expected);
    }
}
