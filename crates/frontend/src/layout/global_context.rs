use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a001_product::catalog::filter_products;
use contracts::domain::a002_category::aggregate::CategoryFilter;
use contracts::domain::a003_cart::aggregate::Cart;
use contracts::enums::section::Section;
use leptos::prelude::*;
use web_sys::window;

/// Состояние страницы: корзина, фильтр каталога, раздел, видимость корзины.
///
/// Каждый обработчик клика делает ровно одну запись в сигнал, поэтому на
/// один клик приходится один переход состояния.
#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub cart: RwSignal<Cart>,
    pub category: RwSignal<CategoryFilter>,
    pub section: RwSignal<Section>,
    pub cart_open: RwSignal<bool>,
    pub total_items: Memo<u64>,
    pub total_price: Memo<u64>,
    pub filtered_products: Memo<Vec<Product>>,
}

impl StorefrontContext {
    pub fn new() -> Self {
        let cart = RwSignal::new(Cart::new());
        let category = RwSignal::new(CategoryFilter::default());

        Self {
            cart,
            category,
            section: RwSignal::new(Section::default()),
            cart_open: RwSignal::new(false),
            total_items: Memo::new(move |_| cart.with(Cart::total_items)),
            total_price: Memo::new(move |_| cart.with(Cart::total_price)),
            filtered_products: Memo::new(move |_| filter_products(category.get())),
        }
    }

    pub fn add_to_cart(&self, product: &Product) {
        log::debug!("add_to_cart: id={} name='{}'", product.id, product.name);
        self.cart.update(|cart| *cart = cart.add(product));
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        log::debug!("remove_from_cart: id={}", id);
        self.cart.update(|cart| *cart = cart.remove(id));
    }

    pub fn update_quantity(&self, id: ProductId, quantity: u32) {
        log::debug!("update_quantity: id={} quantity={}", id, quantity);
        self.cart.update(|cart| *cart = cart.update_quantity(id, quantity));
    }

    pub fn select_category(&self, filter: CategoryFilter) {
        log::debug!("select_category: '{}'", filter);
        self.category.set(filter);
    }

    /// Клик по карточке категории на главной: фильтр + переход в каталог
    pub fn open_category(&self, filter: CategoryFilter) {
        self.category.set(filter);
        self.navigate(Section::Catalog);
    }

    pub fn navigate(&self, section: Section) {
        log::info!("navigate: '{}'", section);
        self.section.set(section);
        if let Some(w) = window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn is_active_section(&self, section: Section) -> bool {
        self.section.get() == section
    }

    pub fn is_active_category(&self, filter: CategoryFilter) -> bool {
        self.category.get() == filter
    }

    pub fn open_cart(&self) {
        self.cart_open.set(true);
    }

    pub fn close_cart(&self) {
        self.cart_open.set(false);
    }
}

impl Default for StorefrontContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Получить контекст витрины из дерева компонентов
pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext context not found")
}
