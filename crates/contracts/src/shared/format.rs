//! Форматирование цен для витрины (локаль ru-RU)

use crate::domain::a001_product::aggregate::Price;

/// Неразрывный пробел: разделитель разрядов в ru-RU
const GROUP_SEPARATOR: char = '\u{00a0}';

/// Символ валюты
pub const CURRENCY: &str = "₽";

/// Вставляет разделитель каждые 3 цифры с конца
///
/// ```
/// use contracts::shared::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1\u{a0}234\u{a0}567");
/// ```
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Сумма с валютой: `15 900 ₽`
pub fn format_amount(value: u64) -> String {
    format!("{}{}{}", format_thousands(value), GROUP_SEPARATOR, CURRENCY)
}

pub fn format_price(price: Price) -> String {
    format_amount(u64::from(price.amount()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(390), "390");
        assert_eq!(format_thousands(1290), "1\u{a0}290");
        assert_eq!(format_thousands(100000), "100\u{a0}000");
        assert_eq!(format_thousands(1234567), "1\u{a0}234\u{a0}567");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Price::new(15900)), "15\u{a0}900\u{a0}₽");
        assert_eq!(format_price(Price::new(0)), "0\u{a0}₽");
    }

    #[test]
    fn test_format_amount_above_u32() {
        assert_eq!(format_amount(5_000_000_000), "5\u{a0}000\u{a0}000\u{a0}000\u{a0}₽");
    }
}
