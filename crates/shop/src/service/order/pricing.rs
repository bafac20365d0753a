use crate::model::{discount::Discount, variant::Variant};

pub fn base_price(variant: &Variant, quantity: i32) -> f64 {
    variant.unit_price() * f64::from(quantity)
}

/// Percent-off takes precedence; a zero field counts as unset.
pub fn apply_discount(price: f64, discount: &Discount) -> f64 {
    match (discount.discount_percent, discount.discount_money) {
        (Some(percent), _) if percent != 0.0 => price - price * (percent / 100.0),
        (_, Some(money)) if money != 0.0 => price - money,
        _ => price,
    }
}

pub fn final_price(variant: &Variant, quantity: i32, discount: Option<&Discount>) -> f64 {
    let price = base_price(variant, quantity);
    let price = match discount {
        Some(discount) => apply_discount(price, discount),
        None => price,
    };
    price.max(0.0)
}
