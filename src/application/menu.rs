use crate::domain::beverage::{Beverage, Chocolate, Coffee, Milk, Sugar};
use crate::error::{BrewPayError, Result};

/// Builds a coffee with the given toppings, applied in the order given.
///
/// Topping names are matched case-insensitively. Unlike the currency router,
/// this lookup has no default arm: an unknown topping is a user error and is
/// reported as one.
pub fn build_order(toppings: &[String]) -> Result<Box<dyn Beverage>> {
    let mut beverage: Box<dyn Beverage> = Box::new(Coffee);
    for name in toppings {
        beverage = match name.to_lowercase().as_str() {
            "milk" => Box::new(Milk::new(beverage)),
            "sugar" => Box::new(Sugar::new(beverage)),
            "chocolate" => Box::new(Chocolate::new(beverage)),
            _ => return Err(BrewPayError::UnknownTopping(name.clone())),
        };
    }
    Ok(beverage)
}
