use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A priceable menu item: a fixed cost and a human-readable description.
///
/// Both methods are pure queries. Toppings implement the same trait by
/// delegating to the beverage they wrap, so a fully dressed order is still
/// just a `Beverage` to the caller.
pub trait Beverage {
    fn cost(&self) -> Decimal;
    fn description(&self) -> String;
}

/// The house coffee, base of every order.
pub struct Coffee;

impl Beverage for Coffee {
    fn cost(&self) -> Decimal {
        dec!(50)
    }

    fn description(&self) -> String {
        "Coffee".to_string()
    }
}

/// Shared inner-beverage holder for all toppings.
///
/// The inner reference is optional only to keep the contract total: with no
/// inner beverage, cost degrades to zero and the description to a fixed
/// placeholder instead of failing. Every topping constructed through the menu
/// wraps a real beverage, so the fallback branch is defensive-only.
pub struct Decorated {
    inner: Option<Box<dyn Beverage>>,
}

impl Decorated {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self { inner: Some(inner) }
    }

    /// A holder with no inner beverage. Nothing in the menu builds this.
    pub fn detached() -> Self {
        Self { inner: None }
    }

    pub fn base_cost(&self) -> Decimal {
        self.inner
            .as_ref()
            .map(|beverage| beverage.cost())
            .unwrap_or(Decimal::ZERO)
    }

    pub fn base_description(&self) -> String {
        self.inner
            .as_ref()
            .map(|beverage| beverage.description())
            .unwrap_or_else(|| "Unknown Beverage".to_string())
    }
}

/// Milk topping, +10 on whatever it wraps.
pub struct Milk(Decorated);

impl Milk {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self(Decorated::new(inner))
    }
}

impl Beverage for Milk {
    fn cost(&self) -> Decimal {
        self.0.base_cost() + dec!(10)
    }

    fn description(&self) -> String {
        format!("{}, Milk", self.0.base_description())
    }
}

/// Sugar topping, +5.
pub struct Sugar(Decorated);

impl Sugar {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self(Decorated::new(inner))
    }
}

impl Beverage for Sugar {
    fn cost(&self) -> Decimal {
        self.0.base_cost() + dec!(5)
    }

    fn description(&self) -> String {
        format!("{}, Sugar", self.0.base_description())
    }
}

/// Chocolate topping, +15.
pub struct Chocolate(Decorated);

impl Chocolate {
    pub fn new(inner: Box<dyn Beverage>) -> Self {
        Self(Decorated::new(inner))
    }
}

impl Beverage for Chocolate {
    fn cost(&self) -> Decimal {
        self.0.base_cost() + dec!(15)
    }

    fn description(&self) -> String {
        format!("{}, Chocolate", self.0.base_description())
    }
}
