//! Records loaded into the stores before the actors start.

use crate::model::{Dish, DishLineItem, Order, OrderStatus};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Initial contents of the dish and order stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A small menu and two orders, one of them already on its way.
    pub fn sample() -> Self {
        let dishes = vec![
            dish(
                "1",
                "Dolcelatte and chickpea spaghetti",
                "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                19,
                "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
            ),
            dish(
                "2",
                "Falafel and tahini bagel",
                "A warm bagel filled with falafel and tahini",
                6,
                "https://images.pexels.com/photos/4560606/pexels-photo-4560606.jpeg",
            ),
            dish(
                "3",
                "Broccoli and beetroot stir fry",
                "Crunchy stir fry featuring fresh broccoli and beetroot",
                15,
                "https://images.pexels.com/photos/4144234/pexels-photo-4144234.jpeg",
            ),
        ];

        let orders = vec![
            Order {
                id: "1".into(),
                deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".into(),
                mobile_number: "(202) 456-1111".into(),
                status: OrderStatus::OutForDelivery,
                dishes: vec![line_item(&dishes[0], 2)],
            },
            Order {
                id: "2".into(),
                deliver_to: "308 Negra Arroyo Lane, Albuquerque, NM".into(),
                mobile_number: "(505) 143-3369".into(),
                status: OrderStatus::Pending,
                dishes: vec![line_item(&dishes[1], 1), line_item(&dishes[2], 3)],
            },
        ];

        Self { dishes, orders }
    }

    /// The first generated id that cannot collide with a seeded numeric id.
    pub(crate) fn next_dish_id(&self) -> u64 {
        next_after(self.dishes.iter().map(|d| d.id.as_str()))
    }

    pub(crate) fn next_order_id(&self) -> u64 {
        next_after(self.orders.iter().map(|o| o.id.as_str()))
    }
}

fn next_after<'a>(ids: impl Iterator<Item = &'a str>) -> u64 {
    ids.filter_map(|id| id.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

fn dish(id: &str, name: &str, description: &str, price: u64, image_url: &str) -> Dish {
    Dish {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        image_url: image_url.into(),
    }
}

/// Line items embed a copy of the dish, as the sample orders always have.
fn line_item(dish: &Dish, quantity: u64) -> DishLineItem {
    let extra: Map<String, Value> = [
        ("name", json!(dish.name)),
        ("description", json!(dish.description)),
        ("price", json!(dish.price)),
        ("image_url", json!(dish.image_url)),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    DishLineItem {
        dish_id: Some(dish.id.clone()),
        quantity,
        extra,
    }
}
