//! Lectura de los pedidos de los clientes desde un archivo JSON.
use log::{debug, error, info};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::errors::RestaurantError;
use crate::menu_item::MenuItem;
use crate::order::Order;

#[derive(Deserialize, Debug)]
struct JsonOrder {
    items: Vec<usize>,
    discount: f64,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

fn resolve_order<'a>(
    menu: &'a [MenuItem],
    json_order: &JsonOrder,
) -> Result<Order<'a>, RestaurantError> {
    let mut order = Order::new();
    for &index in &json_order.items {
        let item = menu.get(index).ok_or_else(|| {
            error!("[READER] Item {} is not in the menu", index);
            RestaurantError::ItemNotInMenu
        })?;
        order.add(item);
    }
    Ok(order)
}

fn resolve_orders<'a>(
    menu: &'a [MenuItem],
    json_orders: Vec<JsonOrder>,
) -> Result<Vec<(Order<'a>, f64)>, RestaurantError> {
    let mut orders = Vec::new();
    for (id, json_order) in json_orders.iter().enumerate() {
        let order = resolve_order(menu, json_order)?;
        debug!("[READER] Added order {}", id);
        orders.push((order, json_order.discount));
    }
    info!("[READER] No more orders left");
    Ok(orders)
}

/// Lee los pedidos del archivo y los arma contra el menu. Cada pedido del
/// archivo trae las posiciones de sus elementos y el descuento a aplicar.
pub fn read_and_resolve_orders<'a, P: AsRef<Path>>(
    menu: &'a [MenuItem],
    path: P,
) -> Result<Vec<(Order<'a>, f64)>, RestaurantError> {
    let result = read_orders_from_file(path);
    match result {
        Ok(json_orders) => resolve_orders(menu, json_orders),
        Err(_) => Err(RestaurantError::FileReaderError),
    }
}
