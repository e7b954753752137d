//! Restaurante que atiende los pedidos y muestra el recibo de cada uno.
use log::{error, info};

use crate::constants::{ORDERS_FILE, SAMPLE_DISCOUNT_PERCENTAGE, SAMPLE_ORDER_ITEMS};
use crate::errors::RestaurantError;
use crate::menu::available_menu;
use crate::menu_item::MenuItem;
use crate::order::Order;
use crate::orders_reader::read_and_resolve_orders;

/// Restaurante con su menu fijo de diez elementos.
pub struct Restaurant {
    menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn new() -> Restaurant {
        Restaurant {
            menu: available_menu(),
        }
    }

    /// Atiende los pedidos del archivo de pedidos. Si el archivo no esta,
    /// atiende el pedido de muestra del restaurante.
    pub fn manage_orders(&self) {
        match read_and_resolve_orders(&self.menu, ORDERS_FILE) {
            Ok(orders) => {
                for (order, discount) in orders {
                    print_receipt(&order, discount);
                }
            }
            Err(RestaurantError::FileReaderError) => {
                info!("[RESTAURANT] No orders file, serving the sample order");
                let (order, discount) = self.sample_order();
                print_receipt(&order, discount);
            }
            Err(err) => {
                error!("[RESTAURANT] Could not take the orders: {:?}", err);
            }
        }
    }

    fn sample_order(&self) -> (Order<'_>, f64) {
        let mut order = Order::new();
        for &index in SAMPLE_ORDER_ITEMS.iter() {
            if let Some(item) = self.menu.get(index) {
                order.add(item);
            }
        }
        (order, SAMPLE_DISCOUNT_PERCENTAGE)
    }
}

/// Muestra el recibo de un pedido: los totales sin y con descuento, y cada
/// elemento con su precio y su atributo.
fn print_receipt(order: &Order, discount: f64) {
    println!("Total sin descuento: {}", order.total());
    println!(
        "Total con descuento del {}%: {}",
        discount,
        order.apply_discount(discount)
    );
    for item in order {
        println!("{}", item);
    }
}
