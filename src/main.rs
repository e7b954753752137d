pub mod constants;
pub mod errors;
pub mod menu;
pub mod menu_item;
pub mod order;
pub mod orders_reader;
pub mod restaurant;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use restaurant::Restaurant;

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("No se pudo iniciar el logger: {:?}", err);
    }
    let restaurant = Restaurant::new();
    restaurant.manage_orders();
}
