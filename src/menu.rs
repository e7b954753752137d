//! Menu disponible del restaurante.
use crate::menu_item::{MenuItem, Variant};

/// Construye el menu fijo del restaurante: tres refrescos, tres entradas y
/// cuatro platos fuertes.
pub fn available_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "Coca-Cola",
            2.0,
            Variant::Beverage {
                size: String::from("Grande"),
            },
        ),
        MenuItem::new(
            "Agua Mineral",
            1.0,
            Variant::Beverage {
                size: String::from("Mediana"),
            },
        ),
        MenuItem::new(
            "Limonada",
            1.5,
            Variant::Beverage {
                size: String::from("Grande"),
            },
        ),
        MenuItem::new(
            "Nachos",
            2.5,
            Variant::Appetizer {
                portion: String::from("Grande"),
            },
        ),
        MenuItem::new(
            "Tostones",
            2.0,
            Variant::Appetizer {
                portion: String::from("Mediana"),
            },
        ),
        MenuItem::new(
            "Yuca Frita",
            3.0,
            Variant::Appetizer {
                portion: String::from("Mediana"),
            },
        ),
        MenuItem::new(
            "Pasta Alfredo",
            7.0,
            Variant::MainCourse {
                sides: vec![String::from("Pan de Ajo"), String::from("Queso Parmesano")],
            },
        ),
        MenuItem::new(
            "Ensalada César",
            5.0,
            Variant::MainCourse {
                sides: vec![String::from("Pollo a la Plancha")],
            },
        ),
        MenuItem::new(
            "Bistec a la Parrilla",
            8.0,
            Variant::MainCourse {
                sides: vec![String::from("Arroz"), String::from("Puré de Papas")],
            },
        ),
        MenuItem::new(
            "Hamburguesa Clásica",
            9.0,
            Variant::MainCourse {
                sides: vec![String::from("Papas Fritas"), String::from("Gaseosa")],
            },
        ),
    ]
}
