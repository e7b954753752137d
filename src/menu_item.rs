//! Elementos que ofrece el menu del restaurante.
use std::fmt;

/// Variante de un elemento del menu. Cada una agrega un unico atributo
/// descriptivo: el tamano de un refresco, la porcion de una entrada, o las
/// guarniciones de un plato fuerte.
#[derive(Debug, Clone, PartialEq)]
pub enum Variant {
    Beverage { size: String },
    Appetizer { portion: String },
    MainCourse { sides: Vec<String> },
}

/// Elemento del menu con su nombre, precio y variante.
/// No se modifica despues de construirlo.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    name: String,
    price: f64,
    variant: Variant,
}

impl MenuItem {
    /// Crea un elemento del menu. Ni el nombre ni el signo del precio se
    /// validan, los valores se aceptan tal cual llegan.
    pub fn new(name: &str, price: f64, variant: Variant) -> MenuItem {
        MenuItem {
            name: String::from(name),
            price,
            variant,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Precio del elemento.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)?;
        match &self.variant {
            Variant::Beverage { size } => write!(f, " - {}", size),
            Variant::Appetizer { portion } => write!(f, " - {}", portion),
            Variant::MainCourse { sides } => {
                for side in sides {
                    write!(f, " - {}", side)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_the_stored_price() {
        let item = MenuItem::new(
            "Limonada",
            1.5,
            Variant::Beverage {
                size: String::from("Grande"),
            },
        );
        assert_eq!(1.5, item.price());
        assert_eq!("Limonada", item.name());
    }

    #[test]
    fn should_display_a_beverage_with_its_size() {
        let item = MenuItem::new(
            "Limonada",
            1.5,
            Variant::Beverage {
                size: String::from("Grande"),
            },
        );
        assert_eq!("Limonada - 1.5 - Grande", format!("{}", item));
    }

    #[test]
    fn should_display_an_appetizer_with_its_portion() {
        let item = MenuItem::new(
            "Yuca Frita",
            3.0,
            Variant::Appetizer {
                portion: String::from("Mediana"),
            },
        );
        assert_eq!("Yuca Frita - 3 - Mediana", format!("{}", item));
    }

    #[test]
    fn should_display_a_main_course_with_each_side() {
        let item = MenuItem::new(
            "Bistec a la Parrilla",
            8.0,
            Variant::MainCourse {
                sides: vec![String::from("Arroz"), String::from("Puré de Papas")],
            },
        );
        assert_eq!(
            "Bistec a la Parrilla - 8 - Arroz - Puré de Papas",
            format!("{}", item)
        );
    }

    #[test]
    fn should_display_a_main_course_without_sides() {
        let item = MenuItem::new("Sopa del Dia", 4.5, Variant::MainCourse { sides: Vec::new() });
        assert_eq!("Sopa del Dia - 4.5", format!("{}", item));
    }

    #[test]
    fn should_expose_the_variant() {
        let item = MenuItem::new(
            "Nachos",
            2.5,
            Variant::Appetizer {
                portion: String::from("Grande"),
            },
        );
        assert!(matches!(item.variant(), Variant::Appetizer { .. }));
    }
}
