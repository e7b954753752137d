//! Representacion de un pedido de un cliente.
use crate::menu_item::MenuItem;

/// Pedido de un cliente. Guarda referencias a los elementos del menu en el
/// orden en el que se agregaron, con repetidos permitidos. Solo se le pueden
/// agregar elementos, nunca sacar.
pub struct Order<'a> {
    items: Vec<&'a MenuItem>,
}

impl<'a> Order<'a> {
    pub fn new() -> Order<'a> {
        Order { items: Vec::new() }
    }

    /// Agrega un elemento al final del pedido.
    pub fn add(&mut self, item: &'a MenuItem) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total del pedido. Se recalcula sumando los precios en cada llamada,
    /// un pedido vacio da 0.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Total del pedido con el descuento aplicado. El porcentaje no se
    /// valida: mas de 100 da un total negativo y un porcentaje negativo
    /// aumenta el total.
    pub fn apply_discount(&self, percent: f64) -> f64 {
        self.total() * (1.0 - percent / 100.0)
    }

    /// Recorre los elementos en orden de insercion. Cada llamada arranca un
    /// recorrido nuevo desde el principio con su propia posicion, dos
    /// recorridos en simultaneo no se pisan entre si.
    pub fn iter(&self) -> impl Iterator<Item = &'a MenuItem> + '_ {
        self.items.iter().copied()
    }
}

impl<'a, 'b> IntoIterator for &'b Order<'a> {
    type Item = &'a MenuItem;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a MenuItem>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter().copied()
    }
}
