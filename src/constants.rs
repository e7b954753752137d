//! Parametros de configuracion del restaurante

/// Nombre del archivo del que se leen los pedidos de los clientes
pub const ORDERS_FILE: &str = "pedidos.json";

/// Porcentaje de descuento que se aplica al pedido de muestra
pub const SAMPLE_DISCOUNT_PERCENTAGE: f64 = 10.0;

/// Posiciones dentro del menu de los elementos del pedido de muestra
pub const SAMPLE_ORDER_ITEMS: [usize; 3] = [2, 5, 8];
