#[derive(Debug, PartialEq)]
pub enum RestaurantError {
    FileReaderError,
    ItemNotInMenu,
}
