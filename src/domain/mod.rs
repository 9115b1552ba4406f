pub mod errors;
pub mod layout;
pub mod logging;
pub mod order_book;
