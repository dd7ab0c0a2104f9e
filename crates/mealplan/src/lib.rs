mod generate;
mod shopping_list;
mod types;
mod view;

pub use generate::*;
pub use shopping_list::*;
pub use types::*;
pub use view::*;
