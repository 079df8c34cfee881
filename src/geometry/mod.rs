mod circle;
mod side;

pub use circle::Circle2;
pub use side::Side;
