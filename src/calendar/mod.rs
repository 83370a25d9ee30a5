mod dates;
mod filter;
mod quartier;
mod showtimes;

pub use dates::*;
pub use filter::*;
pub use quartier::*;
pub use showtimes::*;
