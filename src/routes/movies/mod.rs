mod by_day;
mod by_week;
mod movie_detail;
mod util;

pub use by_day::*;
pub use by_week::*;
pub use movie_detail::*;
pub use util::*;
