//! Business rules in front of the unit of work.
//!
//! Every mutating call validates first and only then stages and saves, so a
//! refused request never leaves anything behind in the session.

mod bar;
mod bar_beer;
mod beer;
mod brewery;
mod brewery_beer;

pub use self::bar::BarService;
pub use self::bar_beer::BarBeerService;
pub use self::beer::BeerService;
pub use self::brewery::BreweryService;
pub use self::brewery_beer::BreweryBeerService;

use super::error::Error;

/// Log a refused request and turn it into the error returned to the caller.
fn refuse(message: String) -> Error {
    error!("{}", message);
    Error::InvalidRequest(message)
}
