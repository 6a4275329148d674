//! Value Objects - Immutable, identity-less domain primitives

mod city_name;
mod language;
mod units;
mod weather_query;

pub use city_name::CityName;
pub use language::LanguageCode;
pub use units::Units;
pub use weather_query::WeatherQuery;
