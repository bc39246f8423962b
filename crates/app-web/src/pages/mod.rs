//! Page Components

mod home;
mod not_found;
mod weather;

pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use weather::WeatherPage;
