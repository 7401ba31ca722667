pub mod exchange;
pub mod home;
pub mod not_found;

use dioxus::prelude::*;

use exchange::Exchange;
use home::Home;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/exchange")]
    Exchange {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
