//! Route definitions for the application

use dioxus::prelude::*;

use crate::pages::Directory;

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Directory {},
}
