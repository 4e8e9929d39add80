use dioxus::prelude::*;

use crate::client::{
    components::AuthLayout,
    routes::{Admin, Dashboard, Login, NotFound, Register},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(AuthLayout)]

        #[route("/dashboard")]
        Dashboard {},

        #[route("/admin")]
        Admin {},

    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
