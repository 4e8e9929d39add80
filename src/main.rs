#![allow(non_snake_case)]

#[cfg(feature = "web")]
mod client;

fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(client::App);
}
