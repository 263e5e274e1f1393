use crate::app::App;

mod app;
mod components;
mod host;

fn main() {
    yew::Renderer::<App>::new().render();
}
