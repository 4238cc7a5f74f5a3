mod app;
mod backdrop;
pub mod theme;

pub use app::CountdownApp;
