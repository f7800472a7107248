pub mod icon;

pub use icon::{GeneratedIcon, IconConfig, IconStyle};
