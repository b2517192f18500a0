//! Pure helpers shared by the renderers and the website service

pub mod currency;
pub mod text;
