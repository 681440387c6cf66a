pub mod entities;
pub mod mapping;
pub mod ports;
pub mod services;
pub mod value_objects;
