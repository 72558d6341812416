pub mod classic_colour_map;
pub mod packed_colour;
pub mod ports;
