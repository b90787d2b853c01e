pub mod json_shape;
