//! Mathematical primitives shared across the pricing layers.

pub mod distributions;
