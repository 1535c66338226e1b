pub mod hsl_gradient;
