pub mod fractal_kernel;
