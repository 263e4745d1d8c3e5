pub mod determinant;
