pub mod input_handling;
