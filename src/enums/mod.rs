pub mod tech_stack;
