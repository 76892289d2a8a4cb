mod export;
mod import;

pub use export::{UNFEASIBLE, write_instance, write_objective, write_solution};
pub use import::{
    SolutionFile, parse_instance, parse_solution, read_expected, read_instance, read_solution,
};
