//! Random exercise inputs: a function, an argument, and its two residuals.

use cofactor_types::{BooleanFunction, FunctionError};

/// Residuals of a 5-argument function already have the maximum length of 16.
pub const MAX_SAMPLE_ARGUMENTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub function: BooleanFunction,
    pub argument: u32,
    pub zero: String,
    pub one: String,
}

impl Sample {
    #[must_use]
    pub fn index_text(&self) -> String {
        self.argument.to_string()
    }
}

/// Largest argument count whose residuals fit in `max_residue_len` characters.
#[must_use]
pub fn arguments_for_len(max_residue_len: usize) -> u32 {
    max_residue_len.max(1).ilog2() + 1
}

/// A uniformly random function of `arguments` arguments (clamped to 1..=5).
pub fn random_function(arguments: u32) -> Result<BooleanFunction, FunctionError> {
    let arguments = arguments.clamp(1, MAX_SAMPLE_ARGUMENTS);
    let rows: Vec<bool> = (0..1usize << arguments)
        .map(|_| rand::random::<bool>())
        .collect();
    BooleanFunction::from_rows(&rows)
}

pub fn sample_inputs(arguments: u32) -> Result<Sample, FunctionError> {
    let function = random_function(arguments)?;
    let argument = rand::random_range(0..function.arguments());
    let zero = function.residual(argument, false)?;
    let one = function.residual(argument, true)?;
    Ok(Sample {
        function,
        argument,
        zero,
        one,
    })
}
