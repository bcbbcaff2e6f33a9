use super::operator::*;
use super::path::*;
use crate::bitmap::{BLACK};
use crate::error::*;

///
/// The state of a running interpreter
///
#[derive(Clone, Debug, PartialEq)]
pub struct GraphicsState {
    /// Numbers waiting to be used by the next operator
    pub operand_stack: Vec<f64>,

    /// The current point, if one has been set
    pub current_point: Option<(f64, f64)>,

    /// The path that will be drawn by the next stroke or fill
    pub current_path: Path,

    /// The line width set by `setlinewidth` (always at least 1)
    pub line_width: u32,

    /// The gray level used for drawing (0 = black, 255 = white)
    pub gray_level: u8,
}

impl Default for GraphicsState {
    fn default() -> Self {
        GraphicsState {
            operand_stack:  vec![],
            current_point:  None,
            current_path:   Path::new(),
            line_width:     1,
            gray_level:     BLACK,
        }
    }
}

impl GraphicsState {
    ///
    /// Creates the state for a new conversion
    ///
    pub fn new() -> GraphicsState {
        Self::default()
    }

    ///
    /// Pushes a number on to the operand stack
    ///
    #[inline]
    pub fn push_operand(&mut self, value: f64) {
        self.operand_stack.push(value);
    }

    ///
    /// Removes the operands for an operator from the stack, returning them in the order they were pushed
    ///
    /// Nothing is removed if there aren't enough operands on the stack.
    ///
    pub fn pop_operands<const N: usize>(&mut self, operator: Operator) -> Result<[f64; N], InterpreterError> {
        debug_assert!(operator.arity() == N, "Operator {} takes {} operands, not {}", operator, operator.arity(), N);

        let available = self.operand_stack.len();
        if available < N {
            return Err(InterpreterError::StackUnderflow { operator: operator, required: N, available: available });
        }

        let mut operands = [0.0; N];
        operands.copy_from_slice(&self.operand_stack[(available - N)..]);
        self.operand_stack.truncate(available - N);

        Ok(operands)
    }
}
