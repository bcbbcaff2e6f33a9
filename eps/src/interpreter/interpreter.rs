use super::token::*;
use super::operator::*;
use super::graphics_state::*;
use crate::bitmap::*;
use crate::document::*;
use crate::error::*;

use itertools::*;
use log::*;

///
/// Runs drawing commands from an EPS document, rendering them to a grayscale bitmap
///
/// Paths are built in user space and are only mapped to device space (via the bounding box) when they are
/// stroked or filled.
///
pub struct PostScriptInterpreter {
    /// The bounding box of the document being rendered
    bounding_box: BoundingBox,

    /// The stack, path and drawing settings
    state: GraphicsState,

    /// Where the drawing ends up
    bitmap: GrayBitmap,
}

impl PostScriptInterpreter {
    ///
    /// Creates an interpreter that will render to a blank bitmap the size of the bounding box
    ///
    pub fn new(bounding_box: BoundingBox) -> PostScriptInterpreter {
        PostScriptInterpreter {
            bounding_box:   bounding_box,
            state:          GraphicsState::new(),
            bitmap:         GrayBitmap::new(bounding_box.width(), bounding_box.height()),
        }
    }

    /// The current state of the interpreter
    #[inline] pub fn state(&self) -> &GraphicsState { &self.state }

    /// The bitmap as it's been drawn so far
    #[inline] pub fn bitmap(&self) -> &GrayBitmap { &self.bitmap }

    /// The bounding box this interpreter is rendering
    #[inline] pub fn bounding_box(&self) -> &BoundingBox { &self.bounding_box }

    ///
    /// Runs a sequence of tokens, returning the finished bitmap
    ///
    pub fn execute<'a>(mut self, tokens: impl IntoIterator<Item=&'a str>) -> Result<GrayBitmap, InterpreterError> {
        let mut count = 0usize;

        for token in tokens {
            self.run_token(token)?;
            count += 1;
        }

        debug!("Ran {} tokens", count);

        Ok(self.bitmap)
    }

    ///
    /// Runs a single token
    ///
    pub fn run_token(&mut self, token: &str) -> Result<(), InterpreterError> {
        match Token::parse(token) {
            Token::Number(value)        => { self.state.push_operand(value); Ok(()) }
            Token::Operator(operator)   => self.run_operator(operator),
            Token::Unknown(text)        => { trace!("Skipping unknown token {:?}", text); Ok(()) }
        }
    }

    ///
    /// Runs a single operator against the current state
    ///
    pub fn run_operator(&mut self, operator: Operator) -> Result<(), InterpreterError> {
        use Operator::*;

        trace!("{} (stack depth {})", operator, self.state.operand_stack.len());

        match operator {
            MoveTo => {
                let [x, y] = self.state.pop_operands::<2>(operator)?;

                self.state.current_point = Some((x, y));
                self.state.current_path.push((x, y));
            }

            LineTo => {
                let [x, y] = self.state.pop_operands::<2>(operator)?;

                if self.state.current_point.is_some() {
                    self.state.current_path.push((x, y));
                    self.state.current_point = Some((x, y));
                }
            }

            RLineTo | RMoveTo => {
                // Without subpaths, both operators add the new point to the path
                let [dx, dy] = self.state.pop_operands::<2>(operator)?;

                if let Some((x, y)) = self.state.current_point {
                    let point = (x + dx, y + dy);

                    self.state.current_path.push(point);
                    self.state.current_point = Some(point);
                }
            }

            ClosePath => {
                if let Some(start) = self.state.current_path.close() {
                    self.state.current_point = Some(start);
                }
            }

            Arc => {
                let [x, y, radius, start_angle, end_angle] = self.state.pop_operands::<5>(operator)?;

                for point in arc_points(x, y, radius, start_angle, end_angle) {
                    self.state.current_path.push(point);
                    self.state.current_point = Some(point);
                }
            }

            Stroke  => self.stroke(),
            Fill    => self.fill(),

            NewPath => {
                self.state.current_path.clear();
                self.state.current_point = None;
            }

            SetLineWidth => {
                let [width] = self.state.pop_operands::<1>(operator)?;

                self.state.line_width = width.round().max(1.0) as u32;
            }

            SetGray => {
                let [gray] = self.state.pop_operands::<1>(operator)?;

                if !(0.0..=1.0).contains(&gray) {
                    warn!("Gray level {} is outside of the range 0-1", gray);
                }

                self.state.gray_level = (gray * 255.0).round().clamp(0.0, 255.0) as u8;
            }

            // Graphics state stacks and multiple pages are not supported
            GSave | GRestore | ShowPage => { }
        }

        Ok(())
    }

    ///
    /// Draws the current path as a series of lines, then clears it
    ///
    fn stroke(&mut self) {
        let points = self.state.current_path.take();
        if points.len() < 2 {
            return;
        }

        let bounding_box    = self.bounding_box;
        let color           = self.state.gray_level;

        let device_points = points.into_iter()
            .map(|point| bounding_box.to_device(point))
            .map(|(x, y)| (x as i64, y as i64));

        for ((x1, y1), (x2, y2)) in device_points.tuple_windows() {
            self.bitmap.draw_line(x1, y1, x2, y2, color);
        }
    }

    ///
    /// Fills the current path, then clears it
    ///
    fn fill(&mut self) {
        let points = self.state.current_path.take();
        if points.len() < 3 {
            return;
        }

        let bounding_box    = self.bounding_box;
        let device_points   = points.into_iter()
            .map(|point| bounding_box.to_device(point))
            .collect::<Vec<_>>();

        self.bitmap.fill_polygon(&device_points, self.state.gray_level);
    }
}
