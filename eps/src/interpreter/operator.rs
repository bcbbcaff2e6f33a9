use once_cell::sync::{Lazy};

use std::collections::{HashMap};
use std::fmt;

///
/// The operators understood by the interpreter
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `x y moveto` - sets the current point and adds it to the path
    MoveTo,

    /// `x y lineto` - adds a straight line from the current point
    LineTo,

    /// `dx dy rlineto` - adds a straight line relative to the current point
    RLineTo,

    /// `dx dy rmoveto` - moves the current point relative to where it is now
    RMoveTo,

    /// `closepath` - joins the end of the path back to its start
    ClosePath,

    /// `x y r angle1 angle2 arc` - adds a counter-clockwise circular arc to the path
    Arc,

    /// `stroke` - draws the current path as a series of lines
    Stroke,

    /// `fill` - fills the current path using the even-odd rule
    Fill,

    /// `newpath` - clears the current path and the current point
    NewPath,

    /// `w setlinewidth`
    SetLineWidth,

    /// `g setgray` - sets the gray level (0 is black, 1 is white)
    SetGray,

    GSave,
    GRestore,
    ShowPage,
}

/// Maps operator names to operators
static OPERATORS: Lazy<HashMap<&'static str, Operator>> = Lazy::new(|| {
    Operator::ALL.iter()
        .map(|operator| (operator.name(), *operator))
        .collect()
});

impl Operator {
    /// Every operator the interpreter supports
    pub const ALL: [Operator; 14] = [
        Operator::MoveTo, Operator::LineTo, Operator::RLineTo, Operator::RMoveTo, Operator::ClosePath, Operator::Arc,
        Operator::Stroke, Operator::Fill, Operator::NewPath, Operator::SetLineWidth, Operator::SetGray,
        Operator::GSave, Operator::GRestore, Operator::ShowPage,
    ];

    ///
    /// Looks up an operator by the name it has in the source document
    ///
    pub fn from_name(name: &str) -> Option<Operator> {
        OPERATORS.get(name).copied()
    }

    ///
    /// The name of this operator in the source document
    ///
    pub fn name(&self) -> &'static str {
        use Operator::*;

        match self {
            MoveTo          => "moveto",
            LineTo          => "lineto",
            RLineTo         => "rlineto",
            RMoveTo         => "rmoveto",
            ClosePath       => "closepath",
            Arc             => "arc",
            Stroke          => "stroke",
            Fill            => "fill",
            NewPath         => "newpath",
            SetLineWidth    => "setlinewidth",
            SetGray         => "setgray",
            GSave           => "gsave",
            GRestore        => "grestore",
            ShowPage        => "showpage",
        }
    }

    ///
    /// The number of operands this operator removes from the operand stack
    ///
    pub fn arity(&self) -> usize {
        use Operator::*;

        match self {
            MoveTo | LineTo | RLineTo | RMoveTo     => 2,
            Arc                                     => 5,
            SetLineWidth | SetGray                  => 1,

            ClosePath | Stroke | Fill | NewPath     => 0,
            GSave | GRestore | ShowPage             => 0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
